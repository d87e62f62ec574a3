use crate::config::admin_config::{AdminConfig, OutputFormat, TimeZoneSetting};
use crate::dump::load_status_file;
use crate::error::{AdminError, AdminResult};
use crate::report::cluster_report;
use chrono::{Local, Utc};
use data::model::node_status::NodeStatus;
use log::info;
use protocol::registry::WritableRegistry;
use std::io::Write;

pub mod config;
pub mod dump;
pub mod error;
pub mod report;

/// Renders already loaded statuses the way `config` asks for.
pub fn render(config: &AdminConfig, statuses: &[NodeStatus]) -> AdminResult<String> {
    match config.output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(statuses)? + "\n"),
        OutputFormat::Text => Ok(match config.time_zone {
            TimeZoneSetting::Local => cluster_report(statuses, &Local),
            TimeZoneSetting::Utc => cluster_report(statuses, &Utc),
        }),
    }
}

/// Loads the configured status dump and renders the operator report.
pub fn generate_report(config: &AdminConfig, registry: &WritableRegistry) -> AdminResult<String> {
    let statuses = load_status_file(registry, &config.status_file)?;
    info!(
        "Loaded {} datanode statuses from {}",
        statuses.len(),
        config.status_file
    );
    render(config, statuses.as_slice())
}

/// Writes the rendered report to `out` and flushes it.
pub fn write_report(out: &mut dyn Write, report: &str) -> AdminResult<()> {
    out.write_all(report.as_bytes()).map_err(AdminError::io("<stdout>"))?;
    out.flush().map_err(AdminError::io("<stdout>"))
}
