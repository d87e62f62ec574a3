use admin_lib::config::admin_config::AdminConfig;
use admin_lib::error::{AdminError, AdminResult};
use admin_lib::{generate_report, write_report};
use data::writables::register_global_writables;
use log::error;
use logging::initialize_logging;
use protocol::registry::WRITABLE_REGISTRY;
use std::path::Path;
use std::process::ExitCode;

fn run() -> AdminResult<()> {
    let config_path = std::env::current_dir()
        .map_err(AdminError::io("."))?
        .join("config.yaml");
    let mut config = AdminConfig::from_file(&config_path.to_string_lossy())?;

    // The first argument overrides the configured status dump.
    if let Some(status_file) = std::env::args().nth(1) {
        config.status_file = status_file;
    }
    let config = config.validate_config()?;

    let report = generate_report(&config, &WRITABLE_REGISTRY)?;
    write_report(&mut std::io::stdout().lock(), &report)
}

fn main() -> ExitCode {
    initialize_logging(Some(Path::new("./log4rs.yaml")));
    register_global_writables();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
