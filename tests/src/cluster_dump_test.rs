use crate::utils::{sample_cluster, temp_file, GIB};
use admin_lib::config::admin_config::{AdminConfig, OutputFormat, TimeZoneSetting};
use admin_lib::dump::save_status_file;
use admin_lib::generate_report;
use log::info;
use protocol::registry::WRITABLE_REGISTRY;
use std::fs;

pub fn test_cluster_dump() {
    let dump = temp_file("datanodes.bin");
    let dump_path = dump.to_string_lossy().to_string();
    save_status_file(&dump_path, &sample_cluster()).unwrap();

    let config_path = temp_file("config.yaml");
    fs::write(
        &config_path,
        format!("status_file: {dump_path}\ntime_zone: utc\n"),
    )
    .unwrap();
    let config = AdminConfig::from_file(&config_path.to_string_lossy())
        .unwrap()
        .validate_config()
        .unwrap();
    assert_eq!(config.output, OutputFormat::Text);
    assert_eq!(config.time_zone, TimeZoneSetting::Utc);

    let report = generate_report(&config, &WRITABLE_REGISTRY).unwrap();
    info!("Cluster report:\n{report}");

    let total = 30 * GIB;
    let used = 12 * GIB;
    assert!(report.starts_with(&format!(
        "Total raw bytes: {total} (30 GB)\nUsed raw bytes: {used} (12 GB)\n% used: 40%\n"
    )));
    assert!(report.contains("Datanodes available: 3\n"));

    let node_reports: Vec<&str> = report.split("\n\n").skip(2).collect();
    assert_eq!(node_reports.len(), 3);
    assert!(node_reports[0].starts_with("Name: 10.1.0.1:50010\n"));
    assert!(node_reports[1].contains("Used raw bytes: 4294967296 (4 GB)\n% used: 40%\n"));
    assert!(node_reports[2].ends_with("Last contact: Tue Nov 14 22:13:29 UTC 2023\n"));

    fs::remove_file(&dump).unwrap();
    fs::remove_file(&config_path).unwrap();
}
