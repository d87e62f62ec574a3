use std::path::Path;

use log::{debug, LevelFilter};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const CONSOLE_PATTERN: &str = "\x1b[94m{d(%Y-%m-%d %H:%M:%S)}\x1b[0m - {h({l})} - {t} - {m}{n}";

pub fn initialize_test_logging() {
    #[cfg(feature = "test_logging")]
    initialize_default(LevelFilter::Trace)
}

/// Looks for a log4rs file at the provided path.
/// Falls back to the console appender on stderr when the file is missing or unreadable,
/// so the report written to stdout stays clean.
pub fn initialize_logging(config_path: Option<&Path>) {
    match config_path {
        Some(path) if path.exists() => {
            if let Err(err) = log4rs::init_file(path, Default::default()) {
                initialize_default(LevelFilter::Info);
                debug!("Falling back to default logging, {path:?} rejected: {err}");
            }
        }
        _ => initialize_default(LevelFilter::Info),
    }
}

fn initialize_default(level: LevelFilter) {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();

    let config = match Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
    {
        Ok(config) => config,
        Err(_) => return,
    };

    // A logger may already be installed by another test in the same binary.
    let _ = log4rs::init_config(config);
}
