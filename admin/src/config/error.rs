use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("status_file must not be empty")]
    MissingStatusFile,
    #[error("Failed to access the config file: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
