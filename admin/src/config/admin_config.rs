use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Write};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimeZoneSetting {
    #[default]
    Local,
    Utc,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AdminConfig {
    /// Status dump produced by the control plane.
    pub status_file: String,
    #[serde(default)]
    pub time_zone: TimeZoneSetting,
    #[serde(default)]
    pub output: OutputFormat,
}

impl Default for AdminConfig {
    fn default() -> Self {
        AdminConfig {
            status_file: "/var/dfs/status/datanodes.bin".to_string(),
            time_zone: TimeZoneSetting::Local,
            output: OutputFormat::Text,
        }
    }
}

impl AdminConfig {
    /// Reads the YAML config at `path`, writing and returning the default one if the file is missing.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let mut file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return AdminConfig::create_default(path);
            }
            Err(e) => return Err(e.into()),
        };
        let mut contents = String::new();

        file.read_to_string(&mut contents)?;

        Ok(serde_yaml::from_str(&contents)?)
    }

    pub fn create_default(path: &str) -> Result<Self, ConfigError> {
        let default_config = AdminConfig::default();
        let mut new_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;

        let default_config_yaml = serde_yaml::to_string(&default_config)?;

        new_file.write_all(default_config_yaml.as_bytes())?;
        new_file.sync_all()?;

        Ok(default_config)
    }

    pub fn validate_config(self) -> Result<AdminConfig, ConfigError> {
        if self.status_file.trim().is_empty() {
            return Err(ConfigError::MissingStatusFile);
        }
        Ok(self)
    }
}
