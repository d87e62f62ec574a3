use crate::config::error::ConfigError;
use protocol::framework::error::ProtocolError;
use std::io;

pub type AdminResult<T> = Result<T, AdminError>;

#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Corrupted status dump: {0}")]
    Protocol(#[from] ProtocolError),
    #[error("Failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AdminError {
    pub fn io(path: &str) -> impl FnOnce(io::Error) -> AdminError + '_ {
        move |source| AdminError::Io {
            path: path.to_string(),
            source,
        }
    }
}
