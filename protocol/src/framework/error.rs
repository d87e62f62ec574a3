use std::io;
use std::string::FromUtf8Error;

pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Errors raised while encoding or decoding wire records
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("Failed to read from the stream: {0}")]
    ReadError(#[source] io::Error),
    #[error("Failed to write into the stream: {0}")]
    WriteError(#[source] io::Error),
    #[error("Short text is not valid UTF-8: {0}")]
    MalformedText(#[from] FromUtf8Error),
    #[error("Short text of {0} bytes exceeds the 65535 byte limit")]
    TextTooLong(usize),
    #[error("Invalid element count {0}")]
    InvalidLength(i32),
    #[error("{0} elements do not fit an i32 element count")]
    TooManyElements(usize),
    #[error("No factory registered for type tag {0:?}")]
    UnknownTag(String),
    #[error("Type tag {0:?} is already registered")]
    DuplicateTag(String),
    #[error("Expected type tag {expected:?}, found {found:?}")]
    UnexpectedTag { expected: String, found: String },
}

impl ProtocolError {
    /// True when the stream ended before the record was complete.
    pub fn is_truncated(&self) -> bool {
        matches!(self, ProtocolError::ReadError(err) if err.kind() == io::ErrorKind::UnexpectedEof)
    }
}

