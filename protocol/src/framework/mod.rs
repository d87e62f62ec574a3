pub mod error;
pub mod reader;
pub mod text;
pub mod traits;
pub mod writer;

#[cfg(test)]
mod tests;

/// Size of the length prefix in front of every short text.
pub const SHORT_TEXT_HEADER_SIZE: usize = 2;
/// Longest string, in UTF-8 bytes, a short text can carry.
pub const MAX_SHORT_TEXT_LEN: usize = u16::MAX as usize;
