//! Short text: the length-prefixed string encoding shared by every record.
//!
//! | u16 byte length (big-endian) | UTF-8 bytes ... |

use crate::framework::error::{ProtocolError, ProtocolResult};
use crate::framework::reader::{read_bytes, read_u16};
use crate::framework::writer::{write_bytes, write_u16};
use crate::framework::{MAX_SHORT_TEXT_LEN, SHORT_TEXT_HEADER_SIZE};
use std::io::{Read, Write};

/// Writes `text` as a short text. Oversized strings are rejected before anything is written.
pub fn write_short_text(out: &mut dyn Write, text: &str) -> ProtocolResult<()> {
    let bytes = text.as_bytes();
    let len = u16::try_from(bytes.len()).map_err(|_| ProtocolError::TextTooLong(bytes.len()))?;
    write_u16(out, len)?;
    write_bytes(out, bytes)
}

pub fn read_short_text(input: &mut dyn Read) -> ProtocolResult<String> {
    let len = read_u16(input)? as usize;
    let bytes = read_bytes(input, len)?;
    Ok(String::from_utf8(bytes)?)
}

/// Encoded size of `text`, or `None` when it does not fit a short text.
pub fn short_text_len(text: &str) -> Option<usize> {
    let len = text.len();
    (len <= MAX_SHORT_TEXT_LEN).then_some(SHORT_TEXT_HEADER_SIZE + len)
}
