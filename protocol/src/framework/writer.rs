use crate::framework::error::{ProtocolError, ProtocolResult};
use std::io::Write;

pub fn write_u16(out: &mut dyn Write, value: u16) -> ProtocolResult<()> {
    write_bytes(out, &value.to_be_bytes())
}

pub fn write_i32(out: &mut dyn Write, value: i32) -> ProtocolResult<()> {
    write_bytes(out, &value.to_be_bytes())
}

pub fn write_i64(out: &mut dyn Write, value: i64) -> ProtocolResult<()> {
    write_bytes(out, &value.to_be_bytes())
}

pub fn write_bytes(out: &mut dyn Write, slice: &[u8]) -> ProtocolResult<()> {
    out.write_all(slice).map_err(ProtocolError::WriteError)
}
