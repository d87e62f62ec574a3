use crate::framework::error::{ProtocolError, ProtocolResult};
use std::io::Read;

fn read_array<const N: usize>(input: &mut dyn Read) -> ProtocolResult<[u8; N]> {
    let mut buf = [0u8; N];
    input
        .read_exact(&mut buf)
        .map_err(ProtocolError::ReadError)?;
    Ok(buf)
}

pub fn read_u16(input: &mut dyn Read) -> ProtocolResult<u16> {
    Ok(u16::from_be_bytes(read_array(input)?))
}

pub fn read_i32(input: &mut dyn Read) -> ProtocolResult<i32> {
    Ok(i32::from_be_bytes(read_array(input)?))
}

pub fn read_i64(input: &mut dyn Read) -> ProtocolResult<i64> {
    Ok(i64::from_be_bytes(read_array(input)?))
}

pub fn read_bytes(input: &mut dyn Read, len: usize) -> ProtocolResult<Vec<u8>> {
    let mut buf = vec![0u8; len];
    input
        .read_exact(&mut buf)
        .map_err(ProtocolError::ReadError)?;
    Ok(buf)
}
