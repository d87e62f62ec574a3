use crate::framework::error::ProtocolError;
use crate::framework::reader::{read_i32, read_i64, read_u16};
use crate::framework::text::{read_short_text, short_text_len, write_short_text};
use crate::framework::writer::{write_i32, write_i64, write_u16};
use std::io::{self, Write};
use crate::framework::MAX_SHORT_TEXT_LEN;

#[test]
fn test_integers_are_big_endian() {
    let mut buf = Vec::new();
    write_u16(&mut buf, 0x0102).unwrap();
    write_i32(&mut buf, -2).unwrap();
    write_i64(&mut buf, 1_000_000_000).unwrap();

    assert_eq!(
        buf,
        vec![1, 2, 0xFF, 0xFF, 0xFF, 0xFE, 0, 0, 0, 0, 0x3B, 0x9A, 0xCA, 0x00]
    );

    let mut input = buf.as_slice();
    assert_eq!(read_u16(&mut input).unwrap(), 0x0102);
    assert_eq!(read_i32(&mut input).unwrap(), -2);
    assert_eq!(read_i64(&mut input).unwrap(), 1_000_000_000);
    assert!(input.is_empty());
}

#[test]
fn test_short_read_is_truncation() {
    let mut input: &[u8] = &[0, 0, 0, 0, 0, 0, 0];
    let err = read_i64(&mut input).unwrap_err();
    assert!(err.is_truncated());
}

#[test]
fn test_empty_short_text() {
    let mut buf = Vec::new();
    write_short_text(&mut buf, "").unwrap();
    assert_eq!(buf, vec![0, 0]);

    assert_eq!(read_short_text(&mut buf.as_slice()).unwrap(), "");
}

#[test]
fn test_short_text_counts_bytes_not_chars() {
    let mut buf = Vec::new();
    write_short_text(&mut buf, "zażółć").unwrap();

    assert_eq!(&buf[..2], &[0, 10]);
    assert_eq!(buf.len(), 12);
    assert_eq!(short_text_len("zażółć"), Some(12));
    assert_eq!(read_short_text(&mut buf.as_slice()).unwrap(), "zażółć");
}

#[test]
fn test_short_text_limit() {
    let longest = "a".repeat(MAX_SHORT_TEXT_LEN);
    let mut buf = Vec::new();
    write_short_text(&mut buf, &longest).unwrap();
    assert_eq!(&buf[..2], &[0xFF, 0xFF]);

    let oversized = "a".repeat(MAX_SHORT_TEXT_LEN + 1);
    let mut buf = Vec::new();
    let err = write_short_text(&mut buf, &oversized).unwrap_err();

    assert!(matches!(err, ProtocolError::TextTooLong(65536)));
    assert!(buf.is_empty());
    assert_eq!(short_text_len(&oversized), None);
}

#[test]
fn test_malformed_short_text() {
    let mut input: &[u8] = &[0, 2, 0xC3, 0x28];
    let err = read_short_text(&mut input).unwrap_err();
    assert!(matches!(err, ProtocolError::MalformedText(_)));
}

#[test]
fn test_truncated_short_text() {
    let mut input: &[u8] = &[0, 5, b'h', b'o'];
    assert!(read_short_text(&mut input).unwrap_err().is_truncated());

    let mut input: &[u8] = &[0];
    assert!(read_short_text(&mut input).unwrap_err().is_truncated());
}

struct Unplugged;

impl Write for Unplugged {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "peer went away"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_failure_keeps_io_error() {
    let err = write_i64(&mut Unplugged, 1).unwrap_err();
    assert!(matches!(
        err,
        ProtocolError::WriteError(ref e) if e.kind() == io::ErrorKind::ConnectionReset
    ));

    let err = write_short_text(&mut Unplugged, "host-a:1234").unwrap_err();
    assert!(matches!(err, ProtocolError::WriteError(_)));
    assert!(!err.is_truncated());
}
