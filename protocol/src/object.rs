//! Tagged records for polymorphic streams.
//!
//! | short text type tag | record payload ... |
//!
//! Arrays are an i32 element count followed by that many tagged records.

use crate::framework::error::{ProtocolError, ProtocolResult};
use crate::framework::reader::read_i32;
use crate::framework::text::{read_short_text, write_short_text};
use crate::framework::traits::{TaggedWritable, Writable};
use crate::framework::writer::write_i32;
use crate::registry::WritableRegistry;
use std::io::{Read, Write};

pub fn write_object<T: TaggedWritable>(out: &mut dyn Write, value: &T) -> ProtocolResult<()> {
    write_short_text(out, T::TYPE_TAG)?;
    value.write(out)
}

/// Reads the tag, asks the registry for a zero instance and populates it.
pub fn read_object(
    registry: &WritableRegistry,
    input: &mut dyn Read,
) -> ProtocolResult<Box<dyn Writable>> {
    let tag = read_short_text(input)?;
    let mut instance = registry.new_instance(&tag)?;
    instance.read_fields(input)?;
    Ok(instance)
}

pub fn read_object_as<T: TaggedWritable>(
    registry: &WritableRegistry,
    input: &mut dyn Read,
) -> ProtocolResult<T> {
    let tag = read_short_text(input)?;
    if tag != T::TYPE_TAG {
        return Err(ProtocolError::UnexpectedTag {
            expected: T::TYPE_TAG.to_string(),
            found: tag,
        });
    }
    let mut instance = registry.new_instance(&tag)?;
    instance.read_fields(input)?;
    instance
        .into_any()
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| ProtocolError::UnexpectedTag {
            expected: T::TYPE_TAG.to_string(),
            found: tag,
        })
}

fn element_count(len: usize) -> ProtocolResult<i32> {
    i32::try_from(len).map_err(|_| ProtocolError::TooManyElements(len))
}

pub fn write_object_array<T: TaggedWritable>(
    out: &mut dyn Write,
    values: &[T],
) -> ProtocolResult<()> {
    write_i32(out, element_count(values.len())?)?;
    for value in values {
        write_object(out, value)?;
    }
    Ok(())
}

pub fn read_object_array<T: TaggedWritable>(
    registry: &WritableRegistry,
    input: &mut dyn Read,
) -> ProtocolResult<Vec<T>> {
    let len = read_i32(input)?;
    if len < 0 {
        return Err(ProtocolError::InvalidLength(len));
    }
    // Do not trust the count for preallocation.
    let mut values = Vec::with_capacity((len as usize).min(1024));
    for _ in 0..len {
        values.push(read_object_as::<T>(registry, input)?);
    }
    Ok(values)
}
