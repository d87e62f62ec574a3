use crate::framework::error::ProtocolResult;
use std::any::Any;
use std::fmt::Debug;
use std::io::{Read, Write};

/// A record that knows its own binary encoding.
///
/// `read_fields` populates an existing instance in place, which lets a registry
/// hand out zero instances and fill them from the stream.
pub trait Writable: Debug + Send + Sync + 'static {
    fn write(&self, out: &mut dyn Write) -> ProtocolResult<()>;

    /// On error the instance is left in an indeterminate state and should be discarded.
    fn read_fields(&mut self, input: &mut dyn Read) -> ProtocolResult<()>;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn to_bytes(&self) -> ProtocolResult<Vec<u8>> {
        let mut buf = Vec::new();
        self.write(&mut buf)?;
        Ok(buf)
    }

    fn from_bytes(mut bytes: &[u8]) -> ProtocolResult<Self>
    where
        Self: Default + Sized,
    {
        let mut value = Self::default();
        value.read_fields(&mut bytes)?;
        Ok(value)
    }
}

/// A `Writable` that can travel in polymorphic streams under a stable type tag.
pub trait TaggedWritable: Writable + Default {
    const TYPE_TAG: &'static str;
}
