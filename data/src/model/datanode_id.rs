use protocol::framework::error::ProtocolResult;
use protocol::framework::text::{read_short_text, write_short_text};
use protocol::framework::traits::Writable;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::io::{Read, Write};

/// Identity of a data node: its `host:port` name and the opaque storage ID it was assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatanodeId {
    name: String,
    storage_id: String,
}

impl DatanodeId {
    pub fn new(name: impl Into<String>, storage_id: impl Into<String>) -> Self {
        DatanodeId {
            name: name.into(),
            storage_id: storage_id.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn storage_id(&self) -> &str {
        &self.storage_id
    }

    /// The name without its port suffix.
    pub fn host(&self) -> &str {
        match self.name.rfind(':') {
            Some(colon) => &self.name[..colon],
            None => &self.name,
        }
    }

    pub fn port(&self) -> Option<u16> {
        let colon = self.name.rfind(':')?;
        self.name[colon + 1..].parse().ok()
    }
}

impl Writable for DatanodeId {
    fn write(&self, out: &mut dyn Write) -> ProtocolResult<()> {
        write_short_text(out, &self.name)?;
        write_short_text(out, &self.storage_id)
    }

    fn read_fields(&mut self, input: &mut dyn Read) -> ProtocolResult<()> {
        self.name = read_short_text(input)?;
        self.storage_id = read_short_text(input)?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}
