use crate::model::datanode_id::DatanodeId;
use protocol::framework::error::ProtocolResult;
use protocol::framework::reader::read_i64;
use protocol::framework::text::short_text_len;
use protocol::framework::traits::{TaggedWritable, Writable};
use protocol::framework::writer::write_i64;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::io::{Read, Write};

/// Fixed-width telemetry trailer: capacity, remaining and last update, 8 bytes each.
pub const TELEMETRY_SIZE: usize = 24;

/// Status of a data node as seen by the control plane.
///
/// Wire layout:
///
/// | short text name | short text storage id | i64 capacity | i64 remaining | i64 last update |
///
/// The decoder trusts the producer: `remaining <= capacity` and non-negative values
/// are not checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStatus {
    #[serde(flatten)]
    id: DatanodeId,
    capacity: i64,
    remaining: i64,
    last_update: i64,
}

impl NodeStatus {
    /// A status with the given identity and no telemetry yet.
    pub fn new(name: impl Into<String>, storage_id: impl Into<String>) -> Self {
        NodeStatus {
            id: DatanodeId::new(name, storage_id),
            ..Default::default()
        }
    }

    pub fn with_telemetry(id: DatanodeId, capacity: i64, remaining: i64, last_update: i64) -> Self {
        NodeStatus {
            id,
            capacity,
            remaining,
            last_update,
        }
    }

    pub fn id(&self) -> &DatanodeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.id.name()
    }

    pub fn storage_id(&self) -> &str {
        self.id.storage_id()
    }

    /// Raw capacity in bytes.
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Raw free space in bytes.
    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    /// Milliseconds since the Unix epoch at which the node vouched for this telemetry.
    pub fn last_update(&self) -> i64 {
        self.last_update
    }

    pub fn used(&self) -> i64 {
        self.capacity.wrapping_sub(self.remaining)
    }

    /// Size of the encoded record, `None` when a text field exceeds the short text limit.
    pub fn encoded_len(&self) -> Option<usize> {
        Some(short_text_len(self.name())? + short_text_len(self.storage_id())? + TELEMETRY_SIZE)
    }
}

impl Writable for NodeStatus {
    fn write(&self, out: &mut dyn Write) -> ProtocolResult<()> {
        self.id.write(out)?;
        write_i64(out, self.capacity)?;
        write_i64(out, self.remaining)?;
        write_i64(out, self.last_update)
    }

    fn read_fields(&mut self, input: &mut dyn Read) -> ProtocolResult<()> {
        self.id.read_fields(input)?;
        self.capacity = read_i64(input)?;
        self.remaining = read_i64(input)?;
        self.last_update = read_i64(input)?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl TaggedWritable for NodeStatus {
    const TYPE_TAG: &'static str = "org.apache.hadoop.dfs.DatanodeInfo";
}
