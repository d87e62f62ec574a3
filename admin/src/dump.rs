//! Status dumps: the node status array the control plane persists for operators.

use crate::error::{AdminError, AdminResult};
use data::model::node_status::NodeStatus;
use protocol::object::{read_object_array, write_object_array};
use protocol::registry::WritableRegistry;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};

pub fn save_statuses(out: &mut dyn Write, statuses: &[NodeStatus]) -> AdminResult<()> {
    write_object_array(out, statuses)?;
    Ok(())
}

pub fn load_statuses(
    registry: &WritableRegistry,
    input: &mut dyn Read,
) -> AdminResult<Vec<NodeStatus>> {
    Ok(read_object_array(registry, input)?)
}

pub fn save_status_file(path: &str, statuses: &[NodeStatus]) -> AdminResult<()> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(AdminError::io(path))?;
    let mut writer = BufWriter::new(file);

    save_statuses(&mut writer, statuses)?;
    writer.flush().map_err(AdminError::io(path))?;
    Ok(())
}

pub fn load_status_file(registry: &WritableRegistry, path: &str) -> AdminResult<Vec<NodeStatus>> {
    let file = File::open(path).map_err(AdminError::io(path))?;
    load_statuses(registry, &mut BufReader::new(file))
}
