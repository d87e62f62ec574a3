use crate::utils::sample_cluster;
use data::model::datanode_id::DatanodeId;
use data::model::node_status::NodeStatus;
use log::info;
use protocol::framework::traits::{TaggedWritable, Writable};
use protocol::object::{read_object, write_object};
use protocol::registry::WRITABLE_REGISTRY;

pub fn test_polymorphic_stream() {
    assert!(WRITABLE_REGISTRY.is_registered(NodeStatus::TYPE_TAG));

    let cluster = sample_cluster();
    let mut stream = Vec::new();
    for status in &cluster {
        write_object(&mut stream, status).unwrap();
    }

    let mut input = stream.as_slice();
    for expected in &cluster {
        let record = read_object(&WRITABLE_REGISTRY, &mut input).unwrap();
        let status = record
            .as_any()
            .downcast_ref::<NodeStatus>()
            .expect("registry produced another type");
        assert_eq!(status, expected);
    }
    assert!(input.is_empty());

    // Untagged records concatenate without framing.
    let id = DatanodeId::new("10.1.0.9:50010", "DS-9");
    let status = NodeStatus::with_telemetry(id.clone(), 1, 1, 1);
    let mut raw = id.to_bytes().unwrap();
    raw.extend_from_slice(&1i64.to_be_bytes());
    raw.extend_from_slice(&1i64.to_be_bytes());
    raw.extend_from_slice(&1i64.to_be_bytes());
    assert_eq!(status.to_bytes().unwrap(), raw);

    info!("Decoded {} tagged node statuses", cluster.len());
}
