use data::model::datanode_id::DatanodeId;
use data::model::node_status::NodeStatus;
use std::path::PathBuf;
use uuid::Uuid;

pub const GIB: i64 = 1024 * 1024 * 1024;

/// A small cluster as the control plane sees it after a round of heartbeats.
pub fn sample_cluster() -> Vec<NodeStatus> {
    (1..=3)
        .map(|i| {
            NodeStatus::with_telemetry(
                DatanodeId::new(format!("10.1.0.{i}:50010"), format!("DS-{i}")),
                10 * GIB,
                (10 - 2 * i) * GIB,
                1_700_000_000_000 + i * 3000,
            )
        })
        .collect()
}

pub fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("dfs-tests-{}-{name}", Uuid::new_v4()))
}
