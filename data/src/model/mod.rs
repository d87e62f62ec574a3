pub mod datanode_id;
pub mod node_report;
pub mod node_status;
