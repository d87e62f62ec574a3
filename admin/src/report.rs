use chrono::TimeZone;
use data::model::node_report::push_usage_lines;
use data::model::node_status::NodeStatus;
use std::fmt::Display;

/// Cluster-wide usage summary followed by the report of every node.
pub fn cluster_report<Tz>(statuses: &[NodeStatus], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let capacity = statuses
        .iter()
        .fold(0i64, |acc, status| acc.saturating_add(status.capacity()));
    let remaining = statuses
        .iter()
        .fold(0i64, |acc, status| acc.saturating_add(status.remaining()));
    let used = capacity.saturating_sub(remaining);

    let mut buffer = String::new();
    push_usage_lines(&mut buffer, capacity, used);
    buffer.push_str(&format!("\nDatanodes available: {}\n", statuses.len()));

    for status in statuses {
        buffer.push('\n');
        buffer.push_str(&status.report_in(tz));
    }
    buffer
}
