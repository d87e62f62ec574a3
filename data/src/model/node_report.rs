use crate::model::node_status::NodeStatus;
use chrono::{Local, TimeZone};
use commons::format::{byte_desc, limit_decimal, render_timestamp};
use std::fmt::Display;

/// Percentage of `capacity` taken by `used`, two fractional digits at most.
/// A node reporting no capacity has no meaningful ratio and yields `N/A`.
pub fn percent_used(used: i64, capacity: i64) -> String {
    if capacity == 0 {
        return "N/A".to_string();
    }
    limit_decimal((used as f64 / capacity as f64) * 100.0, 2)
}

/// Appends the `Total raw bytes`, `Used raw bytes` and `% used` lines.
pub fn push_usage_lines(buffer: &mut String, capacity: i64, used: i64) {
    buffer.push_str(&format!(
        "Total raw bytes: {capacity} ({})\n",
        byte_desc(capacity)
    ));
    buffer.push_str(&format!("Used raw bytes: {used} ({})\n", byte_desc(used)));
    buffer.push_str(&format!("% used: {}%\n", percent_used(used, capacity)));
}

impl NodeStatus {
    /// A formatted report of this node's status, timestamps in the local time zone.
    pub fn report(&self) -> String {
        self.report_in(&Local)
    }

    pub fn report_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut buffer = format!("Name: {}\n", self.name());
        push_usage_lines(&mut buffer, self.capacity(), self.used());
        buffer.push_str(&format!(
            "Last contact: {}\n",
            render_timestamp(self.last_update(), tz)
        ));
        buffer
    }
}
