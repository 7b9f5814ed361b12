use serde::{Deserialize, Serialize};

/// Per-kind record totals, reported by the `status` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordCounts {
    pub faculty: i64,
    pub students: i64,
    pub total: i64,
}
