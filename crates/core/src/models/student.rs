use serde::{Deserialize, Serialize};

/// A stored student record. The id is assigned by the store on creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub roll_number: String,
    pub branch: String,
}

/// Request payload for creating a student record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewStudent {
    pub name: String,
    pub roll_number: String,
    pub branch: String,
}
