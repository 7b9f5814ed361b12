use serde::{Deserialize, Serialize};

/// A stored faculty record. The id is assigned by the store on creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    pub id: i64,
    pub name: String,
    pub designation: String,
    pub branch: String,
}

/// Request payload for creating a faculty record.
///
/// Unknown fields are rejected so that payload shape is checked
/// deterministically at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewFaculty {
    pub name: String,
    pub designation: String,
    pub branch: String,
}
