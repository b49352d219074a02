//! Frontend Models
//!
//! The persisted shape of a single todo entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Todo data structure (matches the stored blob)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Display position. Absent on records written before reordering existed.
    #[serde(default)]
    pub order: Option<i64>,
}
