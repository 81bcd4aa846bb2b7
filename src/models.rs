//! Frontend Models
//!
//! Data structures matching the persisted storage format.

use serde::{Deserialize, Serialize};

/// A single todo entry
///
/// `id` is the creation timestamp in milliseconds, so it is unique only
/// when creations are at least one millisecond apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}
