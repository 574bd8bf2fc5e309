use serde::{Deserialize, Serialize};

/// A single todo record.
///
/// The wire names match the persisted file: a JSON array of objects with
/// `id`, `title`, `description`, `isDone`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Stable identifier, unique within a store. Never reused after delete.
    pub id: u64,
    /// Display title
    pub title: String,
    /// Display description
    pub description: String,
    /// Completion flag, mutable in place
    pub is_done: bool,
}

impl Todo {
    /// Create a new open todo with the given fields.
    pub fn new(id: u64, title: String, description: String) -> Self {
        Todo {
            id,
            title,
            description,
            is_done: false,
        }
    }
}
