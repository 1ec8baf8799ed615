//! Frontend Models
//!
//! Data structures matching the remote demo API.

use serde::{Deserialize, Serialize};

/// One record of the todos collection.
///
/// Upstream also sends `userId`; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Status badge text
    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "✅ Completed"
        } else {
            "⏳ Pending"
        }
    }

    /// Status badge CSS class
    pub fn status_class(&self) -> &'static str {
        if self.completed {
            "item-status completed"
        } else {
            "item-status pending"
        }
    }
}
