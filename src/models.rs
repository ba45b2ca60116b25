//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
}

impl Task {
    /// Build a task with a freshly generated id
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            text: text.into(),
        }
    }
}

/// Client-side task id: lowercase hyphenated random (v4) UUID
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
