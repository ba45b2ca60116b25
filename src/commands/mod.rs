//! Backend Command Wrappers
//!
//! Frontend bindings to the task REST endpoints, behind the `TaskApi` seam
//! so the view logic can be driven without a browser.

mod task;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Task;

pub use task::*;

/// The three task endpoints
///
/// Futures are `?Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait TaskApi {
    /// `GET /api/tasks`
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    /// `POST /api/tasks`; the JSON reply is checked and discarded
    async fn create_task(&self, task: &Task) -> Result<()>;

    /// `DELETE /api/tasks/{id}`; the JSON reply is checked and discarded
    async fn delete_task(&self, id: &str) -> Result<()>;
}
