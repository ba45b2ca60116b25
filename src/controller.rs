//! Task List Controller
//!
//! The network half of the view: each operation awaits its round-trip and
//! only then yields the `TaskAction` to apply. Nothing is applied early and
//! nothing is rolled back.

use crate::commands::TaskApi;
use crate::models::Task;
use crate::store::TaskAction;

/// Initial load on mount
pub async fn load_tasks(api: &impl TaskApi) -> TaskAction {
    match api.list_tasks().await {
        Ok(tasks) => {
            log::info!("Loaded {} tasks", tasks.len());
            TaskAction::Loaded(tasks)
        }
        Err(e) => {
            log::error!("Loading tasks failed: {}", e);
            TaskAction::Failed(format!("Could not load tasks: {}", e))
        }
    }
}

/// Submit the input buffer as a new task
///
/// Returns `None` for blank input without touching the network. The appended
/// task is the one built here, whatever the backend answered.
pub async fn add_task(api: &impl TaskApi, text: String) -> Option<TaskAction> {
    if text.trim().is_empty() {
        log::debug!("Ignoring blank task");
        return None;
    }
    let task = Task::new(text);
    let action = match api.create_task(&task).await {
        Ok(()) => {
            log::info!("Added task {}", task.id);
            TaskAction::Added(task)
        }
        Err(e) => {
            log::error!("Adding task {} failed: {}", task.id, e);
            TaskAction::Failed(format!("Could not add \"{}\": {}", task.text, e))
        }
    };
    Some(action)
}

/// Delete by id; the call is issued even if the id is not in the list
pub async fn delete_task(api: &impl TaskApi, id: String) -> TaskAction {
    match api.delete_task(&id).await {
        Ok(()) => {
            log::info!("Deleted task {}", id);
            TaskAction::Removed(id)
        }
        Err(e) => {
            log::error!("Deleting task {} failed: {}", id, e);
            TaskAction::Failed(format!("Could not delete task: {}", e))
        }
    }
}
