//! Task List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All changes go
//! through `TaskListState::apply`, a pure state + action -> state step.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;

/// State owned by the task list view
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct TaskListState {
    /// Tasks in insertion order
    pub tasks: Vec<Task>,
    /// Input buffer of the new task form
    pub task_text: String,
    /// Latest failed round-trip, shown until dismissed
    pub last_error: Option<String>,
    /// Bumped on every failure so a stale expiry cannot clear a newer error
    pub error_generation: u64,
}

/// Everything that can change `TaskListState`
#[derive(Clone, Debug, PartialEq)]
pub enum TaskAction {
    /// Initial load finished; replaces the list wholesale
    Loaded(Vec<Task>),
    InputChanged(String),
    /// POST round-trip finished for this locally built task
    Added(Task),
    /// DELETE round-trip finished for this id
    Removed(String),
    Failed(String),
    DismissError,
    /// Auto-dismiss; ignored unless the generation still matches
    ExpireError(u64),
}

impl TaskListState {
    pub fn apply(&mut self, action: TaskAction) {
        match action {
            TaskAction::Loaded(tasks) => self.tasks = tasks,
            TaskAction::InputChanged(text) => self.task_text = text,
            TaskAction::Added(task) => {
                self.tasks.push(task);
                self.task_text.clear();
            }
            TaskAction::Removed(id) => self.tasks.retain(|task| task.id != id),
            TaskAction::Failed(message) => {
                self.error_generation += 1;
                self.last_error = Some(message);
            }
            TaskAction::DismissError => self.last_error = None,
            TaskAction::ExpireError(generation) => {
                if generation == self.error_generation {
                    self.last_error = None;
                }
            }
        }
    }
}

/// Type alias for the store
pub type TaskStore = Store<TaskListState>;

/// Get the task store from context
pub fn use_task_store() -> TaskStore {
    expect_context::<TaskStore>()
}

/// Apply an action to the store, writing only the fields it touches
///
/// Mirrors `TaskListState::apply` field by field so a keystroke does not
/// wake up the list.
pub fn dispatch(store: TaskStore, action: TaskAction) {
    log::trace!("dispatch {:?}", action);
    match action {
        TaskAction::Loaded(tasks) => store.tasks().set(tasks),
        TaskAction::InputChanged(text) => store.task_text().set(text),
        TaskAction::Added(task) => {
            store.tasks().write().push(task);
            store.task_text().set(String::new());
        }
        TaskAction::Removed(id) => store.tasks().write().retain(|task| task.id != id),
        TaskAction::Failed(message) => {
            *store.error_generation().write() += 1;
            store.last_error().set(Some(message));
        }
        TaskAction::DismissError => store.last_error().set(None),
        TaskAction::ExpireError(generation) => {
            if store.error_generation().get_untracked() == generation {
                store.last_error().set(None);
            }
        }
    }
}
