//! UI Components
//!
//! Leptos components of the task list page.

mod task_list_view;
mod new_task_form;
mod task_item;
mod error_banner;

pub use task_list_view::TaskListView;
pub use new_task_form::NewTaskForm;
pub use task_item::TaskItem;
pub use error_banner::ErrorBanner;
