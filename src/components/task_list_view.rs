//! Task List View Component
//!
//! Owns the task list state and loads it once on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{ErrorBanner, NewTaskForm, TaskItem};
use crate::context::use_app_context;
use crate::controller;
use crate::store::{dispatch, TaskListState, TaskListStateStoreFields, TaskStore};

fn task_count_label(count: usize) -> String {
    match count {
        1 => "1 task".to_string(),
        n => format!("{} tasks", n),
    }
}

#[component]
pub fn TaskListView() -> impl IntoView {
    let ctx = use_app_context();
    let store: TaskStore = Store::new(TaskListState::default());
    provide_context(store);

    // Load tasks on mount (no tracked reads, so this runs once)
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            let action = controller::load_tasks(&api).await;
            dispatch(store, action);
        });
    });

    view! {
        <div class="task-list-view">
            <ErrorBanner />
            <NewTaskForm />
            <ul class="task-list">
                <For
                    each=move || store.tasks().get()
                    key=|task| task.id.clone()
                    children=move |task| view! { <TaskItem task=task /> }
                />
            </ul>
            <p class="task-count">{move || task_count_label(store.tasks().read().len())}</p>
        </div>
    }
}
