//! New Task Form Component
//!
//! Text input bound to the store's input buffer plus a submit button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::controller;
use crate::store::{dispatch, use_task_store, TaskAction, TaskListStateStoreFields};

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_task_store();

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = store.task_text().get_untracked();
        let api = ctx.api();

        spawn_local(async move {
            if let Some(action) = controller::add_task(&api, text).await {
                dispatch(store, action);
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                placeholder="Add a new task"
                prop:value=move || store.task_text().get()
                on:input=move |ev| dispatch(store, TaskAction::InputChanged(event_target_value(&ev)))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
