//! Task Item Component
//!
//! One row of the list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::controller;
use crate::models::Task;
use crate::store::{dispatch, use_task_store};

/// A single task row with its "Done" button
#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_task_store();

    let id = task.id;
    let on_done = move |_| {
        let api = ctx.api();
        let id = id.clone();
        spawn_local(async move {
            let action = controller::delete_task(&api, id).await;
            dispatch(store, action);
        });
    };

    view! {
        <li class="task-item">
            <span class="task-text">{task.text}</span>
            <button class="done-btn" on:click=on_done>"Done"</button>
        </li>
    }
}
