//! Error Banner Component
//!
//! Shows the latest failed round-trip with the recent log lines behind a
//! details toggle. Clears itself after a few seconds unless a newer error
//! replaced it.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{dispatch, use_task_store, TaskAction, TaskListStateStoreFields};

const ERROR_DISMISS_MS: u32 = 5_000;

/// Log lines shown under an error
const LOG_TAIL_LINES: usize = 20;

/// Last `limit` lines, oldest first
fn log_tail(mut lines: Vec<String>, limit: usize) -> Vec<String> {
    let skip = lines.len().saturating_sub(limit);
    lines.drain(..skip);
    lines
}

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_task_store();

    // Re-runs only when `last_error` is written
    Effect::new(move |_| {
        if store.last_error().get().is_some() {
            let generation = store.error_generation().get_untracked();
            spawn_local(async move {
                TimeoutFuture::new(ERROR_DISMISS_MS).await;
                dispatch(store, TaskAction::ExpireError(generation));
            });
        }
    });

    move || {
        store.last_error().get().map(|message| {
            let lines = log_tail(console_logger::recent_lines(), LOG_TAIL_LINES);
            view! {
                <div class="error-banner" role="alert">
                    <div class="error-row">
                        <span>{message}</span>
                        <button class="dismiss-btn" on:click=move |_| dispatch(store, TaskAction::DismissError)>
                            "×"
                        </button>
                    </div>
                    <details class="error-log">
                        <summary>"Details"</summary>
                        <pre>{lines.join("\n")}</pre>
                    </details>
                </div>
            }
        })
    }
}
