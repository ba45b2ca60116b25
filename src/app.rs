//! Task List App
//!
//! Root component: wires the backend client into context and shows the list.

use leptos::prelude::*;

use crate::commands::HttpTaskApi;
use crate::components::TaskListView;
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let api = match HttpTaskApi::new(&config.api_base) {
        Ok(api) => api,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            return view! {
                <div class="app-error">
                    <h1>"Tasks"</h1>
                    <p>{e.to_string()}</p>
                </div>
            }
            .into_any();
        }
    };
    log::info!("Using task backend at {}", api.base());

    // Provide context to all children
    provide_context(AppContext::new(api));

    view! {
        <main class="app-layout">
            <h1>"Tasks"</h1>
            <TaskListView />
        </main>
    }
    .into_any()
}
