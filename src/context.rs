//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::HttpTaskApi;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Backend client; kept in local storage since fetch futures are not `Send`
    api: StoredValue<HttpTaskApi, LocalStorage>,
}

impl AppContext {
    pub fn new(api: HttpTaskApi) -> Self {
        Self {
            api: StoredValue::new_local(api),
        }
    }

    /// Owned client for a spawned request
    pub fn api(&self) -> HttpTaskApi {
        self.api.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
