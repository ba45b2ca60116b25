//! Task List Frontend Entry Point

mod models;
mod error;
mod config;
mod commands;
mod store;
mod controller;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }
    if let Some(raw) = &config.rejected_log_level {
        log::warn!("Unknown log level {:?}, using info", raw);
    }

    mount_to_body(move || view! { <App config=config /> });
}
