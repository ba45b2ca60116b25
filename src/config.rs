//! Frontend configuration
//!
//! Browser builds have no process environment, so overrides are baked in at
//! compile time (`TASK_LIST_API_BASE`, `TASK_LIST_LOG`). Without them the app
//! talks to the origin that served it and logs at `info`.

use log::LevelFilter;

use crate::error::{ApiError, Result};

/// Used when there is no page origin to fall back on (native test builds)
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend origin, without trailing slash
    pub api_base: String,
    pub log_level: LevelFilter,
    /// Raw `TASK_LIST_LOG` value that failed to parse, reported once logging is up
    pub rejected_log_level: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_base = option_env!("TASK_LIST_API_BASE")
            .map(str::to_string)
            .unwrap_or_else(page_origin);
        Self::from_parts(api_base, option_env!("TASK_LIST_LOG"))
    }

    fn from_parts(api_base: String, log_level: Option<&str>) -> Self {
        let (log_level, rejected_log_level) = match log_level.map(str::trim) {
            None | Some("") => (LevelFilter::Info, None),
            Some(raw) => match raw.parse::<LevelFilter>() {
                Ok(level) => (level, None),
                Err(_) => (LevelFilter::Info, Some(raw.to_string())),
            },
        };
        Self { api_base, log_level, rejected_log_level }
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> String {
    DEFAULT_API_BASE.to_string()
}

/// Validate an http(s) origin and strip trailing slashes
pub fn normalize_base(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = reqwest::Url::parse(trimmed).map_err(|_| ApiError::InvalidBaseUrl(raw.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ApiError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(trimmed.to_string())
}
