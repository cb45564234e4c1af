use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Trims whitespace and a trailing `/`; blank input counts as unset.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Origin baked in at build time via `API_BASE_URL`, else the default.
pub fn build_time_base_url() -> String {
    option_env!("API_BASE_URL")
        .and_then(normalize_base_url)
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

fn cache_base_url(value: String) -> String {
    API_BASE_URL.get_or_init(|| value).clone()
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{normalize_base_url, RuntimeConfig};

    fn read_global(object: &str, keys: [&str; 2]) -> Option<String> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &object.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        keys.iter()
            .filter_map(|key| js_sys::Reflect::get(&any, &(*key).into()).ok())
            .filter(|v| !v.is_undefined() && !v.is_null())
            .find_map(|v| v.as_string())
            .and_then(|v| normalize_base_url(&v))
    }

    // window.__FINZ_ENV = { API_BASE_URL: "..." } is written by an optional env.js.
    pub fn snapshot_from_globals() -> Option<String> {
        read_global("__FINZ_ENV", ["API_BASE_URL", "api_base_url"])
            .or_else(|| read_global("__FINZ_CONFIG", ["api_base_url", "API_BASE_URL"]))
    }

    pub fn write_window_config(url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
        let _ = js_sys::Reflect::set(&window, &"__FINZ_CONFIG".into(), &obj);
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(target_arch = "wasm32")]
async fn resolve_base_url() -> String {
    if let Some(existing) = browser::snapshot_from_globals() {
        return existing;
    }
    if let Some(url) = browser::fetch_runtime_config()
        .await
        .and_then(|cfg| cfg.api_base_url)
        .and_then(|url| normalize_base_url(&url))
    {
        browser::write_window_config(&url);
        return url;
    }
    build_time_base_url()
}

#[cfg(not(target_arch = "wasm32"))]
async fn resolve_base_url() -> String {
    build_time_base_url()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let resolved = resolve_base_url().await;
    log::debug!("API base URL resolved to {}", resolved);
    cache_base_url(resolved)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
