use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Globals checked before falling back to `./config.json`.
const ENV_GLOBAL: &str = "__REGISTRATION_ENV";
const CONFIG_GLOBAL: &str = "__REGISTRATION_CONFIG";
const CONFIG_PATH: &str = "./config.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Hide the authenticator status line while it has no message.
    #[serde(default)]
    pub hide_empty_status: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("config request failed: {0}")]
    Fetch(String),
    #[error("config request returned status {0}")]
    Status(u16),
    #[error("invalid runtime config: {0}")]
    Parse(String),
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

pub fn parse_runtime_config(body: &str) -> Result<RuntimeConfig, ConfigError> {
    serde_json::from_str(body).map_err(|err| ConfigError::Parse(err.to_string()))
}

fn parse_flag(raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(ConfigError::Parse(format!("not a boolean: {other}"))),
    }
}

fn flag_from_js(value: &JsValue) -> Result<bool, ConfigError> {
    if let Some(flag) = value.as_bool() {
        return Ok(flag);
    }
    match value.as_string() {
        Some(raw) => parse_flag(&raw),
        None => Err(ConfigError::Parse("flag must be a boolean or string".into())),
    }
}

// Expects e.g. window.__REGISTRATION_ENV = { HIDE_EMPTY_STATUS: "true" }
fn read_global_flag(global: &str, keys: &[&str]) -> Result<Option<bool>, ConfigError> {
    let w = web_sys::window().ok_or(ConfigError::NoWindow)?;
    let obj = match js_sys::Reflect::get(&w, &JsValue::from_str(global)) {
        Ok(any) if !any.is_undefined() && !any.is_null() => any,
        _ => return Ok(None),
    };
    for key in keys {
        let value = js_sys::Reflect::get(&obj, &JsValue::from_str(key))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null());
        if let Some(value) = value {
            return flag_from_js(&value).map(Some);
        }
    }
    Ok(None)
}

fn config_url() -> Result<String, ConfigError> {
    let w = web_sys::window().ok_or(ConfigError::NoWindow)?;
    let base = w
        .location()
        .href()
        .map_err(|_| ConfigError::Fetch("location unavailable".into()))?;
    web_sys::Url::new_with_base(CONFIG_PATH, &base)
        .map(|url| url.href())
        .map_err(|_| ConfigError::Fetch(format!("cannot resolve {CONFIG_PATH}")))
}

async fn fetch_runtime_config() -> Result<RuntimeConfig, ConfigError> {
    let resp = reqwest::get(config_url()?)
        .await
        .map_err(|err| ConfigError::Fetch(err.to_string()))?;
    if !resp.status().is_success() {
        return Err(ConfigError::Status(resp.status().as_u16()));
    }
    let body = resp
        .text()
        .await
        .map_err(|err| ConfigError::Fetch(err.to_string()))?;
    parse_runtime_config(&body)
}

fn global_source(global: &str, keys: &[&str]) -> Option<bool> {
    match read_global_flag(global, keys) {
        Ok(flag) => flag,
        Err(err) => {
            log::warn!("ignoring window.{global}: {err}");
            None
        }
    }
}

/// Config set through page globals. A global with an unusable value is
/// skipped so later sources still get a say.
fn config_from_globals() -> Option<RuntimeConfig> {
    global_source(ENV_GLOBAL, &["HIDE_EMPTY_STATUS", "hide_empty_status"])
        .or_else(|| global_source(CONFIG_GLOBAL, &["hide_empty_status", "HIDE_EMPTY_STATUS"]))
        .map(|flag| RuntimeConfig {
            hide_empty_status: flag,
        })
}

pub async fn load() -> Result<RuntimeConfig, ConfigError> {
    if let Some(cfg) = config_from_globals() {
        return Ok(cfg);
    }
    fetch_runtime_config().await
}

/// Resolves the runtime config once; later calls return the cached value.
pub async fn init() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let cfg = match load().await {
        Ok(cfg) => cfg,
        Err(err) => {
            log::warn!("runtime config unavailable, using defaults: {err}");
            RuntimeConfig::default()
        }
    };
    RUNTIME_CONFIG.get_or_init(|| cfg).clone()
}

pub fn runtime_config() -> RuntimeConfig {
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}
