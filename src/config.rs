use leptos::prelude::*;
use riskboard_core::DashboardConfig;
use wasm_bindgen::JsValue;

const CONFIG_KEY: &str = "riskboard.config";

#[derive(Clone, Copy)]
pub struct ConfigContext {
    pub config: RwSignal<DashboardConfig>,
}

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| "Unknown error".to_string())
}

fn storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or_else(|| "No window".to_string())?
        .local_storage()
        .map_err(js_err)?
        .ok_or_else(|| "Local storage unavailable".to_string())
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Defaults pointed at the origin that served the page.
pub fn default_config() -> DashboardConfig {
    match page_origin() {
        Some(origin) => DashboardConfig::default().with_base_url(origin),
        None => DashboardConfig::default(),
    }
}

/// Saved overrides from local storage. A saved blob without `base_url`
/// still targets the page origin.
pub fn load_config() -> Result<DashboardConfig, String> {
    let Some(json) = storage()?.get_item(CONFIG_KEY).map_err(js_err)? else {
        return Ok(default_config());
    };

    let mut value: serde_json::Value = serde_json::from_str(&json)
        .map_err(|e| format!("Failed to parse saved config: {}", e))?;
    if let Some(obj) = value.as_object_mut() {
        if !obj.contains_key("base_url") {
            if let Some(origin) = page_origin() {
                obj.insert("base_url".to_string(), origin.into());
            }
        }
    }

    DashboardConfig::from_json(&value.to_string()).map_err(String::from)
}

pub fn save_config(config: &DashboardConfig) -> Result<(), String> {
    config.validate().map_err(String::from)?;
    let json = config.to_json().map_err(String::from)?;
    storage()?.set_item(CONFIG_KEY, &json).map_err(js_err)
}

pub fn clear_config() -> Result<(), String> {
    storage()?.remove_item(CONFIG_KEY).map_err(js_err)
}

/// Seed for client-generated expense/request ids.
pub fn id_seed() -> u64 {
    let random = (js_sys::Math::random() * u64::MAX as f64) as u64;
    random ^ js_sys::Date::now() as u64
}
