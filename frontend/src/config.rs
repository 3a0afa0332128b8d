use gloo_storage::{LocalStorage, Storage};
use shared::ApiConfig;

const API_BASE_URL_KEY: &str = "flavi.api_base_url";

/// Backend location: a browser override first, then the build-time value.
pub fn load_api_config() -> ApiConfig {
    let stored: Option<String> = LocalStorage::get(API_BASE_URL_KEY).ok();
    let config = ApiConfig::resolve([stored.as_deref(), option_env!("FLAVI_API_BASE_URL")]);
    log::info!("Using backend at {}", config.base_url());
    config
}
