mod app_config;

pub use app_config::*;

use std::sync::OnceLock;
use tracing::warn;

static GLOBAL_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the global configuration, read once from the build environment
pub fn get_global_config() -> AppConfig {
    GLOBAL_CONFIG
        .get_or_init(|| {
            let config = AppConfig::from_build_env();
            if let Err(e) = config.validate() {
                warn!("Invalid configuration: {}", e);
            }
            config
        })
        .clone()
}
