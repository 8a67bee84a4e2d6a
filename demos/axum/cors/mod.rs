use std::sync::{Arc, RwLock};

use origin_cors::{ConfigError, CorsConfig, CorsPolicy};

pub type SharedPolicy = Arc<CorsPolicy>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedPolicy,
    pub messages: Arc<RwLock<Vec<String>>>,
}

const DEMO_CONFIG: &str = r#"
[chatbox]
cors_allowed_origins = "http://localhost:3000,https://example.com"
"#;

/// Reads `CORS_DEMO_CONFIG` if set, otherwise the built-in document.
pub fn build_state() -> Result<AppState, ConfigError> {
    let config = match std::env::var_os("CORS_DEMO_CONFIG") {
        Some(path) => CorsConfig::load(path)?,
        None => CorsConfig::from_toml_str(DEMO_CONFIG)?,
    };

    Ok(AppState {
        cors: Arc::new(CorsPolicy::from_config(&config)?),
        messages: Arc::default(),
    })
}

pub mod middleware;
