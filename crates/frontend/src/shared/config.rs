use once_cell::sync::Lazy;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub gateway: GatewayConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GatewayConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Storage key holding the bearer token
    pub token_key: String,
}

/// Hosted alumni gateway
pub const DEFAULT_GATEWAY_URL: &str = "https://7wgbsyva7h.execute-api.ap-south-1.amazonaws.com/dev";

fn default_base_url() -> String {
    DEFAULT_GATEWAY_URL.to_string()
}

fn default_page_size() -> u32 {
    contracts::shared::pagination::DEFAULT_PAGE_SIZE
}

fn default_debounce_ms() -> u64 {
    300
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[gateway]
base_url = "https://7wgbsyva7h.execute-api.ap-south-1.amazonaws.com/dev"
page_size = 20
debounce_ms = 300

[auth]
token_key = "token"
"#;

impl AppConfig {
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Base URL every gateway path is appended to, without a trailing slash
    pub fn gateway_base(&self) -> String {
        let base = self.gateway.base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            log::error!("gateway.base_url is blank, using {}", DEFAULT_GATEWAY_URL);
            DEFAULT_GATEWAY_URL.to_string()
        } else {
            base.to_string()
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.gateway.debounce_ms)
    }
}

fn load_config() -> AppConfig {
    match AppConfig::parse(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Embedded configuration is invalid: {}", e);
            AppConfig {
                gateway: GatewayConfig {
                    base_url: default_base_url(),
                    page_size: default_page_size(),
                    debounce_ms: default_debounce_ms(),
                },
                auth: AuthConfig {
                    token_key: "token".to_string(),
                },
            }
        }
    }
}

/// Configuration used by the running application
pub static CONFIG: Lazy<AppConfig> = Lazy::new(load_config);
