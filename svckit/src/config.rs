use serde::{Deserialize, Serialize};

/// Browser storage key holding the session token.
pub const TOKEN_STORAGE_KEY: &str = "accessToken";

/// Machine listing endpoint, relative to the API base URL.
pub const MAQUINAS_PATH: &str = "/api/maquinas";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub token_key: String,
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            token_key: TOKEN_STORAGE_KEY.to_string(),
            timeout_ms: 10_000,
        }
    }
}

impl ApiConfig {
    /// Same-origin configuration used by the browser build.
    pub fn same_origin() -> Self {
        Self {
            base_url: String::new(),
            ..Self::default()
        }
    }

    pub fn maquinas_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), MAQUINAS_PATH)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
