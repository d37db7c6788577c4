use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use svckit::config::{ApiConfig, ObservabilityConfig};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProbeConfig {
    pub api: ApiConfig,
    pub storage_file: String,
    pub observability: ObservabilityConfig,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            storage_file: ".frota/local-storage.json".to_string(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Load `path` (optional) with `MAQUINAS_PROBE__*` environment overrides.
pub fn load_config(path: &str) -> Result<ProbeConfig> {
    let config = Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(Environment::with_prefix("MAQUINAS_PROBE").separator("__"))
        .build()?;

    Ok(config.try_deserialize()?)
}
