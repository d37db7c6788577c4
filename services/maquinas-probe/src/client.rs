use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use svckit::config::ApiConfig;
use svckit::diagnostics::{ApiResponse, MaquinasApi};
use svckit::FrotaError;

/// `GET /api/maquinas` over reqwest. One attempt per call.
#[derive(Clone)]
pub struct ReqwestMaquinasApi {
    client: reqwest::Client,
    url: String,
}

impl ReqwestMaquinasApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            url: config.maquinas_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl MaquinasApi for ReqwestMaquinasApi {
    async fn get_maquinas(&self, token: &str) -> Result<ApiResponse, FrotaError> {
        let response = self
            .client
            .get(&self.url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| FrotaError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FrotaError::Network(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}
