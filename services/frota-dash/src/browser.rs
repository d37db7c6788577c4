// services/frota-dash/src/browser.rs
//
// Frota Dashboard - Browser adapters for the shared contracts
// (localStorage, fetch, console, alert)
//

use async_trait::async_trait;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;

use svckit::config::ApiConfig;
use svckit::diagnostics::{ApiResponse, CredentialStore, MaquinasApi};
use svckit::{Acknowledger, FrotaError, ReportFormData};

/// Reads credentials from `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl CredentialStore for LocalStorageStore {
    fn read_token(&self, key: &str) -> Result<Option<String>, FrotaError> {
        let storage = web_sys::window()
            .ok_or_else(|| FrotaError::Storage("no global `window` exists".to_string()))?
            .local_storage()
            .map_err(|e| FrotaError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| FrotaError::Storage("no local storage exists".to_string()))?;

        storage
            .get_item(key)
            .map_err(|e| FrotaError::Storage(format!("{:?}", e)))
    }
}

/// `GET /api/maquinas` through the browser's fetch.
#[derive(Debug, Clone)]
pub struct FetchMaquinasApi {
    url: String,
}

impl FetchMaquinasApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            url: config.maquinas_url(),
        }
    }
}

#[async_trait(?Send)]
impl MaquinasApi for FetchMaquinasApi {
    async fn get_maquinas(&self, token: &str) -> Result<ApiResponse, FrotaError> {
        let response = Request::get(&self.url)
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| FrotaError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FrotaError::Network(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

/// Console log plus a blocking `alert`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserAcknowledger;

impl Acknowledger for BrowserAcknowledger {
    fn log_submission(&self, label: &str, data: &ReportFormData) {
        let payload = serde_json::to_string(data).unwrap_or_default();
        web_sys::console::log_2(
            &JsValue::from_str(&format!("{}:", label)),
            &JsValue::from_str(&payload),
        );
    }

    fn acknowledge(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("alert failed: {:?}", e);
            }
        }
    }
}
