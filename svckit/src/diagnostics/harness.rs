use async_trait::async_trait;
use serde_json::Value;

use super::{CredentialStore, DiagnosticLog, LogLevel, MaquinasApi};
use crate::errors::FrotaError;
use crate::types::MaquinasEnvelope;

/// The machine service as the application uses it.
#[async_trait(?Send)]
pub trait MaquinaService {
    async fn listar(&self) -> Result<Vec<Value>, FrotaError>;
}

/// Produces a service on demand. Loading may fail independently of listing.
pub trait ServiceLoader {
    fn load(&self) -> Result<Box<dyn MaquinaService>, FrotaError>;
}

impl<F> ServiceLoader for F
where
    F: Fn() -> Result<Box<dyn MaquinaService>, FrotaError>,
{
    fn load(&self) -> Result<Box<dyn MaquinaService>, FrotaError> {
        self()
    }
}

/// `MaquinaService` backed by a credential store and the HTTP API.
pub struct ApiMaquinaService<S, A> {
    store: S,
    token_key: String,
    api: A,
}

impl<S, A> ApiMaquinaService<S, A>
where
    S: CredentialStore,
    A: MaquinasApi,
{
    pub fn new(store: S, token_key: &str, api: A) -> Self {
        Self {
            store,
            token_key: token_key.to_string(),
            api,
        }
    }
}

#[async_trait(?Send)]
impl<S, A> MaquinaService for ApiMaquinaService<S, A>
where
    S: CredentialStore,
    A: MaquinasApi,
{
    async fn listar(&self) -> Result<Vec<Value>, FrotaError> {
        let token = self
            .store
            .read_token(&self.token_key)?
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| FrotaError::Storage(format!("token ausente em '{}'", self.token_key)))?;

        let response = self.api.get_maquinas(&token).await?;
        if !response.is_success() {
            return Err(FrotaError::Http {
                status: response.status,
                body: response.body,
            });
        }

        let envelope: MaquinasEnvelope = serde_json::from_str(&response.body)?;
        Ok(envelope.into_maquinas())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HarnessOutcome {
    LoadFailed { error: String },
    Listed { maquinas: Vec<Value> },
    ListFailed { error: String },
}

/// On-demand service test: load the service, call `listar` once, log the
/// result. Failures are logged and returned, never raised.
pub struct DiagnosticHarness<L> {
    loader: L,
}

impl<F> DiagnosticHarness<F>
where
    F: Fn() -> Result<Box<dyn MaquinaService>, FrotaError>,
{
    pub fn from_fn(loader: F) -> Self {
        Self { loader }
    }
}

impl<L: ServiceLoader> DiagnosticHarness<L> {
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    pub async fn test_service(&self, log: &dyn DiagnosticLog) -> HarnessOutcome {
        let service = match self.loader.load() {
            Ok(service) => service,
            Err(e) => {
                log.record(LogLevel::Error, &format!("Falha ao carregar serviço de máquinas: {}", e));
                return HarnessOutcome::LoadFailed { error: e.to_string() };
            }
        };

        match service.listar().await {
            Ok(maquinas) => {
                log.record(
                    LogLevel::Info,
                    &format!("Serviço retornou {} máquinas", maquinas.len()),
                );
                HarnessOutcome::Listed { maquinas }
            }
            Err(e) => {
                log.record(LogLevel::Error, &format!("Erro no serviço de máquinas: {}", e));
                HarnessOutcome::ListFailed { error: e.to_string() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::mock::MockApi;
    use crate::diagnostics::{MemoryCredentialStore, MemoryLog};

    const KEY: &str = "accessToken";

    fn api_service(token: Option<&str>, api: MockApi) -> Box<dyn MaquinaService> {
        let store = match token {
            Some(t) => MemoryCredentialStore::with_token(KEY, t),
            None => MemoryCredentialStore::new(),
        };
        Box::new(ApiMaquinaService::new(store, KEY, api))
    }

    #[tokio::test]
    async fn test_service_lists_maquinas() {
        let harness = DiagnosticHarness::from_fn(|| {
            Ok(api_service(
                Some("abc123"),
                MockApi::replying(200, r#"{"data":{"maquinas":[{"id":1},{"id":2},{"id":3}]}}"#),
            ))
        });
        let log = MemoryLog::new();

        match harness.test_service(&log).await {
            HarnessOutcome::Listed { maquinas } => assert_eq!(maquinas.len(), 3),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(log.contains(LogLevel::Info, "3 máquinas"));
    }

    #[tokio::test]
    async fn test_load_failure_is_logged() {
        let harness = DiagnosticHarness::from_fn(|| {
            Err(FrotaError::ServiceLoad("módulo indisponível".to_string()))
        });
        let log = MemoryLog::new();

        let outcome = harness.test_service(&log).await;

        assert!(matches!(outcome, HarnessOutcome::LoadFailed { .. }));
        assert!(log.contains(LogLevel::Error, "módulo indisponível"));
    }

    #[tokio::test]
    async fn test_list_failure_on_http_error() {
        let harness = DiagnosticHarness::from_fn(|| {
            Ok(api_service(Some("abc123"), MockApi::replying(500, "erro interno")))
        });
        let log = MemoryLog::new();

        let outcome = harness.test_service(&log).await;

        assert!(matches!(outcome, HarnessOutcome::ListFailed { .. }));
        assert!(log.contains(LogLevel::Error, "HTTP 500"));
    }

    #[tokio::test]
    async fn test_list_without_token() {
        let harness = DiagnosticHarness::from_fn(|| Ok(api_service(None, MockApi::replying(200, "{}"))));

        let outcome = harness.test_service(&MemoryLog::new()).await;

        assert!(matches!(outcome, HarnessOutcome::ListFailed { error } if error.contains("token ausente")));
    }
}
