use std::fmt;

use serde_json::Value;

use super::{CredentialStore, DiagnosticLog, LogLevel, MaquinasApi};
use crate::types::MaquinasEnvelope;

/// Result of a single probe of the machine listing endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// No token stored; no request was made.
    MissingCredential,
    /// 2xx with a readable body.
    Listed { status: u16, count: usize },
    /// Non-2xx; body parsed as JSON when possible, raw text otherwise.
    Rejected { status: u16, body: Value },
    /// Storage, network or parse failure.
    Failed { error: String },
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::MissingCredential => write!(f, "sem token armazenado"),
            ProbeOutcome::Listed { status, count } => write!(f, "HTTP {}: {} máquinas", status, count),
            ProbeOutcome::Rejected { status, body } => write!(f, "HTTP {}: {}", status, body),
            ProbeOutcome::Failed { error } => write!(f, "falha: {}", error),
        }
    }
}

/// Look up the stored token and, if present, issue exactly one
/// authenticated `GET /api/maquinas`. Every failure is logged and returned;
/// nothing is retried.
pub async fn probe_maquinas(
    store: &dyn CredentialStore,
    token_key: &str,
    api: &dyn MaquinasApi,
    log: &dyn DiagnosticLog,
) -> ProbeOutcome {
    let token = match store.read_token(token_key) {
        Ok(Some(token)) if !token.trim().is_empty() => token,
        Ok(_) => {
            log.record(
                LogLevel::Warn,
                &format!("Nenhum token encontrado em '{}'; requisição não enviada", token_key),
            );
            return ProbeOutcome::MissingCredential;
        }
        Err(e) => {
            log.record(LogLevel::Error, &format!("Falha ao ler '{}': {}", token_key, e));
            return ProbeOutcome::Failed { error: e.to_string() };
        }
    };

    log.record(
        LogLevel::Info,
        &format!("Token encontrado ({} caracteres), consultando /api/maquinas", token.len()),
    );

    let response = match api.get_maquinas(&token).await {
        Ok(response) => response,
        Err(e) => {
            log.record(LogLevel::Error, &format!("Erro na requisição: {}", e));
            return ProbeOutcome::Failed { error: e.to_string() };
        }
    };

    log.record(LogLevel::Info, &format!("Status: {}", response.status));

    if !response.is_success() {
        let body = serde_json::from_str::<Value>(&response.body)
            .unwrap_or_else(|_| Value::String(response.body.clone()));
        log.record(
            LogLevel::Warn,
            &format!("Resposta de erro {}: {}", response.status, body),
        );
        return ProbeOutcome::Rejected {
            status: response.status,
            body,
        };
    }

    match serde_json::from_str::<MaquinasEnvelope>(&response.body) {
        Ok(envelope) => {
            let count = envelope.count();
            log.record(LogLevel::Info, &format!("Máquinas retornadas: {}", count));
            ProbeOutcome::Listed {
                status: response.status,
                count,
            }
        }
        Err(e) => {
            log.record(LogLevel::Error, &format!("Falha ao interpretar resposta: {}", e));
            ProbeOutcome::Failed { error: e.to_string() }
        }
    }
}
