// svckit/src/diagnostics/mod.rs
//
// Manual diagnostics against the machine listing API.
// Seams are traits so the browser, the CLI and tests each plug in their own
// storage, transport and log sink.
//

mod harness;
mod probe;

pub use harness::{ApiMaquinaService, DiagnosticHarness, HarnessOutcome, MaquinaService, ServiceLoader};
pub use probe::{probe_maquinas, ProbeOutcome};

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::errors::FrotaError;

/// Read-only access to persisted credentials.
pub trait CredentialStore {
    fn read_token(&self, key: &str) -> Result<Option<String>, FrotaError>;
}

/// In-memory credential store.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    entries: HashMap<String, String>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(key: &str, token: &str) -> Self {
        let mut store = Self::new();
        store.insert(key, token);
        store
    }

    pub fn insert(&mut self, key: &str, token: &str) {
        self.entries.insert(key.to_string(), token.to_string());
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn read_token(&self, key: &str) -> Result<Option<String>, FrotaError> {
        Ok(self.entries.get(key).cloned())
    }
}

/// Raw HTTP answer; body is kept as text so callers decide how to parse it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport for `GET /api/maquinas` with a bearer token.
#[async_trait(?Send)]
pub trait MaquinasApi {
    async fn get_maquinas(&self, token: &str) -> Result<ApiResponse, FrotaError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Destination for diagnostic messages.
pub trait DiagnosticLog {
    fn record(&self, level: LogLevel, message: &str);
}

/// Forwards diagnostic messages to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl DiagnosticLog for TracingLog {
    fn record(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => info!(target: "diagnostics", "{}", message),
            LogLevel::Warn => warn!(target: "diagnostics", "{}", message),
            LogLevel::Error => error!(target: "diagnostics", "{}", message),
        }
    }
}

/// Keeps every message; useful for tests and for replaying into a UI.
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: RefCell<Vec<(LogLevel, String)>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries.borrow().clone()
    }

    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.entries
            .borrow()
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }
}

impl DiagnosticLog for MemoryLog {
    fn record(&self, level: LogLevel, message: &str) {
        self.entries.borrow_mut().push((level, message.to_string()));
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use std::cell::{Cell, RefCell};

    use super::*;

    /// Scripted transport that counts calls and remembers tokens.
    pub struct MockApi {
        pub calls: Cell<usize>,
        pub tokens: RefCell<Vec<String>>,
        reply: Box<dyn Fn() -> Result<ApiResponse, FrotaError>>,
    }

    impl MockApi {
        pub fn replying(status: u16, body: &str) -> Self {
            let body = body.to_string();
            Self::with(move || Ok(ApiResponse { status, body: body.clone() }))
        }

        pub fn failing(message: &str) -> Self {
            let message = message.to_string();
            Self::with(move || Err(FrotaError::Network(message.clone())))
        }

        fn with(reply: impl Fn() -> Result<ApiResponse, FrotaError> + 'static) -> Self {
            Self {
                calls: Cell::new(0),
                tokens: RefCell::new(Vec::new()),
                reply: Box::new(reply),
            }
        }
    }

    #[async_trait(?Send)]
    impl MaquinasApi for MockApi {
        async fn get_maquinas(&self, token: &str) -> Result<ApiResponse, FrotaError> {
            self.calls.set(self.calls.get() + 1);
            self.tokens.borrow_mut().push(token.to_string());
            (self.reply)()
        }
    }
}
