// services/frota-dash/src/state.rs
//
// Frota Dashboard - Reactive State
//

use leptos::*;
use serde::{Deserialize, Serialize};
use svckit::diagnostics::{DiagnosticLog, LogLevel};

const MAX_LOG_ENTRIES: usize = 100;

/// Counter shown on the landing shell.
#[derive(Clone, Copy)]
pub struct ShellState {
    pub clicks: RwSignal<u32>,
}

impl ShellState {
    pub fn new() -> Self {
        Self {
            clicks: create_rw_signal(0),
        }
    }

    pub fn increment(&self) {
        self.clicks.update(|n| *n += 1);
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

/// Log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Assigned by `DiagnosticsState::push`; stable across the cap.
    pub seq: u64,
    pub timestamp: String,
    pub level: String, // "info", "warn", "error"
    pub message: String,
}

/// Diagnostics panel state. All fields are signals, so the struct is Copy.
#[derive(Clone, Copy)]
pub struct DiagnosticsState {
    pub logs: RwSignal<Vec<LogEntry>>,
    pub running: RwSignal<bool>,
}

impl DiagnosticsState {
    pub fn new() -> Self {
        Self {
            logs: create_rw_signal(vec![]),
            running: create_rw_signal(false),
        }
    }

    pub fn push(&self, mut entry: LogEntry) {
        self.logs.update(|logs| {
            entry.seq = logs.last().map(|last| last.seq + 1).unwrap_or(0);
            logs.push(entry);
            if logs.len() > MAX_LOG_ENTRIES {
                logs.remove(0);
            }
        });
    }

    pub fn clear(&self) {
        self.logs.set(vec![]);
    }
}

impl Default for DiagnosticsState {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticLog for DiagnosticsState {
    fn record(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => log::info!("{}", message),
            LogLevel::Warn => log::warn!("{}", message),
            LogLevel::Error => log::error!("{}", message),
        }

        self.push(LogEntry {
            seq: 0,
            timestamp: js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default(),
            level: level.as_str().to_string(),
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: usize) -> LogEntry {
        LogEntry {
            seq: 0,
            timestamp: format!("2024-01-01T00:00:{:02}.000Z", n % 60),
            level: "info".to_string(),
            message: format!("entry {}", n),
        }
    }

    #[test]
    fn test_counter_starts_at_zero_and_steps_by_one() {
        let runtime = create_runtime();
        let shell = ShellState::new();
        assert_eq!(shell.clicks.get_untracked(), 0);

        for expected in 1..=5 {
            shell.increment();
            assert_eq!(shell.clicks.get_untracked(), expected);
        }
        runtime.dispose();
    }

    #[test]
    fn test_log_is_capped() {
        let runtime = create_runtime();
        let state = DiagnosticsState::new();

        for n in 0..(MAX_LOG_ENTRIES + 10) {
            state.push(entry(n));
        }

        let logs = state.logs.get_untracked();
        assert_eq!(logs.len(), MAX_LOG_ENTRIES);
        assert_eq!(logs[0].message, "entry 10");
        runtime.dispose();
    }

    #[test]
    fn test_sequence_survives_the_cap() {
        let runtime = create_runtime();
        let state = DiagnosticsState::new();

        for n in 0..MAX_LOG_ENTRIES {
            state.push(entry(n));
        }
        let before: Vec<u64> = state.logs.get_untracked().iter().skip(1).map(|e| e.seq).collect();

        state.push(entry(MAX_LOG_ENTRIES));
        let logs = state.logs.get_untracked();
        let after: Vec<u64> = logs.iter().take(MAX_LOG_ENTRIES - 1).map(|e| e.seq).collect();

        assert_eq!(before, after);
        assert_eq!(logs.last().map(|e| e.seq), Some(MAX_LOG_ENTRIES as u64));

        state.clear();
        assert!(state.logs.get_untracked().is_empty());
        runtime.dispose();
    }
}
