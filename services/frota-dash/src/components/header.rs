// services/frota-dash/src/components/header.rs
//
// Frota Dashboard - Header Component
//

use leptos::*;
use leptos_router::use_location;
use svckit::config::TOKEN_STORAGE_KEY;
use svckit::diagnostics::CredentialStore;

use crate::browser::LocalStorageStore;

#[component]
pub fn Header() -> impl IntoView {
    // The session subsystem owns writes to storage and signals nothing, so the
    // token is re-read whenever the route changes.
    let location = use_location();
    let has_token = Signal::derive(move || {
        location.pathname.track();
        has_session(&LocalStorageStore)
    });

    view! {
        <header class="header">
            <div class="header-brand">
                <span class="header-icon">"🚚"</span>
                <h1 class="header-title">"FROTA"</h1>
                <span class="header-subtitle">"Relatórios de gestão de frota"</span>
            </div>

            <div class="header-status">
                <SessionIndicator has_token=has_token />
            </div>
        </header>
    }
}

#[component]
fn SessionIndicator(#[prop(into)] has_token: Signal<bool>) -> impl IntoView {
    let status = move || session_status(has_token.get());

    view! {
        <div class=move || format!("service-indicator {}", status().0)>
            <span class="service-dot"></span>
            <span class="service-name">{move || status().1}</span>
        </div>
    }
}

fn has_session(store: &dyn CredentialStore) -> bool {
    matches!(
        store.read_token(TOKEN_STORAGE_KEY),
        Ok(Some(ref token)) if !token.trim().is_empty()
    )
}

/// CSS class and label for the indicator.
fn session_status(has_token: bool) -> (&'static str, &'static str) {
    if has_token {
        ("status-healthy", "Sessão ativa")
    } else {
        ("status-offline", "Sem token")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svckit::diagnostics::MemoryCredentialStore;

    #[test]
    fn test_session_requires_non_blank_token() {
        assert!(has_session(&MemoryCredentialStore::with_token(TOKEN_STORAGE_KEY, "abc123")));
        assert!(!has_session(&MemoryCredentialStore::with_token(TOKEN_STORAGE_KEY, "  ")));
        assert!(!has_session(&MemoryCredentialStore::new()));
    }

    #[test]
    fn test_session_status_labels() {
        assert_eq!(session_status(true), ("status-healthy", "Sessão ativa"));
        assert_eq!(session_status(false), ("status-offline", "Sem token"));
    }

    #[test]
    fn test_indicator_follows_token_signal() {
        let runtime = create_runtime();
        let has_token = create_rw_signal(false);
        let status = Signal::derive(move || session_status(has_token.get()));

        assert_eq!(status.get_untracked().1, "Sem token");
        has_token.set(true);
        assert_eq!(status.get_untracked().1, "Sessão ativa");
        runtime.dispose();
    }
}
