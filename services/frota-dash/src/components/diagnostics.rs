// services/frota-dash/src/components/diagnostics.rs
//
// Frota Dashboard - Machine API diagnostics
// Probes /api/maquinas with the stored token and runs the on-demand
// service test; results go to the event log and the browser console.
//

use leptos::*;
use svckit::config::ApiConfig;
use svckit::diagnostics::{
    probe_maquinas, ApiMaquinaService, DiagnosticHarness, HarnessOutcome, MaquinaService,
};

use super::EventLog;
use crate::browser::{FetchMaquinasApi, LocalStorageStore};
use crate::state::DiagnosticsState;

#[component]
pub fn DiagnosticsPanel(state: DiagnosticsState) -> impl IntoView {
    let config = store_value(ApiConfig::same_origin());
    let running = move || state.running.get();

    let run_probe = move |_: ev::MouseEvent| {
        state.running.set(true);
        spawn_local(async move {
            let config = config.get_value();
            let api = FetchMaquinasApi::new(&config);
            let outcome = probe_maquinas(&LocalStorageStore, &config.token_key, &api, &state).await;
            log::debug!("probe finished: {}", outcome);
            state.running.set(false);
        });
    };

    let run_service_test = move |_: ev::MouseEvent| {
        state.running.set(true);
        spawn_local(async move {
            let config = config.get_value();
            let harness = DiagnosticHarness::from_fn(move || {
                let service: Box<dyn MaquinaService> = Box::new(ApiMaquinaService::new(
                    LocalStorageStore,
                    &config.token_key,
                    FetchMaquinasApi::new(&config),
                ));
                Ok(service)
            });

            if let HarnessOutcome::Listed { maquinas } = harness.test_service(&state).await {
                log::debug!("maquinas: {}", serde_json::Value::Array(maquinas));
            }
            state.running.set(false);
        });
    };

    view! {
        <section class="panel diagnostics-panel">
            <h2 class="panel-title">"Diagnóstico da API de máquinas"</h2>
            <p class="diagnostics-endpoint">
                "GET "<code>{move || config.with_value(|c| c.maquinas_url())}</code>
            </p>

            <div class="controls">
                <button class="btn btn-start" disabled=running on:click=run_probe>
                    <span class="btn-icon">"▶"</span>
                    <span class="btn-text">"Testar requisição"</span>
                </button>
                <button class="btn btn-resume" disabled=running on:click=run_service_test>
                    <span class="btn-icon">"⚙"</span>
                    <span class="btn-text">"Testar serviço"</span>
                </button>
                <button class="btn btn-stop" on:click=move |_| state.clear()>
                    <span class="btn-icon">"✗"</span>
                    <span class="btn-text">"Limpar log"</span>
                </button>
            </div>

            <EventLog state=state />
        </section>
    }
}
