// services/frota-dash/src/components/shell.rs
//
// Frota Dashboard - Landing shell
//

use leptos::*;
use leptos_router::*;

use crate::state::ShellState;

#[component]
pub fn AppShell(state: ShellState) -> impl IntoView {
    let location = use_location();
    let clicks = move || state.clicks.get();

    view! {
        <section class="panel shell-panel">
            <h2 class="panel-title">"Painel de Relatórios"</h2>

            <div class="shell-location">
                <span class="shell-location-label">"Rota atual"</span>
                <code class="shell-location-path">{move || location.pathname.get()}</code>
            </div>

            <div class="shell-counter">
                <button class="btn btn-primary" on:click=move |_| state.increment()>
                    {move || format!("Cliques: {}", clicks())}
                </button>
            </div>

            <div class="info-grid">
                <InfoCard
                    icon="▤"
                    title="Relatórios"
                    text="Escolha um relatório no menu lateral e informe o período e os filtros desejados."
                />
                <InfoCard
                    icon="⛽"
                    title="Frota"
                    text="Abastecimento, manutenção, multas e viagens organizados por veículo e motorista."
                />
                <InfoCard
                    icon="⚙"
                    title="Diagnóstico"
                    text="Verifique o token armazenado e a conexão com a API de máquinas."
                />
            </div>
        </section>
    }
}

#[component]
fn InfoCard(
    icon: &'static str,
    title: &'static str,
    text: &'static str,
) -> impl IntoView {
    view! {
        <div class="info-card">
            <div class="info-icon">{icon}</div>
            <div class="info-content">
                <span class="info-title">{title}</span>
                <p class="info-text">{text}</p>
            </div>
        </div>
    }
}
