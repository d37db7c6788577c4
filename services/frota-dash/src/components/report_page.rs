// services/frota-dash/src/components/report_page.rs
//
// Frota Dashboard - Report pages
// One parameterised page serves every report kind.
//

use leptos::*;
use leptos_router::*;
use svckit::{submit_report, ReportFormData, ReportKind};

use super::RelatorioBase;
use crate::browser::BrowserAcknowledger;

#[component]
pub fn ReportPage(kind: ReportKind) -> impl IntoView {
    let definition = kind.definition();
    let on_submit = Callback::new(move |data: ReportFormData| {
        submit_report(kind, &data, &BrowserAcknowledger);
    });

    view! {
        <RelatorioBase
            title=definition.title
            description=definition.description
            on_submit=on_submit
        />
    }
}

/// Resolves `/relatorios/:slug` to a report page.
#[component]
pub fn ReportRoute() -> impl IntoView {
    let params = use_params_map();
    let kind = move || params.with(|p| p.get("slug").and_then(|slug| ReportKind::from_slug(slug)));

    move || match kind() {
        Some(kind) => view! { <ReportPage kind=kind /> }.into_view(),
        None => view! { <NotFound /> }.into_view(),
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();

    view! {
        <section class="panel not-found">
            <h2 class="panel-title">"Página não encontrada"</h2>
            <p>"Nenhum relatório em "<code>{move || location.pathname.get()}</code></p>
            <A href="/">"Voltar ao início"</A>
        </section>
    }
}
