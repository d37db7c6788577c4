// services/frota-dash/src/components/nav.rs
//
// Frota Dashboard - Sidebar navigation
//

use leptos::*;
use leptos_router::*;
use svckit::ReportKind;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <A href="/" exact=true class="nav-link">"Início"</A>

            <span class="nav-section">"Relatórios"</span>
            {ReportKind::ALL
                .into_iter()
                .map(|kind| {
                    let definition = kind.definition();
                    view! {
                        <A href=kind.route() class="nav-link">{nav_label(definition.title)}</A>
                    }
                })
                .collect_view()}

            <span class="nav-section">"Ferramentas"</span>
            <A href="/diagnostico" class="nav-link">"Diagnóstico"</A>
        </nav>
    }
}

/// "Relatório de Multas" -> "Multas"
fn nav_label(title: &str) -> String {
    title
        .strip_prefix("Relatório de ")
        .or_else(|| title.strip_prefix("Relatório "))
        .unwrap_or(title)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_label_strips_prefix() {
        assert_eq!(nav_label("Relatório de Multas"), "Multas");
        assert_eq!(nav_label("Relatório Financeiro"), "Financeiro");
        assert_eq!(nav_label("Frota"), "Frota");
    }

    #[test]
    fn test_every_report_has_a_short_label() {
        for kind in ReportKind::ALL {
            let label = nav_label(kind.definition().title);
            assert!(!label.starts_with("Relatório"), "{}", label);
        }
    }
}
