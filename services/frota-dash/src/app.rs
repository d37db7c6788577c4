// services/frota-dash/src/app.rs
//
// Frota Dashboard - Main Application Component
//

use leptos::*;
use leptos_router::*;

use crate::components::{AppShell, DiagnosticsPanel, Header, NotFound, ReportRoute, Sidebar};
use crate::state::{DiagnosticsState, ShellState};

#[component]
pub fn App() -> impl IntoView {
    // Created once so the counter and the event log survive navigation
    let shell = ShellState::new();
    let diagnostics = DiagnosticsState::new();

    view! {
        <Router>
            <div class="frota-app">
                <Header />

                <div class="layout">
                    <Sidebar />

                    <main class="content">
                        <Routes>
                            <Route path="/" view=move || view! { <AppShell state=shell /> } />
                            <Route path="/relatorios/:slug" view=ReportRoute />
                            <Route
                                path="/diagnostico"
                                view=move || view! { <DiagnosticsPanel state=diagnostics /> }
                            />
                            <Route path="/*any" view=NotFound />
                        </Routes>
                    </main>
                </div>

                <footer class="footer">
                    <span class="footer-brand">"🚚 Frota"</span>
                    <span class="footer-tagline">"Relatórios de gestão de frota"</span>
                </footer>
            </div>
        </Router>
    }
}
