// services/frota-dash/src/components/mod.rs
//
// Frota Dashboard - UI Components
//

mod diagnostics;
mod header;
mod log;
mod nav;
mod report_base;
mod report_page;
mod shell;

pub use diagnostics::DiagnosticsPanel;
pub use header::Header;
pub use log::EventLog;
pub use nav::Sidebar;
pub use report_base::RelatorioBase;
pub use report_page::{NotFound, ReportPage, ReportRoute};
pub use shell::AppShell;
