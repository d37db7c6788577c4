//! Shared contracts for the Frota reporting front-end: the report form
//! shape and catalog, the submit contract, the machine API diagnostics and
//! the configuration types used by the browser app and the CLI probe.

pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod reports;
pub mod types;

pub use errors::FrotaError;
pub use reports::{submit_report, Acknowledger, ReportDefinition, ReportKind};
pub use types::ReportFormData;
