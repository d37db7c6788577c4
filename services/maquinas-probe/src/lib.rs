// services/maquinas-probe/src/lib.rs
//
// Native counterpart of the browser diagnostics: token lookup plus one
// authenticated GET /api/maquinas.
//

pub mod client;
pub mod config;
pub mod credentials;

pub use self::client::ReqwestMaquinasApi;
pub use self::config::{load_config, ProbeConfig};
pub use self::credentials::{StorageFile, TokenSource};
