// services/frota-dash/src/lib.rs
//
// Frota Dashboard - Library exports
//

pub mod app;
pub mod browser;
pub mod components;
pub mod state;

/// Install the panic hook and console logger, then mount the app.
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Frota dashboard starting...");

    leptos::mount_to_body(|| {
        leptos::view! { <app::App /> }
    });
}
