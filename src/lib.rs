use wasm_bindgen::prelude::*;

use crate::domain::logging::LogComponent;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod presentation;

/// Browser entry point: read page settings, install logging, then mount the app.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let page_text = infrastructure::page_config_text();
    let (config, config_error) = config::AppConfig::from_page(page_text.as_deref());

    let logger = config
        .log_level()
        .map(infrastructure::ConsoleLogger::new)
        .unwrap_or_else(infrastructure::ConsoleLogger::for_build);
    domain::logging::init_logger(Box::new(logger));
    domain::logging::init_time_provider(Box::new(infrastructure::BrowserTimeProvider::new()));

    if let Some(err) = config_error {
        log_warn!(
            LogComponent::Presentation("Initialize"),
            "Ignoring #{} block: {}",
            infrastructure::CONFIG_ELEMENT_ID,
            err
        );
    }
    log_info!(LogComponent::Presentation("Initialize"), "🏡 HomeScout starting");

    global_state::init_globals(config.search);
    leptos::mount_to_body(app::App);
}
