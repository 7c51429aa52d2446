use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::domain::catalog::SampleInventory;
use crate::domain::logging::LogComponent;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod event_utils;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod presentation;

/// Entry point: installs logging, builds the sample inventory and mounts
/// the page.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let config = infrastructure::services::load_page_config();

    domain::logging::init_logger(Box::new(infrastructure::services::ConsoleLogger::new(config.log_level)));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    let catalog = SampleInventory::new(config.sample_item_count, config.item_image_url.clone())
        .generate(infrastructure::services::random_sample_quantity);
    let item_count = catalog.len();
    let currency = config.default_currency;

    if !global_state::init_globals(config, catalog) {
        crate::log_warn!(LogComponent::Presentation("Initialize"), "Page state was already initialized");
    }

    crate::log_info!(
        LogComponent::Presentation("Initialize"),
        "🚀 Inventory page ready: {} sample items, currency {}",
        item_count,
        currency
    );

    leptos::mount_to_body(App);
}
