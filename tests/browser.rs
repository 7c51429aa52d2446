#![cfg(target_arch = "wasm32")]

use leptos::*;
use steam_inventory_wasm::app::App;
use steam_inventory_wasm::config::AppConfig;
use steam_inventory_wasm::domain::catalog::{ItemId, Quantity, SampleInventory};
use steam_inventory_wasm::domain::session::SessionCommand;
use steam_inventory_wasm::event_utils::event_within;
use steam_inventory_wasm::global_state;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// Installs a 12-item page state unless an earlier test already did.
fn init_page() {
    let config = AppConfig::default();
    let catalog = SampleInventory::new(config.sample_item_count, config.item_image_url.clone())
        .generate(|_| Quantity::ONE);
    global_state::init_globals(config, catalog);
}

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn app_mounts_lookup_form() {
    init_page();
    mount_to_body(App);

    let button_labels: Vec<String> = {
        let buttons = document().query_selector_all("button").unwrap();
        (0..buttons.length())
            .filter_map(|i| buttons.item(i))
            .filter_map(|node| node.text_content())
            .collect()
    };

    assert!(document().get_element_by_id("profile-input").is_some());
    assert!(button_labels.iter().any(|label| label.contains("УЗНАТЬ СТОИМОСТЬ")));
}

#[wasm_bindgen_test]
fn dispatch_updates_the_session_signal() {
    init_page();
    let session = global_state::session();
    let id = ItemId::from("item-0");
    let before = session.with_untracked(|state| state.selection().count());

    steam_inventory_wasm::application::dispatch(SessionCommand::ToggleCart(id.clone())).unwrap();
    let after = session.with_untracked(|state| state.selection().count());
    steam_inventory_wasm::application::dispatch(SessionCommand::ToggleCart(id)).unwrap();

    assert_eq!(after, before + 1);
    assert_eq!(session.with_untracked(|state| state.selection().count()), before);
}

#[wasm_bindgen_test]
fn clicks_inside_dropdowns_are_detected() {
    let menu = document().create_element("div").unwrap();
    menu.set_attribute("data-dropdown", "").unwrap();
    let option = document().create_element("button").unwrap();
    menu.append_child(&option).unwrap();

    let event = web_sys::Event::new("click").unwrap();
    option.dispatch_event(&event).unwrap();
    assert!(event_within(&event, "[data-dropdown]"));

    let outside = document().create_element("span").unwrap();
    let event = web_sys::Event::new("click").unwrap();
    outside.dispatch_event(&event).unwrap();
    assert!(!event_within(&event, "[data-dropdown]"));
}
