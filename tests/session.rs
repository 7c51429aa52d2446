use steam_inventory_wasm::domain::catalog::{CartState, ItemId, Quantity, SampleInventory};
use steam_inventory_wasm::domain::currency::Currency;
use steam_inventory_wasm::domain::errors::DomainError;
use steam_inventory_wasm::domain::events::SessionEvent;
use steam_inventory_wasm::domain::filters::{FilterField, SortDirection, SortKey};
use steam_inventory_wasm::domain::profile::ProfileQuery;
use steam_inventory_wasm::domain::session::{DropdownId, SessionCommand, SessionState};

fn page_session() -> SessionState {
    let catalog = SampleInventory::new(12, "img").generate(|i| Quantity::new(i as u32 + 1).unwrap());
    SessionState::new(catalog, Currency::Ruble)
}

#[test]
fn fresh_session_shows_nothing_yet() {
    let session = page_session();

    assert_eq!(session.profile_input(), "");
    assert!(!session.results_revealed());
    assert!(!session.cart_open());
    assert!(!session.any_dropdown_open());
    assert_eq!(session.items().len(), 12);
    assert!(session.selection().is_empty());
}

#[test]
fn selecting_a_filter_value_commits_and_closes_that_dropdown() {
    let mut session = page_session();
    let items_before = session.items().to_vec();
    let id = DropdownId::Filter(FilterField::Category);

    session.apply(SessionCommand::ToggleDropdown(id)).unwrap();
    assert!(session.is_dropdown_open(id));

    let event = session
        .apply(SessionCommand::SetFilter { field: FilterField::Category, value: "knives".into() })
        .unwrap();

    assert_eq!(event, Some(SessionEvent::FilterChanged { field: FilterField::Category, value: "knives" }));
    assert_eq!(session.filters().value_of(FilterField::Category), "knives");
    assert!(!session.is_dropdown_open(id));
    assert_eq!(session.items(), items_before.as_slice());
}

#[test]
fn invalid_filter_value_leaves_everything_untouched() {
    let mut session = page_session();
    session.apply(SessionCommand::OpenDropdown(DropdownId::Filter(FilterField::Source))).unwrap();
    let before = session.clone();

    let result = session.apply(SessionCommand::SetFilter { field: FilterField::Source, value: "ebay".into() });

    assert!(matches!(result, Err(DomainError::UnknownFilterValue { .. })));
    assert_eq!(session, before);
}

#[test]
fn dropdowns_open_independently() {
    let mut session = page_session();

    session.apply(SessionCommand::ToggleDropdown(DropdownId::Currency)).unwrap();
    session.apply(SessionCommand::ToggleDropdown(DropdownId::Filter(FilterField::ViewMode))).unwrap();

    assert!(session.is_dropdown_open(DropdownId::Currency));
    assert!(session.is_dropdown_open(DropdownId::Filter(FilterField::ViewMode)));

    session.apply(SessionCommand::ToggleDropdown(DropdownId::Currency)).unwrap();
    assert!(!session.is_dropdown_open(DropdownId::Currency));
    assert!(session.is_dropdown_open(DropdownId::Filter(FilterField::ViewMode)));
}

#[test]
fn outside_click_closes_all_without_committing() {
    let mut session = page_session();
    for id in DropdownId::all() {
        session.apply(SessionCommand::OpenDropdown(id)).unwrap();
    }
    let currency = session.currency();
    let filters = *session.filters();

    let event = session.apply(SessionCommand::CloseAllDropdowns).unwrap();

    assert_eq!(event, Some(SessionEvent::DropdownsDismissed(5)));
    assert!(!session.any_dropdown_open());
    assert_eq!(session.currency(), currency);
    assert_eq!(*session.filters(), filters);

    assert_eq!(session.apply(SessionCommand::CloseAllDropdowns).unwrap(), None);
}

#[test]
fn selecting_currency_closes_the_currency_dropdown() {
    let mut session = page_session();
    session.apply(SessionCommand::OpenDropdown(DropdownId::Currency)).unwrap();

    let event = session.apply(SessionCommand::SelectCurrencyBySymbol("$".into())).unwrap();

    assert_eq!(event, Some(SessionEvent::CurrencySelected(Currency::Dollar)));
    assert_eq!(session.currency(), Currency::Dollar);
    assert!(!session.is_dropdown_open(DropdownId::Currency));
}

#[test]
fn reveal_is_idempotent_and_classifies_the_query() {
    let mut session = page_session();
    session
        .apply(SessionCommand::EditProfile("https://steamcommunity.com/profiles/76561198083135565/".into()))
        .unwrap();

    let first = session.apply(SessionCommand::RevealResults).unwrap();
    let snapshot = session.clone();
    let second = session.apply(SessionCommand::RevealResults).unwrap();

    let expected = Some(SessionEvent::LookupRequested(ProfileQuery::SteamId("76561198083135565".into())));
    assert_eq!(first, expected);
    assert_eq!(second, expected);
    assert!(session.results_revealed());
    assert_eq!(session, snapshot);
}

#[test]
fn profile_edit_and_clear() {
    let mut session = page_session();

    assert_eq!(
        session.apply(SessionCommand::EditProfile("gabelogannewell".into())).unwrap(),
        Some(SessionEvent::ProfileEdited(15))
    );
    assert_eq!(session.apply(SessionCommand::EditProfile("gabelogannewell".into())).unwrap(), None);
    assert_eq!(session.apply(SessionCommand::ClearProfile).unwrap(), Some(SessionEvent::ProfileCleared));
    assert_eq!(session.profile_input(), "");
    assert_eq!(session.apply(SessionCommand::ClearProfile).unwrap(), None);
}

#[test]
fn cart_drawer_lists_members_in_catalog_order() {
    let mut session = page_session();

    let event = session.apply(SessionCommand::ToggleCart(ItemId::from("item-3"))).unwrap();
    assert_eq!(
        event,
        Some(SessionEvent::CartToggled { id: ItemId::from("item-3"), state: CartState::InCart })
    );
    session.apply(SessionCommand::ToggleCart(ItemId::from("item-0"))).unwrap();
    session.apply(SessionCommand::OpenCart).unwrap();

    let names: Vec<&str> = session.selection().items().iter().map(|i| i.id.value()).collect();
    assert!(session.cart_open());
    assert_eq!(names, ["item-0", "item-3"]);
    assert_eq!(session.cart_total_label(), "₽ 360.40");

    assert_eq!(session.apply(SessionCommand::CloseCart).unwrap(), Some(SessionEvent::CartClosed));
    assert_eq!(session.apply(SessionCommand::CloseCart).unwrap(), None);
}

#[test]
fn unknown_item_toggle_changes_nothing() {
    let mut session = page_session();
    let before = session.clone();

    assert_eq!(session.apply(SessionCommand::ToggleCart(ItemId::from("missing"))).unwrap(), None);
    assert_eq!(session, before);
}

#[test]
fn sort_buttons_cycle_without_reordering() {
    let mut session = page_session();
    let items_before = session.items().to_vec();

    let event = session.apply(SessionCommand::CycleSort(SortKey::Quantity)).unwrap();

    assert_eq!(
        event,
        Some(SessionEvent::SortCycled { key: SortKey::Quantity, direction: SortDirection::Ascending })
    );
    assert_eq!(session.items(), items_before.as_slice());
}
