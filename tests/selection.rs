use quickcheck_macros::quickcheck;
use steam_inventory_wasm::domain::catalog::{Catalog, ItemId, Price, Quantity, SampleInventory};

fn sample_catalog(count: usize) -> Catalog {
    SampleInventory::new(count, "img").generate(|i| Quantity::new(i as u32 % 20 + 1).unwrap())
}

#[test]
fn two_items_in_cart_scenario() {
    let mut catalog = sample_catalog(12);
    catalog.toggle_cart(&ItemId::from("item-3"));
    catalog.toggle_cart(&ItemId::from("item-0"));

    let selection = catalog.selection();
    let ids: Vec<&str> = selection.items().iter().map(|i| i.id.value()).collect();

    assert_eq!(selection.count(), 2);
    assert_eq!(ids, ["item-0", "item-3"]);
    assert!((selection.total().value() - 360.40).abs() < 1e-9);
}

#[test]
fn total_ignores_quantity() {
    let mut catalog = SampleInventory::new(1, "img").generate(|_| Quantity::new(7).unwrap());
    catalog.toggle_cart(&ItemId::from("item-0"));

    assert_eq!(catalog.selection().total(), Price::new(180.20));
}

#[test]
fn toggle_on_then_off_restores_initial_state() {
    let initial = sample_catalog(12);
    let mut catalog = initial.clone();

    catalog.toggle_cart(&ItemId::from("item-0"));
    assert_eq!(catalog.selection().count(), 1);
    catalog.toggle_cart(&ItemId::from("item-0"));

    assert_eq!(catalog, initial);
    assert!(catalog.selection().is_empty());
    assert_eq!(catalog.selection().total(), Price::ZERO);
}

#[quickcheck]
fn count_matches_flagged_items(toggles: Vec<u8>) -> bool {
    let mut catalog = sample_catalog(12);
    for index in toggles {
        catalog.toggle_cart(&ItemId::new(format!("item-{}", index % 12)));
    }

    let flagged = catalog.list_items().iter().filter(|i| i.in_cart).count();
    let selection = catalog.selection();
    selection.count() == flagged && selection.count() <= catalog.len()
}

#[quickcheck]
fn total_is_sum_over_members_in_any_order(toggles: Vec<u8>) -> bool {
    let mut catalog = sample_catalog(12);
    for index in toggles {
        catalog.toggle_cart(&ItemId::new(format!("item-{}", index % 12)));
    }

    let selection = catalog.selection();
    let forward: f64 = selection.items().iter().map(|i| i.market_price.value()).sum();
    let backward: f64 = selection.items().iter().rev().map(|i| i.market_price.value()).sum();
    let total = selection.total().value();

    (total - forward).abs() < 1e-6 && (total - backward).abs() < 1e-6
}
