use quickcheck_macros::quickcheck;
use steam_inventory_wasm::domain::catalog::{InventorySummary, ItemId, Price, Quantity, SampleInventory};
use steam_inventory_wasm::domain::currency::Currency;
use steam_inventory_wasm::domain::errors::DomainError;
use steam_inventory_wasm::domain::session::{SessionCommand, SessionState};

#[test]
fn six_currencies_in_menu_order() {
    let labels: Vec<String> = Currency::all().map(Currency::option_label).collect();

    insta::assert_snapshot!(
        labels.join(" | "),
        @"Рубль (₽) | Доллар ($) | Евро (€) | Юань (¥) | Тенге (₸) | Бел. рубль (Br)"
    );
    assert_eq!(Currency::default(), Currency::Ruble);
}

#[test]
fn formats_by_placement() {
    let amount = Price::new(180.2);

    insta::assert_snapshot!(Currency::Ruble.format_suffixed(amount), @"180.20 ₽");
    insta::assert_snapshot!(Currency::Dollar.format_prefixed(amount), @"$ 180.20");
    insta::assert_snapshot!(Currency::Tenge.format_whole(Price::new(54645.0)), @"54645 ₸");
}

#[test]
fn lookups_by_symbol_and_code() {
    assert_eq!(Currency::from_symbol("€"), Ok(Currency::Euro));
    assert_eq!(Currency::from_symbol("Br"), Ok(Currency::BelarusianRuble));
    assert_eq!(Currency::from_code("CNY"), Ok(Currency::Yuan));
    assert_eq!(Currency::Tenge.code(), "KZT");
    assert_eq!(Currency::from_symbol("£"), Err(DomainError::UnknownCurrency("£".into())));
}

#[test]
fn switching_currency_relabels_the_cart_total() {
    let catalog = SampleInventory::new(12, "img").generate(|_| Quantity::ONE);
    let mut session = SessionState::new(catalog, Currency::Ruble);
    session.apply(SessionCommand::ToggleCart(ItemId::from("item-0"))).unwrap();

    assert_eq!(session.cart_total_label(), "₽ 180.20");

    session.apply(SessionCommand::SelectCurrency(Currency::Euro)).unwrap();

    assert_eq!(session.cart_total_label(), "€ 180.20");
    assert_eq!(session.selection().total(), Price::new(180.20));
}

#[quickcheck]
fn currency_switches_never_touch_amounts(toggles: Vec<u8>) -> bool {
    let catalog = SampleInventory::new(12, "img").generate(|i| Quantity::new(i as u32 % 20 + 1).unwrap());
    let mut session = SessionState::new(catalog, Currency::Ruble);
    for index in toggles {
        let id = ItemId::new(format!("item-{}", index % 12));
        session.apply(SessionCommand::ToggleCart(id)).unwrap();
    }
    let items = session.items().to_vec();
    let total = session.selection().total();
    let amount = format!("{}", total);

    Currency::all().all(|currency| {
        session.apply(SessionCommand::SelectCurrency(currency)).unwrap();
        let label = session.cart_total_label();
        session.items() == items.as_slice()
            && session.selection().total() == total
            && label.strip_prefix(currency.symbol()) == Some(&format!(" {}", amount)[..])
    })
}

#[test]
fn unknown_symbol_leaves_currency_unchanged() {
    let mut session = SessionState::new(Default::default(), Currency::Dollar);
    let before = session.clone();

    let err = session.apply(SessionCommand::SelectCurrencyBySymbol("₿".into())).unwrap_err();

    assert_eq!(err, DomainError::UnknownCurrency("₿".into()));
    assert_eq!(session, before);
}

#[test]
fn summary_headline_uses_whole_amounts() {
    let summary = InventorySummary::sample("avatar.jpg");

    insta::assert_snapshot!(summary.value_caption(), @"Стоимость инвентаря по CS:GO:");
    insta::assert_snapshot!(summary.value_label(Currency::Yuan), @"54645 ¥");
    insta::assert_snapshot!(
        summary.count_caption(),
        @"Всего в инвентаре по CS:GO найдено 1090 скинов (500 платные):"
    );
}
