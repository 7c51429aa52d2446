use steam_inventory_wasm::domain::errors::DomainError;
use steam_inventory_wasm::domain::filters::{
    FilterField, FilterState, SortDirection, SortKey, SortState,
};

#[test]
fn defaults_match_the_page() {
    let filters = FilterState::default();

    assert_eq!(filters.value_of(FilterField::Source), "steam");
    assert_eq!(filters.value_of(FilterField::Tradability), "all");
    assert_eq!(filters.value_of(FilterField::Category), "all");
    assert_eq!(filters.value_of(FilterField::ViewMode), "single");
    assert_eq!(filters.label_of(FilterField::Source), "Steam");
}

#[test]
fn option_sets_are_fixed() {
    let values = |field: FilterField| -> Vec<&'static str> {
        field.choices().into_iter().map(|c| c.value).collect()
    };

    assert_eq!(values(FilterField::Source), ["steam", "buff163", "tm_market"]);
    assert_eq!(values(FilterField::Tradability), ["all", "trade", "sale"]);
    assert_eq!(values(FilterField::Category), ["all", "knives", "gloves", "pistols"]);
    assert_eq!(values(FilterField::ViewMode), ["single", "grouped"]);
}

#[test]
fn setting_a_member_value_stores_it() {
    let mut filters = FilterState::default();

    assert_eq!(filters.set(FilterField::Source, "tm_market"), Ok("tm_market"));
    assert_eq!(filters.set(FilterField::Category, "gloves"), Ok("gloves"));

    assert_eq!(filters.value_of(FilterField::Source), "tm_market");
    assert_eq!(filters.label_of(FilterField::Source), "TM Market");
    assert_eq!(filters.label_of(FilterField::Category), "Перчатки");
    assert_eq!(filters.value_of(FilterField::Tradability), "all");
}

#[test]
fn values_of_another_field_are_rejected() {
    let mut filters = FilterState::default();
    let before = filters;

    let err = filters.set(FilterField::Tradability, "knives").unwrap_err();

    assert_eq!(
        err,
        DomainError::UnknownFilterValue { field: FilterField::Tradability, value: "knives".into() }
    );
    assert_eq!(filters, before);
    insta::assert_snapshot!(err.to_string(), @"Unknown tradability option: 'knives'");
}

#[test]
fn sort_cycles_through_three_directions() {
    let mut sort = SortState::default();

    assert_eq!(sort.direction(SortKey::Price), SortDirection::Unsorted);
    assert_eq!(sort.cycle(SortKey::Price), SortDirection::Ascending);
    assert_eq!(sort.cycle(SortKey::Price), SortDirection::Descending);
    assert_eq!(sort.cycle(SortKey::Price), SortDirection::Unsorted);
    assert_eq!(sort.direction(SortKey::Quantity), SortDirection::Unsorted);
}

#[test]
fn sort_glyphs() {
    let glyphs: Vec<&str> = [SortDirection::Unsorted, SortDirection::Ascending, SortDirection::Descending]
        .into_iter()
        .map(SortDirection::glyph)
        .collect();

    insta::assert_snapshot!(glyphs.join(" "), @"⇅ ↑ ↓");
}
