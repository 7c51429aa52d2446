use steam_inventory_wasm::config::{AppConfig, economy_image_url};
use steam_inventory_wasm::domain::currency::Currency;
use steam_inventory_wasm::domain::errors::InfrastructureError;
use steam_inventory_wasm::domain::logging::LogLevel;

#[test]
fn defaults_reproduce_the_page() {
    let config = AppConfig::default();

    assert_eq!(config.sample_item_count, 12);
    assert_eq!(config.default_currency, Currency::Ruble);
    assert!(config.item_image_url.ends_with("/360fx360f"));
    assert_eq!(config.banner_url, "https://steaminventory.ru/background.png");
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = AppConfig::from_json(r#"{ "sample_item_count": 4, "default_currency": "EUR", "log_level": "warn" }"#)
        .unwrap();

    assert_eq!(config.sample_item_count, 4);
    assert_eq!(config.default_currency, Currency::Euro);
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.avatar_url, AppConfig::default().avatar_url);
}

#[test]
fn empty_object_is_the_default() {
    assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
}

#[test]
fn malformed_config_is_reported() {
    let err = AppConfig::from_json(r#"{ "default_currency": "GBP" }"#).unwrap_err();

    assert!(matches!(err, InfrastructureError::ConfigParse(_)));
}

#[test]
fn economy_image_urls() {
    insta::assert_snapshot!(
        economy_image_url("hash"),
        @"https://community.fastly.steamstatic.com/economy/image/hash/360fx360f"
    );
}
