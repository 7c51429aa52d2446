use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::domain::catalog::Price;
use crate::domain::errors::{DomainError, DomainResult};

/// Display currency of the page.
///
/// Selecting a currency swaps the printed symbol only; no exchange rate is
/// applied to any amount. The ISO code is used solely to pick a price column
/// out of imported backend records.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, IntoStaticStr, Serialize, Deserialize,
)]
pub enum Currency {
    #[default]
    #[strum(serialize = "RUB")]
    #[serde(rename = "RUB")]
    Ruble,

    #[strum(serialize = "USD")]
    #[serde(rename = "USD")]
    Dollar,

    #[strum(serialize = "EUR")]
    #[serde(rename = "EUR")]
    Euro,

    #[strum(serialize = "CNY")]
    #[serde(rename = "CNY")]
    Yuan,

    #[strum(serialize = "KZT")]
    #[serde(rename = "KZT")]
    Tenge,

    #[strum(serialize = "BYN")]
    #[serde(rename = "BYN")]
    BelarusianRuble,
}

impl Currency {
    pub fn label(self) -> &'static str {
        match self {
            Currency::Ruble => "Рубль",
            Currency::Dollar => "Доллар",
            Currency::Euro => "Евро",
            Currency::Yuan => "Юань",
            Currency::Tenge => "Тенге",
            Currency::BelarusianRuble => "Бел. рубль",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Ruble => "₽",
            Currency::Dollar => "$",
            Currency::Euro => "€",
            Currency::Yuan => "¥",
            Currency::Tenge => "₸",
            Currency::BelarusianRuble => "Br",
        }
    }

    pub fn code(self) -> &'static str {
        self.into()
    }

    /// The six selectable currencies in menu order
    pub fn all() -> impl Iterator<Item = Currency> {
        Currency::iter()
    }

    pub fn from_symbol(symbol: &str) -> DomainResult<Self> {
        Currency::iter()
            .find(|currency| currency.symbol() == symbol)
            .ok_or_else(|| DomainError::UnknownCurrency(symbol.to_string()))
    }

    pub fn from_code(code: &str) -> DomainResult<Self> {
        code.parse().map_err(|_| DomainError::UnknownCurrency(code.to_string()))
    }

    /// `Рубль (₽)`
    pub fn option_label(self) -> String {
        format!("{} ({})", self.label(), self.symbol())
    }

    /// `180.20 ₽` - card values and their copied text
    pub fn format_suffixed(self, amount: Price) -> String {
        format!("{} {}", amount, self.symbol())
    }

    /// `₽ 180.20` - cart drawer rows and total
    pub fn format_prefixed(self, amount: Price) -> String {
        format!("{} {}", self.symbol(), amount)
    }

    /// `54645 ₽` - inventory value headline
    pub fn format_whole(self, amount: Price) -> String {
        format!("{:.0} {}", amount.value(), self.symbol())
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.option_label())
    }
}
