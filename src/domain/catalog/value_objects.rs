use derive_more::{Add, Constructor, Display, From, Into};
use std::cmp::Ordering;
use std::iter::Sum;
use strum::{EnumIter, IntoEnumIterator};

/// Value Object - item identifier, unique within the working set
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Value Object - monetary amount without a currency attached.
///
/// The active currency only decides which symbol is printed next to the
/// amount; amounts are never converted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Add, From, Into, Constructor)]
pub struct Price(f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn times(self, quantity: Quantity) -> Price {
        Price(self.0 * f64::from(quantity.value()))
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Two decimals, the way every amount on the page is printed
impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, |acc, price| acc + price)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Value Object - strictly positive item count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Quantity(u32);

/// Upper bound of generated sample quantities
pub const MAX_SAMPLE_QUANTITY: u32 = 20;

impl Quantity {
    pub const ONE: Quantity = Quantity(1);

    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Maps a uniform sample from `[0, 1)` onto `1..=MAX_SAMPLE_QUANTITY`.
    pub fn from_unit_sample(sample: f64) -> Self {
        let scaled = (sample.clamp(0.0, 1.0) * f64::from(MAX_SAMPLE_QUANTITY)).floor() as u32;
        Self((scaled + 1).min(MAX_SAMPLE_QUANTITY))
    }
}

/// Games whose inventories the service prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Game {
    CounterStrike,
    Dota2,
    TeamFortress2,
    Rust,
}

impl Game {
    pub fn app_id(self) -> u32 {
        match self {
            Game::CounterStrike => 730,
            Game::Dota2 => 570,
            Game::TeamFortress2 => 440,
            Game::Rust => 252490,
        }
    }

    /// Title as printed in the results panel
    pub fn title(self) -> &'static str {
        match self {
            Game::CounterStrike => "CS:GO",
            Game::Dota2 => "DOTA 2",
            Game::TeamFortress2 => "TF2",
            Game::Rust => "RUST",
        }
    }

    pub fn from_app_id(app_id: u32) -> Option<Self> {
        Game::iter().find(|game| game.app_id() == app_id)
    }
}
