//! Filter and sort selections of the results panel.
//!
//! These values are advisory: they drive what the controls display but are
//! never applied to the catalog, whose order and content stay as generated.

use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::domain::errors::{DomainError, DomainResult};

/// Label/value pair offered by a filter dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterChoice {
    pub label: &'static str,
    pub value: &'static str,
}

/// Common shape of the four option sets
pub trait FilterOption: Copy + PartialEq + IntoEnumIterator + Into<&'static str> + std::str::FromStr {
    fn label(self) -> &'static str;

    fn value(self) -> &'static str {
        self.into()
    }

    fn choices() -> Vec<FilterChoice> {
        Self::iter()
            .map(|option| FilterChoice { label: option.label(), value: option.value() })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, IntoStaticStr, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Source {
    #[default]
    Steam,
    #[strum(serialize = "buff163")]
    #[serde(rename = "buff163")]
    Buff163,
    TmMarket,
}

impl FilterOption for Source {
    fn label(self) -> &'static str {
        match self {
            Source::Steam => "Steam",
            Source::Buff163 => "Buff163",
            Source::TmMarket => "TM Market",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, IntoStaticStr, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Tradability {
    #[default]
    All,
    Trade,
    Sale,
}

impl FilterOption for Tradability {
    fn label(self) -> &'static str {
        match self {
            Tradability::All => "Все",
            Tradability::Trade => "Трейд",
            Tradability::Sale => "Продажа",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, IntoStaticStr, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    All,
    Knives,
    Gloves,
    Pistols,
}

impl FilterOption for Category {
    fn label(self) -> &'static str {
        match self {
            Category::All => "Все",
            Category::Knives => "Ножи",
            Category::Gloves => "Перчатки",
            Category::Pistols => "Пистолеты",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, IntoStaticStr, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Single,
    Grouped,
}

impl FilterOption for ViewMode {
    fn label(self) -> &'static str {
        match self {
            ViewMode::Single => "Одиночный",
            ViewMode::Grouped => "Группировать",
        }
    }
}

/// The four single-select filter fields, in the order they are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, StrumDisplay)]
#[strum(serialize_all = "snake_case")]
pub enum FilterField {
    Source,
    Tradability,
    Category,
    ViewMode,
}

impl FilterField {
    pub fn choices(self) -> Vec<FilterChoice> {
        match self {
            FilterField::Source => Source::choices(),
            FilterField::Tradability => Tradability::choices(),
            FilterField::Category => Category::choices(),
            FilterField::ViewMode => ViewMode::choices(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterState {
    pub source: Source,
    pub tradability: Tradability,
    pub category: Category,
    pub view_mode: ViewMode,
}

impl FilterState {
    /// Stores `value` into `field` and returns the canonical value.
    /// Values outside the field's option set are rejected without touching
    /// the state.
    pub fn set(&mut self, field: FilterField, value: &str) -> DomainResult<&'static str> {
        fn parse<T: FilterOption>(field: FilterField, value: &str) -> DomainResult<T> {
            value.parse::<T>().map_err(|_| DomainError::UnknownFilterValue {
                field,
                value: value.to_string(),
            })
        }

        match field {
            FilterField::Source => self.source = parse(field, value)?,
            FilterField::Tradability => self.tradability = parse(field, value)?,
            FilterField::Category => self.category = parse(field, value)?,
            FilterField::ViewMode => self.view_mode = parse(field, value)?,
        }
        Ok(self.value_of(field))
    }

    pub fn value_of(&self, field: FilterField) -> &'static str {
        match field {
            FilterField::Source => self.source.value(),
            FilterField::Tradability => self.tradability.value(),
            FilterField::Category => self.category.value(),
            FilterField::ViewMode => self.view_mode.value(),
        }
    }

    pub fn label_of(&self, field: FilterField) -> &'static str {
        match field {
            FilterField::Source => self.source.label(),
            FilterField::Tradability => self.tradability.label(),
            FilterField::Category => self.category.label(),
            FilterField::ViewMode => self.view_mode.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay)]
#[strum(serialize_all = "snake_case")]
pub enum SortKey {
    Quantity,
    Price,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Quantity => "Кол-во",
            SortKey::Price => "Цена",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay)]
#[strum(serialize_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn next(self) -> Self {
        match self {
            SortDirection::Unsorted => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Unsorted,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            SortDirection::Unsorted => "⇅",
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// Advisory sort directions; never applied to the item list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub quantity: SortDirection,
    pub price: SortDirection,
}

impl SortState {
    pub fn direction(&self, key: SortKey) -> SortDirection {
        match key {
            SortKey::Quantity => self.quantity,
            SortKey::Price => self.price,
        }
    }

    pub fn cycle(&mut self, key: SortKey) -> SortDirection {
        let slot = match key {
            SortKey::Quantity => &mut self.quantity,
            SortKey::Price => &mut self.price,
        };
        *slot = slot.next();
        *slot
    }
}
