//! JSON shape of the per-item records a pricing backend produces for one
//! profile, and their mapping into catalog items. Nothing here fetches
//! anything; callers hand over the JSON text.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::config::economy_image_url;
use crate::domain::catalog::{Catalog, Game, InventoryItem, InventorySummary, ItemId, Price, Quantity};
use crate::domain::currency::Currency;
use crate::domain::errors::{AppResult, DomainError, DomainResult, InfrastructureError};

/// One grouped inventory position with its price in every known currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecordDto {
    pub appid: u32,
    pub market_hash_name: String,
    #[serde(default, deserialize_with = "flag")]
    pub tradable: bool,
    #[serde(default, deserialize_with = "flag")]
    pub marketable: bool,
    pub count: u32,
    #[serde(default)]
    pub icon_url: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// ISO code -> unit price
    #[serde(default)]
    pub prices: BTreeMap<String, f64>,
}

/// Flags arrive either as JSON booleans or as 0/1 integers.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => value,
        Flag::Int(value) => value != 0,
    })
}

impl InventoryRecordDto {
    pub fn item_id(&self) -> ItemId {
        ItemId::new(format!("{}-{}", self.appid, self.market_hash_name))
    }

    pub fn game(&self) -> Option<Game> {
        Game::from_app_id(self.appid)
    }

    pub fn image_url(&self) -> String {
        economy_image_url(&self.icon_url)
    }

    /// Unit price in `currency`; a missing column counts as zero.
    pub fn price_in(&self, currency: Currency) -> Price {
        Price::new(self.prices.get(currency.code()).copied().unwrap_or_default())
    }

    pub fn into_item(self, currency: Currency) -> DomainResult<InventoryItem> {
        let quantity = Quantity::new(self.count).ok_or_else(|| {
            DomainError::InvalidRecord(format!("'{}' has zero count", self.market_hash_name))
        })?;
        let price = self.price_in(currency);
        Ok(InventoryItem::new(
            self.item_id(),
            self.market_hash_name.clone(),
            self.image_url(),
            price,
            price,
            quantity,
        ))
    }
}

impl InventorySummary {
    /// Header figures for one profile, computed from its records.
    ///
    /// Unpriced records still count towards `total_items` but not towards
    /// `paid_items`. The game is taken from the first record.
    pub fn from_records(
        owner_name: impl Into<String>,
        avatar_url: impl Into<String>,
        records: &[InventoryRecordDto],
        currency: Currency,
    ) -> DomainResult<Self> {
        let first = records
            .first()
            .ok_or_else(|| DomainError::InvalidRecord("no records to summarize".to_string()))?;
        let game = first
            .game()
            .ok_or_else(|| DomainError::InvalidRecord(format!("unknown appid {}", first.appid)))?;

        let mut summary = Self {
            owner_name: owner_name.into(),
            avatar_url: avatar_url.into(),
            game,
            total_items: 0,
            paid_items: 0,
            total_value: Price::ZERO,
        };
        for record in records {
            let price = record.price_in(currency);
            summary.total_items += record.count;
            if price > Price::ZERO {
                summary.paid_items += record.count;
            }
            summary.total_value = summary.total_value + Price::new(price.value() * f64::from(record.count));
        }
        Ok(summary)
    }
}

pub fn parse_records(json: &str) -> Result<Vec<InventoryRecordDto>, InfrastructureError> {
    serde_json::from_str(json).map_err(|e| InfrastructureError::RecordParse(e.to_string()))
}

/// Parses a record array and builds a catalog priced in `currency`.
pub fn import_catalog(json: &str, currency: Currency) -> AppResult<Catalog> {
    let items = parse_records(json)?
        .into_iter()
        .map(|record| record.into_item(currency))
        .collect::<DomainResult<Vec<_>>>()?;
    Ok(Catalog::new(items)?)
}

/// Parses a record array and computes the results-panel header for it.
pub fn import_summary(
    json: &str,
    owner_name: &str,
    avatar_url: &str,
    currency: Currency,
) -> AppResult<InventorySummary> {
    let records = parse_records(json)?;
    Ok(InventorySummary::from_records(owner_name, avatar_url, &records, currency)?)
}
