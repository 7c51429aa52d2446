use super::entities::{Catalog, InventoryItem};
use super::value_objects::{ItemId, Price, Quantity};

pub const SAMPLE_ITEM_NAMES: [&str; 2] = ["Scavenging Guttleslug", "Dragon Lore (Factory New)"];
pub const SAMPLE_BASE_PRICE: f64 = 150.20;
pub const SAMPLE_MARKET_PRICE: f64 = 180.20;

/// Generator of the synthetic working set the page starts with
#[derive(Debug, Clone, PartialEq)]
pub struct SampleInventory {
    count: usize,
    image_url: String,
}

impl SampleInventory {
    pub fn new(count: usize, image_url: impl Into<String>) -> Self {
        Self { count, image_url: image_url.into() }
    }

    /// Ids are `item-0..item-{count-1}`; even positions get the first sample
    /// name, odd ones the second. `quantity_for` is asked once per position.
    pub fn generate(&self, mut quantity_for: impl FnMut(usize) -> Quantity) -> Catalog {
        let items = (0..self.count)
            .map(|index| {
                InventoryItem::new(
                    ItemId::new(format!("item-{}", index)),
                    SAMPLE_ITEM_NAMES[index % SAMPLE_ITEM_NAMES.len()],
                    self.image_url.clone(),
                    Price::new(SAMPLE_BASE_PRICE),
                    Price::new(SAMPLE_MARKET_PRICE),
                    quantity_for(index),
                )
            })
            .collect();
        Catalog::from_unique(items)
    }
}
