use super::entities::InventoryItem;
use super::value_objects::Price;

/// Cart contents derived from a catalog snapshot.
///
/// Nothing here is cached: a selection borrows the items it was built from
/// and is rebuilt whenever the session changes.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    items: Vec<&'a InventoryItem>,
}

impl<'a> Selection<'a> {
    pub fn from_items(items: &'a [InventoryItem]) -> Self {
        Self {
            items: items.iter().filter(|item| item.in_cart).collect(),
        }
    }

    /// Cart members in working-set order
    pub fn items(&self) -> &[&'a InventoryItem] {
        &self.items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of market prices. Quantity is deliberately ignored here.
    pub fn total(&self) -> Price {
        self.items.iter().map(|item| item.market_price).sum()
    }

    pub fn to_owned_items(&self) -> Vec<InventoryItem> {
        self.items.iter().map(|item| (*item).clone()).collect()
    }
}
