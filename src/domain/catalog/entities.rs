pub use super::value_objects::{ItemId, Price, Quantity};
use super::selection::Selection;
use crate::domain::errors::{DomainError, DomainResult};
use std::collections::HashSet;
use strum::Display as StrumDisplay;

/// Cart membership of a single item
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum CartState {
    #[strum(serialize = "NOT_IN_CART")]
    NotInCart,
    #[strum(serialize = "IN_CART")]
    InCart,
}

/// Domain entity - one inventory position shown as a card
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub image: String,
    pub base_price: Price,
    pub market_price: Price,
    pub quantity: Quantity,
    pub in_cart: bool,
}

impl InventoryItem {
    /// New items always start outside the cart.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        image: impl Into<String>,
        base_price: Price,
        market_price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            base_price,
            market_price,
            quantity,
            in_cart: false,
        }
    }

    pub fn cart_state(&self) -> CartState {
        if self.in_cart { CartState::InCart } else { CartState::NotInCart }
    }

    /// Market price multiplied by quantity, shown on the card only
    pub fn line_total(&self) -> Price {
        self.market_price.times(self.quantity)
    }

    fn toggle_cart(&mut self) -> CartState {
        self.in_cart = !self.in_cart;
        self.cart_state()
    }
}

/// Domain entity - the ordered working set of one page session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<InventoryItem>,
}

impl Catalog {
    /// Builds a catalog, rejecting repeated ids.
    pub fn new(items: Vec<InventoryItem>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(&item.id) {
                return Err(DomainError::DuplicateItemId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Caller guarantees unique ids.
    pub(crate) fn from_unique(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }

    /// Flips cart membership of `id` and returns the new state.
    /// Unknown ids leave the catalog untouched and yield `None`.
    pub fn toggle_cart(&mut self, id: &ItemId) -> Option<CartState> {
        self.items
            .iter_mut()
            .find(|item| &item.id == id)
            .map(InventoryItem::toggle_cart)
    }

    /// Items in generation order
    pub fn list_items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selection(&self) -> Selection<'_> {
        Selection::from_items(&self.items)
    }
}
