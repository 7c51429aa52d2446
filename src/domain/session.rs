//! Session aggregate: every piece of transient page state in one value.
//!
//! The page controller owns a single `SessionState` and changes it only by
//! applying `SessionCommand`s. Presentation reads snapshots.

use derive_more::Display;
use std::collections::BTreeSet;
use strum::IntoEnumIterator;

use crate::domain::catalog::{Catalog, InventoryItem, ItemId, Selection};
use crate::domain::currency::Currency;
use crate::domain::errors::DomainResult;
use crate::domain::events::SessionEvent;
use crate::domain::filters::{FilterField, FilterState, SortKey, SortState};
use crate::domain::profile::ProfileQuery;

/// Every dropdown on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum DropdownId {
    #[display(fmt = "currency")]
    Currency,
    #[display(fmt = "{}", _0)]
    Filter(FilterField),
}

impl DropdownId {
    pub fn all() -> impl Iterator<Item = DropdownId> {
        std::iter::once(DropdownId::Currency).chain(FilterField::iter().map(DropdownId::Filter))
    }
}

/// Open flags of the dropdowns.
///
/// Flags are independent: opening one dropdown leaves the others as they
/// are, so several may be open at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownState {
    open: BTreeSet<DropdownId>,
}

impl DropdownState {
    pub fn is_open(&self, id: DropdownId) -> bool {
        self.open.contains(&id)
    }

    pub fn any_open(&self) -> bool {
        !self.open.is_empty()
    }

    /// Returns true when the dropdown was closed before.
    pub fn open(&mut self, id: DropdownId) -> bool {
        self.open.insert(id)
    }

    /// Returns true when the dropdown was open before.
    pub fn close(&mut self, id: DropdownId) -> bool {
        self.open.remove(&id)
    }

    /// Returns the new openness.
    pub fn toggle(&mut self, id: DropdownId) -> bool {
        if self.close(id) { false } else { self.open(id) }
    }

    /// Closes everything, returning how many were open.
    pub fn close_all(&mut self) -> usize {
        let count = self.open.len();
        self.open.clear();
        count
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    EditProfile(String),
    ClearProfile,
    /// "Fetch inventory" stub: reveals the results panel, requests nothing
    RevealResults,
    ToggleCart(ItemId),
    SelectCurrency(Currency),
    SelectCurrencyBySymbol(String),
    SetFilter { field: FilterField, value: String },
    CycleSort(SortKey),
    OpenDropdown(DropdownId),
    CloseDropdown(DropdownId),
    ToggleDropdown(DropdownId),
    /// Click outside of every dropdown
    CloseAllDropdowns,
    OpenCart,
    CloseCart,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    profile_input: String,
    results_revealed: bool,
    cart_open: bool,
    currency: Currency,
    filters: FilterState,
    sort: SortState,
    dropdowns: DropdownState,
    catalog: Catalog,
}

impl SessionState {
    pub fn new(catalog: Catalog, currency: Currency) -> Self {
        Self {
            profile_input: String::new(),
            results_revealed: false,
            cart_open: false,
            currency,
            filters: FilterState::default(),
            sort: SortState::default(),
            dropdowns: DropdownState::default(),
            catalog,
        }
    }

    /// Applies one command.
    ///
    /// `Ok(None)` means the command was valid but changed nothing. On `Err`
    /// the state is exactly as before.
    pub fn apply(&mut self, command: SessionCommand) -> DomainResult<Option<SessionEvent>> {
        let event = match command {
            SessionCommand::EditProfile(text) => {
                if text == self.profile_input {
                    None
                } else {
                    let chars = text.chars().count();
                    self.profile_input = text;
                    Some(SessionEvent::ProfileEdited(chars))
                }
            }
            SessionCommand::ClearProfile => {
                if self.profile_input.is_empty() {
                    None
                } else {
                    self.profile_input.clear();
                    Some(SessionEvent::ProfileCleared)
                }
            }
            SessionCommand::RevealResults => {
                self.results_revealed = true;
                Some(SessionEvent::LookupRequested(ProfileQuery::parse(&self.profile_input)))
            }
            SessionCommand::ToggleCart(id) => self
                .catalog
                .toggle_cart(&id)
                .map(|state| SessionEvent::CartToggled { id, state }),
            SessionCommand::SelectCurrency(currency) => {
                self.currency = currency;
                self.dropdowns.close(DropdownId::Currency);
                Some(SessionEvent::CurrencySelected(currency))
            }
            SessionCommand::SelectCurrencyBySymbol(symbol) => {
                let currency = Currency::from_symbol(&symbol)?;
                return self.apply(SessionCommand::SelectCurrency(currency));
            }
            SessionCommand::SetFilter { field, value } => {
                let value = self.filters.set(field, &value)?;
                self.dropdowns.close(DropdownId::Filter(field));
                Some(SessionEvent::FilterChanged { field, value })
            }
            SessionCommand::CycleSort(key) => Some(SessionEvent::SortCycled {
                key,
                direction: self.sort.cycle(key),
            }),
            SessionCommand::OpenDropdown(id) => {
                self.dropdowns.open(id).then_some(SessionEvent::DropdownOpened(id))
            }
            SessionCommand::CloseDropdown(id) => {
                self.dropdowns.close(id).then_some(SessionEvent::DropdownClosed(id))
            }
            SessionCommand::ToggleDropdown(id) => Some(if self.dropdowns.toggle(id) {
                SessionEvent::DropdownOpened(id)
            } else {
                SessionEvent::DropdownClosed(id)
            }),
            SessionCommand::CloseAllDropdowns => {
                let closed = self.dropdowns.close_all();
                (closed > 0).then_some(SessionEvent::DropdownsDismissed(closed))
            }
            SessionCommand::OpenCart => {
                let was_open = std::mem::replace(&mut self.cart_open, true);
                (!was_open).then_some(SessionEvent::CartOpened)
            }
            SessionCommand::CloseCart => {
                let was_open = std::mem::replace(&mut self.cart_open, false);
                was_open.then_some(SessionEvent::CartClosed)
            }
        };
        Ok(event)
    }

    pub fn profile_input(&self) -> &str {
        &self.profile_input
    }

    pub fn results_revealed(&self) -> bool {
        self.results_revealed
    }

    pub fn cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn is_dropdown_open(&self, id: DropdownId) -> bool {
        self.dropdowns.is_open(id)
    }

    pub fn any_dropdown_open(&self) -> bool {
        self.dropdowns.any_open()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn items(&self) -> &[InventoryItem] {
        self.catalog.list_items()
    }

    pub fn selection(&self) -> Selection<'_> {
        self.catalog.selection()
    }

    /// `₽ 180.20` style total of the cart drawer
    pub fn cart_total_label(&self) -> String {
        self.currency.format_prefixed(self.selection().total())
    }
}
