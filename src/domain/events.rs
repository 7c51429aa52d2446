use derive_more::Display;
use std::fmt::Debug;

use crate::domain::catalog::{CartState, ItemId};
use crate::domain::currency::Currency;
use crate::domain::filters::{FilterField, SortDirection, SortKey};
use crate::domain::profile::ProfileQuery;
use crate::domain::session::DropdownId;

/// Base trait for all domain events
pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;
    fn timestamp(&self) -> u64 {
        use crate::domain::logging::get_time_provider;
        get_time_provider().current_timestamp()
    }
}

/// Outcome of a session command that changed something
#[derive(Debug, Clone, PartialEq, Display)]
pub enum SessionEvent {
    #[display(fmt = "profile input edited ({} chars)", _0)]
    ProfileEdited(usize),
    #[display(fmt = "profile input cleared")]
    ProfileCleared,
    #[display(fmt = "inventory lookup requested for {}", _0)]
    LookupRequested(ProfileQuery),
    #[display(fmt = "{} is now {}", id, state)]
    CartToggled { id: ItemId, state: CartState },
    #[display(fmt = "currency set to {}", _0)]
    CurrencySelected(Currency),
    #[display(fmt = "{} filter set to '{}'", field, value)]
    FilterChanged { field: FilterField, value: &'static str },
    #[display(fmt = "{} sort is now {}", key, direction)]
    SortCycled { key: SortKey, direction: SortDirection },
    #[display(fmt = "{} dropdown opened", _0)]
    DropdownOpened(DropdownId),
    #[display(fmt = "{} dropdown closed", _0)]
    DropdownClosed(DropdownId),
    #[display(fmt = "{} dropdown(s) dismissed", _0)]
    DropdownsDismissed(usize),
    #[display(fmt = "cart drawer opened")]
    CartOpened,
    #[display(fmt = "cart drawer closed")]
    CartClosed,
}

impl DomainEvent for SessionEvent {
    fn event_type(&self) -> &'static str {
        match self {
            SessionEvent::ProfileEdited(_) => "ProfileEdited",
            SessionEvent::ProfileCleared => "ProfileCleared",
            SessionEvent::LookupRequested(_) => "LookupRequested",
            SessionEvent::CartToggled { .. } => "CartToggled",
            SessionEvent::CurrencySelected(_) => "CurrencySelected",
            SessionEvent::FilterChanged { .. } => "FilterChanged",
            SessionEvent::SortCycled { .. } => "SortCycled",
            SessionEvent::DropdownOpened(_) => "DropdownOpened",
            SessionEvent::DropdownClosed(_) => "DropdownClosed",
            SessionEvent::DropdownsDismissed(_) => "DropdownsDismissed",
            SessionEvent::CartOpened => "CartOpened",
            SessionEvent::CartClosed => "CartClosed",
        }
    }
}

/// Event dispatcher for publishing events
pub trait EventDispatcher {
    fn publish(&self, event: &SessionEvent);
}

/// Simple in-memory event dispatcher
#[derive(Default)]
pub struct InMemoryEventDispatcher {
    handlers: Vec<Box<dyn Fn(&SessionEvent)>>,
}

impl InMemoryEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: Fn(&SessionEvent) + 'static,
    {
        self.handlers.push(Box::new(handler));
    }
}

impl EventDispatcher for InMemoryEventDispatcher {
    fn publish(&self, event: &SessionEvent) {
        for handler in &self.handlers {
            handler(event);
        }
    }
}
