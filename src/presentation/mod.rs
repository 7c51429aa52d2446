//! Leptos components. They read the session signal and send commands to
//! the controller; none of them keeps state of its own.

pub mod cart_drawer;
pub mod dropdown;
pub mod item_card;
pub mod results_panel;

pub use cart_drawer::{CartButton, CartDrawer, CartRow};
pub use dropdown::{CurrencyDropdown, DROPDOWN_SELECTOR, FilterDropdown};
pub use item_card::ItemCard;
pub use results_panel::{ResultsPanel, SortButton};
