pub mod catalog;
pub mod currency;
pub mod errors;
pub mod events;
pub mod filters;
pub mod logging;
pub mod profile;
pub mod session;
