//! Browser-facing adapters: console logging, clocks, randomness, clipboard,
//! and the JSON shape of backend inventory records.

pub mod clipboard;
pub mod dto;
pub mod services;
