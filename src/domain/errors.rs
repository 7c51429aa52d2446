use derive_more::{Display, From};

use crate::domain::catalog::ItemId;
use crate::domain::filters::FilterField;

/// Rule violations inside the page session. None of them is fatal: the
/// offending command is rejected and the session keeps its previous state.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum DomainError {
    #[display(fmt = "Unknown {} option: '{}'", field, value)]
    UnknownFilterValue { field: FilterField, value: String },
    #[display(fmt = "Unknown currency: '{}'", _0)]
    UnknownCurrency(String),
    #[display(fmt = "Duplicate item id: {}", _0)]
    DuplicateItemId(ItemId),
    #[display(fmt = "Invalid inventory record: {}", _0)]
    InvalidRecord(String),
}

impl std::error::Error for DomainError {}

/// Failures of browser integrations and data adapters.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum InfrastructureError {
    #[display(fmt = "Clipboard unavailable: {}", _0)]
    ClipboardUnavailable(String),
    #[display(fmt = "Clipboard write rejected: {}", _0)]
    ClipboardRejected(String),
    #[display(fmt = "Malformed inventory JSON: {}", _0)]
    RecordParse(String),
    #[display(fmt = "Malformed page config: {}", _0)]
    ConfigParse(String),
}

impl std::error::Error for InfrastructureError {}

/// Root error type for the whole application
#[derive(Debug, Clone, PartialEq, Display, From)]
pub enum AppError {
    #[display(fmt = "Domain Error: {}", _0)]
    Domain(DomainError),
    #[display(fmt = "Infrastructure Error: {}", _0)]
    Infrastructure(InfrastructureError),
}

impl std::error::Error for AppError {}

pub type DomainResult<T> = Result<T, DomainError>;
pub type AppResult<T> = Result<T, AppError>;
