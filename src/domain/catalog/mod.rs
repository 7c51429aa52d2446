//! Inventory catalog aggregate: the working set of items, the cart selection
//! derived from it, and the sample data the page starts with.

pub mod entities;
pub mod sample;
pub mod selection;
pub mod summary;
pub mod value_objects;

pub use entities::*;
pub use sample::*;
pub use selection::*;
pub use summary::*;
pub use value_objects::*;
