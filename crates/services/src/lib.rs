#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod signal;

pub use literacy_core::Clock;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use signal::DemandSignal;
