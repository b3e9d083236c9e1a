//! CryptoVault library exports for testing

pub mod core;
pub mod report;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::catalog::{AlgorithmEntry, Catalog, CatalogError, Difficulty};
pub use crate::core::selector::{SelectError, Selection, Selector};
