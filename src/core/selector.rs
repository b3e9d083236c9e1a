//! # Selector
//!
//! Tracks which single catalog entry, if any, a viewer session has chosen.
//!
//! ```text
//!              select(k) ok
//!   Unselected ────────────▶ Selected(k) ──┐ select(k') ok: overwrite
//!       ▲                        │  ▲      │
//!       └──────── clear() ───────┘  └──────┘
//!
//!   select(x) with unknown x: rejected, state untouched
//! ```
//!
//! The selected state holds the resolved entry, not a bare key, so it can
//! never dangle and `current()` never has to look anything up.

use std::fmt;

use crate::core::catalog::{AlgorithmEntry, Catalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'c> {
    Unselected,
    Selected(&'c AlgorithmEntry),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// The requested key is not in the catalog.
    InvalidSelection(String),
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::InvalidSelection(key) => write!(f, "invalid selection: '{key}'"),
        }
    }
}

impl std::error::Error for SelectError {}

/// Per-session selection state bound to a shared catalog.
#[derive(Debug, Clone)]
pub struct Selector<'c> {
    catalog: &'c Catalog,
    selection: Selection<'c>,
}

impl<'c> Selector<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            selection: Selection::Unselected,
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Selects `key`, replacing any previous choice.
    ///
    /// An unknown key leaves the current selection exactly as it was.
    pub fn select(&mut self, key: &str) -> Result<&'c AlgorithmEntry, SelectError> {
        let entry = self
            .catalog
            .lookup(key)
            .map_err(|_| SelectError::InvalidSelection(key.to_string()))?;
        self.selection = Selection::Selected(entry);
        Ok(entry)
    }

    pub fn clear(&mut self) {
        self.selection = Selection::Unselected;
    }

    pub fn current(&self) -> Option<&'c AlgorithmEntry> {
        match self.selection {
            Selection::Unselected => None,
            Selection::Selected(entry) => Some(entry),
        }
    }

    pub fn selected_key(&self) -> Option<&'static str> {
        self.current().map(|entry| entry.key)
    }

    pub fn selection(&self) -> Selection<'c> {
        self.selection
    }
}
