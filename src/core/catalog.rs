//! # Algorithm Catalog
//!
//! The fixed, ordered table of reference entries shown by the viewer.
//!
//! ```text
//! Catalog
//! └── entries: Vec<AlgorithmEntry>   // insertion order = render order
//!     ├── key          "rsa"          // only lookup handle, unique
//!     ├── name         "RSA"
//!     ├── difficulty   Beginner
//!     ├── description  free text
//!     ├── sample_code  opaque listing, shown verbatim
//!     ├── style_hint   presentation tag, never interpreted here
//!     └── extra_note   per-entry tip (optional)
//! ```
//!
//! The table is built once from constant data in [`entries`] and never
//! mutated afterwards, so a single instance can be shared by any number of
//! viewer sessions without locking.

mod entries;

use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

pub use entries::COMMON_TIPS;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(Catalog::new);

/// How much background a reader needs before tackling an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One catalog record. All content is compiled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub difficulty: Difficulty,
    pub description: &'static str,
    pub sample_code: &'static str,
    /// Color theme tag for the presentation layer (e.g. "purple-indigo").
    pub style_hint: &'static str,
    /// Tip shown only for this entry, after [`COMMON_TIPS`].
    pub extra_note: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The key is not in the table.
    NotFound(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound(key) => write!(f, "no catalog entry for key '{key}'"),
        }
    }
}

impl std::error::Error for CatalogError {}

#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<AlgorithmEntry>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Builds the table from the embedded entry data.
    pub fn new() -> Self {
        Self {
            entries: entries::ALGORITHMS.to_vec(),
        }
    }

    /// The process-wide catalog, built on first use.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Keys in insertion order. Call again to restart.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + Clone + '_ {
        self.entries.iter().map(|entry| entry.key)
    }

    pub fn entries(&self) -> impl Iterator<Item = &AlgorithmEntry> + Clone + '_ {
        self.entries.iter()
    }

    pub fn lookup(&self, key: &str) -> Result<&AlgorithmEntry, CatalogError> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .ok_or_else(|| CatalogError::NotFound(key.to_string()))
    }

    /// Index of `key` in insertion order.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_has_four_entries_in_order() {
        let keys: Vec<_> = Catalog::builtin().keys().collect();
        assert_eq!(keys, vec!["rsa", "ecc", "aes", "chacha20"]);
    }

    #[test]
    fn test_keys_are_unique() {
        let catalog = Catalog::new();
        let unique: HashSet<_> = catalog.keys().collect();
        assert_eq!(unique.len(), catalog.len());
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_keys_iterator_restarts() {
        let catalog = Catalog::new();
        let keys = catalog.keys();
        let first: Vec<_> = keys.clone().collect();
        let second: Vec<_> = keys.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_key_resolves_to_itself() {
        let catalog = Catalog::new();
        for key in catalog.keys() {
            let entry = catalog.lookup(key).unwrap();
            assert_eq!(entry.key, key);
        }
    }

    #[test]
    fn test_lookup_unknown_key() {
        let catalog = Catalog::new();
        assert_eq!(
            catalog.lookup("blowfish"),
            Err(CatalogError::NotFound("blowfish".to_string()))
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(Catalog::new().lookup("AES").is_err());
    }

    #[test]
    fn test_difficulty_tiers() {
        let catalog = Catalog::new();
        assert_eq!(catalog.lookup("rsa").unwrap().difficulty, Difficulty::Beginner);
        assert_eq!(catalog.lookup("ecc").unwrap().difficulty, Difficulty::Intermediate);
        assert_eq!(catalog.lookup("aes").unwrap().difficulty, Difficulty::Intermediate);
        assert_eq!(catalog.lookup("chacha20").unwrap().difficulty, Difficulty::Advanced);
    }

    #[test]
    fn test_every_entry_has_a_note() {
        for entry in Catalog::new().entries() {
            assert!(entry.extra_note.is_some(), "{} has no note", entry.key);
        }
    }

    #[test]
    fn test_position_follows_insertion_order() {
        let catalog = Catalog::new();
        assert_eq!(catalog.position("rsa"), Some(0));
        assert_eq!(catalog.position("chacha20"), Some(3));
        assert_eq!(catalog.position("des"), None);
    }

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::Advanced.to_string(), "Advanced");
        assert_eq!(
            serde_json::to_string(&Difficulty::Intermediate).unwrap(),
            "\"Intermediate\""
        );
    }
}
