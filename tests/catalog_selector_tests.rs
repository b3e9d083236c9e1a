use cryptovault::{Catalog, CatalogError, Difficulty, SelectError, Selector};
use pretty_assertions::assert_eq;

// ============================================================================
// Catalog
// ============================================================================

#[test]
fn every_listed_key_resolves_to_its_own_entry() {
    let catalog = Catalog::new();
    for key in catalog.keys() {
        assert_eq!(catalog.lookup(key).map(|e| e.key), Ok(key));
    }
}

#[test]
fn key_listing_is_stable_across_calls() {
    let catalog = Catalog::new();
    let first: Vec<_> = catalog.keys().collect();
    let second: Vec<_> = catalog.keys().collect();
    assert_eq!(first, second);
}

#[test]
fn independent_catalogs_agree_with_builtin() {
    let built: Vec<_> = Catalog::new().keys().collect();
    let shared: Vec<_> = Catalog::builtin().keys().collect();
    assert_eq!(built, shared);
}

#[test]
fn lookup_reports_missing_key() {
    assert_eq!(
        Catalog::builtin().lookup("blowfish").unwrap_err(),
        CatalogError::NotFound("blowfish".to_string())
    );
}

// ============================================================================
// Selector
// ============================================================================

#[test]
fn fresh_selector_has_nothing_selected() {
    let selector = Selector::new(Catalog::builtin());
    assert!(selector.current().is_none());
}

#[test]
fn selecting_any_valid_key_makes_it_current() {
    let catalog = Catalog::builtin();
    let mut selector = Selector::new(catalog);
    for key in catalog.keys() {
        selector.select(key).unwrap();
        assert_eq!(selector.current().map(|e| e.key), Some(key));
    }
}

#[test]
fn invalid_key_never_changes_current() {
    let catalog = Catalog::builtin();
    let mut selector = Selector::new(catalog);
    for key in [None, Some("rsa"), Some("chacha20")] {
        if let Some(key) = key {
            selector.select(key).unwrap();
        }
        let before = selector.current();
        for bad in ["blowfish", "", "RSA", " aes"] {
            assert!(selector.select(bad).is_err());
            assert_eq!(selector.current(), before);
        }
    }
}

#[test]
fn repeated_select_is_idempotent() {
    let mut selector = Selector::new(Catalog::builtin());
    selector.select("aes").unwrap();
    let before = (selector.selection(), selector.current());
    selector.select("aes").unwrap();
    assert_eq!((selector.selection(), selector.current()), before);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn scenario_a_select_aes() {
    let catalog = Catalog::builtin();
    let mut keys: Vec<_> = catalog.keys().collect();
    keys.sort();
    assert_eq!(keys, vec!["aes", "chacha20", "ecc", "rsa"]);

    let mut selector = Selector::new(catalog);
    assert!(selector.current().is_none());

    selector.select("aes").unwrap();
    let entry = selector.current().unwrap();
    assert_eq!(entry.key, "aes");
    assert_eq!(entry.difficulty, Difficulty::Intermediate);
    assert_eq!(entry.difficulty.label(), "Intermediate");
}

#[test]
fn scenario_b_overwrite_without_history() {
    let mut selector = Selector::new(Catalog::builtin());
    selector.select("rsa").unwrap();
    selector.select("ecc").unwrap();
    let entry = selector.current().unwrap();
    assert_eq!(entry.key, "ecc");
    assert_eq!(entry.name, "ECC");
}

#[test]
fn scenario_c_unknown_key_on_fresh_selector() {
    let mut selector = Selector::new(Catalog::builtin());
    assert_eq!(
        selector.select("blowfish"),
        Err(SelectError::InvalidSelection("blowfish".to_string()))
    );
    assert!(selector.current().is_none());
}

#[test]
fn clear_returns_to_unselected() {
    let mut selector = Selector::new(Catalog::builtin());
    selector.select("rsa").unwrap();
    selector.clear();
    assert!(selector.current().is_none());
    selector.select("ecc").unwrap();
    assert_eq!(selector.selected_key(), Some("ecc"));
}

#[test]
fn selectors_can_share_a_catalog_across_threads() {
    let catalog = Catalog::builtin();
    let handles: Vec<_> = catalog
        .keys()
        .map(|key| {
            std::thread::spawn(move || {
                let mut selector = Selector::new(Catalog::builtin());
                selector.select(key).unwrap();
                selector.selected_key()
            })
        })
        .collect();
    let picked: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let expected: Vec<_> = catalog.keys().map(Some).collect();
    assert_eq!(picked, expected);
}
