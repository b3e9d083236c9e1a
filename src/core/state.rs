//! # Application State
//!
//! One viewer session. Domain state only; presentation state (card focus,
//! scroll offsets, highlight cache) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── session_id: Uuid               // tags log lines for this session
//! ├── selector: Selector<'static>    // the only mutable domain state
//! ├── status_message: String         // status bar text
//! └── show_tips: bool                // render the Pro Tips section
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use uuid::Uuid;

use crate::core::catalog::{AlgorithmEntry, Catalog};
use crate::core::config::ResolvedConfig;
use crate::core::selector::Selector;

pub const WELCOME_MESSAGE: &str = "Choose your encryption algorithm";

pub struct App {
    pub session_id: Uuid,
    pub selector: Selector<'static>,
    pub status_message: String,
    pub show_tips: bool,
}

impl App {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            selector: Selector::new(catalog),
            status_message: String::from(WELCOME_MESSAGE),
            show_tips: true,
        }
    }

    /// Builds a session from resolved config. An initial selection that does
    /// not resolve is logged and the session starts unselected.
    pub fn from_config(catalog: &'static Catalog, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(catalog);
        app.show_tips = config.show_tips;
        if let Some(key) = config.initial_selection.as_deref() {
            match app.selector.select(key) {
                Ok(entry) => {
                    log::info!("[{}] Initial selection: {}", app.session_id, entry.key);
                    app.status_message = format!("Viewing {}", entry.name);
                }
                Err(e) => {
                    log::warn!("[{}] Ignoring initial selection: {}", app.session_id, e);
                    app.status_message = format!("Unknown algorithm: {key}");
                }
            }
        }
        app
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.selector.catalog()
    }

    pub fn current(&self) -> Option<&'static AlgorithmEntry> {
        self.selector.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, test_config};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, WELCOME_MESSAGE);
        assert!(app.current().is_none());
        assert!(app.show_tips);
    }

    #[test]
    fn test_from_config_applies_initial_selection() {
        let mut config = test_config();
        config.initial_selection = Some("chacha20".to_string());
        config.show_tips = false;

        let app = App::from_config(Catalog::builtin(), &config);
        assert_eq!(app.current().map(|e| e.name), Some("ChaCha20"));
        assert_eq!(app.status_message, "Viewing ChaCha20");
        assert!(!app.show_tips);
    }

    #[test]
    fn test_from_config_ignores_unknown_selection() {
        let mut config = test_config();
        config.initial_selection = Some("twofish".to_string());

        let app = App::from_config(Catalog::builtin(), &config);
        assert!(app.current().is_none());
        assert_eq!(app.status_message, "Unknown algorithm: twofish");
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        assert_ne!(test_app().session_id, test_app().session_id);
    }
}
