//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::catalog::Catalog;
use crate::core::config::{
    DEFAULT_HIGHLIGHT_THEME, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL, ResolvedConfig,
};
use crate::core::state::App;

/// Resolved config with every default and no initial selection.
pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        initial_selection: None,
        log_level: DEFAULT_LOG_LEVEL.to_string(),
        log_file: DEFAULT_LOG_FILE.to_string(),
        highlight_theme: DEFAULT_HIGHLIGHT_THEME.to_string(),
        show_tips: true,
    }
}

/// Creates a fresh, unselected session over the built-in catalog.
pub fn test_app() -> App {
    App::new(Catalog::builtin())
}

/// Concatenates every cell symbol of a rendered buffer.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
