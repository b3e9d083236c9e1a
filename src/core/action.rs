//! # Actions
//!
//! Everything the host UI can ask of a session becomes an `Action`.
//! User picks a card? That's `Action::Select(key)`.
//!
//! The `update()` function applies an action to the session state and
//! returns an `Effect` telling the adapter what, if anything, to do next.
//! No I/O here beyond logging.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{info, warn};

use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The user chose the entry with this key.
    Select(String),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// A different entry is now selected; presentation should reset.
    SelectionChanged,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Select(key) => {
            let previous = app.selector.selected_key();
            match app.selector.select(&key) {
                Ok(entry) if previous == Some(entry.key) => {
                    // Clears a stale rejection message; presentation keeps its place
                    app.status_message = format!("Viewing {}", entry.name);
                    Effect::None
                }
                Ok(entry) => {
                    info!("[{}] Selected {}", app.session_id, entry.key);
                    app.status_message = format!("Viewing {}", entry.name);
                    Effect::SelectionChanged
                }
                Err(e) => {
                    warn!("[{}] Rejected selection: {}", app.session_id, e);
                    app.status_message = format!("Unknown algorithm: {key}");
                    Effect::None
                }
            }
        }
        Action::Quit => {
            info!("[{}] Quit requested", app.session_id);
            Effect::Quit
        }
    }
}
