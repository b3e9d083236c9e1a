use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use log::{debug, warn};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    Submit,

    // Card focus
    FocusPrev,
    FocusNext,
    SelectIndex(usize), // 1-9 jump straight to a card (0-based here)

    // Detail panel scrolling
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    ScrollToTop,

    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(ev) => translate(ev),
        Err(e) => {
            warn!("Event read failed: {}", e);
            None
        }
    }
}

/// Map a raw crossterm event to a `TuiEvent`, dropping anything unbound.
pub fn translate(ev: Event) -> Option<TuiEvent> {
    match ev {
        Event::Key(key_event) => translate_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Release/repeat reports arrive when keyboard enhancement is active
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code, key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Enter) | (_, KeyCode::Char(' ')) => Some(TuiEvent::Submit),
        (_, KeyCode::Left) | (_, KeyCode::BackTab) | (_, KeyCode::Char('h')) => {
            Some(TuiEvent::FocusPrev)
        }
        (_, KeyCode::Right) | (_, KeyCode::Tab) | (_, KeyCode::Char('l')) => {
            Some(TuiEvent::FocusNext)
        }
        (_, KeyCode::Char(c @ '1'..='9')) => {
            Some(TuiEvent::SelectIndex(c as usize - '1' as usize))
        }
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::ScrollUp),
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::ScrollDown),
        (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
        (_, KeyCode::Home) => Some(TuiEvent::ScrollToTop),
        _ => None,
    }
}
