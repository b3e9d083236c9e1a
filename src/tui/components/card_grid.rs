//! # Card Grid Component
//!
//! One card per catalog entry, laid out left to right in catalog order.
//! Each card shows the entry name and a difficulty badge in the entry's
//! accent color. The selected card is filled; the focused card gets a
//! double border.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CardGridState` lives in `TuiState` (focus, last card areas)
//! - `CardGrid` is created each frame with borrowed state and props
//!
//! The grid never selects anything itself. It emits `CardEvent::Select`
//! and the event loop turns that into `Action::Select`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::catalog::Catalog;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme;

/// Borders plus the name and badge rows.
pub const CARD_HEIGHT: u16 = 4;

/// Persistent state for the card row.
pub struct CardGridState {
    keys: Vec<&'static str>,
    pub focused: usize,
    /// Screen areas from the last render, for mouse hit testing.
    pub card_areas: Vec<Rect>,
}

impl CardGridState {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            keys: catalog.keys().collect(),
            focused: 0,
            card_areas: Vec::new(),
        }
    }

    /// Move focus onto `key`, e.g. after a selection made elsewhere.
    pub fn focus_key(&mut self, key: &str) {
        if let Some(idx) = self.keys.iter().position(|k| *k == key) {
            self.focused = idx;
        }
    }

    fn select_index(&mut self, idx: usize) -> Option<CardEvent> {
        let key = *self.keys.get(idx)?;
        self.focused = idx;
        Some(CardEvent::Select(key))
    }

    fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        self.card_areas
            .iter()
            .position(|area| area.contains(Position { x: column, y: row }))
    }
}

/// Events emitted by the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    Select(&'static str),
}

impl EventHandler for CardGridState {
    type Event = CardEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<CardEvent> {
        if self.keys.is_empty() {
            return None;
        }
        let count = self.keys.len();
        match *event {
            TuiEvent::FocusPrev => {
                self.focused = (self.focused + count - 1) % count;
                None
            }
            TuiEvent::FocusNext => {
                self.focused = (self.focused + 1) % count;
                None
            }
            TuiEvent::Submit => self.select_index(self.focused),
            TuiEvent::SelectIndex(idx) => self.select_index(idx),
            TuiEvent::MouseClick(column, row) => {
                let idx = self.hit_test(column, row)?;
                self.select_index(idx)
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the card row.
pub struct CardGrid<'a> {
    state: &'a mut CardGridState,
    catalog: &'a Catalog,
    selected: Option<&'a str>,
}

impl<'a> CardGrid<'a> {
    pub fn new(
        state: &'a mut CardGridState,
        catalog: &'a Catalog,
        selected: Option<&'a str>,
    ) -> Self {
        Self {
            state,
            catalog,
            selected,
        }
    }
}

impl<'a> Component for CardGrid<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let count = self.catalog.len();
        if count == 0 {
            self.state.card_areas.clear();
            return;
        }

        let areas = Layout::horizontal(vec![Constraint::Ratio(1, count as u32); count])
            .spacing(1)
            .split(area);
        self.state.card_areas = areas.to_vec();

        for (idx, (entry, card_area)) in self.catalog.entries().zip(areas.iter()).enumerate() {
            let accent = theme::accent(entry.style_hint);
            let is_selected = self.selected == Some(entry.key);
            let is_focused = self.state.focused == idx;

            let (body_style, name_style) = if is_selected {
                (
                    Style::default().bg(accent).fg(Color::Black),
                    Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
                )
            } else {
                (
                    Style::default(),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                )
            };
            let border_type = if is_focused {
                BorderType::Double
            } else {
                BorderType::Rounded
            };

            let inner_width = card_area.width.saturating_sub(2) as usize;
            let badge_style = if is_selected {
                name_style
            } else {
                Style::default().fg(theme::difficulty_color(entry.difficulty))
            };
            let lines = vec![
                Line::from(Span::styled(fit(entry.name, inner_width), name_style)),
                Line::from(Span::styled(
                    fit(entry.difficulty.label(), inner_width),
                    badge_style,
                )),
            ];

            let block = Block::bordered()
                .border_type(border_type)
                .border_style(Style::default().fg(accent))
                .title(format!(" {} ", idx + 1));

            let card = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(body_style)
                .block(block);
            frame.render_widget(card, *card_area);
        }
    }
}

/// Truncate `s` to at most `max_width` display columns, adding "…" if cut.
fn fit(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn state() -> CardGridState {
        CardGridState::new(Catalog::builtin())
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut state = state();
        assert_eq!(state.handle_event(&TuiEvent::FocusPrev), None);
        assert_eq!(state.focused, 3);
        state.handle_event(&TuiEvent::FocusNext);
        assert_eq!(state.focused, 0);
    }

    #[test]
    fn test_submit_selects_focused_card() {
        let mut state = state();
        state.handle_event(&TuiEvent::FocusNext);
        state.handle_event(&TuiEvent::FocusNext);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(CardEvent::Select("aes"))
        );
    }

    #[test]
    fn test_select_index_moves_focus() {
        let mut state = state();
        assert_eq!(
            state.handle_event(&TuiEvent::SelectIndex(3)),
            Some(CardEvent::Select("chacha20"))
        );
        assert_eq!(state.focused, 3);
        assert_eq!(state.handle_event(&TuiEvent::SelectIndex(8)), None);
        assert_eq!(state.focused, 3);
    }

    #[test]
    fn test_click_hits_rendered_card() {
        let mut state = state();
        let backend = TestBackend::new(80, CARD_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                CardGrid::new(&mut state, Catalog::builtin(), None).render(f, area)
            })
            .unwrap();

        let ecc = state.card_areas[1];
        assert_eq!(
            state.handle_event(&TuiEvent::MouseClick(ecc.x + 1, ecc.y + 1)),
            Some(CardEvent::Select("ecc"))
        );
        assert_eq!(state.handle_event(&TuiEvent::MouseClick(0, 200)), None);
    }

    #[test]
    fn test_render_shows_names_and_badges() {
        let mut state = state();
        let backend = TestBackend::new(80, CARD_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                CardGrid::new(&mut state, Catalog::builtin(), Some("rsa")).render(f, area)
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        for name in ["RSA", "ECC", "AES", "ChaCha20", "Beginner", "Advanced"] {
            assert!(text.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_focus_key() {
        let mut state = state();
        state.focus_key("ecc");
        assert_eq!(state.focused, 1);
        state.focus_key("nope");
        assert_eq!(state.focused, 1);
    }

    #[test]
    fn test_fit_truncates_by_width() {
        assert_eq!(fit("ChaCha20", 10), "ChaCha20");
        assert_eq!(fit("ChaCha20", 5), "ChaC…");
        assert_eq!(fit("ChaCha20", 0), "");
    }
}
