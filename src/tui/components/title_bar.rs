//! # TitleBar Component
//!
//! Single-line banner: app name, tagline, and the session status message.
//!
//! Purely presentational. It receives everything as props and has no
//! internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.status_message.clone());
//! title_bar.render(frame, title_area);
//! ```
//!
//! An empty status drops the trailing separator so narrow terminals keep
//! the name and tagline visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme;

pub const APP_NAME: &str = "CryptoVault";
pub const TAGLINE: &str = "Master the art of modern encryption";

pub struct TitleBar {
    /// Status message (e.g., "Viewing AES")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(status_message: String) -> Self {
        Self { status_message }
    }

    fn line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled(
                format!(" {APP_NAME} "),
                Style::default()
                    .fg(theme::BRAND_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("· {TAGLINE}")),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }
        Line::from(spans)
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let bar = Paragraph::new(self.line()).style(Style::default().bg(theme::BRAND));
        frame.render_widget(bar, area);
    }
}
