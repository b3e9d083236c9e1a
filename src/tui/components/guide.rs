//! # Guide Component
//!
//! Footer with the three-step walkthrough: select, learn, implement.
//! Stateless; the step that matches the session is highlighted.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;
use crate::tui::theme;

pub const GUIDE_HEIGHT: u16 = 3;

const STEPS: [(&str, &str); 3] = [
    ("Select Algorithm", "Choose a method for your security needs"),
    ("Learn Details", "Understand how it works and its key features"),
    ("Implement", "Copy the code into your project"),
];

pub struct Guide {
    /// Whether an entry is selected; moves the highlight past step 1.
    pub has_selection: bool,
}

impl Guide {
    pub fn new(has_selection: bool) -> Self {
        Self { has_selection }
    }

    fn active_step(&self) -> usize {
        if self.has_selection { 1 } else { 0 }
    }
}

impl Component for Guide {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let areas = Layout::horizontal([Constraint::Ratio(1, 3); 3])
            .spacing(1)
            .split(area);
        let active = self.active_step();

        for (idx, ((title, detail), step_area)) in STEPS.iter().zip(areas.iter()).enumerate() {
            let border = if idx == active {
                Style::default().fg(theme::BRAND_ACCENT)
            } else {
                Style::default().fg(theme::MUTED)
            };
            let block = Block::bordered()
                .border_style(border)
                .title(Span::styled(
                    format!(" {} {} ", idx + 1, title),
                    border.add_modifier(Modifier::BOLD),
                ));
            let body = Paragraph::new(Line::from(Span::styled(
                *detail,
                Style::default().fg(theme::TEXT),
            )))
            .block(block);
            frame.render_widget(body, *step_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_guide_lists_all_steps() {
        let backend = TestBackend::new(150, GUIDE_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                Guide::new(false).render(f, area);
            })
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("1 Select Algorithm"));
        assert!(text.contains("2 Learn Details"));
        assert!(text.contains("3 Implement"));
    }

    #[test]
    fn test_active_step_follows_selection() {
        assert_eq!(Guide::new(false).active_step(), 0);
        assert_eq!(Guide::new(true).active_step(), 1);
    }
}
