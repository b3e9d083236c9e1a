//! # Detail Panel Component
//!
//! Shows the selected entry: header, description, highlighted sample code,
//! and tips. With nothing selected it shows a prompt instead.
//!
//! The body is laid out once per frame into a `ScrollView` sized to the
//! wrapped content height, so long listings scroll instead of clipping.
//! Entry fields are rendered as given; the panel adds headings and
//! bullets around them but never rewrites the content.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Position, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalog::{AlgorithmEntry, COMMON_TIPS};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme;

pub const EMPTY_PROMPT: &str = "Select an encryption algorithm to explore its details";
const EMPTY_HINT: &str = "←/→ browse · Enter select · 1-9 jump · q quit";

/// Scroll state for the detail body. Persisted in `TuiState`.
#[derive(Default)]
pub struct DetailPanelState {
    pub scroll_state: ScrollViewState,
    /// Wrapped body height from the last render.
    pub content_height: u16,
    /// Visible body height from the last render.
    pub viewport_height: u16,
}

impl DetailPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top, e.g. when a different entry is selected.
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for DetailPanelState {
    type Event = (); // Scrolling is handled internally

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::ScrollToTop => self.scroll_state.scroll_to_top(),
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

/// Transient render wrapper for the detail panel.
pub struct DetailPanel<'a> {
    state: &'a mut DetailPanelState,
    entry: Option<&'a AlgorithmEntry>,
    /// Highlighted `entry.sample_code`; plain text is used when absent.
    code: Option<&'a Text<'static>>,
    show_tips: bool,
}

impl<'a> DetailPanel<'a> {
    pub fn new(
        state: &'a mut DetailPanelState,
        entry: Option<&'a AlgorithmEntry>,
        code: Option<&'a Text<'static>>,
        show_tips: bool,
    ) -> Self {
        Self {
            state,
            entry,
            code,
            show_tips,
        }
    }

    fn render_empty(&mut self, frame: &mut Frame, area: Rect) {
        self.state.content_height = 0;
        let block = Block::bordered()
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(theme::MUTED));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(Span::styled(EMPTY_PROMPT, Style::default().fg(theme::TEXT))),
            Line::from(""),
            Line::from(Span::styled(EMPTY_HINT, Style::default().fg(theme::MUTED))),
        ];
        let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(inner);
        let prompt = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(prompt, center);
    }
}

impl<'a> Component for DetailPanel<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(entry) = self.entry else {
            self.render_empty(frame, area);
            return;
        };

        let accent = theme::accent(entry.style_hint);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(accent))
            .title(Span::styled(
                format!(" {} ", entry.name),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width < 2 || inner.height == 0 {
            return;
        }

        let content_width = inner.width - 1; // -1 for scrollbar
        let body = Paragraph::new(body_lines(entry, self.code, self.show_tips))
            .style(Style::default().fg(theme::TEXT))
            .wrap(Wrap { trim: false });
        let content_height = body.line_count(content_width) as u16;

        self.state.content_height = content_height;
        self.state.viewport_height = inner.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(body, Rect::new(0, 0, content_width, content_height));
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

fn heading(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(theme::BRAND_ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

fn bullet(text: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("• ", Style::default().fg(theme::BRAND_ACCENT)),
        Span::raw(text.to_string()),
    ])
}

/// Every line of the panel body, before wrapping.
fn body_lines(
    entry: &AlgorithmEntry,
    code: Option<&Text<'static>>,
    show_tips: bool,
) -> Vec<Line<'static>> {
    let accent = theme::accent(entry.style_hint);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                entry.name.to_string(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("Difficulty: {}", entry.difficulty),
                Style::default().fg(theme::difficulty_color(entry.difficulty)),
            ),
        ]),
        Line::from(""),
        heading("Algorithm Details"),
    ];
    lines.extend(entry.description.lines().map(|l| Line::from(l.to_string())));

    lines.push(Line::from(""));
    lines.push(heading("Implementation Code"));
    match code {
        Some(text) => lines.extend(text.lines.iter().cloned()),
        None => lines.extend(entry.sample_code.lines().map(|l| Line::from(l.to_string()))),
    }

    if show_tips {
        lines.push(Line::from(""));
        lines.push(heading("Pro Tips"));
        lines.extend(COMMON_TIPS.iter().map(|tip| bullet(tip)));
        if let Some(note) = entry.extra_note {
            lines.push(bullet(note));
        }
    }
    lines
}
