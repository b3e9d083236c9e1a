//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing on screen animates, so the loop sleeps up to 500ms waiting for
//! input and only redraws after an event (key, mouse, resize). All pending
//! events are drained before the next draw.

mod component;
pub mod components;
pub mod event;
mod highlight;
pub mod theme;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{CardEvent, CardGridState, DetailPanelState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::highlight::CodeHighlighter;

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub card_grid: CardGridState,
    pub detail: DetailPanelState,
    pub highlighter: CodeHighlighter,
}

impl TuiState {
    pub fn new(catalog: &Catalog, config: &ResolvedConfig) -> Self {
        Self {
            card_grid: CardGridState::new(catalog),
            detail: DetailPanelState::new(),
            highlighter: CodeHighlighter::new(&config.highlight_theme),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Route one event to the component that owns it and apply the result.
pub fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        // Resize just needs a redraw
        TuiEvent::Resize => Effect::None,
        TuiEvent::Quit => update(app, Action::Quit),
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown
        | TuiEvent::ScrollToTop => {
            tui.detail.handle_event(&event);
            Effect::None
        }
        _ => match tui.card_grid.handle_event(&event) {
            Some(CardEvent::Select(key)) => {
                let effect = update(app, Action::Select(key.to_string()));
                if effect == Effect::SelectionChanged {
                    tui.detail.reset();
                }
                effect
            }
            None => Effect::None,
        },
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(Catalog::builtin(), &config);
    let mut tui = TuiState::new(app.catalog(), &config);
    if let Some(key) = app.selector.selected_key() {
        tui.card_grid.focus_key(key);
    }
    info!("[{}] Viewer session started", app.session_id);

    let mut terminal = ratatui::try_init()?;
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));
    ratatui::restore();

    info!("[{}] Viewer session ended", app.session_id);
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            debug!("Dispatching {:?}", event);
            if dispatch(app, tui, event) == Effect::Quit {
                return Ok(());
            }
        }
    }
}
