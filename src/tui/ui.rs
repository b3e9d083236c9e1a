use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::card_grid::CARD_HEIGHT;
use crate::tui::components::guide::GUIDE_HEIGHT;
use crate::tui::components::{CardGrid, DetailPanel, Guide, TitleBar};

/// Screen regions, top to bottom.
struct Regions {
    title: Rect,
    cards: Rect,
    detail: Rect,
    guide: Rect,
}

fn regions(area: Rect) -> Regions {
    use Constraint::{Length, Min};
    let [title, cards, detail, guide] =
        Layout::vertical([Length(1), Length(CARD_HEIGHT), Min(0), Length(GUIDE_HEIGHT)])
            .areas(area);
    Regions {
        title,
        cards,
        detail,
        guide,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let regions = regions(frame.area());
    let current = app.current();

    TitleBar::new(app.status_message.clone()).render(frame, regions.title);

    CardGrid::new(&mut tui.card_grid, app.catalog(), current.map(|e| e.key))
        .render(frame, regions.cards);

    let code = match current {
        Some(entry) => Some(tui.highlighter.get(entry.key, entry.sample_code)),
        None => None,
    };
    DetailPanel::new(&mut tui.detail, current, code, app.show_tips).render(frame, regions.detail);

    Guide::new(current.is_some()).render(frame, regions.guide);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{buffer_text, test_app, test_config};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(120, 60);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_draw_ui_unselected() {
        let app = test_app();
        let mut tui = TuiState::new(app.catalog(), &test_config());
        let text = draw(&app, &mut tui);
        assert!(text.contains("CryptoVault"));
        assert!(text.contains("ChaCha20"));
        assert!(text.contains("Select an encryption algorithm"));
    }

    #[test]
    fn test_draw_ui_selected() {
        let mut app = test_app();
        update(&mut app, Action::Select("ecc".to_string()));
        let mut tui = TuiState::new(app.catalog(), &test_config());
        let text = draw(&app, &mut tui);
        assert!(text.contains("Viewing ECC"));
        assert!(text.contains("Difficulty: Intermediate"));
        assert!(text.contains("Elliptic Curve Cryptography"));
        assert!(!text.contains("Select an encryption algorithm"));
    }

    #[test]
    fn test_card_areas_sit_in_card_row() {
        let app = test_app();
        let mut tui = TuiState::new(app.catalog(), &test_config());
        draw(&app, &mut tui);
        assert_eq!(tui.card_grid.card_areas.len(), 4);
        assert!(tui.card_grid.card_areas.iter().all(|r| r.y == 1));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = test_app();
        let mut tui = TuiState::new(app.catalog(), &test_config());
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        update(&mut app, Action::Select("rsa".to_string()));
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();
    }
}
