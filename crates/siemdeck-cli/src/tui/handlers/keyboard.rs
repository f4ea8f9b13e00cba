//! Keyboard input

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use siemdeck_core::content::View;

use crate::tui::app::App;

/// Lines moved by PgUp/PgDn
const PAGE: isize = 10;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => {
                self.should_quit = true;
            }
            (KeyCode::Tab, _) => self.navigate(self.view.next()),
            (KeyCode::BackTab, _) => self.navigate(self.view.prev()),
            (KeyCode::Char(c @ '1'..='9'), _) => {
                let index = c as usize - '1' as usize;
                if let Some(view) = View::from_index(index) {
                    self.navigate(view);
                }
            }
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => self.move_cursor(-1),
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => self.move_cursor(1),
            (KeyCode::PageUp, _) => self.scroll_by(-PAGE),
            (KeyCode::PageDown, _) => self.scroll_by(PAGE),
            (KeyCode::Home, _) => self.scroll = 0,
            (KeyCode::Enter, _) => self.activate(),
            (KeyCode::Char('a'), _) if self.view == View::Alerts => self.analyze_selected(),
            (KeyCode::Char('r'), _) if self.view == View::Alerts => self.retry_analysis(),
            (KeyCode::Char('c'), _) if self.view.has_snippets() => self.copy_selected_snippet(),
            (KeyCode::Char('d'), _) => self.toggle_details(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siemdeck_core::analysis::{AnalysisClient, AnalysisSession};
    use std::time::Duration;

    fn app() -> App {
        App::new(
            View::Overview,
            AnalysisSession::new(AnalysisClient::Disabled, Duration::from_secs(1)),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_tab_cycles_views() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view, View::Dashboard);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.view, View::Deliverables);
    }

    #[test]
    fn test_arrows_select_snippets_in_code_views() {
        let mut app = app();
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.view, View::Rules);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.snippet_cursor, 2);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.snippet_cursor, 1);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.snippet_cursor, 0);
    }

    #[test]
    fn test_number_keys_jump() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.view, View::Alerts);
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.view, View::Deliverables);
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = app();
            press(&mut app, code);
            assert!(app.should_quit);
        }
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_details_toggle_needs_selection() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('d'));
        assert!(!app.show_details);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('d'));
        assert!(app.show_details);
    }
}
