//! Home Screen
//!
//! The main menu: the title block and the four actions. Start play and game
//! rules get the wide green buttons; settings and info share the bottom row.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use splash_core::nav::Screen as Route;

use super::{ScreenView, Transition};
use crate::theme;
use crate::widgets::{self, Button};

const TITLE_ART: [&str; 3] = [
    "░█▀▀░█░█░█▀█░░░█▀▀░█▀█░█░░░█▀█░█▀▀░█░█",
    "░█▀▀░█░█░█░█░░░▀▀█░█▀▀░█░░░█▀█░▀▀█░█▀█",
    "░▀░░░▀▀▀░▀░▀░░░▀▀▀░▀░░░▀▀▀░▀░▀░▀▀▀░▀░▀",
];

const MENU: [(&str, usize); 4] = [
    ("START PLAY", 0),
    ("GAME RULES", 1),
    ("SETTINGS", 2),
    ("INFO", 3),
];

/// The main menu.
pub struct HomeScreen {
    area: Rect,
    selected: usize,
}

impl HomeScreen {
    /// Build the menu with the first item selected.
    #[must_use]
    pub fn new(area: Rect) -> Self {
        Self { area, selected: 0 }
    }

    fn activate(&self) -> Transition {
        match self.selected {
            0 => Transition::Push(Route::AddPlayer),
            1 => Transition::Push(Route::GameRules),
            2 => Transition::Push(Route::Settings),
            _ => Transition::Push(Route::Info),
        }
    }
}

impl ScreenView for HomeScreen {
    fn on_key(&mut self, key: KeyEvent) -> Option<Transition> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = (self.selected + MENU.len() - 1) % MENU.len();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1) % MENU.len();
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(self.activate()),
            _ => None,
        }
    }

    fn update(&mut self, _delta: Duration) -> Option<Transition> {
        None
    }

    fn render(&mut self, buf: &mut Buffer) {
        let area = self.area;
        let mut y = area.height / 6;

        for line in TITLE_ART {
            widgets::centered_text(
                buf,
                area,
                y,
                line,
                Style::default().fg(theme::SPLASH_GREEN),
            );
            y += 1;
        }
        widgets::centered_text(
            buf,
            area,
            y + 1,
            "~ THE BIG PARTY ~",
            Style::default()
                .fg(theme::FOAM_WHITE)
                .add_modifier(Modifier::BOLD),
        );
        y += 4;

        // Two wide rows, then settings/info side by side.
        let wide = 28u16.min(area.width);
        for (label, idx) in &MENU[..2] {
            let rect = Rect::new(area.x + (area.width.saturating_sub(wide)) / 2, y, wide, 3);
            Button::new(label, theme::SPLASH_GREEN)
                .selected(self.selected == *idx)
                .render(buf, rect);
            y += 4;
        }

        let half = 13u16.min(area.width / 2);
        let gap = 2u16;
        let row_x = area.x + (area.width.saturating_sub(half * 2 + gap)) / 2;
        for (i, (label, idx)) in MENU[2..].iter().enumerate() {
            let rect = Rect::new(row_x + (half + gap) * i as u16, y, half, 3);
            Button::new(label, theme::SPLASH_GREEN)
                .selected(self.selected == *idx)
                .render(buf, rect);
        }
    }

    fn resize(&mut self, area: Rect) {
        self.area = area;
    }

    fn hint(&self) -> &'static str {
        "↑↓: choose | enter: open"
    }
}
