//! Settings Screen
//!
//! Two toggle rows, music and vibration. The screen only holds the live
//! values it was constructed with; persisting and applying them is the
//! app's job, requested through [`Transition::SetMusic`] /
//! [`Transition::SetVibration`].

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use super::{ScreenView, Transition};
use crate::fx::FadeSlide;
use crate::theme;
use crate::widgets;

const ROWS: [&str; 2] = ["Music", "Vibration"];

/// Music and vibration toggles.
pub struct SettingsScreen {
    area: Rect,
    music_on: bool,
    vibration_on: bool,
    selected: usize,
    entrance: FadeSlide,
}

impl SettingsScreen {
    /// Build the screen seeded with the current preference values.
    #[must_use]
    pub fn new(area: Rect, music_on: bool, vibration_on: bool) -> Self {
        Self {
            area,
            music_on,
            vibration_on,
            selected: 0,
            entrance: FadeSlide::new(),
        }
    }

    fn toggle_selected(&mut self) -> Transition {
        if self.selected == 0 {
            self.music_on = !self.music_on;
            Transition::SetMusic(self.music_on)
        } else {
            self.vibration_on = !self.vibration_on;
            Transition::SetVibration(self.vibration_on)
        }
    }
}

impl ScreenView for SettingsScreen {
    fn on_key(&mut self, key: KeyEvent) -> Option<Transition> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => Some(Transition::Back),
            KeyCode::Up | KeyCode::Down => {
                self.selected = 1 - self.selected;
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(self.toggle_selected()),
            _ => None,
        }
    }

    fn update(&mut self, delta: Duration) -> Option<Transition> {
        self.entrance.update(delta);
        None
    }

    fn render(&mut self, buf: &mut Buffer) {
        let area = self.area;
        let text_style = if self.entrance.dimmed() {
            Style::default().fg(theme::TEXT_DIM)
        } else {
            Style::default().fg(theme::FOAM_WHITE)
        };

        widgets::centered_text(
            buf,
            area,
            2 + self.entrance.offset(),
            "~ SETTINGS ~",
            text_style.add_modifier(Modifier::BOLD),
        );

        let card_w = area.width.min(36);
        let card_x = area.x + (area.width.saturating_sub(card_w)) / 2;
        let mut y = 5 + self.entrance.offset();

        for (i, label) in ROWS.iter().enumerate() {
            let on = if i == 0 { self.music_on } else { self.vibration_on };
            let row = Rect::new(card_x, y, card_w, 3);
            widgets::fill(buf, row, theme::DEEP_NAVY);

            let label_style = if self.selected == i {
                Style::default()
                    .fg(theme::FOAM_WHITE)
                    .bg(theme::DEEP_NAVY)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme::FOAM_WHITE).bg(theme::DEEP_NAVY)
            };
            widgets::text(buf, card_x + 2, y + 1, label, label_style);
            widgets::switch(buf, card_x + card_w.saturating_sub(10), y + 1, on);

            y += 4;
        }
    }

    fn resize(&mut self, area: Rect) {
        self.area = area;
    }

    fn hint(&self) -> &'static str {
        "↑↓: choose | enter: toggle | esc: back"
    }
}
