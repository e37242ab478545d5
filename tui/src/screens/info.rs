//! Info Screen
//!
//! The about page: what the game is and where things live on disk.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use splash_core::config::SplashConfig;

use super::{ScreenView, Transition};
use crate::fx::{BubbleField, FadeSlide};
use crate::theme;
use crate::widgets;

const ABOUT: &str = "Fun Splash: The Big Party is a couch party game. Pass \
                     the keyboard around, cast the line, and do whatever the \
                     catch demands. No accounts, no network - just the \
                     people in the room.";

/// About the game.
pub struct InfoScreen {
    area: Rect,
    bubbles: BubbleField,
    entrance: FadeSlide,
}

impl InfoScreen {
    /// Build the about page.
    pub fn new(area: Rect, config: &SplashConfig) -> Self {
        Self {
            area,
            bubbles: BubbleField::new(config.background_bubbles, area),
            entrance: FadeSlide::new(),
        }
    }
}

impl ScreenView for InfoScreen {
    fn on_key(&mut self, key: KeyEvent) -> Option<Transition> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter => Some(Transition::Back),
            _ => None,
        }
    }

    fn update(&mut self, delta: Duration) -> Option<Transition> {
        self.bubbles.update(delta);
        self.entrance.update(delta);
        None
    }

    fn render(&mut self, buf: &mut Buffer) {
        self.bubbles.render(buf);
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
            "~ INFORMATION ~",
            text_style.add_modifier(Modifier::BOLD),
        );

        let card_w = area.width.min(48);
        let card_x = area.x + (area.width.saturating_sub(card_w)) / 2;
        let card = Rect::new(card_x, 5 + self.entrance.offset(), card_w, 10);
        widgets::fill(buf, card, theme::DEEP_NAVY);

        widgets::wrapped_centered(
            buf,
            Rect::new(card.x + 2, card.y + 1, card_w.saturating_sub(4), 6),
            ABOUT,
            text_style.bg(theme::DEEP_NAVY),
        );

        widgets::centered_text(
            buf,
            card,
            card.bottom().saturating_sub(2),
            concat!("splash-tui v", env!("CARGO_PKG_VERSION")),
            Style::default().fg(theme::TEXT_DIM).bg(theme::DEEP_NAVY),
        );
    }

    fn resize(&mut self, area: Rect) {
        self.area = area;
        self.bubbles.resize(area);
    }

    fn hint(&self) -> &'static str {
        "esc: back"
    }
}
