//! Game Rules Screen
//!
//! A static how-to-play page over the bubble field.

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

const RULES: [&str; 6] = [
    "Gather at least two players and take turns casting the line.",
    "Every cast catches something: a swim ring, a fish or a chest.",
    "Each catch comes with a task. Do it! The braver, the funnier.",
    "The score counts every catch for the whole party.",
    "From the fifth cast on, the goldfish is in the water. Catching \
     it ends the round - make a wish for all the players!",
    "Share the results and play again.",
];

/// How to play.
pub struct GameRulesScreen {
    area: Rect,
    bubbles: BubbleField,
    entrance: FadeSlide,
}

impl GameRulesScreen {
    /// Build the rules page.
    pub fn new(area: Rect, config: &SplashConfig) -> Self {
        Self {
            area,
            bubbles: BubbleField::new(config.background_bubbles, area),
            entrance: FadeSlide::new(),
        }
    }
}

impl ScreenView for GameRulesScreen {
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
            1 + self.entrance.offset(),
            "~ GAME RULES ~",
            text_style.add_modifier(Modifier::BOLD),
        );

        let card_w = area.width.min(50);
        let card_x = area.x + (area.width.saturating_sub(card_w)) / 2;
        let card_h = area.height.saturating_sub(4 + self.entrance.offset());
        let card = Rect::new(card_x, 3 + self.entrance.offset(), card_w, card_h);
        widgets::fill(buf, card, theme::DEEP_NAVY);

        let mut y = card.y + 1;
        for (i, rule) in RULES.iter().enumerate() {
            if y >= card.bottom() {
                break;
            }
            let marker = format!("{}.", i + 1);
            widgets::text(
                buf,
                card.x + 2,
                y,
                &marker,
                Style::default()
                    .fg(theme::SPLASH_GREEN)
                    .bg(theme::DEEP_NAVY)
                    .add_modifier(Modifier::BOLD),
            );
            let body = Rect::new(card.x + 5, y, card_w.saturating_sub(7), card.bottom() - y);
            let mut row = y;
            for line in textwrap::wrap(rule, body.width.max(1) as usize) {
                if row >= card.bottom() {
                    break;
                }
                widgets::text(buf, body.x, row, &line, text_style.bg(theme::DEEP_NAVY));
                row += 1;
            }
            y = row + 1;
        }
    }

    fn resize(&mut self, area: Rect) {
        self.area = area;
        self.bubbles.resize(area);
    }

    fn hint(&self) -> &'static str {
        "esc: back"
    }
}
