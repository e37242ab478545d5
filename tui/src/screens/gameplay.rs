//! Gameplay Screen
//!
//! The round itself, phase by phase: the throwing card with the current
//! player and the hook, the caught card with the outcome and its task, and
//! the results card with the four counters. Arriving here without a usable
//! roster renders a redirect back to roster collection instead of a game.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};

use splash_core::config::SplashConfig;
use splash_core::engine::{CatchOutcome, GamePhase, GameSession};
use splash_core::nav::Screen as Route;
use splash_core::roster::{Player, Roster};
use splash_core::share::results_summary;

use super::{ScreenView, Transition};
use crate::fx::{BubbleField, FadeSlide};
use crate::theme;
use crate::widgets::{self, Button};

const HOOK_ART: [&str; 4] = ["    |", "    |", "    |", "   J "];

fn outcome_art(outcome: CatchOutcome) -> ([&'static str; 3], Color) {
    match outcome {
        CatchOutcome::Ring => (["  .----.  ", " |      | ", "  `----`  "], theme::RING_YELLOW),
        CatchOutcome::Fish => (["   ,__,   ", " ><((((o> ", "   `''`   "], theme::FISH_BLUE),
        CatchOutcome::Chest => ([" ________ ", "|_|####|_|", "|________|"], theme::CHEST_BROWN),
        CatchOutcome::Goldfish => (["  *  .  * ", " ><((((@> ", "  '  *  ' "], theme::GOLDFISH_GOLD),
    }
}

/// One round of the game, or the roster redirect when none can start.
pub struct GameplayScreen {
    area: Rect,
    session: Option<GameSession>,
    bubbles: BubbleField,
    entrance: FadeSlide,
}

impl GameplayScreen {
    /// Mount the screen with the roster handed over by navigation.
    pub fn new(area: Rect, config: &SplashConfig, players: Vec<Player>) -> Self {
        let session = match GameSession::new(Roster::from_players(players)) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::info!(error = %e, "gameplay entered without a playable roster");
                None
            }
        };
        Self {
            area,
            session,
            bubbles: BubbleField::new(config.background_bubbles, area),
            entrance: FadeSlide::new(),
        }
    }
}

impl ScreenView for GameplayScreen {
    fn on_key(&mut self, key: KeyEvent) -> Option<Transition> {
        let Some(session) = &mut self.session else {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    Some(Transition::Replace(Route::AddPlayer))
                }
                KeyCode::Esc => Some(Transition::Back),
                _ => None,
            };
        };

        match session.phase() {
            GamePhase::Throwing => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    session.cast();
                    self.entrance.reset();
                    None
                }
                KeyCode::Esc => Some(Transition::Back),
                _ => None,
            },
            GamePhase::Caught => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    session.advance();
                    self.entrance.reset();
                    None
                }
                KeyCode::Char('e') => {
                    session.end_early();
                    self.entrance.reset();
                    None
                }
                KeyCode::Char('h') => Some(Transition::Replace(Route::Home)),
                KeyCode::Esc => Some(Transition::Back),
                _ => None,
            },
            GamePhase::Results => match key.code {
                KeyCode::Char('r') => {
                    session.restart();
                    self.entrance.reset();
                    None
                }
                KeyCode::Char('s') => Some(Transition::Share(results_summary(session.score()))),
                KeyCode::Char('h') => Some(Transition::Replace(Route::Home)),
                KeyCode::Esc => Some(Transition::Back),
                _ => None,
            },
        }
    }

    fn update(&mut self, delta: Duration) -> Option<Transition> {
        self.bubbles.update(delta);
        self.entrance.update(delta);
        None
    }

    fn render(&mut self, buf: &mut Buffer) {
        self.bubbles.render(buf);

        let text_style = if self.entrance.dimmed() {
            Style::default().fg(theme::TEXT_DIM)
        } else {
            Style::default().fg(theme::FOAM_WHITE)
        };

        match self.session.as_ref().map(GameSession::phase) {
            None => self.render_redirect(buf, text_style),
            Some(GamePhase::Throwing) => self.render_throwing(buf, text_style),
            Some(GamePhase::Caught) => self.render_caught(buf, text_style),
            Some(GamePhase::Results) => self.render_results(buf, text_style),
        }
    }

    fn resize(&mut self, area: Rect) {
        self.area = area;
        self.bubbles.resize(area);
    }

    fn hint(&self) -> &'static str {
        match self.session.as_ref().map(GameSession::phase) {
            None => "enter: add players",
            Some(GamePhase::Throwing) => "space: cast the line | esc: back",
            Some(GamePhase::Caught) => "enter: next | e: end game | h: home",
            Some(GamePhase::Results) => "r: restart | s: share | h: home",
        }
    }
}

impl GameplayScreen {
    fn render_redirect(&self, buf: &mut Buffer, text_style: Style) {
        let area = self.area;
        let mid = area.height / 2;
        widgets::centered_text(
            buf,
            area,
            mid.saturating_sub(3),
            "Add at least two players first.",
            text_style,
        );
        let btn = Rect::new(
            area.x + (area.width.saturating_sub(20)) / 2,
            mid,
            20,
            3,
        );
        Button::new("Add players", theme::SPLASH_GREEN)
            .selected(true)
            .render(buf, btn);
    }

    fn render_throwing(&self, buf: &mut Buffer, text_style: Style) {
        let Some(session) = &self.session else { return };
        let area = self.area;
        let player = session.current_player();

        let card_w = area.width.min(40);
        let card_x = area.x + (area.width.saturating_sub(card_w)) / 2;
        let card = Rect::new(card_x, 1 + self.entrance.offset(), card_w, 8);
        widgets::fill(buf, card, theme::DEEP_NAVY);

        let bold = text_style.bg(theme::DEEP_NAVY).add_modifier(Modifier::BOLD);
        widgets::centered_text(buf, card, card.y + 1, &player.name, bold);
        widgets::centered_text(buf, card, card.y + 2, "is", text_style.bg(theme::DEEP_NAVY));
        widgets::centered_text(buf, card, card.y + 3, "throwing up!", bold);

        let (token, tint) = widgets::avatar(player.avatar_index);
        widgets::centered_text(
            buf,
            card,
            card.y + 5,
            token,
            Style::default().fg(tint).bg(theme::DEEP_NAVY),
        );

        let mut y = card.bottom() + 1;
        for line in HOOK_ART {
            widgets::centered_text(buf, area, y, line, Style::default().fg(theme::SPLASH_GREEN));
            y += 1;
        }
        widgets::centered_text(
            buf,
            area,
            y + 1,
            "[ space ] cast the line",
            Style::default()
                .fg(theme::SPLASH_GREEN)
                .add_modifier(Modifier::BOLD),
        );
    }

    fn render_caught(&self, buf: &mut Buffer, text_style: Style) {
        let Some(session) = &self.session else { return };
        let Some(outcome) = session.last_catch() else { return };
        let area = self.area;

        let card_w = area.width.min(40);
        let card_x = area.x + (area.width.saturating_sub(card_w)) / 2;
        let card = Rect::new(card_x, 1 + self.entrance.offset(), card_w, 7);
        widgets::fill(buf, card, theme::DEEP_NAVY);

        widgets::centered_text(
            buf,
            card,
            card.y + 1,
            "Catch:",
            text_style.bg(theme::DEEP_NAVY).add_modifier(Modifier::BOLD),
        );
        let (art, tint) = outcome_art(outcome);
        for (i, line) in art.iter().enumerate() {
            widgets::centered_text(
                buf,
                card,
                card.y + 2 + i as u16,
                line,
                Style::default().fg(tint).bg(theme::DEEP_NAVY),
            );
        }
        widgets::centered_text(
            buf,
            card,
            card.y + 5,
            outcome.label(),
            Style::default().fg(tint).bg(theme::DEEP_NAVY),
        );

        // Task box.
        let task = Rect::new(card_x, card.bottom() + 1, card_w, 5);
        widgets::fill(buf, task, theme::INPUT_NAVY);
        widgets::text(
            buf,
            task.x + 2,
            task.y + 1,
            "Task:",
            text_style.bg(theme::INPUT_NAVY).add_modifier(Modifier::BOLD),
        );
        if let Some(prompt) = session.last_prompt() {
            let body = Rect::new(task.x + 2, task.y + 2, card_w.saturating_sub(4), 3);
            let mut row = body.y;
            for line in textwrap::wrap(prompt, body.width.max(1) as usize) {
                if row >= task.bottom() {
                    break;
                }
                widgets::text(buf, body.x, row, &line, text_style.bg(theme::INPUT_NAVY));
                row += 1;
            }
        }

        // Actions.
        let mut y = task.bottom() + 1;
        let primary = if outcome.ends_round() {
            "END THE GAME"
        } else {
            "Next player"
        };
        Button::new(primary, theme::SPLASH_GREEN)
            .selected(true)
            .render(buf, Rect::new(card_x, y, card_w, 3));
        y += 3;

        let half = card_w.saturating_sub(2) / 2;
        Button::new("Back home", theme::STEEL_BLUE).render(buf, Rect::new(card_x, y, half, 3));
        Button::new("End the game", theme::RASPBERRY).render(
            buf,
            Rect::new(card_x + half + 2, y, half, 3),
        );
    }

    fn render_results(&self, buf: &mut Buffer, text_style: Style) {
        let Some(session) = &self.session else { return };
        let area = self.area;
        let score = session.score();

        let card_w = area.width.min(42);
        let card_x = area.x + (area.width.saturating_sub(card_w)) / 2;
        let card_h = area.height.saturating_sub(4 + self.entrance.offset()).min(18);
        let card = Rect::new(card_x, 2 + self.entrance.offset(), card_w, card_h);
        widgets::fill(buf, card, theme::RESULTS_NAVY);

        widgets::centered_text(
            buf,
            card,
            card.y + 1,
            "Game results",
            text_style
                .bg(theme::RESULTS_NAVY)
                .add_modifier(Modifier::BOLD),
        );

        // The four counters on one row.
        let counters = [
            (CatchOutcome::Ring, "o"),
            (CatchOutcome::Fish, "><>"),
            (CatchOutcome::Chest, "[#]"),
            (CatchOutcome::Goldfish, "><@>"),
        ];
        let slot = card_w / 4;
        for (i, (outcome, glyph)) in counters.iter().enumerate() {
            let tint = outcome_art(*outcome).1;
            let label = format!("{glyph} {}", score.get(*outcome));
            let x = card.x + slot * i as u16 + (slot.saturating_sub(label.len() as u16)) / 2;
            widgets::text(
                buf,
                x,
                card.y + 3,
                &label,
                Style::default()
                    .fg(tint)
                    .bg(theme::RESULTS_NAVY)
                    .add_modifier(Modifier::BOLD),
            );
        }

        let mut y = card.y + 5;
        if score.goldfish > 0 {
            let line = format!("{} caught a goldfish", session.current_player().name);
            widgets::centered_text(
                buf,
                card,
                y,
                &line,
                Style::default()
                    .fg(theme::GOLDFISH_GOLD)
                    .bg(theme::RESULTS_NAVY),
            );
            y += 2;
        }

        let btn_w = card_w.saturating_sub(10);
        let btn_x = card.x + (card_w.saturating_sub(btn_w)) / 2;
        Button::new("Restart game", theme::SPLASH_GREEN)
            .selected(true)
            .render(buf, Rect::new(btn_x, y, btn_w, 3));
        y += 3;
        Button::new("Share results", theme::STEEL_BLUE)
            .render(buf, Rect::new(btn_x, y, btn_w, 3));
        y += 3;
        Button::new("Back home", theme::STEEL_BLUE).render(buf, Rect::new(btn_x, y, btn_w, 3));
    }
}
