//! Add-Player Screen
//!
//! Roster collection: a name input, the two-avatar picker, add/start
//! buttons and the newest-first player list. Starting the game swaps this
//! screen into a five-second pre-game loader (the fish again, denser
//! bubbles) before replacing to gameplay with the roster as payload.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use splash_core::config::SplashConfig;
use splash_core::nav::Screen as Route;
use splash_core::roster::Roster;

use super::{ScreenView, Transition};
use crate::fx::{BubbleField, FadeSlide, FishSweep};
use crate::theme;
use crate::widgets::{self, Button};

const MAX_NAME_LEN: usize = 16;
const LIST_ROWS: usize = 5;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Focus {
    Name,
    Start,
}

struct Pregame {
    bubbles: BubbleField,
    fish: FishSweep,
    hold: Duration,
    elapsed: Duration,
}

/// Roster collection and game start.
pub struct AddPlayerScreen {
    area: Rect,
    name: String,
    avatar_index: usize,
    roster: Roster,
    focus: Focus,
    selected_row: Option<usize>,
    bubbles: BubbleField,
    entrance: FadeSlide,
    pregame: Option<Pregame>,
    pregame_hold: Duration,
    loader_bubbles: usize,
}

impl AddPlayerScreen {
    /// Build the screen with an empty roster.
    pub fn new(area: Rect, config: &SplashConfig) -> Self {
        Self {
            area,
            name: String::new(),
            avatar_index: 0,
            roster: Roster::new(),
            focus: Focus::Name,
            selected_row: None,
            bubbles: BubbleField::new(config.background_bubbles, area),
            entrance: FadeSlide::new(),
            pregame: None,
            pregame_hold: config.pregame_hold,
            loader_bubbles: config.loader_bubbles,
        }
    }

    fn add_player(&mut self) {
        if self.roster.add(&self.name, self.avatar_index).is_some() {
            self.name.clear();
            self.selected_row = None;
        }
    }

    fn begin_pregame(&mut self) {
        if !self.roster.can_start() || self.pregame.is_some() {
            return;
        }
        self.pregame = Some(Pregame {
            bubbles: BubbleField::new(self.loader_bubbles, self.area),
            fish: FishSweep::new(),
            hold: self.pregame_hold,
            elapsed: Duration::ZERO,
        });
    }

    fn move_selection(&mut self, down: bool) {
        if self.roster.is_empty() {
            self.selected_row = None;
            return;
        }
        let last = self.roster.len() - 1;
        self.selected_row = Some(match (self.selected_row, down) {
            (None, _) => 0,
            (Some(i), true) => (i + 1).min(last),
            (Some(i), false) => i.saturating_sub(1),
        });
    }

    fn remove_selected(&mut self) {
        if let Some(i) = self.selected_row {
            if let Some(player) = self.roster.players().get(i) {
                let id = player.id.clone();
                self.roster.remove(&id);
            }
            if self.roster.is_empty() {
                self.selected_row = None;
            } else {
                self.selected_row = Some(i.min(self.roster.len() - 1));
            }
        }
    }
}

impl ScreenView for AddPlayerScreen {
    fn on_key(&mut self, key: KeyEvent) -> Option<Transition> {
        if self.pregame.is_some() {
            // The pre-game loader runs to completion once started.
            return None;
        }

        match key.code {
            KeyCode::Esc => return Some(Transition::Back),
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Name => Focus::Start,
                    Focus::Start => Focus::Name,
                };
            }
            KeyCode::Enter => match self.focus {
                Focus::Name => self.add_player(),
                Focus::Start => self.begin_pregame(),
            },
            KeyCode::Left if self.focus == Focus::Name => {
                self.avatar_index =
                    (self.avatar_index + splash_core::AVATAR_COUNT - 1) % splash_core::AVATAR_COUNT;
            }
            KeyCode::Right if self.focus == Focus::Name => {
                self.avatar_index = (self.avatar_index + 1) % splash_core::AVATAR_COUNT;
            }
            KeyCode::Up => self.move_selection(false),
            KeyCode::Down => self.move_selection(true),
            KeyCode::Delete => self.remove_selected(),
            KeyCode::Backspace => {
                self.name.pop();
            }
            KeyCode::Char(c) if self.focus == Focus::Name && !c.is_control() => {
                if self.name.chars().count() < MAX_NAME_LEN {
                    self.name.push(c);
                }
            }
            _ => {}
        }
        None
    }

    fn update(&mut self, delta: Duration) -> Option<Transition> {
        if let Some(pregame) = &mut self.pregame {
            pregame.bubbles.update(delta);
            pregame.fish.update(delta);
            pregame.elapsed += delta;
            if pregame.elapsed >= pregame.hold {
                let players = self.roster.clone().into_players();
                return Some(Transition::Replace(Route::Gameplay { players }));
            }
            return None;
        }

        self.bubbles.update(delta);
        self.entrance.update(delta);
        None
    }

    fn render(&mut self, buf: &mut Buffer) {
        if let Some(pregame) = &self.pregame {
            pregame.bubbles.render(buf);
            super::draw_fish(buf, self.area, &pregame.fish);
            return;
        }

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
            self.entrance.offset(),
            "~ ADD PLAYERS ~",
            text_style.add_modifier(Modifier::BOLD),
        );

        let card_w = area.width.min(44);
        let card_x = area.x + (area.width.saturating_sub(card_w)) / 2;
        let card_h = area.height.saturating_sub(3 + self.entrance.offset());
        let card = Rect::new(card_x, 2 + self.entrance.offset(), card_w, card_h);
        widgets::fill(buf, card, theme::CARD_NAVY);

        let inner_x = card.x + 2;
        let inner_w = card_w.saturating_sub(4);
        let mut y = card.y + 1;

        // Name input.
        widgets::text(buf, inner_x, y, "Player's name", text_style);
        y += 1;
        let input = Rect::new(inner_x, y, inner_w, 1);
        widgets::fill(buf, input, theme::INPUT_NAVY);
        let typed = if self.name.is_empty() && self.focus != Focus::Name {
            "Enter player's name".to_string()
        } else if self.focus == Focus::Name {
            format!("{}_", self.name)
        } else {
            self.name.clone()
        };
        let input_style = if self.name.is_empty() && self.focus != Focus::Name {
            Style::default().fg(theme::TEXT_DIM).bg(theme::INPUT_NAVY)
        } else {
            Style::default().fg(theme::FOAM_WHITE).bg(theme::INPUT_NAVY)
        };
        widgets::text(buf, inner_x + 1, y, &typed, input_style);
        y += 2;

        // Avatar picker.
        let (token, tint) = widgets::avatar(self.avatar_index);
        let picker = format!("<   {token}   >");
        widgets::centered_text(buf, card, y, &picker, Style::default().fg(tint));
        y += 2;

        // Actions.
        let can_add = !self.name.trim().is_empty();
        let add_bg = if can_add {
            theme::RASPBERRY
        } else {
            theme::RASPBERRY_DIM
        };
        Button::new("ADD PLAYER", add_bg)
            .selected(self.focus == Focus::Name)
            .render(buf, Rect::new(inner_x, y, inner_w, 3));
        y += 3;

        let start_bg = if self.roster.can_start() {
            theme::SPLASH_GREEN
        } else {
            theme::SPLASH_GREEN_DIM
        };
        Button::new("Start game", start_bg)
            .selected(self.focus == Focus::Start)
            .render(buf, Rect::new(inner_x, y, inner_w, 3));
        y += 4;

        // Player list, newest first.
        if self.roster.is_empty() {
            widgets::centered_text(
                buf,
                card,
                y,
                "Add at least two players to start",
                Style::default().fg(theme::TEXT_DIM),
            );
        } else {
            for (i, player) in self.roster.players().iter().take(LIST_ROWS).enumerate() {
                if y >= card.bottom().saturating_sub(1) {
                    break;
                }
                let row = Rect::new(inner_x, y, inner_w, 1);
                widgets::fill(buf, row, theme::INPUT_NAVY);

                let (token, tint) = widgets::avatar(player.avatar_index);
                widgets::text(
                    buf,
                    inner_x + 1,
                    y,
                    token,
                    Style::default().fg(tint).bg(theme::INPUT_NAVY),
                );
                let name_style = if self.selected_row == Some(i) {
                    Style::default()
                        .fg(theme::FOAM_WHITE)
                        .bg(theme::INPUT_NAVY)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(theme::FOAM_WHITE).bg(theme::INPUT_NAVY)
                };
                widgets::text(buf, inner_x + 8, y, &player.name, name_style);
                widgets::text(
                    buf,
                    inner_x + inner_w.saturating_sub(4),
                    y,
                    "[x]",
                    Style::default().fg(theme::DANGER_RED).bg(theme::INPUT_NAVY),
                );
                y += 1;
            }
            let hidden = self.roster.len().saturating_sub(LIST_ROWS);
            if hidden > 0 && y < card.bottom() {
                widgets::centered_text(
                    buf,
                    card,
                    y,
                    &format!("... and {hidden} more"),
                    Style::default().fg(theme::TEXT_DIM),
                );
            }
        }
    }

    fn resize(&mut self, area: Rect) {
        self.area = area;
        self.bubbles.resize(area);
        if let Some(pregame) = &mut self.pregame {
            pregame.bubbles.resize(area);
        }
    }

    fn hint(&self) -> &'static str {
        "type name | ←→: avatar | enter: add | tab: focus start | ↑↓+del: remove | esc: back"
    }
}
