//! Onboarding Screen
//!
//! Three introduction steps, each fading in over the framed card. The final
//! step's button replaces straight to home, so back never returns here.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use splash_core::nav::Screen as Route;

use super::{ScreenView, Transition};
use crate::fx::FadeSlide;
use crate::theme;
use crate::widgets::{self, Button};

struct Step {
    title: &'static str,
    body: &'static str,
    button: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        title: "Gather friends",
        body: "Fish fun with your friends! Fun Splash: The Big Party is your \
               company fishing for laughter and bright moments.",
        button: "Okay",
    },
    Step {
        title: "Fish tasks",
        body: "Cast the fishing rod and catch a random task, joke or \
               challenge. Each catch is a new fan!",
        button: "Continue",
    },
    Step {
        title: "Accidentally caught a goldfish?",
        body: "Cast the fishing rod and catch a random task, joke or \
               challenge. Each catch is a new fan!",
        button: "Start play",
    },
];

/// The three-step introduction.
pub struct OnboardingScreen {
    area: Rect,
    step: usize,
    entrance: FadeSlide,
}

impl OnboardingScreen {
    /// Build the onboarding flow at its first step.
    #[must_use]
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            step: 0,
            entrance: FadeSlide::new(),
        }
    }
}

impl ScreenView for OnboardingScreen {
    fn on_key(&mut self, key: KeyEvent) -> Option<Transition> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.step + 1 < STEPS.len() {
                    self.step += 1;
                    self.entrance.reset();
                    None
                } else {
                    Some(Transition::Replace(Route::Home))
                }
            }
            _ => None,
        }
    }

    fn update(&mut self, delta: Duration) -> Option<Transition> {
        self.entrance.update(delta);
        None
    }

    fn render(&mut self, buf: &mut Buffer) {
        let step = &STEPS[self.step];
        let area = self.area;

        let text_style = if self.entrance.dimmed() {
            Style::default().fg(theme::TEXT_DIM)
        } else {
            Style::default().fg(theme::FOAM_WHITE)
        };

        // Framed card in the lower half of the screen.
        let card_w = area.width.min(46);
        let card_h = 9u16;
        let card = Rect::new(
            area.x + (area.width - card_w) / 2,
            (area.height.saturating_sub(card_h + 4)) / 2 + area.height / 4 + self.entrance.offset(),
            card_w,
            card_h,
        );
        widgets::fill(buf, card, theme::DEEP_NAVY);

        widgets::centered_text(
            buf,
            card,
            card.y + 1,
            step.title,
            text_style.add_modifier(Modifier::BOLD),
        );
        widgets::wrapped_centered(
            buf,
            Rect::new(card.x + 3, card.y + 3, card_w.saturating_sub(6), 4),
            step.body,
            text_style,
        );

        // Step dots.
        let dots: String = (0..STEPS.len())
            .map(|i| if i == self.step { '●' } else { '○' })
            .collect();
        widgets::centered_text(
            buf,
            card,
            card.y + card_h.saturating_sub(1),
            &dots,
            Style::default().fg(theme::TEXT_DIM),
        );

        // The primary button overlaps the card's bottom edge.
        let btn = Rect::new(
            area.x + (area.width.saturating_sub(18)) / 2,
            card.bottom().min(buf.area.height.saturating_sub(3)),
            18,
            3,
        );
        Button::new(step.button, theme::SPLASH_GREEN)
            .selected(true)
            .render(buf, btn);
    }

    fn resize(&mut self, area: Rect) {
        self.area = area;
    }

    fn hint(&self) -> &'static str {
        "enter: continue"
    }
}
