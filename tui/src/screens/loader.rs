//! Loader Screen
//!
//! The startup splash: a bubble field and the fish sweeping across, then an
//! automatic replace to onboarding (or an explicit forward destination)
//! after the configured hold. The hold lives in this struct, so tearing the
//! screen down cancels the scheduled advance.

use std::time::Duration;

use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use splash_core::config::SplashConfig;
use splash_core::nav::Screen as Route;

use super::{ScreenView, Transition};
use crate::fx::{BubbleField, FishSweep};
use crate::theme;
use crate::widgets;

/// The startup loader.
pub struct LoaderScreen {
    area: Rect,
    bubbles: BubbleField,
    fish: FishSweep,
    hold: Duration,
    elapsed: Duration,
    next: Option<Route>,
}

impl LoaderScreen {
    /// Build the loader for the given content area.
    pub fn new(area: Rect, config: &SplashConfig, next: Option<Route>) -> Self {
        Self {
            area,
            bubbles: BubbleField::new(config.loader_bubbles, area),
            fish: FishSweep::new(),
            hold: config.loader_hold,
            elapsed: Duration::ZERO,
            next,
        }
    }
}

impl ScreenView for LoaderScreen {
    fn on_key(&mut self, _key: KeyEvent) -> Option<Transition> {
        // The splash ignores input; it advances on its own clock.
        None
    }

    fn update(&mut self, delta: Duration) -> Option<Transition> {
        self.bubbles.update(delta);
        self.fish.update(delta);
        self.elapsed += delta;

        if self.elapsed >= self.hold {
            let destination = self.next.take().unwrap_or(Route::Onboarding);
            return Some(Transition::Replace(destination));
        }
        None
    }

    fn render(&mut self, buf: &mut Buffer) {
        self.bubbles.render(buf);
        super::draw_fish(buf, self.area, &self.fish);

        widgets::centered_text(
            buf,
            self.area,
            self.area.height.saturating_sub(3),
            "FUN SPLASH",
            Style::default()
                .fg(theme::FOAM_WHITE)
                .add_modifier(Modifier::BOLD),
        );
    }

    fn resize(&mut self, area: Rect) {
        self.area = area;
        self.bubbles.resize(area);
    }

    fn hint(&self) -> &'static str {
        "loading..."
    }
}
