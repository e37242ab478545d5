//! Screens
//!
//! One module per screen of the navigation graph. Each screen owns
//! its local state and effects, reacts to keys, advances on the frame tick,
//! and paints into the content layer. Screens never touch the navigator or
//! platform services directly; they hand a [`Transition`] up to the app.

pub mod add_player;
pub mod gameplay;
pub mod home;
pub mod info;
pub mod loader;
pub mod onboarding;
pub mod rules;
pub mod settings;

use std::time::Duration;

use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use splash_core::nav::Screen as Route;

pub use add_player::AddPlayerScreen;
pub use gameplay::GameplayScreen;
pub use home::HomeScreen;
pub use info::InfoScreen;
pub use loader::LoaderScreen;
pub use onboarding::OnboardingScreen;
pub use rules::GameRulesScreen;
pub use settings::SettingsScreen;

/// What a screen asks the app to do.
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    /// Push a screen on top of this one.
    Push(Route),
    /// Replace this screen (back will skip it).
    Replace(Route),
    /// Pop back to the previous screen.
    Back,
    /// Leave the app.
    Quit,
    /// Persist and apply the music preference.
    SetMusic(bool),
    /// Persist the vibration preference.
    SetVibration(bool),
    /// Hand a results summary to the share surface.
    Share(String),
}

/// A screen of the app: key handling, frame updates, painting.
pub trait ScreenView {
    /// React to a key press.
    fn on_key(&mut self, key: KeyEvent) -> Option<Transition>;

    /// Advance animations and timers. Timed transitions (the loaders) come
    /// back from here; dropping the screen cancels them.
    fn update(&mut self, delta: Duration) -> Option<Transition>;

    /// Paint into the content layer buffer.
    fn render(&mut self, buf: &mut Buffer);

    /// The content area changed (terminal resize).
    fn resize(&mut self, area: Rect);

    /// Key hints for the status line.
    fn hint(&self) -> &'static str;
}

/// The loader fish sprite, shared by the splash and pre-game loaders.
pub(crate) const FISH_ART: [&str; 3] = [
    r"   ,__,   ",
    r" ><((((o> ",
    r"   `''`   ",
];

/// Sprite width of [`FISH_ART`].
pub(crate) const FISH_W: u16 = 10;

/// Paint the sweeping fish at 45% height, clipped to `area`.
pub(crate) fn draw_fish(buf: &mut Buffer, area: Rect, fish: &crate::fx::FishSweep) {
    use ratatui::style::Style;

    let base_y = i32::from(area.height) * 45 / 100 - 1;
    let x = fish.x(area.width, FISH_W);
    let y = base_y + fish.bob();

    for (row, line) in FISH_ART.iter().enumerate() {
        let row_y = y + row as i32;
        if row_y < 0 || row_y >= i32::from(area.height) {
            continue;
        }
        for (col, ch) in line.chars().enumerate() {
            let col_x = x + col as i32;
            if ch == ' ' || col_x < 0 || col_x >= i32::from(area.width) {
                continue;
            }
            crate::widgets::text(
                buf,
                col_x as u16,
                row_y as u16,
                &ch.to_string(),
                Style::default().fg(crate::theme::GOLDFISH_GOLD),
            );
        }
    }
}
