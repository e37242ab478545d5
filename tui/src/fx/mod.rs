//! Terminal Animation Effects
//!
//! The game's animation vocabulary (rising bubbles, a bobbing fish sweeping
//! the loader, fade/slide screen entrances) as cell-grid effects. Everything
//! is frame-rate independent: effects advance by wall-clock delta and are
//! dropped with the screen that owns them, which is what makes scheduled
//! motion cancellable on teardown.

mod bubbles;
mod motion;

pub use bubbles::BubbleField;
pub use motion::{Easing, FadeSlide, FishSweep, Timeline};
