//! Timelines, Easing, and the Stock Motions
//!
//! [`Timeline`] is the one clock primitive: delay + duration + optional
//! looping, advanced by delta time. The stock motions ([`FadeSlide`],
//! [`FishSweep`]) wrap timelines with the game's standard curves.

use std::time::Duration;

/// Easing functions for smooth animation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed
    #[default]
    Linear,
    /// Fast start, slow end (the entrance curve)
    EaseOutQuad,
    /// Slow start and end (the fish sweep curve)
    EaseInOutQuad,
    /// Sinusoidal in-out (the bob curve)
    SineInOut,
}

impl Easing {
    /// Apply the easing to a progress value (0.0 to 1.0)
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::SineInOut => 0.5 - 0.5 * (std::f32::consts::PI * t).cos(),
        }
    }
}

/// A delay + duration clock, advanced by delta time.
///
/// Looping timelines replay their delay each cycle, so a staggered effect
/// keeps its stagger on every pass.
#[derive(Clone, Debug)]
pub struct Timeline {
    delay: Duration,
    duration: Duration,
    elapsed: Duration,
    looping: bool,
}

impl Timeline {
    /// A one-shot timeline with no delay.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            delay: Duration::ZERO,
            duration,
            elapsed: Duration::ZERO,
            looping: false,
        }
    }

    /// Add a start delay.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Repeat forever, replaying the delay each cycle.
    #[must_use]
    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    /// Advance the clock. Returns `true` when a looping timeline wrapped
    /// around on this update (the moment to re-randomize a bubble).
    pub fn update(&mut self, delta: Duration) -> bool {
        self.elapsed += delta;
        let cycle = self.delay + self.duration;
        if self.looping && !cycle.is_zero() && self.elapsed >= cycle {
            while self.elapsed >= cycle {
                self.elapsed -= cycle;
            }
            return true;
        }
        false
    }

    /// Linear progress through the duration, 0.0 before the delay has
    /// passed, clamped to 1.0 at the end.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.elapsed <= self.delay || self.duration.is_zero() {
            return 0.0;
        }
        let run = (self.elapsed - self.delay).as_secs_f32();
        (run / self.duration.as_secs_f32()).min(1.0)
    }

    /// Whether a one-shot timeline has run its course.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.looping && self.elapsed >= self.delay + self.duration
    }

    /// Rewind to the start.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

/// The screen-entrance motion: content fades in while sliding up a couple
/// of rows over 420ms, ease-out.
#[derive(Clone, Debug)]
pub struct FadeSlide {
    timeline: Timeline,
}

impl FadeSlide {
    /// Entrance duration shared by every screen.
    pub const DURATION: Duration = Duration::from_millis(420);

    /// Start a fresh entrance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeline: Timeline::new(Self::DURATION),
        }
    }

    /// Advance the entrance.
    pub fn update(&mut self, delta: Duration) {
        self.timeline.update(delta);
    }

    /// Replay from the start (phase / step changes).
    pub fn reset(&mut self) {
        self.timeline.reset();
    }

    /// Rows the content still sits below its resting place.
    #[must_use]
    pub fn offset(&self) -> u16 {
        let eased = Easing::EaseOutQuad.apply(self.timeline.progress());
        ((1.0 - eased) * 2.0).round() as u16
    }

    /// Whether the content should still render dimmed.
    #[must_use]
    pub fn dimmed(&self) -> bool {
        self.timeline.progress() < 0.55
    }
}

impl Default for FadeSlide {
    fn default() -> Self {
        Self::new()
    }
}

/// The loader fish: sweeps across the full width over five seconds with a
/// gentle sinusoidal bob.
#[derive(Clone, Debug)]
pub struct FishSweep {
    sweep: Timeline,
    bob: Timeline,
}

impl FishSweep {
    /// Full crossing time.
    pub const SWEEP: Duration = Duration::from_secs(5);
    /// One full bob (down and back up).
    pub const BOB: Duration = Duration::from_millis(2800);

    /// Start a sweep from off-screen left.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sweep: Timeline::new(Self::SWEEP),
            bob: Timeline::new(Self::BOB).looping(),
        }
    }

    /// Advance both clocks.
    pub fn update(&mut self, delta: Duration) {
        self.sweep.update(delta);
        self.bob.update(delta);
    }

    /// Horizontal position for a sprite of `sprite_width` crossing
    /// `area_width` columns. Starts fully off-screen left, ends fully
    /// off-screen right.
    #[must_use]
    pub fn x(&self, area_width: u16, sprite_width: u16) -> i32 {
        let eased = Easing::EaseInOutQuad.apply(self.sweep.progress());
        let travel = f32::from(area_width) + f32::from(sprite_width);
        (eased * travel).round() as i32 - i32::from(sprite_width)
    }

    /// Vertical bob offset in rows (-1, 0 or 1).
    #[must_use]
    pub fn bob(&self) -> i32 {
        let wave = (self.bob.progress() * std::f32::consts::TAU).sin();
        wave.round() as i32
    }
}

impl Default for FishSweep {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn easing_endpoints_hold() {
        for easing in [
            Easing::Linear,
            Easing::EaseOutQuad,
            Easing::EaseInOutQuad,
            Easing::SineInOut,
        ] {
            assert!(easing.apply(0.0).abs() < 0.001, "{easing:?} at 0.0");
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{easing:?} at 1.0");
        }
    }

    #[test]
    fn timeline_waits_through_its_delay() {
        let mut t = Timeline::new(Duration::from_millis(100)).with_delay(Duration::from_millis(50));
        t.update(Duration::from_millis(40));
        assert_eq!(t.progress(), 0.0);

        t.update(Duration::from_millis(60));
        assert!((t.progress() - 0.5).abs() < 0.01);

        t.update(Duration::from_millis(100));
        assert_eq!(t.progress(), 1.0);
        assert!(t.is_finished());
    }

    #[test]
    fn looping_timeline_reports_its_wrap() {
        let mut t = Timeline::new(Duration::from_millis(100)).looping();
        assert!(!t.update(Duration::from_millis(60)));
        assert!(t.update(Duration::from_millis(60)));
        // After the wrap the clock carries the overshoot.
        assert!((t.progress() - 0.2).abs() < 0.01);
    }

    #[test]
    fn fade_slide_settles_at_rest() {
        let mut fade = FadeSlide::new();
        assert_eq!(fade.offset(), 2);
        assert!(fade.dimmed());

        fade.update(Duration::from_millis(500));
        assert_eq!(fade.offset(), 0);
        assert!(!fade.dimmed());
    }

    #[test]
    fn fish_crosses_the_whole_width() {
        let mut fish = FishSweep::new();
        // Fully hidden on the left at the start.
        assert_eq!(fish.x(80, 10), -10);

        fish.update(Duration::from_secs(5));
        // Fully off on the right at the end.
        assert_eq!(fish.x(80, 10), 80);
    }

    #[test]
    fn bob_stays_within_one_row() {
        let mut fish = FishSweep::new();
        for _ in 0..100 {
            fish.update(Duration::from_millis(70));
            assert!(fish.bob().abs() <= 1);
        }
    }
}
