//! Rising Bubble Field
//!
//! Most screens float a field of bubbles up from the bottom edge: random
//! size, start column, sideways drift, delay and duration, each looping
//! independently and re-randomizing when it wraps.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

use super::motion::{Easing, Timeline};
use crate::theme;

/// Bubble glyphs from small to large.
const GLYPHS: [char; 4] = ['\u{b7}', '\u{2218}', 'o', 'O'];

struct Bubble {
    start_col: u16,
    drift: i32,
    glyph: char,
    cycle: Timeline,
}

impl Bubble {
    fn spawn(rng: &mut StdRng, area: Rect) -> Self {
        let start_col = if area.width == 0 {
            0
        } else {
            rng.gen_range(0..area.width)
        };
        Self {
            start_col,
            drift: rng.gen_range(-2..=2),
            glyph: GLYPHS[rng.gen_range(0..GLYPHS.len())],
            cycle: Timeline::new(Duration::from_millis(rng.gen_range(3200..6500)))
                .with_delay(Duration::from_millis(rng.gen_range(0..1800)))
                .looping(),
        }
    }
}

/// A field of independently looping bubbles over an area.
///
/// Dropped with its screen, which stops the motion; nothing is scheduled
/// outside the field itself.
pub struct BubbleField {
    bubbles: Vec<Bubble>,
    area: Rect,
    rng: StdRng,
}

impl BubbleField {
    /// Spawn `count` bubbles over `area` with entropy-seeded randomness.
    #[must_use]
    pub fn new(count: usize, area: Rect) -> Self {
        Self::with_rng(count, area, StdRng::from_entropy())
    }

    /// Spawn with an explicit rng (for deterministic tests).
    #[must_use]
    pub fn with_rng(count: usize, area: Rect, mut rng: StdRng) -> Self {
        let bubbles = (0..count).map(|_| Bubble::spawn(&mut rng, area)).collect();
        Self { bubbles, area, rng }
    }

    /// Advance all bubbles; wrapped ones are re-randomized.
    pub fn update(&mut self, delta: Duration) {
        for bubble in &mut self.bubbles {
            if bubble.cycle.update(delta) {
                *bubble = Bubble::spawn(&mut self.rng, self.area);
            }
        }
    }

    /// Re-seed the field for a new area (terminal resize).
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        for bubble in &mut self.bubbles {
            *bubble = Bubble::spawn(&mut self.rng, area);
        }
    }

    /// Paint the field. Bubbles rise bottom-to-top, drifting sideways and
    /// fading in near the floor and out near the surface.
    pub fn render(&self, buf: &mut Buffer) {
        let area = self.area;
        if area.height == 0 || area.width == 0 {
            return;
        }

        for bubble in &self.bubbles {
            let p = bubble.cycle.progress();
            if p <= 0.0 {
                continue;
            }
            let eased = Easing::EaseOutQuad.apply(p);

            let rise = eased * f32::from(area.height);
            let y = f32::from(area.height - 1) - rise;
            if y < 0.0 {
                continue;
            }
            let x = i32::from(bubble.start_col) + (eased * bubble.drift as f32).round() as i32;
            if x < 0 || x >= i32::from(area.width) {
                continue;
            }

            let (cell_x, cell_y) = (area.x + x as u16, area.y + y as u16);
            if cell_x >= buf.area.right() || cell_y >= buf.area.bottom() {
                continue;
            }
            buf.set_string(
                cell_x,
                cell_y,
                bubble.glyph.to_string(),
                Style::default().fg(shade(p)),
            );
        }
    }
}

/// Opacity ramp 0 -> 0.6 -> 0.25 -> 0, approximated with three shades.
fn shade(progress: f32) -> Color {
    if progress < 0.1 {
        theme::BUBBLE_DIM
    } else if progress < 0.6 {
        theme::BUBBLE_BRIGHT
    } else if progress < 0.85 {
        theme::BUBBLE_FADED
    } else {
        theme::BUBBLE_DIM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(count: usize, area: Rect) -> BubbleField {
        BubbleField::with_rng(count, area, StdRng::seed_from_u64(99))
    }

    #[test]
    fn renders_within_bounds_for_many_frames() {
        let area = Rect::new(0, 0, 40, 12);
        let mut field = seeded(22, area);
        let mut buf = Buffer::empty(area);

        // Long run: every wrap re-randomizes, nothing may land outside.
        for _ in 0..600 {
            field.update(Duration::from_millis(100));
            buf.reset();
            field.render(&mut buf);
        }
    }

    #[test]
    fn tolerates_degenerate_areas() {
        for area in [Rect::new(0, 0, 0, 0), Rect::new(0, 0, 1, 1)] {
            let mut field = seeded(8, area);
            let mut buf = Buffer::empty(Rect::new(0, 0, 2, 2));
            field.update(Duration::from_millis(500));
            field.render(&mut buf);
        }
    }

    #[test]
    fn resize_moves_all_bubbles_into_the_new_area() {
        let mut field = seeded(16, Rect::new(0, 0, 80, 24));
        field.resize(Rect::new(0, 0, 10, 4));

        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 4));
        for _ in 0..300 {
            field.update(Duration::from_millis(100));
            buf.reset();
            field.render(&mut buf);
        }
    }
}
