//! Buffer-Painting Widgets
//!
//! Small helpers every screen shares: filled cards, centered text, chunky
//! buttons and the settings switch. All paint straight into a layer buffer.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use unicode_width::UnicodeWidthStr;

use crate::theme;

/// Fill a rectangle with a background color (a "card").
pub fn fill(buf: &mut Buffer, rect: Rect, bg: Color) {
    let clipped = rect.intersection(buf.area);
    for y in clipped.top()..clipped.bottom() {
        for x in clipped.left()..clipped.right() {
            buf[(x, y)].set_symbol(" ").set_bg(bg);
        }
    }
}

/// Draw `content` at (x, y), skipping positions outside the buffer.
///
/// `Buffer::set_string` panics on out-of-area start positions; every screen
/// paints through this guard instead so tiny terminals stay safe.
pub fn text(buf: &mut Buffer, x: u16, y: u16, content: &str, style: Style) {
    if x >= buf.area.right() || y >= buf.area.bottom() {
        return;
    }
    buf.set_string(x, y, content, style);
}

/// X coordinate that centers `text` inside `rect`.
#[must_use]
pub fn centered_x(rect: Rect, text: &str) -> u16 {
    let w = text.width() as u16;
    rect.x + rect.width.saturating_sub(w) / 2
}

/// Draw `content` centered on row `y` of `rect`.
pub fn centered_text(buf: &mut Buffer, rect: Rect, y: u16, content: &str, style: Style) {
    text(buf, centered_x(rect, content), y, content, style);
}

/// Wrap `content` into `rect`, centered line by line. Returns rows used.
pub fn wrapped_centered(buf: &mut Buffer, rect: Rect, content: &str, style: Style) -> u16 {
    let mut row = rect.y;
    for line in textwrap::wrap(content, rect.width.max(1) as usize) {
        if row >= rect.bottom() || row >= buf.area.bottom() {
            break;
        }
        text(buf, centered_x(rect, &line), row, &line, style);
        row += 1;
    }
    row - rect.y
}

/// A chunky three-row button.
pub struct Button<'a> {
    label: &'a str,
    bg: Color,
    selected: bool,
}

impl<'a> Button<'a> {
    /// A button with the given label and fill color.
    #[must_use]
    pub fn new(label: &'a str, bg: Color) -> Self {
        Self {
            label,
            bg,
            selected: false,
        }
    }

    /// Mark as the keyboard-focused button.
    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Paint into `rect` (uses up to three rows).
    pub fn render(&self, buf: &mut Buffer, rect: Rect) {
        fill(buf, rect, self.bg);

        let mut style = Style::default()
            .fg(theme::FOAM_WHITE)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD);
        let label = if self.selected {
            style = style.add_modifier(Modifier::UNDERLINED);
            format!("▸ {} ◂", self.label)
        } else {
            self.label.to_string()
        };

        let mid = rect.y + rect.height / 2;
        centered_text(buf, rect, mid, &label, style);
    }
}

/// The settings ON/OFF switch, one row, knob on the matching side.
pub fn switch(buf: &mut Buffer, x: u16, y: u16, on: bool) {
    let (label, bg) = if on {
        (" ON  ●", theme::SPLASH_GREEN)
    } else {
        ("●  OFF ", theme::DANGER_RED)
    };
    text(
        buf,
        x,
        y,
        label,
        Style::default()
            .fg(theme::FOAM_WHITE)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    );
}

/// Avatar token for the fixed two-avatar set.
#[must_use]
pub fn avatar(avatar_index: usize) -> (&'static str, Color) {
    if avatar_index % 2 == 0 {
        ("(•‿•)", theme::AVATAR_SKY)
    } else {
        ("(•◡•)", theme::AVATAR_CORAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fill_clips_to_the_buffer() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
        fill(&mut buf, Rect::new(2, 1, 10, 10), theme::DEEP_NAVY);
        assert_eq!(buf[(3, 1)].bg, theme::DEEP_NAVY);
        assert_eq!(buf[(0, 0)].bg, Color::Reset);
    }

    #[test]
    fn centered_text_is_centered() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 11, 1));
        let area = buf.area;
        centered_text(&mut buf, area, 0, "abc", Style::default());
        assert_eq!(buf[(4, 0)].symbol(), "a");
    }

    #[test]
    fn text_outside_the_buffer_is_dropped() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
        text(&mut buf, 0, 5, "below", Style::default());
        text(&mut buf, 9, 0, "beside", Style::default());
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }

    #[test]
    fn wrapped_text_respects_the_rect() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 5));
        let rows = wrapped_centered(
            &mut buf,
            Rect::new(0, 1, 10, 3),
            "one two three four five",
            Style::default(),
        );
        assert!(rows <= 3);
    }

    #[test]
    fn avatars_alternate() {
        assert_ne!(avatar(0).0, avatar(1).0);
        assert_eq!(avatar(0).0, avatar(2).0);
    }
}
