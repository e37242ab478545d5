//! Theme and Colors
//!
//! Fun Splash's underwater palette, lifted from the game's art direction:
//! deep navy water, bright splash green for primary actions, raspberry for
//! the risky ones.

use ratatui::style::Color;

// ============================================================================
// Water / Background
// ============================================================================

/// Deep water background for every screen
pub const WATER: Color = Color::Rgb(8, 34, 60);

/// Bubble at full brightness
pub const BUBBLE_BRIGHT: Color = Color::Rgb(200, 230, 255);

/// Bubble mid-fade
pub const BUBBLE_FADED: Color = Color::Rgb(120, 160, 200);

/// Bubble almost gone
pub const BUBBLE_DIM: Color = Color::Rgb(55, 90, 125);

// ============================================================================
// Surfaces (cards, boxes, rows)
// ============================================================================

/// Framed card / task box navy
pub const DEEP_NAVY: Color = Color::Rgb(11, 36, 56);

/// Add-player card background
pub const CARD_NAVY: Color = Color::Rgb(0, 25, 48);

/// Input fields and list rows
pub const INPUT_NAVY: Color = Color::Rgb(14, 34, 51);

/// Results card background
pub const RESULTS_NAVY: Color = Color::Rgb(13, 49, 82);

/// Avatar picker pill buttons
pub const PILL_BLUE: Color = Color::Rgb(25, 59, 85);

// ============================================================================
// Actions
// ============================================================================

/// Primary action green
pub const SPLASH_GREEN: Color = Color::Rgb(56, 197, 88);

/// Primary green, disabled
pub const SPLASH_GREEN_DIM: Color = Color::Rgb(26, 88, 42);

/// Add-player CTA raspberry
pub const RASPBERRY: Color = Color::Rgb(197, 56, 87);

/// Raspberry, disabled
pub const RASPBERRY_DIM: Color = Color::Rgb(88, 28, 42);

/// Secondary action steel blue
pub const STEEL_BLUE: Color = Color::Rgb(77, 91, 148);

/// Destructive red (delete rows, switches off)
pub const DANGER_RED: Color = Color::Rgb(217, 83, 79);

// ============================================================================
// Text
// ============================================================================

/// Headline / body white
pub const FOAM_WHITE: Color = Color::Rgb(240, 248, 255);

/// Secondary text
pub const TEXT_DIM: Color = Color::Rgb(165, 192, 214);

/// Status bar text
pub const STATUS_GRAY: Color = Color::Rgb(110, 130, 150);

// ============================================================================
// Catches
// ============================================================================

/// Swim ring yellow
pub const RING_YELLOW: Color = Color::Rgb(255, 204, 64);

/// Ordinary fish blue
pub const FISH_BLUE: Color = Color::Rgb(100, 180, 255);

/// Treasure chest brown
pub const CHEST_BROWN: Color = Color::Rgb(199, 133, 66);

/// The goldfish
pub const GOLDFISH_GOLD: Color = Color::Rgb(255, 185, 30);

/// Avatar tint, first of the fixed pair
pub const AVATAR_SKY: Color = Color::Rgb(122, 192, 255);

/// Avatar tint, second of the fixed pair
pub const AVATAR_CORAL: Color = Color::Rgb(255, 150, 180);
