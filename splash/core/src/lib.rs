//! Splash Core - Headless Game Logic for Fun Splash
//!
//! This crate provides the rules and session state for Fun Splash, completely
//! independent of any UI framework. It can drive a TUI, web UI, native GUI,
//! or run headless for testing.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      UI Surfaces                          │
//! │      ┌─────────┐   ┌─────────┐   ┌──────────────┐        │
//! │      │   TUI   │   │   GUI   │   │   Headless   │        │
//! │      │(ratatui)│   │         │   │  (testing)   │        │
//! │      └────┬────┘   └────┬────┘   └──────┬───────┘        │
//! │           └─────────────┴───────────────┘                 │
//! └───────────────────────────┼──────────────────────────────┘
//!                             │
//! ┌───────────────────────────┼──────────────────────────────┐
//! │                     SPLASH CORE                           │
//! │  ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────┐  │
//! │  │   Game   │  │  Roster  │  │  Prefs   │  │  Audio   │  │
//! │  │ Session  │  │          │  │  Store   │  │ Control  │  │
//! │  └──────────┘  └──────────┘  └──────────┘  └──────────┘  │
//! │        ┌───────────┐              ┌───────────┐           │
//! │        │ Navigator │              │   Share   │           │
//! │        └───────────┘              └───────────┘           │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`GameSession`]: the turn/catch state machine for one round
//! - [`Roster`]: the ordered set of registered players
//! - [`PreferenceStore`]: durable music/vibration flags
//! - [`AudioController`]: single-flight background-music lifecycle
//! - [`Navigator`]: the screen stack with typed parameters
//!
//! # Module Overview
//!
//! - [`engine`]: catch outcomes, prompt pools, score, session state machine
//! - [`roster`]: players and the pre-game roster
//! - [`prefs`]: durable boolean preferences
//! - [`audio`]: background-music lifecycle and the audio sink seam
//! - [`nav`]: screen graph and navigation stack
//! - [`share`]: results summary formatting and the share surface seam
//! - [`config`]: TOML + environment configuration
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework. It's pure game logic that can be used anywhere.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod audio;
pub mod config;
pub mod engine;
pub mod nav;
pub mod prefs;
pub mod roster;
pub mod share;

// Re-exports for convenience
pub use audio::{AudioController, AudioError, AudioLifecycle, AudioSink, NullSink, TrackSpec};
pub use config::{default_config_path, load_config, ConfigError, ConfigSource, SplashConfig};
pub use engine::{
    draw_catch, prompt_for, CatchOutcome, CatchScore, EngineError, GamePhase, GameSession,
};
pub use nav::{Navigator, Screen};
pub use prefs::{PreferenceStore, PrefsError, MUSIC_KEY, VIBRATION_KEY};
pub use roster::{Player, PlayerId, Roster, AVATAR_COUNT, MIN_PLAYERS};
pub use share::{results_summary, FileShare, ShareError, ShareSurface};
