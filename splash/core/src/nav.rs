//! Navigation Graph
//!
//! The fixed set of screens and the stack that moves between them. Screens
//! carry their parameters as enum payloads, so a route is a value: the
//! gameplay screen travels with its roster, the loader with an optional
//! forward destination.
//!
//! The navigator is deliberately dumb. It does not validate payloads; a
//! gameplay route with too few players is handled by the gameplay screen as
//! a recoverable redirect state, not rejected here.

use serde::{Deserialize, Serialize};

use crate::roster::Player;

/// A screen in the navigation graph, with its typed parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Splash loader; advances to `next` (or onboarding) after its hold.
    Loader {
        /// Explicit forward destination, when not the default onboarding.
        next: Option<Box<Screen>>,
    },
    /// Three-step introduction.
    Onboarding,
    /// Main menu.
    Home,
    /// Roster collection.
    AddPlayer,
    /// How-to-play page.
    GameRules,
    /// About page.
    Info,
    /// Music and vibration toggles.
    Settings,
    /// The game itself, parameterized by the roster it plays with.
    Gameplay {
        /// Players passed by value from roster collection.
        players: Vec<Player>,
    },
}

impl Screen {
    /// The loader with its default forward destination.
    #[must_use]
    pub fn loader() -> Self {
        Self::Loader { next: None }
    }

    /// Title shown in the status line.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Loader { .. } => "Fun Splash",
            Self::Onboarding => "Welcome",
            Self::Home => "Home",
            Self::AddPlayer => "Add players",
            Self::GameRules => "Game rules",
            Self::Info => "Information",
            Self::Settings => "Settings",
            Self::Gameplay { .. } => "Gameplay",
        }
    }
}

/// Stack of screens with forward push, replace, and back.
#[derive(Clone, Debug)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Navigator {
    /// Start a navigator on an initial screen.
    #[must_use]
    pub fn new(initial: Screen) -> Self {
        Self {
            stack: vec![initial],
        }
    }

    /// The screen currently on top.
    #[must_use]
    pub fn current(&self) -> &Screen {
        // The stack never empties: back() refuses to pop the root.
        &self.stack[self.stack.len() - 1]
    }

    /// Push a screen on top of the current one.
    pub fn push(&mut self, screen: Screen) {
        tracing::debug!(to = screen.title(), "navigate: push");
        self.stack.push(screen);
    }

    /// Replace the current screen (pop + push), so back skips it.
    pub fn replace(&mut self, screen: Screen) {
        tracing::debug!(to = screen.title(), "navigate: replace");
        self.stack.pop();
        self.stack.push(screen);
    }

    /// Pop back to the previous screen. A no-op at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        tracing::debug!(to = self.current().title(), "navigate: back");
        true
    }

    /// Current stack depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Screen::loader())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn push_then_back_returns_to_the_previous_screen() {
        let mut nav = Navigator::new(Screen::Home);
        nav.push(Screen::Settings);
        assert_eq!(nav.current(), &Screen::Settings);

        assert!(nav.back());
        assert_eq!(nav.current(), &Screen::Home);
    }

    #[test]
    fn replace_is_skipped_by_back() {
        // Home -> push AddPlayer -> replace Gameplay; back lands on Home.
        let mut nav = Navigator::new(Screen::Home);
        nav.push(Screen::AddPlayer);
        nav.replace(Screen::Gameplay { players: vec![] });
        assert_eq!(nav.depth(), 2);

        assert!(nav.back());
        assert_eq!(nav.current(), &Screen::Home);
    }

    #[test]
    fn back_at_the_root_is_a_noop() {
        let mut nav = Navigator::new(Screen::Home);
        assert!(!nav.back());
        assert_eq!(nav.current(), &Screen::Home);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn startup_flow_replaces_through_to_home() {
        let mut nav = Navigator::default();
        assert!(matches!(nav.current(), Screen::Loader { .. }));

        nav.replace(Screen::Onboarding);
        nav.replace(Screen::Home);
        assert_eq!(nav.current(), &Screen::Home);
        // The loader and onboarding left no history behind.
        assert_eq!(nav.depth(), 1);
    }
}
