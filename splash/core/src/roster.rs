//! Roster Manager
//!
//! The in-memory, ordered list of players collected before a round starts.
//! Newest entries go first, matching the add-player screen's display order.
//! The roster is built on that screen and passed by value into the gameplay
//! session, where it becomes read-only.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum roster size required to start a round.
pub const MIN_PLAYERS: usize = 2;

/// Size of the fixed avatar set.
pub const AVATAR_COUNT: usize = 2;

/// Opaque unique player identifier, assigned at creation time.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    fn fresh() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One registered player. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique creation-time token.
    pub id: PlayerId,
    /// Non-empty display name.
    pub name: String,
    /// Index into the fixed avatar set.
    pub avatar_index: usize,
}

/// Ordered sequence of players, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a roster from players carried as a navigation payload.
    #[must_use]
    pub fn from_players(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Add a player, prepending them to the list.
    ///
    /// The name is trimmed; a blank name is rejected and the roster is left
    /// unchanged. The avatar index wraps into the fixed avatar set. Returns
    /// the id of the new player, or `None` if the add was rejected.
    pub fn add(&mut self, name: &str, avatar_index: usize) -> Option<PlayerId> {
        let clean = name.trim();
        if clean.is_empty() {
            return None;
        }
        let player = Player {
            id: PlayerId::fresh(),
            name: clean.to_string(),
            avatar_index: avatar_index % AVATAR_COUNT,
        };
        let id = player.id.clone();
        self.players.insert(0, player);
        Some(id)
    }

    /// Remove the player with the given id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &PlayerId) -> bool {
        let before = self.players.len();
        self.players.retain(|p| &p.id != id);
        self.players.len() != before
    }

    /// Whether the roster is large enough to start a round.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.players.len() >= MIN_PLAYERS
    }

    /// Number of registered players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// The players, newest first.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Consume the roster, yielding the players for a navigation payload.
    #[must_use]
    pub fn into_players(self) -> Vec<Player> {
        self.players
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_names_are_rejected() {
        let mut roster = Roster::new();
        assert_eq!(roster.add("", 0), None);
        assert_eq!(roster.add("   ", 0), None);
        assert_eq!(roster.len(), 0);
    }

    #[test]
    fn add_gates_start_at_two_players() {
        let mut roster = Roster::new();
        assert!(roster.add("Cy", 1).is_some());
        assert_eq!(roster.len(), 1);
        assert!(!roster.can_start());

        assert!(roster.add("Dee", 0).is_some());
        assert_eq!(roster.len(), 2);
        assert!(roster.can_start());
    }

    #[test]
    fn names_are_trimmed_and_newest_goes_first() {
        let mut roster = Roster::new();
        roster.add("  Ann  ", 0);
        roster.add("Bo", 1);
        assert_eq!(roster.players()[0].name, "Bo");
        assert_eq!(roster.players()[1].name, "Ann");
    }

    #[test]
    fn avatar_index_wraps_into_the_fixed_set() {
        let mut roster = Roster::new();
        roster.add("Ann", AVATAR_COUNT + 1);
        assert_eq!(roster.players()[0].avatar_index, 1);
    }

    #[test]
    fn ids_are_unique() {
        let mut roster = Roster::new();
        roster.add("Ann", 0);
        roster.add("Ann", 0);
        assert_ne!(roster.players()[0].id, roster.players()[1].id);
    }

    #[test]
    fn remove_by_id() {
        let mut roster = Roster::new();
        let ann = roster.add("Ann", 0).unwrap();
        roster.add("Bo", 1);
        assert!(roster.remove(&ann));
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.players()[0].name, "Bo");
    }

    #[test]
    fn removing_an_unknown_id_changes_nothing() {
        let mut roster = Roster::new();
        roster.add("Ann", 0);
        let snapshot = roster.clone();

        let ghost = PlayerId::fresh();
        assert!(!roster.remove(&ghost));
        assert_eq!(roster, snapshot);
    }
}
