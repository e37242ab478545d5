//! Turn/Catch Engine
//!
//! The game-state machine for one Fun Splash round: players take turns
//! casting, each cast draws a weighted random outcome and a prompt for it,
//! the score accumulates per outcome, and the goldfish ends the round.
//!
//! # Design
//!
//! Every random decision goes through an injected [`rand::Rng`], so tests can
//! drive the engine with a seeded or scripted source instead of wall-clock
//! entropy. The session owns its state; UI surfaces only read it and call the
//! transition methods.
//!
//! # Move numbers
//!
//! The goldfish eligibility rule is keyed to `turn_index + 1`, where
//! `turn_index` also selects the current player by modulo over the roster.
//! The two uses share one counter on purpose; they advance together through
//! [`GameSession::advance`].

mod prompts;

pub use prompts::{FISH_PROMPTS, GOLDFISH_PROMPT, RING_PROMPTS, STUFF_PROMPTS};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::roster::{Player, Roster, MIN_PLAYERS};

/// First 1-based move number at which a goldfish can be drawn.
pub const GOLDFISH_ELIGIBLE_MOVE: u32 = 5;

/// Probability of drawing a goldfish once eligible.
pub const GOLDFISH_CHANCE: f64 = 0.2;

/// The three everyday outcomes, drawn uniformly when the goldfish misses.
const BASE_OUTCOMES: [CatchOutcome; 3] = [
    CatchOutcome::Ring,
    CatchOutcome::Fish,
    CatchOutcome::Chest,
];

/// What a cast pulled out of the water.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatchOutcome {
    /// A swim ring.
    Ring,
    /// An ordinary fish.
    Fish,
    /// A treasure chest.
    Chest,
    /// The goldfish. Catching it ends the round.
    Goldfish,
}

impl CatchOutcome {
    /// Display label for the outcome.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ring => "Swim ring",
            Self::Fish => "Fish",
            Self::Chest => "Treasure chest",
            Self::Goldfish => "Goldfish",
        }
    }

    /// Whether this outcome terminates the round.
    #[must_use]
    pub fn ends_round(self) -> bool {
        matches!(self, Self::Goldfish)
    }
}

/// Per-outcome catch counters for one game session.
///
/// Invariant: the sum of all counters equals the number of completed casts
/// since the session started (or was last restarted).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatchScore {
    /// Swim rings caught.
    pub ring: u32,
    /// Fish caught.
    pub fish: u32,
    /// Chests caught.
    pub chest: u32,
    /// Goldfish caught (0 or 1 in a normal round).
    pub goldfish: u32,
}

impl CatchScore {
    /// Record one catch. Increments exactly one counter.
    pub fn record(&mut self, outcome: CatchOutcome) {
        match outcome {
            CatchOutcome::Ring => self.ring += 1,
            CatchOutcome::Fish => self.fish += 1,
            CatchOutcome::Chest => self.chest += 1,
            CatchOutcome::Goldfish => self.goldfish += 1,
        }
    }

    /// Count for a single outcome.
    #[must_use]
    pub fn get(&self, outcome: CatchOutcome) -> u32 {
        match outcome {
            CatchOutcome::Ring => self.ring,
            CatchOutcome::Fish => self.fish,
            CatchOutcome::Chest => self.chest,
            CatchOutcome::Goldfish => self.goldfish,
        }
    }

    /// Total completed casts.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.ring + self.fish + self.chest + self.goldfish
    }

    /// Zero all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Phase of the gameplay state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// The current player is about to cast.
    #[default]
    Throwing,
    /// A catch is on display along with its prompt.
    Caught,
    /// The round is over; the score card is shown.
    Results,
}

/// Errors from starting a game session.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The roster is too small to play.
    #[error("a round needs at least {MIN_PLAYERS} players, got {found}")]
    NotEnoughPlayers {
        /// How many players were supplied.
        found: usize,
    },
}

/// Draw the outcome for one cast.
///
/// `move_number` is 1-based. Below [`GOLDFISH_ELIGIBLE_MOVE`] the goldfish
/// can never appear; from then on it has a [`GOLDFISH_CHANCE`] probability,
/// evaluated independently per cast, with the remainder uniform over the
/// three base outcomes.
pub fn draw_catch<R: Rng + ?Sized>(move_number: u32, rng: &mut R) -> CatchOutcome {
    if move_number >= GOLDFISH_ELIGIBLE_MOVE && rng.gen_bool(GOLDFISH_CHANCE) {
        return CatchOutcome::Goldfish;
    }
    BASE_OUTCOMES
        .choose(rng)
        .copied()
        .unwrap_or(CatchOutcome::Ring)
}

/// Pick the prompt that accompanies an outcome.
///
/// The goldfish message is fixed; the other outcomes draw uniformly from
/// their pools (the chest reuses the generic pool).
pub fn prompt_for<R: Rng + ?Sized>(outcome: CatchOutcome, rng: &mut R) -> &'static str {
    let pool: &[&'static str] = match outcome {
        CatchOutcome::Goldfish => return GOLDFISH_PROMPT,
        CatchOutcome::Ring => &RING_PROMPTS,
        CatchOutcome::Fish => &FISH_PROMPTS,
        CatchOutcome::Chest => &STUFF_PROMPTS,
    };
    pool.choose(rng).copied().unwrap_or(GOLDFISH_PROMPT)
}

/// One round of Fun Splash: roster, turn cycling, score, and phase.
///
/// Created when the gameplay screen mounts with a roster of at least two
/// players; discarded when the screen unmounts. All mutation goes through
/// [`cast`](Self::cast), [`advance`](Self::advance),
/// [`end_early`](Self::end_early) and [`restart`](Self::restart).
#[derive(Debug)]
pub struct GameSession<R: Rng = StdRng> {
    roster: Roster,
    rng: R,
    turn_index: u32,
    phase: GamePhase,
    last_catch: Option<CatchOutcome>,
    last_prompt: Option<&'static str>,
    score: CatchScore,
}

impl GameSession<StdRng> {
    /// Start a session with entropy-seeded randomness.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotEnoughPlayers`] for rosters below
    /// [`MIN_PLAYERS`]; the caller should redirect to roster collection.
    pub fn new(roster: Roster) -> Result<Self, EngineError> {
        Self::with_rng(roster, StdRng::from_entropy())
    }
}

impl<R: Rng> GameSession<R> {
    /// Start a session with an injected random source (for tests).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotEnoughPlayers`] for rosters below
    /// [`MIN_PLAYERS`].
    pub fn with_rng(roster: Roster, rng: R) -> Result<Self, EngineError> {
        if roster.len() < MIN_PLAYERS {
            return Err(EngineError::NotEnoughPlayers {
                found: roster.len(),
            });
        }
        Ok(Self {
            roster,
            rng,
            turn_index: 0,
            phase: GamePhase::Throwing,
            last_catch: None,
            last_prompt: None,
            score: CatchScore::default(),
        })
    }

    /// The current player casts.
    ///
    /// Transitions `Throwing -> Caught`, drawing the outcome and its prompt
    /// and recording the score. Ignored outside the `Throwing` phase.
    pub fn cast(&mut self) -> Option<CatchOutcome> {
        if self.phase != GamePhase::Throwing {
            return None;
        }
        let outcome = draw_catch(self.move_number(), &mut self.rng);
        self.last_prompt = Some(prompt_for(outcome, &mut self.rng));
        self.last_catch = Some(outcome);
        self.score.record(outcome);
        self.phase = GamePhase::Caught;
        tracing::debug!(
            player = %self.current_player().name,
            outcome = outcome.label(),
            move_number = self.move_number(),
            "cast resolved"
        );
        Some(outcome)
    }

    /// Move past the displayed catch.
    ///
    /// From `Caught`: a goldfish ends the round (`-> Results`); any other
    /// catch hands the rod to the next player (`-> Throwing`, turn index
    /// incremented). Ignored outside the `Caught` phase.
    pub fn advance(&mut self) {
        if self.phase != GamePhase::Caught {
            return;
        }
        if self.last_catch.is_some_and(CatchOutcome::ends_round) {
            self.phase = GamePhase::Results;
        } else {
            self.turn_index += 1;
            self.phase = GamePhase::Throwing;
        }
    }

    /// End the round now, regardless of the last outcome.
    ///
    /// Only meaningful from the `Caught` phase, where the screen offers an
    /// explicit "end the game" control.
    pub fn end_early(&mut self) {
        if self.phase == GamePhase::Caught {
            self.phase = GamePhase::Results;
        }
    }

    /// Reset to a fresh round with the same roster and random source.
    pub fn restart(&mut self) {
        self.score.reset();
        self.turn_index = 0;
        self.last_catch = None;
        self.last_prompt = None;
        self.phase = GamePhase::Throwing;
    }

    /// The player whose turn it is (also the catcher shown on results).
    #[must_use]
    pub fn current_player(&self) -> &Player {
        let idx = self.turn_index as usize % self.roster.len();
        &self.roster.players()[idx]
    }

    /// The roster this session was started with.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Zero-based cycling turn counter.
    #[must_use]
    pub fn turn_index(&self) -> u32 {
        self.turn_index
    }

    /// One-based move number used for goldfish eligibility.
    #[must_use]
    pub fn move_number(&self) -> u32 {
        self.turn_index + 1
    }

    /// The outcome of the most recent cast, if any.
    #[must_use]
    pub fn last_catch(&self) -> Option<CatchOutcome> {
        self.last_catch
    }

    /// The prompt drawn for the most recent cast, if any.
    #[must_use]
    pub fn last_prompt(&self) -> Option<&'static str> {
        self.last_prompt
    }

    /// The running score.
    #[must_use]
    pub fn score(&self) -> &CatchScore {
        &self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::mock::StepRng;

    fn two_player_roster() -> Roster {
        let mut roster = Roster::new();
        roster.add("Bo", 1);
        roster.add("Ann", 0);
        roster
    }

    /// An rng whose `gen_bool` always fires (all-zero bits land below any
    /// nonzero Bernoulli threshold) and whose uniform picks land on index 0.
    fn forced_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    #[test]
    fn no_goldfish_before_fifth_move() {
        let mut rng = StdRng::seed_from_u64(42);
        for move_number in 1..GOLDFISH_ELIGIBLE_MOVE {
            for _ in 0..2_000 {
                assert_ne!(
                    draw_catch(move_number, &mut rng),
                    CatchOutcome::Goldfish,
                    "goldfish drawn at move {move_number}"
                );
            }
        }
    }

    #[test]
    fn goldfish_rate_converges_after_fifth_move() {
        let mut rng = StdRng::seed_from_u64(7);
        let samples = 100_000u32;
        let mut score = CatchScore::default();
        for _ in 0..samples {
            score.record(draw_catch(GOLDFISH_ELIGIBLE_MOVE, &mut rng));
        }

        let gold_rate = f64::from(score.goldfish) / f64::from(samples);
        assert!(
            (gold_rate - GOLDFISH_CHANCE).abs() < 0.01,
            "goldfish rate {gold_rate} too far from {GOLDFISH_CHANCE}"
        );

        // The remaining 80% splits roughly evenly across the base outcomes.
        let rest = f64::from(samples - score.goldfish);
        for count in [score.ring, score.fish, score.chest] {
            let share = f64::from(count) / rest;
            assert!(
                (share - 1.0 / 3.0).abs() < 0.02,
                "base outcome share {share} not uniform"
            );
        }
    }

    #[test]
    fn forced_rng_always_lands_goldfish_once_eligible() {
        let mut rng = forced_rng();
        assert_eq!(draw_catch(5, &mut rng), CatchOutcome::Goldfish);
        // Below the eligibility line the branch is never evaluated.
        assert_ne!(draw_catch(4, &mut rng), CatchOutcome::Goldfish);
    }

    #[test]
    fn goldfish_prompt_is_fixed() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert_eq!(prompt_for(CatchOutcome::Goldfish, &mut rng), GOLDFISH_PROMPT);
        }
    }

    #[test]
    fn prompts_come_from_the_matching_pool() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            assert!(RING_PROMPTS.contains(&prompt_for(CatchOutcome::Ring, &mut rng)));
            assert!(FISH_PROMPTS.contains(&prompt_for(CatchOutcome::Fish, &mut rng)));
            // The chest reuses the generic pool.
            assert!(STUFF_PROMPTS.contains(&prompt_for(CatchOutcome::Chest, &mut rng)));
        }
    }

    #[test]
    fn score_is_order_independent_counting() {
        let sequence = [
            CatchOutcome::Ring,
            CatchOutcome::Fish,
            CatchOutcome::Ring,
            CatchOutcome::Chest,
            CatchOutcome::Goldfish,
            CatchOutcome::Fish,
            CatchOutcome::Ring,
        ];

        let mut forward = CatchScore::default();
        for outcome in sequence {
            forward.record(outcome);
        }
        let mut backward = CatchScore::default();
        for outcome in sequence.iter().rev() {
            backward.record(*outcome);
        }

        assert_eq!(forward, backward);
        assert_eq!(forward.ring, 3);
        assert_eq!(forward.fish, 2);
        assert_eq!(forward.chest, 1);
        assert_eq!(forward.goldfish, 1);
        assert_eq!(forward.total(), sequence.len() as u32);
    }

    #[test]
    fn session_refuses_short_rosters() {
        let mut roster = Roster::new();
        roster.add("Solo", 0);
        let err = GameSession::new(roster).unwrap_err();
        assert!(matches!(err, EngineError::NotEnoughPlayers { found: 1 }));

        let err = GameSession::new(Roster::new()).unwrap_err();
        assert!(matches!(err, EngineError::NotEnoughPlayers { found: 0 }));
    }

    #[test]
    fn session_cycles_players_and_counts_casts() {
        let mut session =
            GameSession::with_rng(two_player_roster(), StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(session.phase(), GamePhase::Throwing);
        assert_eq!(session.current_player().name, "Ann");

        // Four casts: goldfish is impossible, so the game keeps cycling.
        for expected_turn in 0..4u32 {
            assert_eq!(session.turn_index(), expected_turn);
            let outcome = session.cast().expect("cast in throwing phase");
            assert_ne!(outcome, CatchOutcome::Goldfish);
            assert_eq!(session.phase(), GamePhase::Caught);
            assert!(session.last_prompt().is_some());
            session.advance();
            assert_eq!(session.phase(), GamePhase::Throwing);
        }

        assert_eq!(session.score().total(), 4);
        assert_eq!(session.current_player().name, "Ann");
    }

    #[test]
    fn goldfish_on_move_five_ends_the_round() {
        let mut session = GameSession::with_rng(two_player_roster(), forced_rng()).unwrap();

        // Moves 1-4: the forced rng still cannot produce a goldfish.
        for _ in 0..4 {
            assert_ne!(session.cast(), Some(CatchOutcome::Goldfish));
            session.advance();
        }

        // Move 5: forced into the goldfish branch.
        assert_eq!(session.move_number(), 5);
        assert_eq!(session.cast(), Some(CatchOutcome::Goldfish));
        assert_eq!(session.last_prompt(), Some(GOLDFISH_PROMPT));
        session.advance();

        assert_eq!(session.phase(), GamePhase::Results);
        assert_eq!(session.score().goldfish, 1);
        // turn_index stayed on the catching player: 4 % 2 == 0 -> Ann.
        assert_eq!(session.current_player().name, "Ann");
    }

    #[test]
    fn end_early_reaches_results_without_a_goldfish() {
        let mut session =
            GameSession::with_rng(two_player_roster(), StdRng::seed_from_u64(9)).unwrap();
        session.cast();
        session.end_early();
        assert_eq!(session.phase(), GamePhase::Results);
        assert_eq!(session.score().goldfish, 0);
    }

    #[test]
    fn end_early_outside_caught_is_ignored() {
        let mut session =
            GameSession::with_rng(two_player_roster(), StdRng::seed_from_u64(9)).unwrap();
        session.end_early();
        assert_eq!(session.phase(), GamePhase::Throwing);
    }

    #[test]
    fn cast_outside_throwing_is_ignored() {
        let mut session =
            GameSession::with_rng(two_player_roster(), StdRng::seed_from_u64(1)).unwrap();
        session.cast();
        assert_eq!(session.cast(), None);
        assert_eq!(session.score().total(), 1);
    }

    #[test]
    fn restart_resets_to_initial_state() {
        let mut session = GameSession::with_rng(two_player_roster(), forced_rng()).unwrap();
        for _ in 0..5 {
            session.cast();
            session.advance();
        }
        assert_eq!(session.phase(), GamePhase::Results);

        session.restart();
        assert_eq!(session.phase(), GamePhase::Throwing);
        assert_eq!(session.turn_index(), 0);
        assert_eq!(session.score(), &CatchScore::default());
        assert_eq!(session.last_catch(), None);
        assert_eq!(session.last_prompt(), None);
    }
}
