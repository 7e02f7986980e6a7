use rand::Rng;

use crate::hand_log::HandLog;

use super::decision::{DecisionSource, HandLogSource};
use super::driver::HandReplay;
use super::errors::ReplayBuilderError;
use super::game_state::GameStateBuilder;
use super::historian::Historian;

/// # HandReplayBuilder
///
/// Builder for a [`HandReplay`]. A hand log is required; everything else
/// has sensible defaults. The log is validated here, so a malformed hand
/// is rejected before any state exists.
///
/// By default the decision source is a [`HandLogSource`] replaying the
/// same log, which is the engine's primary mode. Swapping in another
/// [`DecisionSource`] replays the hand setup against generated play
/// instead of recorded history.
///
/// ## Examples
///
/// ```
/// use holdem_replay::hand_log::{HandLog, LoggedAction, Seat};
/// use holdem_replay::replay::{ActionKind, HandReplayBuilder, Street};
///
/// let log = HandLog {
///     seats: vec![Seat::new("seat1", 100.0), Seat::new("seat2", 100.0)],
///     small_blind: 5.0,
///     big_blind: 10.0,
///     dealer_idx: 0,
///     board: Default::default(),
///     actions: vec![LoggedAction::new(Street::Preflop, "seat1", ActionKind::Fold)],
/// };
///
/// let mut replay = HandReplayBuilder::default()
///     .hand_log(log)
///     .build()
///     .unwrap();
/// let result = replay.run();
/// assert!(result.outcome.is_completed());
/// ```
pub struct HandReplayBuilder {
    hand_log: Option<HandLog>,
    decision_source: Option<Box<dyn DecisionSource>>,
    historians: Vec<Box<dyn Historian>>,
    panic_on_historian_error: bool,
}

impl HandReplayBuilder {
    /// Set the recorded hand to replay. Required.
    pub fn hand_log(mut self, hand_log: HandLog) -> Self {
        self.hand_log = Some(hand_log);
        self
    }

    /// Set the decision source. If not set, the recorded log itself is
    /// replayed via [`HandLogSource`].
    pub fn decision_source(mut self, decision_source: Box<dyn DecisionSource>) -> Self {
        self.decision_source = Some(decision_source);
        self
    }

    /// Set the historians for the replay created by this builder.
    pub fn historians(mut self, historians: Vec<Box<dyn Historian>>) -> Self {
        self.historians = historians;
        self
    }

    /// Should the replay panic if a historian errors.
    /// When false the failing historian is dropped, recorded in the logs,
    /// and the replay continues.
    pub fn panic_on_historian_error(mut self, panic_on_historian_error: bool) -> Self {
        self.panic_on_historian_error = panic_on_historian_error;
        self
    }

    /// Validate the log, derive the starting game state, and create the
    /// replay.
    ///
    /// Uses the OS entropy source for replay ID generation. For hot paths
    /// where many replays are created, prefer `build_with_rng` to avoid
    /// repeated entropy syscalls.
    pub fn build(self) -> Result<HandReplay, ReplayBuilderError> {
        let mut rand = rand::rng();
        self.build_with_rng(&mut rand)
    }

    /// Build the replay using the provided RNG for ID generation.
    pub fn build_with_rng<R: Rng>(self, rng: &mut R) -> Result<HandReplay, ReplayBuilderError> {
        let hand_log = self.hand_log.ok_or(ReplayBuilderError::MissingHandLog)?;
        hand_log.validate()?;

        let seats = hand_log
            .seats
            .iter()
            .map(|seat| (seat.name.clone(), seat.stack))
            .collect();
        let game_state = GameStateBuilder::new()
            .seats(seats)
            .blinds(hand_log.big_blind, hand_log.small_blind)
            .dealer_idx(hand_log.dealer_idx)
            .build()?;

        let decision_source = self
            .decision_source
            .unwrap_or_else(|| Box::new(HandLogSource::new(&hand_log)));

        let id = rng.random::<u128>();

        Ok(HandReplay::new(
            game_state,
            hand_log.board.clone(),
            decision_source,
            self.historians,
            self.panic_on_historian_error,
            id,
        ))
    }
}

impl Default for HandReplayBuilder {
    fn default() -> Self {
        Self {
            hand_log: None,
            decision_source: None,
            historians: vec![],
            panic_on_historian_error: true,
        }
    }
}
