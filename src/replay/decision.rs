//! Decision sources answer one question: what does this player do now?
//!
//! The primary implementation replays a recorded hand log, bridging the
//! gaps a real log leaves (omitted checks) to the strict turn order the
//! validator enforces. A policy or strategy engine can implement the same
//! contract to generate novel play instead of replaying history.
use tracing::{debug, instrument, trace};

use crate::hand_log::HandLog;

use super::action::{ActionKind, Decision};
use super::game_state::GameState;

/// The contract the replay driver depends on.
///
/// Returning `None` means "no action for this player now". The driver
/// treats that as non-progress and counts it against the loop guard; it is
/// never silently turned into a fold, because a defaulted fold would mask
/// the interface bug that produced the missing decision.
pub trait DecisionSource {
    /// The decision for the player at `idx`, or `None` when the source
    /// has nothing for them.
    fn next_decision(&mut self, idx: usize, game_state: &GameState) -> Option<Decision>;

    /// Called by the driver when the decision just returned for `idx` was
    /// rejected by the validator.
    ///
    /// Sources backed by a recorded log must un-consume here: a rejected
    /// action does not advance the log pointer, so the identical entry is
    /// proposed again and the repeated rejections trip the loop guard.
    fn decision_rejected(&mut self, _idx: usize) {}

    fn name(&self) -> &str;
}

/// Replays a recorded hand log in order.
///
/// When the player being asked has no matching log entry, the street is
/// postflop, and nothing has been wagered yet, the log omitted an implicit
/// check: a `CHECK` is synthesized without consuming the log. The rule is
/// uniform. It does not matter what the next logged entry is, only that
/// it is not for the asked player.
#[derive(Debug, Clone)]
pub struct HandLogSource {
    name: String,
    actions: Vec<crate::hand_log::LoggedAction>,
    cursor: usize,
    injected_checks: usize,
    last_was_consumed: bool,
}

impl HandLogSource {
    pub fn new(log: &HandLog) -> Self {
        Self {
            name: "hand-log".to_string(),
            actions: log.actions.clone(),
            cursor: 0,
            injected_checks: 0,
            last_was_consumed: false,
        }
    }

    /// How many log entries have not been consumed yet.
    pub fn remaining(&self) -> usize {
        self.actions.len().saturating_sub(self.cursor)
    }

    /// How many implicit checks have been synthesized so far.
    pub fn injected_checks(&self) -> usize {
        self.injected_checks
    }
}

impl DecisionSource for HandLogSource {
    #[instrument(level = "trace", skip(self, game_state), fields(source = %self.name))]
    fn next_decision(&mut self, idx: usize, game_state: &GameState) -> Option<Decision> {
        self.last_was_consumed = false;
        let seat_name = game_state.seat_names.get(idx)?;

        let matches = self.actions.get(self.cursor).is_some_and(|entry| {
            entry.seat == *seat_name && entry.street == game_state.street
        });

        if matches {
            let entry = &self.actions[self.cursor];
            self.cursor += 1;
            self.last_was_consumed = true;
            trace!(cursor = self.cursor, kind = ?entry.kind, "replaying logged action");
            return Some(Decision {
                kind: entry.kind,
                amount: entry.amount,
            });
        }

        // The log has nothing for this player right now. Postflop with no
        // wager open, that means the log omitted their check.
        if game_state.street.is_postflop() && game_state.current_round_bet() == 0.0 {
            self.injected_checks += 1;
            debug!(
                seat = %seat_name,
                street = %game_state.street,
                "synthesizing implicit check"
            );
            return Some(Decision::of(ActionKind::Check));
        }

        debug!(seat = %seat_name, street = %game_state.street, "no decision available");
        None
    }

    fn decision_rejected(&mut self, _idx: usize) {
        // Rejected actions never advance the log. Synthesized checks were
        // never in the log to begin with.
        if self.last_was_consumed && self.cursor > 0 {
            self.cursor -= 1;
            self.last_was_consumed = false;
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Feeds each seat a fixed script of decisions.
///
/// Useful for tests and as a stand-in for a strategy engine. An exhausted
/// script yields `None` rather than any default action.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    name: String,
    scripts: Vec<Vec<Decision>>,
    cursors: Vec<usize>,
}

impl ScriptedSource {
    pub fn new(name: impl Into<String>, scripts: Vec<Vec<Decision>>) -> Self {
        let cursors = vec![0; scripts.len()];
        Self {
            name: name.into(),
            scripts,
            cursors,
        }
    }
}

impl DecisionSource for ScriptedSource {
    #[instrument(level = "trace", skip(self, _game_state), fields(source = %self.name))]
    fn next_decision(&mut self, idx: usize, _game_state: &GameState) -> Option<Decision> {
        let script = self.scripts.get(idx)?;
        let cursor = self.cursors.get_mut(idx)?;
        match script.get(*cursor) {
            Some(decision) => {
                *cursor += 1;
                trace!(idx, cursor = *cursor, ?decision, "replaying scripted decision");
                Some(*decision)
            }
            None => {
                debug!(idx, script_len = script.len(), "script exhausted");
                None
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
