//! The single source of truth for "is this action legal right now".
//!
//! Validation never mutates state and never panics: an illegal action is
//! an [`ActionError`] value the driver records and moves on from. Amount
//! resolution is total: every accepted action comes back as a
//! [`ResolvedAction`] with concrete chip amounts, so an absent amount can
//! never reach the mutation path.
use super::action::{ActionKind, Decision};
use super::errors::ActionError;
use super::game_state::{chips_eq, chips_gt, GameState};

/// A validated action with all amounts resolved to concrete chips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedAction {
    Fold,
    Check,
    /// Put chips in. `to` is the player's street total after the action,
    /// `extra` is the incremental amount leaving their stack.
    Wager { to: f32, extra: f32 },
}

/// Decide whether `decision` is legal for the player at `idx` and resolve
/// its amounts.
///
/// Preconditions follow the betting decision table:
/// - every action requires the player to currently owe an action
/// - CHECK requires no outstanding wager to match
/// - CALL resolves an absent amount to the exact outstanding difference,
///   capped at the stack; a zero difference is treated exactly as CHECK
/// - BET requires an unopened street and a positive amount within stack
/// - RAISE requires an open street and a raise-to total above the current
///   wager level, within the player's reach
/// - ALL_IN resolves to the player's entire remaining reach
pub fn validate(
    game_state: &GameState,
    idx: usize,
    decision: Decision,
) -> Result<ResolvedAction, ActionError> {
    if idx >= game_state.num_players || !game_state.round_data.needs_action.get(idx) {
        return Err(ActionError::OutOfTurn);
    }

    if let Some(amount) = decision.amount {
        if amount.is_nan() || amount.is_sign_negative() {
            return Err(ActionError::InvalidAmount);
        }
    }

    let street_bet = game_state.round_data.bet;
    let player_bet = game_state.current_round_player_bet(idx);
    let stack = game_state.stacks[idx];
    let owed = (street_bet - player_bet).max(0.0);

    match decision.kind {
        ActionKind::Fold => Ok(ResolvedAction::Fold),

        ActionKind::Check => {
            if chips_eq(owed, 0.0) {
                Ok(ResolvedAction::Check)
            } else {
                Err(ActionError::CheckFacingWager)
            }
        }

        ActionKind::Call => {
            // A call with nothing outstanding is a check, and must be
            // treated identically for validity.
            if chips_eq(owed, 0.0) {
                return Ok(ResolvedAction::Check);
            }
            if stack <= 0.0 {
                return Err(ActionError::NoChips);
            }
            // Resolve the amount here, always. A short call is an all-in
            // for less.
            let extra = owed.min(stack);
            if let Some(amount) = decision.amount {
                if !chips_eq(amount, extra) {
                    return Err(ActionError::CallMismatch);
                }
            }
            Ok(ResolvedAction::Wager {
                to: player_bet + extra,
                extra,
            })
        }

        ActionKind::Bet => {
            if chips_gt(street_bet, 0.0) {
                return Err(ActionError::BetFacingWager);
            }
            let amount = decision.amount.ok_or(ActionError::MissingAmount)?;
            if amount <= 0.0 {
                return Err(ActionError::BetNotPositive);
            }
            if chips_gt(amount, stack) {
                return Err(ActionError::ExceedsStack);
            }
            let extra = amount.min(stack);
            Ok(ResolvedAction::Wager { to: amount, extra })
        }

        ActionKind::Raise => {
            if chips_eq(street_bet, 0.0) {
                return Err(ActionError::RaiseWithoutWager);
            }
            let amount = decision.amount.ok_or(ActionError::MissingAmount)?;
            if !chips_gt(amount, street_bet) {
                return Err(ActionError::RaiseBelowWager);
            }
            if chips_gt(amount, stack + player_bet) {
                return Err(ActionError::ExceedsStack);
            }
            let extra = (amount - player_bet).min(stack);
            Ok(ResolvedAction::Wager { to: amount, extra })
        }

        ActionKind::AllIn => {
            if stack <= 0.0 {
                return Err(ActionError::NoChips);
            }
            let to = stack + player_bet;
            if let Some(amount) = decision.amount {
                if !chips_eq(amount, to) {
                    return Err(ActionError::AllInMismatch);
                }
            }
            Ok(ResolvedAction::Wager { to, extra: stack })
        }
    }
}

/// The boolean face of [`validate`].
pub fn is_valid(game_state: &GameState, idx: usize, decision: Decision) -> bool {
    validate(game_state, idx, decision).is_ok()
}
