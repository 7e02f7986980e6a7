use crate::core::{Card, PlayerBitSet};

use super::errors::ActionError;
use super::game_state::Street;

/// The kinds of player action a recorded hand log can contain.
///
/// The wire names match recorded logs: `FOLD`, `CHECK`, `CALL`, `BET`,
/// `RAISE`, `ALL_IN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
}

/// What a decision source proposes for a player.
///
/// Amounts for `Bet`/`Raise`/`AllIn` are raise-to totals for the street; a
/// `Call` amount is the incremental chips put in. An absent amount is
/// resolved by the validator, never fed into arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Decision {
    pub kind: ActionKind,
    pub amount: Option<f32>,
}

impl Decision {
    /// A decision with no amount attached.
    pub fn of(kind: ActionKind) -> Self {
        Self { kind, amount: None }
    }

    /// A decision with an explicit amount.
    pub fn with_amount(kind: ActionKind, amount: f32) -> Self {
        Self {
            kind,
            amount: Some(amount),
        }
    }
}

/// The hand has started.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandStartPayload {
    pub small_blind: f32,
    pub big_blind: f32,
    pub num_players: usize,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatPayload {
    pub idx: usize,
    pub name: String,
    pub starting_stack: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlindKind {
    SmallBlind,
    BigBlind,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForcedBetPayload {
    /// The amount actually posted, which can be lower than the blind when
    /// that puts the player all in.
    pub posted: f32,
    pub idx: usize,
    pub blind_kind: BlindKind,
    pub player_stack: f32,
}

/// A player action was validated and applied.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppliedActionPayload {
    /// The decision as the decision source proposed it.
    pub decision: Decision,

    pub idx: usize,
    pub street: Street,
    pub player_stack: f32,

    pub starting_pot: f32,
    pub final_pot: f32,

    pub starting_bet: f32,
    pub final_bet: f32,

    pub players_active: PlayerBitSet,
    pub players_all_in: PlayerBitSet,
}

impl AppliedActionPayload {
    pub fn raise_amount(&self) -> f32 {
        self.final_bet - self.starting_bet
    }

    pub fn pot_delta(&self) -> f32 {
        self.final_pot - self.starting_pot
    }
}

/// A proposed action was rejected.
/// If the action was rejected then nothing changed and there is no
/// matching ActionApplied event coming.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RejectedActionPayload {
    /// The decision that was rejected.
    pub decision: Decision,
    pub idx: usize,
    pub street: Street,
    pub reason: ActionError,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandCompletePayload {
    pub final_pot: f32,
    pub board: Vec<Card>,
}

/// Everything the replay driver can tell a listener about one hand, in
/// the order it happened.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    HandStart(HandStartPayload),
    Seat(SeatPayload),
    /// A player was forced to post a blind.
    ForcedBet(ForcedBetPayload),
    /// The street has advanced.
    StreetAdvance(Street),
    /// A community card has been dealt.
    DealCommunity(Card),
    /// A player action was applied.
    ActionApplied(AppliedActionPayload),
    /// A proposed action was rejected; state did not change.
    ActionRejected(RejectedActionPayload),
    /// The hand is over.
    HandComplete(HandCompletePayload),
}
