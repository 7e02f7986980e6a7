use thiserror::Error;

/// Why the validator refused an action.
///
/// These are values the driver records and recovers from, never something
/// that escapes a replay.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    #[error("player does not owe an action")]
    OutOfTurn,

    #[error("cannot check while facing a wager")]
    CheckFacingWager,

    #[error("cannot bet into an open wager")]
    BetFacingWager,

    #[error("bet must be positive")]
    BetNotPositive,

    #[error("cannot raise before any wager")]
    RaiseWithoutWager,

    #[error("raise does not exceed the current wager")]
    RaiseBelowWager,

    #[error("amount exceeds the player's chips")]
    ExceedsStack,

    #[error("an amount is required for this action")]
    MissingAmount,

    #[error("amount is not a usable number")]
    InvalidAmount,

    #[error("amount does not match the outstanding call")]
    CallMismatch,

    #[error("amount does not match the player's remaining chips")]
    AllInMismatch,

    #[error("player has no chips to contribute")]
    NoChips,
}

/// Errors from assembling a `HandReplay`.
#[derive(Error, Debug, PartialEq)]
pub enum ReplayBuilderError {
    #[error("builder needs a hand log")]
    MissingHandLog,

    #[error("hand log failed validation")]
    InvalidHandLog(#[from] crate::hand_log::HandLogError),

    #[error("hand log produced an invalid game state")]
    InvalidGameState(#[from] super::game_state::GameStateBuilderError),
}
