use core::fmt;

use crate::core::{Card, PlayerBitSet};

use super::game_state::Street;

/// Where a stalled hand got stuck, for diagnosis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StallReport {
    /// The street the replay could not progress past.
    pub street: Street,
    /// How many consecutive non-progressing steps were taken.
    pub steps: u32,
    /// Who still owed an action when the guard tripped.
    pub needs_action: PlayerBitSet,
}

impl fmt::Display for StallReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stalled on the {} after {} steps with {} player(s) still owing action",
            self.street,
            self.steps,
            self.needs_action.count()
        )
    }
}

/// How a hand replay ended.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandOutcome {
    /// Every street settled and the hand reached showdown.
    Showdown,
    /// All but one player folded before showdown.
    FoldedOut,
    /// The loop guard tripped and the hand was aborted.
    Stalled(StallReport),
}

impl HandOutcome {
    /// True when the hand replayed to a natural end.
    pub fn is_completed(&self) -> bool {
        matches!(self, HandOutcome::Showdown | HandOutcome::FoldedOut)
    }

    pub fn is_stalled(&self) -> bool {
        matches!(self, HandOutcome::Stalled(_))
    }
}

/// Everything the engine reports about one replayed hand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandResult {
    pub id: u128,
    pub outcome: HandOutcome,
    /// Decisions the driver submitted to the validator.
    pub actions_attempted: u32,
    /// Decisions that were validated and applied.
    pub actions_applied: u32,
    pub final_pot: f32,
    pub final_board: Vec<Card>,
}

impl HandResult {
    /// Attempted vs applied, as a ratio in `[0, 1]`. A hand with no
    /// attempted actions counts as fully successful.
    pub fn action_success_rate(&self) -> f64 {
        if self.actions_attempted == 0 {
            1.0
        } else {
            f64::from(self.actions_applied) / f64::from(self.actions_attempted)
        }
    }
}
