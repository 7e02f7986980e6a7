//! Historians observe the ordered events of a hand replay.
//!
//! The engine emits events whether or not anything is listening;
//! presentation layers, statistics collectors, and persistence all hang
//! off this trait without the driver depending on any of them.
mod failing;
#[cfg(feature = "serde")]
mod json_lines;
mod null;
mod vec;

use thiserror::Error;

use super::action::Event;
use super::game_state::GameState;

#[derive(Error, Debug)]
pub enum HistorianError {
    #[error("unable to record event")]
    UnableToRecordEvent,

    #[error("io error while recording event")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("error serializing event")]
    Serde(#[from] serde_json::Error),
}

/// The trait for anything that wants to watch a hand replay.
///
/// Events arrive in the order they happened, each paired with the state
/// after the event took effect. A historian that returns an error is
/// dropped from the replay (or panics it, if the builder was told to).
pub trait Historian {
    fn record_event(
        &mut self,
        id: u128,
        game_state: &GameState,
        event: Event,
    ) -> Result<(), HistorianError>;
}

/// An event paired with the id of the replay that emitted it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryRecord {
    pub id: u128,
    pub event: Event,
}

pub use failing::FailingHistorian;
#[cfg(feature = "serde")]
pub use json_lines::JsonLinesHistorian;
pub use null::NullHistorian;
pub use vec::VecHistorian;
