use tracing::warn;

use crate::replay::{Event, GameState};

use super::Historian;

/// A historian that always fails to record an event.
///
/// This historian is useful for testing how a replay handles listener
/// failures.
pub struct FailingHistorian;

impl Historian for FailingHistorian {
    fn record_event(
        &mut self,
        _id: u128,
        _game_state: &GameState,
        _event: Event,
    ) -> Result<(), super::HistorianError> {
        warn!("FailingHistorian intentionally returning error");
        Err(super::HistorianError::UnableToRecordEvent)
    }
}
