use super::Historian;

/// A no-op historian that discards every recorded event.
///
/// Useful when you need a historian but don't care about the history.
pub struct NullHistorian;

impl Historian for NullHistorian {
    fn record_event(
        &mut self,
        _id: u128,
        _game_state: &crate::replay::GameState,
        _event: crate::replay::Event,
    ) -> Result<(), super::HistorianError> {
        Ok(())
    }
}
