use std::{cell::RefCell, rc::Rc};

use crate::replay::{Event, GameState};

use super::{Historian, HistoryRecord};

/// A historian that stores every event in a shared vector.
///
/// The storage is handed out as `Rc<RefCell<...>>` so callers can keep a
/// handle and inspect the records after the replay has consumed the
/// historian.
#[derive(Default)]
pub struct VecHistorian {
    records: Rc<RefCell<Vec<HistoryRecord>>>,
}

impl VecHistorian {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle to the records this historian will fill.
    pub fn get_storage(&self) -> Rc<RefCell<Vec<HistoryRecord>>> {
        self.records.clone()
    }
}

impl Historian for VecHistorian {
    fn record_event(
        &mut self,
        id: u128,
        _game_state: &GameState,
        event: Event,
    ) -> Result<(), super::HistorianError> {
        self.records.borrow_mut().push(HistoryRecord { id, event });
        Ok(())
    }
}
