use std::io::Write;

use crate::replay::{Event, GameState};

use super::{Historian, HistoryRecord};

/// A historian that writes each event as one JSON line to a writer.
///
/// The output pairs naturally with [`crate::hand_log::HandLog::from_json_lines`]
/// style tooling: one record per line, append-only.
pub struct JsonLinesHistorian<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesHistorian<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Give the writer back, e.g. to flush or inspect a buffer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Historian for JsonLinesHistorian<W> {
    fn record_event(
        &mut self,
        id: u128,
        _game_state: &GameState,
        event: Event,
    ) -> Result<(), super::HistorianError> {
        let record = HistoryRecord { id, event };
        serde_json::to_writer(&mut self.writer, &record)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
