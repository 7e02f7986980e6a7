use core::fmt;
use std::fmt::Display;

use tracing::{debug, warn};

use crate::hand_log::HandLog;

use super::errors::ReplayBuilderError;
use super::replay_builder::HandReplayBuilder;
use super::result::HandResult;

/// What became of one hand in a batch.
#[derive(Debug, PartialEq)]
pub enum BatchEntry {
    /// The hand replayed; the result says whether it completed or stalled.
    Replayed(HandResult),
    /// The hand never started: its log failed validation.
    Rejected(ReplayBuilderError),
}

/// Replays a corpus of recorded hands, one exclusive engine per hand.
///
/// Per-step and per-hand failures never escalate: a malformed log is
/// counted and skipped, a stalled hand is counted and the batch moves on.
/// Nothing in here raises past [`BatchReplay::run`].
pub struct BatchReplay {
    hands: Vec<HandLog>,
}

impl BatchReplay {
    pub fn new(hands: Vec<HandLog>) -> Self {
        Self { hands }
    }

    pub fn num_hands(&self) -> usize {
        self.hands.len()
    }

    /// Replay every hand in order and aggregate the summary.
    pub fn run(&self) -> BatchSummary {
        debug!(hands = self.hands.len(), "starting batch replay");
        let entries = self.hands.iter().map(replay_hand).collect();
        BatchSummary::from_entries(entries)
    }

    /// Replay hands across threads, one hand per unit of work.
    ///
    /// Each hand owns its game state, decision source, and loop guard, so
    /// there is no shared mutable state to coordinate. Entry order matches
    /// the input order.
    #[cfg(feature = "parallel")]
    pub fn run_parallel(&self) -> BatchSummary {
        use rayon::prelude::*;

        debug!(hands = self.hands.len(), "starting parallel batch replay");
        let entries = self.hands.par_iter().map(replay_hand).collect();
        BatchSummary::from_entries(entries)
    }
}

fn replay_hand(hand_log: &HandLog) -> BatchEntry {
    match HandReplayBuilder::default()
        .hand_log(hand_log.clone())
        .build()
    {
        Ok(mut replay) => BatchEntry::Replayed(replay.run()),
        Err(error) => {
            warn!(%error, "rejecting hand before replay");
            BatchEntry::Rejected(error)
        }
    }
}

/// The aggregate outcome of a batch replay.
#[derive(Debug)]
pub struct BatchSummary {
    pub hands_attempted: usize,
    pub hands_completed: usize,
    pub hands_aborted: usize,
    pub hands_rejected: usize,
    pub actions_attempted: u64,
    pub actions_applied: u64,
    /// Per-hand detail, in input order.
    pub entries: Vec<BatchEntry>,
}

impl BatchSummary {
    fn from_entries(entries: Vec<BatchEntry>) -> Self {
        let mut summary = BatchSummary {
            hands_attempted: entries.len(),
            hands_completed: 0,
            hands_aborted: 0,
            hands_rejected: 0,
            actions_attempted: 0,
            actions_applied: 0,
            entries,
        };

        for entry in &summary.entries {
            match entry {
                BatchEntry::Replayed(result) => {
                    if result.outcome.is_completed() {
                        summary.hands_completed += 1;
                    } else {
                        summary.hands_aborted += 1;
                    }
                    summary.actions_attempted += u64::from(result.actions_attempted);
                    summary.actions_applied += u64::from(result.actions_applied);
                }
                BatchEntry::Rejected(_) => summary.hands_rejected += 1,
            }
        }

        summary
    }

    /// The hands that actually replayed, in input order.
    pub fn results(&self) -> impl Iterator<Item = &HandResult> {
        self.entries.iter().filter_map(|entry| match entry {
            BatchEntry::Replayed(result) => Some(result),
            BatchEntry::Rejected(_) => None,
        })
    }

    /// Applied vs attempted across the whole batch, in `[0, 1]`. A batch
    /// with no attempted actions counts as fully successful.
    pub fn action_success_rate(&self) -> f64 {
        if self.actions_attempted == 0 {
            1.0
        } else {
            self.actions_applied as f64 / self.actions_attempted as f64
        }
    }
}

impl Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "replayed {} hand(s): {} completed, {} aborted, {} rejected; {}/{} actions applied ({:.1}%)",
            self.hands_attempted,
            self.hands_completed,
            self.hands_aborted,
            self.hands_rejected,
            self.actions_applied,
            self.actions_attempted,
            self.action_success_rate() * 100.0
        )
    }
}
