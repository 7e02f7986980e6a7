//! # Holdem Replay
//!
//! A library for deterministically replaying and validating recorded
//! Texas Hold'em hand histories.
//!
//! A recorded hand ([`hand_log::HandLog`]) carries the table setup, the
//! board, and the ordered action log. The replay engine
//! ([`replay::HandReplay`]) runs that log against a betting state
//! machine: every action is checked for legality, omitted checks are
//! synthesized so incomplete logs still follow strict turn order, and a
//! bounded-step loop guard turns hands that cannot progress into a
//! diagnosable "stalled" result instead of an infinite loop. Batches of
//! hands replay independently, each with its own state.
//!
//! Hand strength is out of scope on purpose: nothing in this crate ranks
//! hands or awards pots, it validates that the recorded betting actually
//! happened the way the rules allow.
//!
//! ## Replaying a hand
//!
//! ```
//! use holdem_replay::hand_log::{HandLog, LoggedAction, Seat};
//! use holdem_replay::replay::{ActionKind, HandOutcome, HandReplayBuilder, Street};
//!
//! let log = HandLog {
//!     seats: vec![Seat::new("seat1", 1000.0), Seat::new("seat2", 1000.0)],
//!     small_blind: 5.0,
//!     big_blind: 10.0,
//!     dealer_idx: 0,
//!     board: Default::default(),
//!     actions: vec![
//!         LoggedAction::new(Street::Preflop, "seat1", ActionKind::Call),
//!         LoggedAction::new(Street::Preflop, "seat2", ActionKind::Fold),
//!     ],
//! };
//!
//! let mut replay = HandReplayBuilder::default().hand_log(log).build().unwrap();
//! let result = replay.run();
//!
//! assert_eq!(result.outcome, HandOutcome::FoldedOut);
//! assert_eq!(result.final_pot, 20.0);
//! ```
//!
//! ## Replaying a corpus
//!
//! ```
//! use holdem_replay::hand_log::{HandLog, LoggedAction, Seat};
//! use holdem_replay::replay::{ActionKind, BatchReplay, Street};
//!
//! let hand = HandLog {
//!     seats: vec![Seat::new("seat1", 100.0), Seat::new("seat2", 100.0)],
//!     small_blind: 5.0,
//!     big_blind: 10.0,
//!     dealer_idx: 0,
//!     board: Default::default(),
//!     actions: vec![LoggedAction::new(Street::Preflop, "seat1", ActionKind::Fold)],
//! };
//!
//! let summary = BatchReplay::new(vec![hand.clone(), hand]).run();
//! assert_eq!(summary.hands_completed, 2);
//! ```
pub mod core;
pub mod hand_log;
pub mod replay;
