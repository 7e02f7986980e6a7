//! Replay recorded hands against a street-by-street betting state
//! machine.
//!
//! The engine is three cooperating pieces:
//!
//! - [`game_state`] holds one hand's consistent snapshot: street, pot,
//!   per-player stacks and street bets, and the set of players still
//!   owing an action before the street can close.
//! - [`validator`] is the single source of truth for action legality. It
//!   resolves optional amounts to concrete chips before anything touches
//!   state.
//! - [`driver`] bridges a recorded log to the strict turn order the
//!   validator enforces: it asks a [`DecisionSource`] what each player
//!   does, injects the implicit checks real logs omit, advances streets
//!   when they settle, and aborts hands that cannot progress.
//!
//! [`Historian`]s subscribe to the ordered event stream; [`batch`]
//! replays a whole corpus with one exclusive engine per hand.
pub mod action;
pub mod batch;
pub mod decision;
pub mod driver;
pub mod errors;
pub mod game_state;
pub mod historian;
pub mod replay_builder;
pub mod result;
#[cfg(test)]
pub(crate) mod test_util;
pub mod validator;

pub use action::{ActionKind, Decision, Event};
pub use batch::{BatchEntry, BatchReplay, BatchSummary};
pub use decision::{DecisionSource, HandLogSource, ScriptedSource};
pub use driver::{HandReplay, STALL_LIMIT};
pub use errors::{ActionError, ReplayBuilderError};
pub use game_state::{
    GameState, GameStateBuilder, GameStateBuilderError, RoundData, Street, MAX_PLAYERS,
};
pub use historian::{Historian, HistorianError, HistoryRecord};
pub use replay_builder::HandReplayBuilder;
pub use result::{HandOutcome, HandResult, StallReport};
pub use validator::{is_valid, validate, ResolvedAction};
