//! The input side of the engine: one recorded hand per [`HandLog`].
//!
//! A hand log is read-only input. The engine never mutates logged
//! actions, it only consumes them in order. Validation happens up front:
//! a malformed log is rejected before replay starts, which is fatal for
//! that hand only and never for a batch.
use thiserror::Error;

use crate::core::Card;
use crate::replay::game_state::MAX_PLAYERS;
use crate::replay::{ActionKind, Street};

/// A seat at the table: name and starting stack, in table order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat {
    pub name: String,
    pub stack: f32,
}

impl Seat {
    pub fn new(name: impl Into<String>, stack: f32) -> Self {
        Self {
            name: name.into(),
            stack,
        }
    }
}

/// The community cards the log recorded for each street.
///
/// Streets that were never reached (or never recorded) are `None`. A
/// street's cards must be present if any logged action references that
/// street or a later one.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardCards {
    #[cfg_attr(feature = "serde", serde(default))]
    pub flop: Option<[Card; 3]>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub turn: Option<Card>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub river: Option<Card>,
}

impl BoardCards {
    /// The cards the log schedules for dealing when `street` begins.
    pub fn for_street(&self, street: Street) -> Vec<Card> {
        match street {
            Street::Flop => self.flop.map(|cards| cards.to_vec()).unwrap_or_default(),
            Street::Turn => self.turn.map(|card| vec![card]).unwrap_or_default(),
            Street::River => self.river.map(|card| vec![card]).unwrap_or_default(),
            _ => vec![],
        }
    }

    fn has_cards_for(&self, street: Street) -> bool {
        match street {
            Street::Flop => self.flop.is_some(),
            Street::Turn => self.turn.is_some(),
            Street::River => self.river.is_some(),
            _ => true,
        }
    }

    fn all_cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(5);
        if let Some(flop) = self.flop {
            cards.extend_from_slice(&flop);
        }
        cards.extend(self.turn);
        cards.extend(self.river);
        cards
    }
}

/// One immutable action record from a recorded hand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoggedAction {
    /// The street the action was recorded on.
    pub street: Street,
    /// The seat name of the actor.
    pub seat: String,
    pub kind: ActionKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub amount: Option<f32>,
}

impl LoggedAction {
    pub fn new(street: Street, seat: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            street,
            seat: seat.into(),
            kind,
            amount: None,
        }
    }

    pub fn with_amount(
        street: Street,
        seat: impl Into<String>,
        kind: ActionKind,
        amount: f32,
    ) -> Self {
        Self {
            street,
            seat: seat.into(),
            kind,
            amount: Some(amount),
        }
    }
}

/// Ways a recorded hand can fail validation before replay starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HandLogError {
    #[error("hand log needs at least 2 seats, got {actual}")]
    NotEnoughSeats { actual: usize },

    #[error("hand log has {actual} seats, the maximum is {max}", max = MAX_PLAYERS)]
    TooManySeats { actual: usize },

    #[error("duplicate seat name: {0:?}")]
    DuplicateSeat(String),

    #[error("seat {name:?} has an invalid stack: {value}")]
    InvalidStack { name: String, value: f32 },

    #[error("fewer than 2 seats have chips to play with")]
    InsufficientFundedSeats,

    #[error("invalid blinds: small {small}, big {big}")]
    InvalidBlinds { small: f32, big: f32 },

    #[error("dealer_idx {dealer_idx} must be less than seat count {num_seats}")]
    InvalidDealerIndex { dealer_idx: usize, num_seats: usize },

    #[error("action {index} names unknown seat {seat:?}")]
    UnknownActor { index: usize, seat: String },

    #[error("action {index} is recorded on a non-betting street")]
    InvalidActionStreet { index: usize },

    #[error("action {index} has an invalid amount: {value}")]
    InvalidAmount { index: usize, value: f32 },

    #[error("actions reference the {0} but the log has no cards for it")]
    MissingBoard(Street),

    #[error("duplicate board card: {0}")]
    DuplicateBoardCard(Card),
}

/// One recorded hand: setup metadata plus the ordered action records.
///
/// # Example
///
/// ```
/// use holdem_replay::hand_log::{HandLog, LoggedAction, Seat};
/// use holdem_replay::replay::{ActionKind, Street};
///
/// let log = HandLog {
///     seats: vec![Seat::new("seat1", 500.0), Seat::new("seat2", 500.0)],
///     small_blind: 5.0,
///     big_blind: 10.0,
///     dealer_idx: 0,
///     board: Default::default(),
///     actions: vec![
///         LoggedAction::new(Street::Preflop, "seat1", ActionKind::Call),
///         LoggedAction::new(Street::Preflop, "seat2", ActionKind::Fold),
///     ],
/// };
///
/// assert!(log.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandLog {
    pub seats: Vec<Seat>,
    pub small_blind: f32,
    pub big_blind: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dealer_idx: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub board: BoardCards,
    #[cfg_attr(feature = "serde", serde(default))]
    pub actions: Vec<LoggedAction>,
}

impl HandLog {
    /// The engine index for a seat name.
    pub fn seat_index(&self, name: &str) -> Option<usize> {
        self.seats.iter().position(|seat| seat.name == name)
    }

    /// Check the log for defects that make replay impossible.
    ///
    /// Runs before any state is built; a failure here rejects the hand
    /// without replaying a single action.
    pub fn validate(&self) -> Result<(), HandLogError> {
        let num_seats = self.seats.len();
        if num_seats < 2 {
            return Err(HandLogError::NotEnoughSeats { actual: num_seats });
        }
        if num_seats > MAX_PLAYERS {
            return Err(HandLogError::TooManySeats { actual: num_seats });
        }

        let mut funded = 0;
        for (idx, seat) in self.seats.iter().enumerate() {
            if self.seats[..idx].iter().any(|other| other.name == seat.name) {
                return Err(HandLogError::DuplicateSeat(seat.name.clone()));
            }
            if seat.stack < 0.0 || !seat.stack.is_finite() {
                return Err(HandLogError::InvalidStack {
                    name: seat.name.clone(),
                    value: seat.stack,
                });
            }
            if seat.stack > 0.0 {
                funded += 1;
            }
        }
        if funded < 2 {
            return Err(HandLogError::InsufficientFundedSeats);
        }

        if !self.big_blind.is_finite()
            || self.big_blind <= 0.0
            || !self.small_blind.is_finite()
            || self.small_blind < 0.0
            || self.small_blind > self.big_blind
        {
            return Err(HandLogError::InvalidBlinds {
                small: self.small_blind,
                big: self.big_blind,
            });
        }

        if self.dealer_idx >= num_seats {
            return Err(HandLogError::InvalidDealerIndex {
                dealer_idx: self.dealer_idx,
                num_seats,
            });
        }

        let mut deepest_street = Street::Preflop;
        for (index, action) in self.actions.iter().enumerate() {
            if !action.street.is_betting() {
                return Err(HandLogError::InvalidActionStreet { index });
            }
            if self.seat_index(&action.seat).is_none() {
                return Err(HandLogError::UnknownActor {
                    index,
                    seat: action.seat.clone(),
                });
            }
            if let Some(value) = action.amount {
                if !value.is_finite() || value < 0.0 {
                    return Err(HandLogError::InvalidAmount { index, value });
                }
            }
            deepest_street = deepest_street.max(action.street);
        }

        // Every street up to the deepest one with actions needs its cards.
        for street in [Street::Flop, Street::Turn, Street::River] {
            if street <= deepest_street && !self.board.has_cards_for(street) {
                return Err(HandLogError::MissingBoard(street));
            }
        }

        let board = self.board.all_cards();
        for (idx, card) in board.iter().enumerate() {
            if board[..idx].contains(card) {
                return Err(HandLogError::DuplicateBoardCard(*card));
            }
        }

        Ok(())
    }

    /// Parse one hand from a JSON document.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse a corpus of hands from JSON lines, one hand per line.
    /// Blank lines are skipped.
    #[cfg(feature = "serde")]
    pub fn from_json_lines(lines: &str) -> Result<Vec<Self>, serde_json::Error> {
        lines
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(serde_json::from_str)
            .collect()
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
