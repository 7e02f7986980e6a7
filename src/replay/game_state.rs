use core::fmt;
use std::fmt::Display;

use approx::abs_diff_eq;
use thiserror::Error;

use crate::core::{Card, PlayerBitSet};

/// Maximum number of seats supported (based on PlayerBitSet using u16).
pub const MAX_PLAYERS: usize = 16;

/// Tolerance for comparing chip amounts.
///
/// Chip amounts are `f32` and accumulate rounding, so comparisons scale
/// the epsilon by the magnitude of the values involved.
pub(crate) fn chip_epsilon(a: f32, b: f32) -> f32 {
    let magnitude = a.abs().max(b.abs()).max(1.0);
    magnitude * f32::EPSILON * 1000.0
}

/// True when two chip amounts are equal within tolerance.
pub(crate) fn chips_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= chip_epsilon(a, b)
}

/// True when `a` is greater than `b` by more than tolerance.
pub(crate) fn chips_gt(a: f32, b: f32) -> bool {
    a > b + chip_epsilon(a, b)
}

/// Errors that can occur when building a GameState.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameStateBuilderError {
    #[error("seats are required")]
    MissingSeats,

    #[error("big_blind is required")]
    MissingBigBlind,

    #[error("seat count must be between 2 and {max}, got {actual}", max = MAX_PLAYERS)]
    InvalidSeatCount { actual: usize },

    #[error("dealer_idx {dealer_idx} must be less than seat count {num_players}")]
    InvalidDealerIndex {
        dealer_idx: usize,
        num_players: usize,
    },

    #[error("big_blind must be positive, got {0}")]
    InvalidBigBlind(f32),

    #[error("small_blind must be non-negative and at most the big blind, got {0}")]
    InvalidSmallBlind(f32),

    #[error("stack for seat {name:?} must be a non-negative number, got {value}")]
    InvalidStack { name: String, value: f32 },

    #[error("at least 2 seats must have positive stacks")]
    InsufficientActivePlayers,

    #[error("duplicate seat name: {0:?}")]
    DuplicateSeatName(String),
}

/// One betting phase of a hand.
///
/// Betting happens on the four streets; `Showdown` and `Complete` are
/// terminal bookkeeping states that never accept actions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Street {
    #[default]
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
    Complete,
}

impl Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Street::Preflop => write!(f, "Preflop"),
            Street::Flop => write!(f, "Flop"),
            Street::Turn => write!(f, "Turn"),
            Street::River => write!(f, "River"),
            Street::Showdown => write!(f, "Showdown"),
            Street::Complete => write!(f, "Complete"),
        }
    }
}

impl Street {
    pub fn advance(&self) -> Self {
        match *self {
            Street::Preflop => Street::Flop,
            Street::Flop => Street::Turn,
            Street::Turn => Street::River,
            Street::River => Street::Showdown,
            Street::Showdown => Street::Complete,

            Street::Complete => Street::Complete,
        }
    }

    /// True for the streets where players act.
    pub fn is_betting(&self) -> bool {
        matches!(
            self,
            Street::Preflop | Street::Flop | Street::Turn | Street::River
        )
    }

    /// True for the streets after the flop is dealt.
    pub fn is_postflop(&self) -> bool {
        matches!(self, Street::Flop | Street::Turn | Street::River)
    }
}

/// Per-street betting state.
///
/// The street is settled exactly when `needs_action` is empty; nothing
/// else is allowed to close it.
#[derive(Clone, PartialEq, Debug)]
pub struct RoundData {
    /// Which players still owe an action before the street can close.
    pub needs_action: PlayerBitSet,
    /// The wager level to be matched this street.
    pub bet: f32,
    /// How much each player has put in so far this street.
    pub player_bet: Vec<f32>,
    /// The number of actions applied this street.
    pub action_count: u32,
    /// The index of the next player to act.
    pub to_act_idx: usize,
}

impl RoundData {
    pub fn new(num_players: usize, active: PlayerBitSet, to_act: usize) -> Self {
        RoundData {
            needs_action: active,
            bet: 0.0,
            player_bet: vec![0.0; num_players],
            action_count: 0,
            to_act_idx: to_act,
        }
    }

    /// Move `to_act_idx` forward to the next player owing an action.
    pub fn advance_action(&mut self) {
        loop {
            // The length of the player bet vector is the number of seats at
            // the table. It is always pre-initialized to the right length.
            self.to_act_idx = (self.to_act_idx + 1) % self.player_bet.len();
            if self.needs_action.empty() || self.needs_action.get(self.to_act_idx) {
                break;
            }
        }
    }

    /// Record `extra` chips from the player to act into this street.
    pub fn do_bet(&mut self, extra_amount: f32) {
        self.player_bet[self.to_act_idx] += extra_amount;

        // The wager level to match is the maximum anyone has put in.
        let player_bet = self.player_bet[self.to_act_idx];
        self.bet = self.bet.max(player_bet);
    }

    pub fn num_players_need_action(&self) -> usize {
        self.needs_action.count()
    }

    pub fn current_player_bet(&self) -> f32 {
        self.player_bet[self.to_act_idx]
    }
}

/// A consistent snapshot of one in-progress hand.
///
/// A `GameState` is owned exclusively by a single replay for the duration
/// of one hand; nothing here is shared, so batches can replay hands in
/// parallel with one state each.
#[derive(Clone, PartialEq, Debug)]
pub struct GameState {
    /// The number of seats at the table.
    pub num_players: usize,
    /// Seat names in table order; the index is the engine's player id.
    pub seat_names: Vec<String>,
    /// Which players can still put chips in.
    pub player_active: PlayerBitSet,
    /// Which players are all-in. They stay in the hand but owe no actions.
    pub player_all_in: PlayerBitSet,
    /// Chips moved in from streets that have already closed.
    pub committed_pot: f32,
    /// How much is left in each player's stack.
    pub stacks: Vec<f32>,
    /// The stacks when the hand started.
    pub starting_stacks: Vec<f32>,
    /// How much each player has committed over the whole hand.
    pub player_bet: Vec<f32>,
    /// The big blind size.
    pub big_blind: f32,
    /// The small blind size.
    pub small_blind: f32,
    /// The index of the seat with the button.
    pub dealer_idx: usize,
    /// What street this currently is.
    pub street: Street,
    /// The street before the hand completed. Hands can complete early when
    /// everyone folds, so this is not always `Showdown`.
    pub street_before: Street,
    /// All the current state of the street.
    pub round_data: RoundData,
    /// The community cards dealt so far.
    pub board: Vec<Card>,
}

impl GameState {
    pub fn num_active_players(&self) -> usize {
        self.player_active.count()
    }

    pub fn num_all_in_players(&self) -> usize {
        self.player_all_in.count()
    }

    /// Players still contending for the pot: active or all-in.
    pub fn players_in_hand(&self) -> usize {
        self.player_active.count() + self.player_all_in.count()
    }

    pub fn is_complete(&self) -> bool {
        self.street == Street::Complete
    }

    pub fn to_act_idx(&self) -> usize {
        self.round_data.to_act_idx
    }

    pub fn current_player_stack(&self) -> f32 {
        *self.stacks.get(self.to_act_idx()).unwrap_or(&0.0)
    }

    pub fn current_round_bet(&self) -> f32 {
        self.round_data.bet
    }

    pub fn current_round_player_bet(&self, idx: usize) -> f32 {
        self.round_data.player_bet.get(idx).copied().unwrap_or(0.0)
    }

    /// The pot as a table would display it: chips from closed streets plus
    /// everything wagered on the live street.
    pub fn displayed_pot(&self) -> f32 {
        self.committed_pot + self.round_data.player_bet.iter().sum::<f32>()
    }

    /// Fold the player to act out of the hand.
    pub fn fold(&mut self) {
        let idx = self.round_data.to_act_idx;
        self.round_data.needs_action.disable(idx);
        self.player_active.disable(idx);
        self.round_data.action_count += 1;

        // They fold ending the turn.
        self.round_data.advance_action();
    }

    /// Put `extra` chips from the player to act into the street.
    ///
    /// Amount legality is the validator's job; this only moves chips and
    /// keeps the action bookkeeping consistent. A zero `extra` is a check.
    pub fn wager(&mut self, extra: f32) {
        let idx = self.round_data.to_act_idx;
        let prev_bet = self.round_data.bet;

        self.stacks[idx] -= extra;
        self.round_data.do_bet(extra);
        self.player_bet[idx] += extra;

        if chips_gt(self.round_data.bet, prev_bet) {
            // A new wager level. Everyone still active gets to respond.
            self.round_data.needs_action = self.player_active;
        }

        self.round_data.needs_action.disable(idx);

        // Out of chips and can't continue.
        // Use epsilon comparison to handle floating-point residue.
        if abs_diff_eq!(self.stacks[idx], 0.0) {
            self.player_active.disable(idx);
            self.player_all_in.enable(idx);
            self.round_data.needs_action.disable(idx);
        }

        self.round_data.action_count += 1;
        self.round_data.advance_action();
    }

    /// Post a forced blind for the player to act, capped at their stack.
    ///
    /// Forced bets leave the poster in `needs_action`: they still get an
    /// option once the action comes back around. Returns the posted amount.
    pub fn post_blind(&mut self, amount: f32) -> f32 {
        let idx = self.round_data.to_act_idx;
        let posted = self.stacks[idx].min(amount);

        self.stacks[idx] -= posted;
        self.round_data.do_bet(posted);
        self.player_bet[idx] += posted;

        if abs_diff_eq!(self.stacks[idx], 0.0) {
            self.player_active.disable(idx);
            self.player_all_in.enable(idx);
            self.round_data.needs_action.disable(idx);
        }

        self.round_data.advance_action();
        posted
    }

    /// Close the street and advance if no player owes an action.
    ///
    /// On close the live street bets fold into the committed pot and a
    /// fresh `RoundData` starts with the first active player left of the
    /// button to act. Returns whether the street advanced.
    pub fn close_street_if_settled(&mut self) -> bool {
        if !self.round_data.needs_action.empty() || !self.street.is_betting() {
            return false;
        }

        let street_total: f32 = self.round_data.player_bet.iter().sum();
        self.committed_pot += street_total;

        self.street_before = self.street;
        self.street = self.street.advance();

        self.round_data = if self.street.is_betting() {
            let mut round_data = RoundData::new(self.num_players, self.player_active, self.dealer_idx);
            round_data.advance_action();
            round_data
        } else {
            RoundData::new(self.num_players, PlayerBitSet::new(0), self.dealer_idx)
        };

        true
    }

    /// Move the hand to its terminal state, settling any live street bets.
    pub fn complete(&mut self) {
        if self.street == Street::Complete {
            return;
        }

        let street_total: f32 = self.round_data.player_bet.iter().sum();
        self.committed_pot += street_total;

        self.street_before = self.street;
        self.street = Street::Complete;
        self.round_data = RoundData::new(self.num_players, PlayerBitSet::new(0), self.dealer_idx);
    }
}

/// Builder for constructing `GameState` with validation.
///
/// # Example
///
/// ```
/// use holdem_replay::replay::GameStateBuilder;
///
/// let game_state = GameStateBuilder::new()
///     .seats(vec![("seat1".to_string(), 100.0), ("seat2".to_string(), 100.0)])
///     .big_blind(10.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(game_state.num_players, 2);
/// assert_eq!(game_state.big_blind, 10.0);
/// assert_eq!(game_state.small_blind, 5.0); // defaults to big_blind / 2
/// ```
#[derive(Default, Clone)]
pub struct GameStateBuilder {
    // Required (no defaults)
    seats: Option<Vec<(String, f32)>>,
    big_blind: Option<f32>,

    // Optional with defaults
    small_blind: Option<f32>, // Default: big_blind / 2
    dealer_idx: Option<usize>, // Default: 0
}

impl GameStateBuilder {
    /// Create a new `GameStateBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seats as (name, starting stack) pairs in table order. Required.
    pub fn seats(mut self, seats: Vec<(String, f32)>) -> Self {
        self.seats = Some(seats);
        self
    }

    /// Set the big blind size. Required.
    pub fn big_blind(mut self, bb: f32) -> Self {
        self.big_blind = Some(bb);
        self
    }

    /// Set the small blind size. Defaults to `big_blind / 2`.
    pub fn small_blind(mut self, sb: f32) -> Self {
        self.small_blind = Some(sb);
        self
    }

    /// Set the dealer index. Defaults to `0`.
    pub fn dealer_idx(mut self, idx: usize) -> Self {
        self.dealer_idx = Some(idx);
        self
    }

    /// Convenience method to set both big and small blinds at once.
    pub fn blinds(mut self, big: f32, small: f32) -> Self {
        self.big_blind = Some(big);
        self.small_blind = Some(small);
        self
    }

    /// Build the `GameState`, validating all inputs.
    ///
    /// The state starts at preflop with the player to act positioned on
    /// the small blind seat; the driver posts blinds from there.
    pub fn build(self) -> Result<GameState, GameStateBuilderError> {
        let seats = self.seats.ok_or(GameStateBuilderError::MissingSeats)?;
        let big_blind = self
            .big_blind
            .ok_or(GameStateBuilderError::MissingBigBlind)?;

        let num_players = seats.len();

        if !(2..=MAX_PLAYERS).contains(&num_players) {
            return Err(GameStateBuilderError::InvalidSeatCount {
                actual: num_players,
            });
        }

        if big_blind <= 0.0 || big_blind.is_nan() {
            return Err(GameStateBuilderError::InvalidBigBlind(big_blind));
        }

        let small_blind = self.small_blind.unwrap_or(big_blind / 2.0);
        if small_blind < 0.0 || small_blind.is_nan() || small_blind > big_blind {
            return Err(GameStateBuilderError::InvalidSmallBlind(small_blind));
        }

        let mut active_count = 0;
        for (name, value) in seats.iter() {
            if *value < 0.0 || value.is_nan() {
                return Err(GameStateBuilderError::InvalidStack {
                    name: name.clone(),
                    value: *value,
                });
            }
            if *value > 0.0 {
                active_count += 1;
            }
        }
        if active_count < 2 {
            return Err(GameStateBuilderError::InsufficientActivePlayers);
        }

        for (idx, (name, _)) in seats.iter().enumerate() {
            if seats[..idx].iter().any(|(other, _)| other == name) {
                return Err(GameStateBuilderError::DuplicateSeatName(name.clone()));
            }
        }

        let dealer_idx = self.dealer_idx.unwrap_or(0);
        if dealer_idx >= num_players {
            return Err(GameStateBuilderError::InvalidDealerIndex {
                dealer_idx,
                num_players,
            });
        }

        let stacks: Vec<f32> = seats.iter().map(|(_, stack)| *stack).collect();
        let seat_names: Vec<String> = seats.into_iter().map(|(name, _)| name).collect();

        let mut player_active = PlayerBitSet::new(num_players);
        for (idx, stack) in stacks.iter().enumerate() {
            if *stack <= 0.0 {
                // No chips means sitting out from the start.
                player_active.disable(idx);
            }
        }

        // Preflop action starts on the small blind seat so the driver can
        // post blinds from there. Heads-up the dealer posts the small
        // blind, so pass the action back around.
        let mut round_data = RoundData::new(num_players, player_active, dealer_idx);
        round_data.advance_action();
        if num_players == 2 {
            round_data.advance_action();
        }

        Ok(GameState {
            num_players,
            seat_names,
            player_active,
            player_all_in: PlayerBitSet::default(),
            committed_pot: 0.0,
            starting_stacks: stacks.clone(),
            stacks,
            player_bet: vec![0.0; num_players],
            big_blind,
            small_blind,
            dealer_idx,
            street: Street::Preflop,
            street_before: Street::Preflop,
            round_data,
            board: vec![],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay::test_util::{assert_chip_conservation, assert_valid_round_data};

    fn test_game_state(stacks: Vec<f32>, big_blind: f32, small_blind: f32) -> GameState {
        let seats = stacks
            .into_iter()
            .enumerate()
            .map(|(idx, stack)| (format!("seat{}", idx + 1), stack))
            .collect();
        GameStateBuilder::new()
            .seats(seats)
            .blinds(big_blind, small_blind)
            .build()
            .unwrap()
    }

    #[test]
    fn test_street_advances_in_order() {
        assert_eq!(Street::Preflop.advance(), Street::Flop);
        assert_eq!(Street::Flop.advance(), Street::Turn);
        assert_eq!(Street::Turn.advance(), Street::River);
        assert_eq!(Street::River.advance(), Street::Showdown);
        assert_eq!(Street::Showdown.advance(), Street::Complete);
        assert_eq!(Street::Complete.advance(), Street::Complete);
    }

    #[test]
    fn test_street_display() {
        assert_eq!(format!("{}", Street::Preflop), "Preflop");
        assert_eq!(format!("{}", Street::Flop), "Flop");
        assert_eq!(format!("{}", Street::Turn), "Turn");
        assert_eq!(format!("{}", Street::River), "River");
        assert_eq!(format!("{}", Street::Showdown), "Showdown");
        assert_eq!(format!("{}", Street::Complete), "Complete");
    }

    #[test]
    fn test_preflop_action_starts_on_small_blind() {
        // 4 seats, dealer at 1: small blind is seat index 2.
        let seats = vec![
            ("a".to_string(), 100.0),
            ("b".to_string(), 100.0),
            ("c".to_string(), 100.0),
            ("d".to_string(), 100.0),
        ];
        let game_state = GameStateBuilder::new()
            .seats(seats)
            .blinds(10.0, 5.0)
            .dealer_idx(1)
            .build()
            .unwrap();

        assert_eq!(2, game_state.to_act_idx());
    }

    #[test]
    fn test_heads_up_dealer_posts_small_blind() {
        let game_state = test_game_state(vec![100.0, 100.0], 10.0, 5.0);
        assert_eq!(game_state.dealer_idx, 0);
        assert_eq!(game_state.to_act_idx(), 0);
    }

    #[test]
    fn test_blinds_then_betting_round_closes() {
        let mut game_state = test_game_state(vec![100.0; 4], 10.0, 5.0);

        // seat2 and seat3 post the blinds (dealer defaults to 0).
        assert_eq!(1, game_state.to_act_idx());
        game_state.post_blind(5.0);
        game_state.post_blind(10.0);

        // Action lands on the first seat after the big blind.
        assert_eq!(3, game_state.to_act_idx());

        game_state.fold(); // seat4
        game_state.fold(); // seat1 (dealer)
        game_state.wager(5.0); // seat2 completes the small blind
        game_state.wager(0.0); // seat3 checks the option

        assert_eq!(0, game_state.round_data.num_players_need_action());
        assert!(game_state.close_street_if_settled());
        assert_eq!(Street::Flop, game_state.street);
        assert_eq!(20.0, game_state.committed_pot);
        assert_chip_conservation(&game_state);
    }

    #[test]
    fn test_wager_reopens_action() {
        let mut game_state = test_game_state(vec![100.0; 3], 10.0, 5.0);
        game_state.post_blind(5.0);
        game_state.post_blind(10.0);

        // Dealer calls, small blind raises: the dealer owes action again.
        game_state.wager(10.0);
        assert!(!game_state.round_data.needs_action.get(0));

        game_state.wager(25.0); // small blind raises to 30
        assert!(game_state.round_data.needs_action.get(0));
        assert!(game_state.round_data.needs_action.get(2));
        assert_eq!(30.0, game_state.current_round_bet());
        assert_valid_round_data(&game_state.round_data);
    }

    #[test]
    fn test_wager_whole_stack_flags_all_in() {
        let mut game_state = test_game_state(vec![50.0, 100.0], 10.0, 5.0);
        game_state.post_blind(5.0);
        game_state.post_blind(10.0);

        // Heads-up dealer shoves the rest of their stack.
        game_state.wager(45.0);

        assert!(game_state.player_all_in.get(0));
        assert!(!game_state.player_active.get(0));
        assert!(!game_state.round_data.needs_action.get(0));
        assert_eq!(game_state.stacks[0], 0.0);
        assert_chip_conservation(&game_state);
    }

    #[test]
    fn test_fold_removes_player() {
        let mut game_state = test_game_state(vec![100.0; 3], 10.0, 5.0);
        game_state.post_blind(5.0);
        game_state.post_blind(10.0);

        let idx = game_state.to_act_idx();
        game_state.fold();

        assert!(!game_state.player_active.get(idx));
        assert!(!game_state.round_data.needs_action.get(idx));
        assert_eq!(game_state.num_active_players(), 2);
    }

    #[test]
    fn test_street_does_not_close_with_action_owing() {
        let mut game_state = test_game_state(vec![100.0; 2], 10.0, 5.0);
        game_state.post_blind(5.0);
        game_state.post_blind(10.0);

        assert!(!game_state.close_street_if_settled());
        assert_eq!(Street::Preflop, game_state.street);
    }

    #[test]
    fn test_displayed_pot_tracks_live_and_committed() {
        let mut game_state = test_game_state(vec![100.0; 2], 10.0, 5.0);
        game_state.post_blind(5.0);
        game_state.post_blind(10.0);
        assert_eq!(15.0, game_state.displayed_pot());

        game_state.wager(5.0); // dealer completes
        game_state.wager(0.0); // big blind checks
        assert!(game_state.close_street_if_settled());

        assert_eq!(20.0, game_state.committed_pot);
        assert_eq!(20.0, game_state.displayed_pot());
        assert_chip_conservation(&game_state);
    }

    #[test]
    fn test_complete_settles_live_bets() {
        let mut game_state = test_game_state(vec![100.0; 2], 10.0, 5.0);
        game_state.post_blind(5.0);
        game_state.post_blind(10.0);
        game_state.fold();

        game_state.complete();

        assert_eq!(Street::Complete, game_state.street);
        assert_eq!(Street::Preflop, game_state.street_before);
        assert_eq!(15.0, game_state.committed_pot);
        assert_chip_conservation(&game_state);
    }

    #[test]
    fn test_complete_twice_is_noop() {
        let mut game_state = test_game_state(vec![100.0; 2], 10.0, 5.0);
        game_state.complete();
        let street_before = game_state.street_before;

        game_state.complete();

        assert_eq!(Street::Complete, game_state.street);
        assert_eq!(street_before, game_state.street_before);
    }

    #[test]
    fn test_postflop_action_starts_left_of_dealer() {
        let mut game_state = test_game_state(vec![100.0; 3], 10.0, 5.0);
        game_state.post_blind(5.0);
        game_state.post_blind(10.0);
        game_state.wager(10.0); // dealer calls
        game_state.wager(5.0); // small blind completes
        game_state.wager(0.0); // big blind checks

        assert!(game_state.close_street_if_settled());
        assert_eq!(Street::Flop, game_state.street);
        assert_eq!(1, game_state.to_act_idx());
    }

    #[test]
    fn test_builder_error_missing_seats() {
        let result = GameStateBuilder::new().big_blind(10.0).build();
        assert_eq!(result.unwrap_err(), GameStateBuilderError::MissingSeats);
    }

    #[test]
    fn test_builder_error_missing_big_blind() {
        let result = GameStateBuilder::new()
            .seats(vec![("a".to_string(), 100.0), ("b".to_string(), 100.0)])
            .build();
        assert_eq!(result.unwrap_err(), GameStateBuilderError::MissingBigBlind);
    }

    #[test]
    fn test_builder_error_one_seat() {
        let result = GameStateBuilder::new()
            .seats(vec![("a".to_string(), 100.0)])
            .big_blind(10.0)
            .build();
        assert_eq!(
            result.unwrap_err(),
            GameStateBuilderError::InvalidSeatCount { actual: 1 }
        );
    }

    #[test]
    fn test_builder_error_small_blind_above_big() {
        let result = GameStateBuilder::new()
            .seats(vec![("a".to_string(), 100.0), ("b".to_string(), 100.0)])
            .blinds(10.0, 20.0)
            .build();
        assert_eq!(
            result.unwrap_err(),
            GameStateBuilderError::InvalidSmallBlind(20.0)
        );
    }

    #[test]
    fn test_builder_error_duplicate_seat_name() {
        let result = GameStateBuilder::new()
            .seats(vec![("a".to_string(), 100.0), ("a".to_string(), 100.0)])
            .big_blind(10.0)
            .build();
        assert_eq!(
            result.unwrap_err(),
            GameStateBuilderError::DuplicateSeatName("a".to_string())
        );
    }

    #[test]
    fn test_builder_error_negative_stack() {
        let result = GameStateBuilder::new()
            .seats(vec![("a".to_string(), 100.0), ("b".to_string(), -1.0)])
            .big_blind(10.0)
            .build();
        assert_eq!(
            result.unwrap_err(),
            GameStateBuilderError::InvalidStack {
                name: "b".to_string(),
                value: -1.0
            }
        );
    }

    #[test]
    fn test_builder_error_insufficient_funded_seats() {
        let result = GameStateBuilder::new()
            .seats(vec![("a".to_string(), 100.0), ("b".to_string(), 0.0)])
            .big_blind(10.0)
            .build();
        assert_eq!(
            result.unwrap_err(),
            GameStateBuilderError::InsufficientActivePlayers
        );
    }

    #[test]
    fn test_builder_error_invalid_dealer_idx() {
        let result = GameStateBuilder::new()
            .seats(vec![("a".to_string(), 100.0), ("b".to_string(), 100.0)])
            .big_blind(10.0)
            .dealer_idx(5)
            .build();
        assert_eq!(
            result.unwrap_err(),
            GameStateBuilderError::InvalidDealerIndex {
                dealer_idx: 5,
                num_players: 2
            }
        );
    }

    #[test]
    fn test_chips_eq_scales_with_magnitude() {
        assert!(chips_eq(1_000_000.0, 1_000_000.05));
        assert!(!chips_eq(10.0, 10.5));
        assert!(chips_gt(10.5, 10.0));
        assert!(!chips_gt(10.0, 10.0));
    }
}
