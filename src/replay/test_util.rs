use approx::assert_abs_diff_eq;

use super::game_state::{GameState, RoundData, Street};

/// Chips never appear or vanish: stacks plus the displayed pot always add
/// up to the starting stacks.
pub fn assert_chip_conservation(game_state: &GameState) {
    let starting: f32 = game_state.starting_stacks.iter().sum();
    let current: f32 = game_state.stacks.iter().sum::<f32>() + game_state.displayed_pot();

    let epsilon = if starting == 0.0 {
        f32::EPSILON
    } else {
        starting / 100_000.0
    };
    assert_abs_diff_eq!(current, starting, epsilon = epsilon);
}

pub fn assert_valid_round_data(round_data: &RoundData) {
    // The wager level is the most anyone has put in this street.
    let max_bet = round_data.player_bet.iter().copied().fold(0.0, f32::max);
    let epsilon = if max_bet == 0.0 {
        f32::EPSILON
    } else {
        max_bet / 100_000.0
    };
    assert_abs_diff_eq!(max_bet, round_data.bet, epsilon = epsilon);

    // No one still owing action can be above the level they owe to.
    for (idx, bet) in round_data.player_bet.iter().enumerate() {
        if round_data.needs_action.get(idx) {
            assert!(
                *bet <= round_data.bet + epsilon,
                "player {} owes action but has {} in against a level of {}",
                idx,
                bet,
                round_data.bet
            );
        }
    }
}

/// A finished hand: terminal street, empty action set, settled pot.
pub fn assert_complete(game_state: &GameState) {
    assert_eq!(Street::Complete, game_state.street);
    assert!(game_state.round_data.needs_action.empty());
    assert_eq!(game_state.displayed_pot(), game_state.committed_pot);
    assert_chip_conservation(game_state);
}
