use tracing::{debug, instrument, warn};

use crate::hand_log::BoardCards;

use super::action::{
    AppliedActionPayload, BlindKind, Decision, Event, ForcedBetPayload, HandCompletePayload,
    HandStartPayload, RejectedActionPayload, SeatPayload,
};
use super::decision::DecisionSource;
use super::game_state::{GameState, Street};
use super::historian::Historian;
use super::result::{HandOutcome, HandResult, StallReport};
use super::validator::{self, ResolvedAction};

/// How many consecutive non-progressing steps are allowed within one
/// street before the hand is declared stalled and aborted.
pub const STALL_LIMIT: u32 = 200;

/// Counts consecutive steps that changed nothing. Reset on every applied
/// action and on every street advance.
#[derive(Debug, Clone, Default)]
struct LoopGuard {
    steps: u32,
}

impl LoopGuard {
    fn stall(&mut self) {
        self.steps += 1;
    }

    fn reset(&mut self) {
        self.steps = 0;
    }

    fn tripped(&self) -> bool {
        self.steps >= STALL_LIMIT
    }
}

/// Replays one recorded hand to completion.
///
/// A `HandReplay` exclusively owns its game state, decision source, and
/// loop guard for the duration of one hand. Per-step failures are recorded
/// and recovered from; the only terminal failure is the loop guard
/// tripping, which surfaces as a [`HandOutcome::Stalled`] result rather
/// than an error.
pub struct HandReplay {
    pub game_state: GameState,
    pub id: u128,
    decision_source: Box<dyn DecisionSource>,
    historians: Vec<Box<dyn Historian>>,
    panic_on_historian_error: bool,
    board: BoardCards,
    guard: LoopGuard,
    actions_attempted: u32,
    actions_applied: u32,
    started: bool,
    outcome: Option<HandOutcome>,
}

impl HandReplay {
    pub(crate) fn new(
        game_state: GameState,
        board: BoardCards,
        decision_source: Box<dyn DecisionSource>,
        historians: Vec<Box<dyn Historian>>,
        panic_on_historian_error: bool,
        id: u128,
    ) -> Self {
        Self {
            game_state,
            id,
            decision_source,
            historians,
            panic_on_historian_error,
            board,
            guard: LoopGuard::default(),
            actions_attempted: 0,
            actions_applied: 0,
            started: false,
            outcome: None,
        }
    }

    /// How many consecutive non-progressing steps the current street has
    /// seen.
    pub fn stall_steps(&self) -> u32 {
        self.guard.steps
    }

    /// Run the hand to its end: showdown, everyone folded, or aborted by
    /// the loop guard. Running a finished replay returns the same result
    /// again.
    #[instrument(level = "debug", skip(self), fields(id = %self.id))]
    pub fn run(&mut self) -> HandResult {
        if let Some(outcome) = self.outcome.clone() {
            return self.result(outcome);
        }

        self.start();

        let outcome = loop {
            if self.game_state.players_in_hand() <= 1 {
                break HandOutcome::FoldedOut;
            }
            if self.game_state.street == Street::Showdown {
                break HandOutcome::Showdown;
            }

            if self.game_state.round_data.needs_action.empty() {
                self.advance_street();
                continue;
            }

            self.step();

            if self.guard.tripped() {
                let report = StallReport {
                    street: self.game_state.street,
                    steps: self.guard.steps,
                    needs_action: self.game_state.round_data.needs_action,
                };
                warn!(%report, "aborting stalled hand");
                break HandOutcome::Stalled(report);
            }
        };

        self.game_state.complete();
        self.record_event(Event::HandComplete(HandCompletePayload {
            final_pot: self.game_state.displayed_pot(),
            board: self.game_state.board.clone(),
        }));

        self.outcome = Some(outcome.clone());
        self.result(outcome)
    }

    /// Take one turn: ask the decision source for the player to act,
    /// validate, and apply.
    ///
    /// A rejected or missing decision mutates nothing, does not advance
    /// the log, and counts against the loop guard.
    pub fn step(&mut self) {
        self.start();

        if !self.game_state.street.is_betting() || self.game_state.round_data.needs_action.empty()
        {
            return;
        }

        let idx = self.game_state.to_act_idx();
        match self.decision_source.next_decision(idx, &self.game_state) {
            None => {
                debug!(idx, street = %self.game_state.street, "no decision available");
                self.guard.stall();
            }
            Some(decision) => {
                self.actions_attempted += 1;
                match validator::validate(&self.game_state, idx, decision) {
                    Ok(resolved) => {
                        self.apply(idx, decision, resolved);
                        self.actions_applied += 1;
                        self.guard.reset();
                    }
                    Err(reason) => {
                        warn!(idx, ?decision, %reason, "rejected action");
                        self.decision_source.decision_rejected(idx);
                        self.record_event(Event::ActionRejected(RejectedActionPayload {
                            decision,
                            idx,
                            street: self.game_state.street,
                            reason,
                        }));
                        self.guard.stall();
                    }
                }
            }
        }
    }

    fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;

        self.record_event(Event::HandStart(HandStartPayload {
            small_blind: self.game_state.small_blind,
            big_blind: self.game_state.big_blind,
            num_players: self.game_state.num_players,
        }));
        for idx in 0..self.game_state.num_players {
            self.record_event(Event::Seat(SeatPayload {
                idx,
                name: self.game_state.seat_names[idx].clone(),
                starting_stack: self.game_state.starting_stacks[idx],
            }));
        }

        self.post_blind(BlindKind::SmallBlind);
        self.post_blind(BlindKind::BigBlind);
    }

    fn post_blind(&mut self, blind_kind: BlindKind) {
        let amount = match blind_kind {
            BlindKind::SmallBlind => self.game_state.small_blind,
            BlindKind::BigBlind => self.game_state.big_blind,
        };
        let idx = self.game_state.to_act_idx();
        let posted = self.game_state.post_blind(amount);
        self.record_event(Event::ForcedBet(ForcedBetPayload {
            posted,
            idx,
            blind_kind,
            player_stack: self.game_state.stacks[idx],
        }));
    }

    fn apply(&mut self, idx: usize, decision: Decision, resolved: ResolvedAction) {
        let starting_pot = self.game_state.displayed_pot();
        let starting_bet = self.game_state.current_round_bet();
        let street = self.game_state.street;

        match resolved {
            ResolvedAction::Fold => self.game_state.fold(),
            ResolvedAction::Check => self.game_state.wager(0.0),
            ResolvedAction::Wager { extra, .. } => self.game_state.wager(extra),
        }

        self.record_event(Event::ActionApplied(AppliedActionPayload {
            decision,
            idx,
            street,
            player_stack: self.game_state.stacks[idx],
            starting_pot,
            final_pot: self.game_state.displayed_pot(),
            starting_bet,
            final_bet: self.game_state.current_round_bet(),
            players_active: self.game_state.player_active,
            players_all_in: self.game_state.player_all_in,
        }));
    }

    fn advance_street(&mut self) {
        if !self.game_state.close_street_if_settled() {
            return;
        }
        // A fresh street gets a fresh guard.
        self.guard.reset();

        let street = self.game_state.street;
        self.record_event(Event::StreetAdvance(street));
        for card in self.board.for_street(street) {
            self.game_state.board.push(card);
            self.record_event(Event::DealCommunity(card));
        }
    }

    fn record_event(&mut self, event: Event) {
        let id = self.id;
        let game_state = &self.game_state;
        let panic_on_error = self.panic_on_historian_error;
        self.historians.retain_mut(|historian| {
            match historian.record_event(id, game_state, event.clone()) {
                Ok(()) => true,
                Err(error) => {
                    if panic_on_error {
                        panic!("historian failed to record event: {error}");
                    }
                    warn!(%error, "dropping failing historian");
                    false
                }
            }
        });
    }

    fn result(&self, outcome: HandOutcome) -> HandResult {
        HandResult {
            id: self.id,
            outcome,
            actions_attempted: self.actions_attempted,
            actions_applied: self.actions_applied,
            final_pot: self.game_state.displayed_pot(),
            final_board: self.game_state.board.clone(),
        }
    }
}
