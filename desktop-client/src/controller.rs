use std::time::{Duration, Instant};

use common::games::tictactoe::{GamePhase, GameResult, GameSnapshot, Mark, TicTacToeGame, WinningLine};
use common::games::{RandomSource, SessionRng};
use common::log;

use crate::config::PacingConfig;
use crate::pacing::{MoveScheduler, PacingStep};

pub fn result_message(result: GameResult) -> Option<String> {
    match result {
        GameResult::InProgress => None,
        GameResult::Won(mark) => {
            let winner_name = if mark == Mark::Player { "Player" } else { "Computer" };
            Some(format!("Congratulations, Winner is {}🎉", winner_name))
        }
        GameResult::Draw => Some("Game ended in a draw!".to_string()),
    }
}

/// Sequences engine calls for the window: player click, paced result check,
/// paced computer reply. The banner only appears once the result check fires.
pub struct GameController<R: RandomSource = SessionRng> {
    game: TicTacToeGame<R>,
    scheduler: MoveScheduler,
    banner: Option<String>,
}

impl<R: RandomSource> GameController<R> {
    pub fn new(game: TicTacToeGame<R>, pacing: &PacingConfig) -> Self {
        Self {
            game,
            scheduler: MoveScheduler::new(pacing),
            banner: None,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.current_state()
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Highlighted only after the banner is up, so the line appears with the message.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.banner.as_ref().and(self.game.winning_line())
    }

    pub fn accepts_input(&self) -> bool {
        self.banner.is_none()
            && self.scheduler.is_idle()
            && self.game.phase() == GamePhase::PlayerTurn
    }

    pub fn status_text(&self) -> &'static str {
        match self.game.phase() {
            GamePhase::PlayerTurn if self.scheduler.is_idle() => "Your turn (O)",
            GamePhase::PlayerTurn | GamePhase::ComputerTurn => "Computer is thinking...",
            GamePhase::Finished(_) => "Game over",
        }
    }

    pub fn handle_cell_click(&mut self, index: usize, now: Instant) -> bool {
        if !self.accepts_input() || !self.game.board().is_empty(index) {
            return false;
        }

        match self.game.apply_player_move(index) {
            Ok(result) => {
                log!("Player placed O at {} -> {:?}", index, result);
                self.scheduler.schedule_result_check(now);
                true
            }
            Err(e) => {
                log!("Player move rejected: {}", e);
                false
            }
        }
    }

    pub fn tick(&mut self, now: Instant) {
        let Some(step) = self.scheduler.poll(now) else {
            return;
        };

        match step {
            PacingStep::ShowResult => self.show_result_or_continue(now),
            PacingStep::ComputerMove => match self.game.apply_computer_move() {
                Ok((index, result)) => {
                    log!("Computer placed X at {} -> {:?}", index, result);
                    self.scheduler.schedule_result_check(now);
                }
                Err(e) => log!("Computer move rejected: {}", e),
            },
        }
    }

    pub fn time_until_next_step(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until_due(now)
    }

    pub fn reset(&mut self) {
        self.game.reset();
        self.scheduler.cancel();
        self.banner = None;
        log!("New game started");
    }

    fn show_result_or_continue(&mut self, now: Instant) {
        match self.game.phase() {
            GamePhase::Finished(result) => {
                self.banner = result_message(result);
                log!("Game finished: {:?} after {} moves", result, self.game.moves().len());
            }
            GamePhase::ComputerTurn => self.scheduler.schedule_computer_move(now),
            GamePhase::PlayerTurn => {}
        }
    }
}
