use crate::games::{RandomSource, SessionRng};
use super::board::Board;
use super::bot_controller::choose_computer_move;
use super::error::MoveError;
use super::types::{GamePhase, GameResult, MoveRecord, Turn, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

/// Read-only view handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub turn: Turn,
    pub result: GameResult,
}

/// A single game session against the computer.
///
/// Owns the board, whose turn it is and the moves made so far. The result is
/// never stored; it is evaluated from the board whenever it is needed, so the
/// session cannot be both finished and in progress at once.
pub struct TicTacToeGame<R: RandomSource = SessionRng> {
    board: Board,
    turn: Turn,
    moves: Vec<MoveRecord>,
    rng: R,
}

impl<R: RandomSource> TicTacToeGame<R> {
    pub fn new(rng: R) -> Self {
        Self {
            board: Board::new(),
            turn: Turn::Player,
            moves: Vec::new(),
            rng,
        }
    }

    pub fn new_game(&mut self) {
        self.reset();
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = Turn::Player;
        self.moves.clear();
    }

    pub fn apply_player_move(&mut self, index: usize) -> Result<GameResult, MoveError> {
        self.apply_move(Turn::Player, index)
    }

    pub fn apply_computer_move(&mut self) -> Result<(usize, GameResult), MoveError> {
        self.ensure_can_move(Turn::Computer)?;

        let index = choose_computer_move(&self.board, &mut self.rng).ok_or_else(|| {
            MoveError::GameOver {
                result: self.result(),
            }
        })?;
        let result = self.apply_move(Turn::Computer, index)?;
        Ok((index, result))
    }

    pub fn current_state(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            turn: self.turn,
            result: self.result(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn result(&self) -> GameResult {
        evaluate(&self.board)
    }

    pub fn phase(&self) -> GamePhase {
        match self.result() {
            GameResult::InProgress => match self.turn {
                Turn::Player => GamePhase::PlayerTurn,
                Turn::Computer => GamePhase::ComputerTurn,
            },
            finished => GamePhase::Finished(finished),
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn last_move(&self) -> Option<MoveRecord> {
        self.moves.last().copied()
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    fn ensure_can_move(&self, turn: Turn) -> Result<(), MoveError> {
        let result = self.result();
        if result.is_over() {
            return Err(MoveError::GameOver { result });
        }

        if self.turn != turn {
            return Err(MoveError::OutOfTurn {
                expected: self.turn,
            });
        }

        Ok(())
    }

    fn apply_move(&mut self, turn: Turn, index: usize) -> Result<GameResult, MoveError> {
        self.ensure_can_move(turn)?;

        self.board.place_mark(index, turn.mark())?;
        self.moves.push(MoveRecord { turn, index });

        let result = self.result();
        if result == GameResult::InProgress {
            self.turn = turn.next();
        }

        Ok(result)
    }
}

impl TicTacToeGame<SessionRng> {
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SessionRng::new(seed))
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{InvalidMoveReason, Mark};

    const E: Mark = Mark::Empty;
    const O: Mark = Mark::Player;
    const X: Mark = Mark::Computer;

    struct FirstChoiceRng;

    impl RandomSource for FirstChoiceRng {
        fn pick_index(&mut self, _len: usize) -> usize {
            0
        }
    }

    fn create_game() -> TicTacToeGame {
        TicTacToeGame::with_seed(42)
    }

    fn play_player_then_computer<R: RandomSource>(game: &mut TicTacToeGame<R>, index: usize) -> GameResult {
        let result = game.apply_player_move(index).unwrap();
        if result.is_over() {
            return result;
        }
        game.apply_computer_move().unwrap().1
    }

    #[test]
    fn test_new_game_starts_with_player() {
        let game = create_game();
        let state = game.current_state();
        assert_eq!(state.board, Board::new());
        assert_eq!(state.turn, Turn::Player);
        assert_eq!(state.result, GameResult::InProgress);
        assert_eq!(game.phase(), GamePhase::PlayerTurn);
        assert!(game.last_move().is_none());
    }

    #[test]
    fn test_player_move_reflected_in_state() {
        let mut game = create_game();
        let result = game.apply_player_move(0).unwrap();
        assert_eq!(result, GameResult::InProgress);

        let state = game.current_state();
        assert_eq!(state.board.cells(), &[O, E, E, E, E, E, E, E, E]);
        assert_eq!(state.turn, Turn::Computer);
        assert_eq!(game.phase(), GamePhase::ComputerTurn);
        assert_eq!(
            game.last_move(),
            Some(MoveRecord {
                turn: Turn::Player,
                index: 0
            })
        );
    }

    #[test]
    fn test_computer_takes_center_after_corner_opening() {
        let mut game = create_game();
        game.apply_player_move(0).unwrap();
        let (index, result) = game.apply_computer_move().unwrap();
        assert_eq!(index, 4);
        assert_eq!(result, GameResult::InProgress);
        assert_eq!(game.board().get(4), Some(X));
        assert_eq!(game.turn(), Turn::Player);
    }

    #[test]
    fn test_player_cannot_move_twice() {
        let mut game = create_game();
        game.apply_player_move(0).unwrap();
        let before = game.current_state();
        let result = game.apply_player_move(1);
        assert_eq!(
            result,
            Err(MoveError::OutOfTurn {
                expected: Turn::Computer
            })
        );
        assert_eq!(game.current_state(), before);
    }

    #[test]
    fn test_computer_cannot_move_first() {
        let mut game = create_game();
        assert_eq!(
            game.apply_computer_move(),
            Err(MoveError::OutOfTurn {
                expected: Turn::Player
            })
        );
        assert_eq!(game.current_state().board, Board::new());
    }

    #[test]
    fn test_occupied_cell_rejected_without_changes() {
        let mut game = create_game();
        game.apply_player_move(0).unwrap();
        game.apply_computer_move().unwrap();
        let before = game.current_state();

        let result = game.apply_player_move(4);
        assert_eq!(
            result,
            Err(MoveError::InvalidMove {
                index: 4,
                reason: InvalidMoveReason::Occupied
            })
        );
        assert_eq!(game.current_state(), before);
        assert_eq!(game.moves().len(), 2);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut game = create_game();
        assert_eq!(
            game.apply_player_move(9),
            Err(MoveError::InvalidMove {
                index: 9,
                reason: InvalidMoveReason::OutOfRange
            })
        );
        assert_eq!(game.turn(), Turn::Player);
    }

    #[test]
    fn test_computer_blocks_and_wins() {
        let mut game = create_game();
        // O:0, X:4 (center), O:1, X blocks at 2, O:6 (blocks X's 2-4-6), X blocks at 3.
        assert_eq!(play_player_then_computer(&mut game, 0), GameResult::InProgress);
        assert_eq!(game.last_move().unwrap().index, 4);
        assert_eq!(play_player_then_computer(&mut game, 1), GameResult::InProgress);
        assert_eq!(game.last_move().unwrap().index, 2);
        assert_eq!(play_player_then_computer(&mut game, 6), GameResult::InProgress);
        assert_eq!(game.last_move().unwrap().index, 3);

        // X holds 2, 3, 4 and completes 3-4-5 next unless the player takes 5.
        let result = play_player_then_computer(&mut game, 8);
        assert_eq!(game.last_move().unwrap().index, 5);
        assert_eq!(result, GameResult::Won(X));
        assert_eq!(game.phase(), GamePhase::Finished(GameResult::Won(X)));
        assert_eq!(game.winning_line().unwrap().cells, [3, 4, 5]);
    }

    #[test]
    fn test_moves_rejected_after_win() {
        let mut game = create_game();
        play_player_then_computer(&mut game, 0);
        play_player_then_computer(&mut game, 1);
        play_player_then_computer(&mut game, 6);
        play_player_then_computer(&mut game, 8);
        let finished = game.current_state();
        assert_eq!(finished.result, GameResult::Won(X));

        assert_eq!(
            game.apply_player_move(7),
            Err(MoveError::GameOver {
                result: GameResult::Won(X)
            })
        );
        assert_eq!(
            game.apply_computer_move(),
            Err(MoveError::GameOver {
                result: GameResult::Won(X)
            })
        );
        assert_eq!(game.current_state(), finished);
    }

    #[test]
    fn test_player_fork_wins() {
        let mut game = TicTacToeGame::new(FirstChoiceRng);
        assert_eq!(play_player_then_computer(&mut game, 0), GameResult::InProgress);
        assert_eq!(game.last_move().unwrap().index, 4);
        assert_eq!(play_player_then_computer(&mut game, 8), GameResult::InProgress);
        assert_eq!(game.last_move().unwrap().index, 2);
        // Blocking 2-4-6 at 6 leaves the player two open lines; the computer can only close one.
        assert_eq!(play_player_then_computer(&mut game, 6), GameResult::InProgress);
        assert_eq!(game.last_move().unwrap().index, 7);

        let result = game.apply_player_move(3).unwrap();
        assert_eq!(result, GameResult::Won(O));
        assert_eq!(game.turn(), Turn::Player);
        assert_eq!(game.phase(), GamePhase::Finished(GameResult::Won(O)));
        assert_eq!(game.winning_line().unwrap().cells, [0, 3, 6]);
        assert_eq!(
            game.apply_computer_move(),
            Err(MoveError::GameOver {
                result: GameResult::Won(O)
            })
        );
    }

    #[test]
    fn test_draw_game_rejects_moves() {
        let mut game = TicTacToeGame::new(FirstChoiceRng);
        for index in [4, 2, 3, 1] {
            assert_eq!(play_player_then_computer(&mut game, index), GameResult::InProgress);
        }
        assert_eq!(game.apply_player_move(8), Ok(GameResult::Draw));

        let state = game.current_state();
        assert_eq!(state.board.cells(), &[X, O, O, O, O, X, X, X, O]);
        assert_eq!(state.result, GameResult::Draw);
        assert_eq!(game.phase(), GamePhase::Finished(GameResult::Draw));
        assert_eq!(
            game.apply_player_move(0),
            Err(MoveError::GameOver {
                result: GameResult::Draw
            })
        );
        assert!(game.apply_computer_move().is_err());
        assert_eq!(game.current_state(), state);
        assert_eq!(game.moves().len(), 9);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut game = create_game();
        play_player_then_computer(&mut game, 0);
        play_player_then_computer(&mut game, 1);
        game.reset();

        let state = game.current_state();
        assert_eq!(state.board, Board::new());
        assert_eq!(state.turn, Turn::Player);
        assert_eq!(state.result, GameResult::InProgress);
        assert!(game.moves().is_empty());

        game.new_game();
        assert_eq!(game.phase(), GamePhase::PlayerTurn);
    }

    #[test]
    fn test_reset_after_finished_game() {
        let mut game = create_game();
        play_player_then_computer(&mut game, 0);
        play_player_then_computer(&mut game, 1);
        play_player_then_computer(&mut game, 6);
        play_player_then_computer(&mut game, 8);
        assert!(game.result().is_over());

        game.reset();
        assert_eq!(game.apply_player_move(4), Ok(GameResult::InProgress));
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = TicTacToeGame::with_seed(11);
        let mut b = TicTacToeGame::with_seed(11);
        for index in [4, 1, 3, 8, 6] {
            if a.result().is_over() {
                break;
            }
            if !a.board().is_empty(index) {
                continue;
            }
            play_player_then_computer(&mut a, index);
            play_player_then_computer(&mut b, index);
        }
        assert_eq!(a.current_state(), b.current_state());
        assert_eq!(a.moves(), b.moves());
        assert_eq!(a.seed(), 11);
    }

    #[test]
    fn test_single_winner_in_random_games() {
        for seed in 0..200 {
            let mut game = TicTacToeGame::with_seed(seed);
            let mut player_rng = SessionRng::new(seed.wrapping_mul(31));
            while !game.result().is_over() {
                let moves = game.board().available_moves();
                let index = moves[player_rng.pick_index(moves.len())];
                play_player_then_computer(&mut game, index);
            }

            let board = game.current_state().board;
            let completed_for = |mark: Mark| {
                crate::games::tictactoe::WIN_PATTERNS
                    .iter()
                    .any(|pattern| pattern.iter().all(|&index| board.get(index) == Some(mark)))
            };
            assert!(!(completed_for(O) && completed_for(X)));
        }
    }
}
