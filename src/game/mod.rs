use crate::config::MatchConfig;
use crate::core::{Board, Cell, Piece, PlayerId};
use crate::display::board_to_string;
use crate::error::GameError;
use crate::logic::longest_line;
use crate::player::PlayerController;
use serde::{Deserialize, Serialize};

/// Where a match stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchState {
    AwaitingMove(PlayerId),
    /// `line` lists the winning run in board order
    Won { winner: PlayerId, line: Vec<Cell> },
    Draw,
}

/// Coarse result without the winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(PlayerId),
    Draw,
}

impl MatchState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MatchState::AwaitingMove(_))
    }

    pub fn outcome(&self) -> Outcome {
        match self {
            MatchState::AwaitingMove(_) => Outcome::InProgress,
            MatchState::Won { winner, .. } => Outcome::Win(*winner),
            MatchState::Draw => Outcome::Draw,
        }
    }
}

/// One match: owns the board and the turn order.
pub struct GameSession {
    config: MatchConfig,
    board: Board,
    state: MatchState,
    moves: Vec<Piece>,
}

impl GameSession {
    /// Start a new match. The configuration is checked here, never mid-search.
    pub fn new(config: MatchConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(GameSession {
            config,
            board: Board::new(config.board_size),
            state: MatchState::AwaitingMove(PlayerId::First),
            moves: Vec::new(),
        })
    }

    /// Empty the board and hand the first move back to `First`.
    pub fn reset(&mut self) {
        self.board.reset();
        self.moves.clear();
        self.state = MatchState::AwaitingMove(PlayerId::First);
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn current_state(&self) -> &MatchState {
        &self.state
    }

    /// Whose turn it is, or `None` once the match is over.
    pub fn active_player(&self) -> Option<PlayerId> {
        match self.state {
            MatchState::AwaitingMove(player) => Some(player),
            _ => None,
        }
    }

    pub fn free_cell_count(&self) -> usize {
        self.board.free_cell_count()
    }

    /// Read-only view for rendering.
    pub fn board_snapshot(&self) -> &Board {
        &self.board
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    pub fn last_move(&self) -> Option<&Piece> {
        self.moves.last()
    }

    /// Place the active player's piece on `cell` and advance the match.
    ///
    /// Errors leave the session untouched.
    pub fn apply_move(&mut self, cell: Cell) -> Result<&MatchState, GameError> {
        let player = self.active_player().ok_or(GameError::GameOver)?;
        if !self.board.contains(cell) {
            return Err(GameError::OutOfBounds {
                cell,
                size: self.board.size(),
            });
        }

        let piece = Piece::new(player, cell);
        self.board.place(piece)?;
        self.moves.push(piece);
        log::trace!("move {}: {}", self.moves.len(), piece);

        let line = longest_line(&self.board, &piece);
        self.state = if line.is_win(self.config.win_length) {
            log::info!("{} wins with {} in a row", player, line.max_run);
            MatchState::Won {
                winner: player,
                line: line.cells,
            }
        } else if self.board.is_full() {
            log::info!("draw after {} moves", self.moves.len());
            MatchState::Draw
        } else {
            MatchState::AwaitingMove(player.opponent())
        };
        if self.state.is_terminal() {
            log::debug!("final board:\n{}", board_to_string(&self.board));
        }
        Ok(&self.state)
    }

    /// Run the match to the end, asking `p1`/`p2` for moves in turn.
    ///
    /// `on_update` sees the session after every move and may stop the match by
    /// returning an error. A controller reporting `NoLegalMove` ends the match as a draw.
    pub fn play<F>(
        &mut self,
        p1: &dyn PlayerController,
        p2: &dyn PlayerController,
        mut on_update: F,
    ) -> Result<MatchState, GameError>
    where
        F: FnMut(&GameSession) -> Result<(), GameError>,
    {
        loop {
            let Some(player) = self.active_player() else {
                return Ok(self.state.clone());
            };
            let controller = match player {
                PlayerId::First => p1,
                PlayerId::Second => p2,
            };
            debug_assert_eq!(controller.player_id(), player);

            match controller.choose_move(&self.board) {
                Ok(cell) => {
                    self.apply_move(cell)?;
                }
                Err(GameError::NoLegalMove) => {
                    log::info!("{} has no legal move, scoring a draw", controller.name());
                    self.state = MatchState::Draw;
                }
                Err(e) => return Err(e),
            }
            on_update(self)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{AlphaBetaAI, MinimaxAI, RandomAI};
    use std::cell::RefCell;

    fn session(size: usize, win: usize, depth: usize) -> GameSession {
        GameSession::new(MatchConfig::new(size, win, depth).unwrap()).unwrap()
    }

    fn play_cells(game: &mut GameSession, cells: &[(usize, usize)]) {
        for &(r, c) in cells {
            game.apply_move(Cell::new(r, c)).unwrap();
        }
    }

    /// Scripted mover for driving `play` in tests.
    struct Scripted {
        player_id: PlayerId,
        cells: RefCell<Vec<Cell>>,
    }

    impl PlayerController for Scripted {
        fn choose_move(&self, _board: &Board) -> Result<Cell, GameError> {
            let mut cells = self.cells.borrow_mut();
            if cells.is_empty() {
                return Err(GameError::Aborted);
            }
            Ok(cells.remove(0))
        }
        fn name(&self) -> &str {
            "scripted"
        }
        fn player_id(&self) -> PlayerId {
            self.player_id
        }
    }

    #[test]
    fn test_new_match_is_empty_and_in_progress() {
        for n in 1..=5 {
            for k in 1..=n {
                let game = session(n, k, 1);
                assert_eq!(game.free_cell_count(), n * n);
                assert_eq!(game.current_state().outcome(), Outcome::InProgress);
                assert_eq!(game.active_player(), Some(PlayerId::First));
            }
        }
    }

    #[test]
    fn test_invalid_configuration_rejected_at_construction() {
        let bad = MatchConfig {
            board_size: 3,
            win_length: 4,
            search_depth: 2,
        };
        assert!(matches!(
            GameSession::new(bad),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = session(3, 3, 1);
        game.apply_move(Cell::new(0, 0)).unwrap();
        assert_eq!(game.active_player(), Some(PlayerId::Second));
        game.apply_move(Cell::new(1, 1)).unwrap();
        assert_eq!(game.active_player(), Some(PlayerId::First));
        assert_eq!(game.last_move().map(|p| p.owner), Some(PlayerId::Second));
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn test_top_row_win_reports_line() {
        let mut game = session(3, 3, 1);
        play_cells(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        assert_eq!(
            game.current_state(),
            &MatchState::Won {
                winner: PlayerId::First,
                line: vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)],
            }
        );
        assert!(game.current_state().is_terminal());
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut game = session(3, 3, 1);
        // X O X / X O O / O X X
        play_cells(
            &mut game,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(game.current_state(), &MatchState::Draw);
        assert_eq!(game.free_cell_count(), 0);
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        let mut game = session(3, 3, 1);
        // X O O / O X X / X O X
        play_cells(
            &mut game,
            &[(0, 0), (0, 1), (1, 1), (0, 2), (1, 2), (1, 0), (2, 0), (2, 1), (2, 2)],
        );
        assert_eq!(game.free_cell_count(), 0);
        assert_eq!(game.current_state().outcome(), Outcome::Win(PlayerId::First));
    }

    #[test]
    fn test_errors_leave_state_untouched() {
        let mut game = session(3, 3, 1);
        game.apply_move(Cell::new(1, 1)).unwrap();

        assert_eq!(
            game.apply_move(Cell::new(1, 1)),
            Err(GameError::CellOccupied(Cell::new(1, 1)))
        );
        assert_eq!(
            game.apply_move(Cell::new(3, 0)),
            Err(GameError::OutOfBounds {
                cell: Cell::new(3, 0),
                size: 3
            })
        );
        assert_eq!(game.active_player(), Some(PlayerId::Second));
        assert_eq!(game.free_cell_count(), 8);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut game = session(1, 1, 1);
        game.apply_move(Cell::new(0, 0)).unwrap();
        assert_eq!(game.current_state().outcome(), Outcome::Win(PlayerId::First));
        assert_eq!(game.apply_move(Cell::new(0, 0)), Err(GameError::GameOver));
    }

    #[test]
    fn test_reset_starts_over() {
        let mut game = session(3, 3, 1);
        play_cells(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        game.reset();
        assert_eq!(game.current_state(), &MatchState::AwaitingMove(PlayerId::First));
        assert_eq!(game.free_cell_count(), 9);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_play_reports_updates_and_result() {
        let mut game = session(3, 3, 1);
        let p1 = Scripted {
            player_id: PlayerId::First,
            cells: RefCell::new(vec![Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)]),
        };
        let p2 = Scripted {
            player_id: PlayerId::Second,
            cells: RefCell::new(vec![Cell::new(0, 1), Cell::new(0, 2)]),
        };

        let mut updates = 0;
        let result = game
            .play(&p1, &p2, |_| {
                updates += 1;
                Ok(())
            })
            .unwrap();

        assert_eq!(updates, 5);
        assert_eq!(result.outcome(), Outcome::Win(PlayerId::First));
    }

    #[test]
    fn test_play_propagates_abort() {
        let mut game = session(3, 3, 1);
        let p1 = Scripted {
            player_id: PlayerId::First,
            cells: RefCell::new(vec![Cell::new(0, 0)]),
        };
        let p2 = Scripted {
            player_id: PlayerId::Second,
            cells: RefCell::new(Vec::new()),
        };
        assert_eq!(game.play(&p1, &p2, |_| Ok(())), Err(GameError::Aborted));
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_occupied_proposal_is_an_error() {
        let mut game = session(3, 3, 1);
        let p1 = Scripted {
            player_id: PlayerId::First,
            cells: RefCell::new(vec![Cell::new(0, 0)]),
        };
        let p2 = Scripted {
            player_id: PlayerId::Second,
            cells: RefCell::new(vec![Cell::new(0, 0)]),
        };
        assert_eq!(
            game.play(&p1, &p2, |_| Ok(())),
            Err(GameError::CellOccupied(Cell::new(0, 0)))
        );
        assert_eq!(game.active_player(), Some(PlayerId::Second));
    }

    #[test]
    fn test_tic_tac_toe_alpha_beta_self_play_draws() {
        let config = MatchConfig::new(3, 3, 3).unwrap();
        let mut game = GameSession::new(config).unwrap();
        let p1 = AlphaBetaAI::new(PlayerId::First, "AlphaBeta AI", &config);
        let p2 = AlphaBetaAI::new(PlayerId::Second, "AlphaBeta AI", &config);

        let result = game.play(&p1, &p2, |_| Ok(())).unwrap();
        assert_eq!(result, MatchState::Draw);
        assert_eq!(game.move_count(), 9);
    }

    #[test]
    fn test_tic_tac_toe_minimax_self_play_draws() {
        let config = MatchConfig::new(3, 3, 3).unwrap();
        let mut game = GameSession::new(config).unwrap();
        let p1 = MinimaxAI::new(PlayerId::First, "Minimax AI", &config);
        let p2 = MinimaxAI::new(PlayerId::Second, "Minimax AI", &config);

        assert_eq!(game.play(&p1, &p2, |_| Ok(())).unwrap(), MatchState::Draw);
    }

    #[test]
    fn test_full_depth_search_never_loses_to_random() {
        let config = MatchConfig::new(3, 3, 8).unwrap();
        for seed in 0..5 {
            let mut game = GameSession::new(config).unwrap();
            let p1 = RandomAI::with_seed(PlayerId::First, "Random AI", seed);
            let p2 = AlphaBetaAI::new(PlayerId::Second, "AlphaBeta AI", &config);

            let result = game.play(&p1, &p2, |_| Ok(())).unwrap();
            assert_ne!(result.outcome(), Outcome::Win(PlayerId::First), "seed {}", seed);
        }
    }
}
