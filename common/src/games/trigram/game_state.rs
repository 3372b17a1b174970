use crate::games::RandomSource;
use super::board::Board;
use super::types::{FirstPlayerMode, GameStatus, Move, Side, WinningLine};
use super::win_detector::{find_winning_line, has_win};

const SIDES: [Side; 2] = [Side::Computer, Side::Human];

#[derive(Debug, Clone)]
pub struct TrigramGameState {
    pub board: Board,
    pub first_side: Side,
    pub current_side: Side,
    pub status: GameStatus,
    pub last_move: Option<Move>,
    pub ply_count: usize,
}

impl TrigramGameState {
    /// Seeds the board first, then picks the starting side.
    pub fn new(first_player_mode: FirstPlayerMode, rng: &mut impl RandomSource) -> Self {
        let board = Board::initialize(rng);
        let first_side = match first_player_mode {
            FirstPlayerMode::Random => SIDES[rng.choose(SIDES.len())],
            FirstPlayerMode::Computer => Side::Computer,
            FirstPlayerMode::Human => Side::Human,
        };
        Self::from_board(board, first_side)
    }

    pub fn from_board(board: Board, first_side: Side) -> Self {
        Self {
            board,
            first_side,
            current_side: first_side,
            status: GameStatus::InProgress,
            last_move: None,
            ply_count: 0,
        }
    }

    pub fn apply_move(&mut self, side: Side, mv: Move) -> Result<GameStatus, String> {
        if self.status.is_over() {
            return Err("Game is already over".to_string());
        }

        if side != self.current_side {
            return Err("Not your turn".to_string());
        }

        if !mv.position.in_bounds() {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.is_valid_move(mv.position, mv.mark) {
            return Err(if mv.mark.is_symbol() {
                "Cell is already marked".to_string()
            } else {
                "Invalid symbol".to_string()
            });
        }

        self.board.set(mv.position, mv.mark);
        self.last_move = Some(mv);
        self.ply_count += 1;

        self.check_game_over(side);

        if self.status == GameStatus::InProgress {
            self.current_side = side.other();
        }

        Ok(self.status)
    }

    fn check_game_over(&mut self, mover: Side) {
        if has_win(&self.board) {
            self.status = GameStatus::Won(mover);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        find_winning_line(&self.board)
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::Won(side) => Some(side),
            _ => None,
        }
    }
}
