use super::board::Board;
use super::types::{Mark, Position};
use super::win_detector::evaluate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionMode {
    Maximize,
    Minimize,
}

impl SelectionMode {
    pub fn for_turn(is_maximizing: bool) -> Self {
        if is_maximizing {
            SelectionMode::Maximize
        } else {
            SelectionMode::Minimize
        }
    }
}

/// Fallback when minimizing and no symbol ever scores below `i32::MAX`.
const MINIMIZE_DEFAULT: Mark = Mark::E;

/// Picks the symbol to put into the empty cell at `position` by trying each of
/// [`Mark::SYMBOLS`] and scoring the board with [`evaluate`]. Only a strictly better
/// score replaces the current pick, so the earliest symbol wins ties.
pub fn select_symbol(board: &mut Board, position: Position, mode: SelectionMode) -> Mark {
    let (mut best_score, mut best_mark) = match mode {
        SelectionMode::Maximize => (i32::MIN, Mark::Empty),
        SelectionMode::Minimize => (i32::MAX, MINIMIZE_DEFAULT),
    };

    for mark in Mark::SYMBOLS {
        let score = evaluate(&board.place_speculative(position, mark));
        let improves = match mode {
            SelectionMode::Maximize => score > best_score,
            SelectionMode::Minimize => score < best_score,
        };
        if improves {
            best_score = score;
            best_mark = mark;
        }
    }

    best_mark
}
