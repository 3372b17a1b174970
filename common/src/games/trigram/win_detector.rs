use super::board::Board;
use super::types::{Mark, PatternDirection, Position, WinningLine};

pub const WIN_PATTERN: [Mark; 3] = [Mark::C, Mark::S, Mark::E];
pub const REVERSED_WIN_PATTERN: [Mark; 3] = [Mark::E, Mark::S, Mark::C];

pub const PATTERN_SCORE: i32 = 10;

/// Rows, columns, main diagonal, anti-diagonal. Each as (row, col) from start to end.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

fn read_line(board: &Board, line: &[(usize, usize); 3]) -> [Mark; 3] {
    line.map(|(row, col)| board.get(Position::new(row, col)))
}

fn reversed(pattern: [Mark; 3]) -> [Mark; 3] {
    [pattern[2], pattern[1], pattern[0]]
}

/// True if any line reads `pattern` in either direction.
fn lines_match(board: &Board, pattern: [Mark; 3]) -> bool {
    let backwards = reversed(pattern);
    LINES.iter().any(|line| {
        let marks = read_line(board, line);
        marks == pattern || marks == backwards
    })
}

pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    for line in &LINES {
        let marks = read_line(board, line);
        let direction = if marks == WIN_PATTERN {
            PatternDirection::Forward
        } else if marks == REVERSED_WIN_PATTERN {
            PatternDirection::Reversed
        } else {
            continue;
        };

        let (start_row, start_col) = line[0];
        let (end_row, end_col) = line[2];
        return Some(WinningLine::new(
            direction,
            Position::new(start_row, start_col),
            Position::new(end_row, end_col),
        ));
    }
    None
}

pub fn has_win(board: &Board) -> bool {
    find_winning_line(board).is_some()
}

/// Local heuristic used by symbol selection: [`PATTERN_SCORE`] for each of the two pattern
/// directions found on the board. Each direction is itself matched both ways along a line,
/// so any completed line scores both directions. Not a terminal score.
pub fn evaluate(board: &Board) -> i32 {
    [WIN_PATTERN, REVERSED_WIN_PATTERN]
        .into_iter()
        .filter(|&pattern| lines_match(board, pattern))
        .map(|_| PATTERN_SCORE)
        .sum()
}
