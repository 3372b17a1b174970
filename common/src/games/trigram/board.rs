use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::games::RandomSource;
use super::types::{BOARD_SIZE, Mark, Position};

/// Column of the pre-seeded `S` in the middle row.
const SEED_COLUMNS: [usize; 2] = [0, 2];
const SEED_ROW: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Fresh game board: all cells empty except one `S` in the middle row, at the
    /// left or right edge.
    pub fn initialize(rng: &mut impl RandomSource) -> Self {
        let mut board = Self::empty();
        let col = SEED_COLUMNS[rng.choose(SEED_COLUMNS.len())];
        board.set(Position::new(SEED_ROW, col), Mark::S);
        board
    }

    /// Panics if `position` is out of bounds; callers check with [`Position::in_bounds`].
    pub fn get(&self, position: Position) -> Mark {
        self.cells[position.row][position.col]
    }

    pub fn set(&mut self, position: Position, mark: Mark) {
        self.cells[position.row][position.col] = mark;
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    /// Empty cells in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    positions.push(Position::new(row, col));
                }
            }
        }
        positions
    }

    pub fn is_valid_move(&self, position: Position, mark: Mark) -> bool {
        position.in_bounds() && self.get(position) == Mark::Empty && mark.is_symbol()
    }

    /// Writes `mark` into `position` until the returned guard is dropped, then puts the
    /// previous value back. The guard dereferences to the board.
    pub fn place_speculative(&mut self, position: Position, mark: Mark) -> Placement<'_> {
        let previous = self.get(position);
        self.set(position, mark);
        Placement {
            board: self,
            position,
            previous,
        }
    }
}

pub struct Placement<'a> {
    board: &'a mut Board,
    position: Position,
    previous: Mark,
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.set(self.position, self.previous);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|mark| mark.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Parses rows separated by `/` or whitespace, e.g. `"CSE/-S-/---"`.
impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()));
        }

        let mut board = Board::empty();
        for (row, text) in rows.iter().enumerate() {
            let chars: Vec<char> = text.chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(format!("Row {} must have {} cells", row, BOARD_SIZE));
            }
            for (col, &c) in chars.iter().enumerate() {
                let mark = Mark::from_char(c)
                    .ok_or_else(|| format!("Invalid cell '{}' at {},{}", c, row, col))?;
                board.set(Position::new(row, col), mark);
            }
        }
        Ok(board)
    }
}
