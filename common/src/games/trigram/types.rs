use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    C,
    S,
    E,
}

impl Mark {
    /// Fillable symbols in enumeration order. Symbol selection and tie-breaks depend on it.
    pub const SYMBOLS: [Mark; 3] = [Mark::C, Mark::S, Mark::E];

    pub fn is_symbol(&self) -> bool {
        *self != Mark::Empty
    }

    pub fn to_char(&self) -> char {
        match self {
            Mark::Empty => '-',
            Mark::C => 'C',
            Mark::S => 'S',
            Mark::E => 'E',
        }
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c.to_ascii_uppercase() {
            '-' => Some(Mark::Empty),
            'C' => Some(Mark::C),
            'S' => Some(Mark::S),
            'E' => Some(Mark::E),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// One ply: a symbol placed into a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub position: Position,
    pub mark: Mark,
}

impl Move {
    pub fn new(row: usize, col: usize, mark: Mark) -> Self {
        Self {
            position: Position::new(row, col),
            mark,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Computer,
    Human,
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Side::Computer => Side::Human,
            Side::Human => Side::Computer,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Side),
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    #[default]
    Random,
    Computer,
    Human,
}

impl FromStr for FirstPlayerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(FirstPlayerMode::Random),
            "computer" => Ok(FirstPlayerMode::Computer),
            "human" => Ok(FirstPlayerMode::Human),
            other => Err(format!(
                "Unknown first player mode '{}', expected random, computer or human",
                other
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotType {
    #[default]
    Minimax,
    Random,
}

impl FromStr for BotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(BotType::Minimax),
            "random" => Ok(BotType::Random),
            other => Err(format!("Unknown bot type '{}', expected minimax or random", other)),
        }
    }
}

/// Reading direction of the winning pattern along a line, from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternDirection {
    Forward,
    Reversed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub direction: PatternDirection,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(direction: PatternDirection, start: Position, end: Position) -> Self {
        Self {
            direction,
            start,
            end,
        }
    }

    /// The three cells of the line, from `start` to `end`.
    pub fn cells(&self) -> [Position; 3] {
        let step_row = self.end.row as isize - self.start.row as isize;
        let step_col = self.end.col as isize - self.start.col as isize;
        let middle = Position::new(
            self.start.row.wrapping_add_signed(step_row / 2),
            self.start.col.wrapping_add_signed(step_col / 2),
        );
        [self.start, middle, self.end]
    }

    pub fn contains(&self, position: Position) -> bool {
        self.cells().contains(&position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_from_char_is_case_insensitive() {
        assert_eq!(Mark::from_char('c'), Some(Mark::C));
        assert_eq!(Mark::from_char('S'), Some(Mark::S));
        assert_eq!(Mark::from_char('e'), Some(Mark::E));
        assert_eq!(Mark::from_char('-'), Some(Mark::Empty));
        assert_eq!(Mark::from_char('x'), None);
    }

    #[test]
    fn test_only_three_marks_are_symbols() {
        assert!(Mark::SYMBOLS.iter().all(Mark::is_symbol));
        assert!(!Mark::Empty.is_symbol());
    }

    #[test]
    fn test_winning_line_cells_for_anti_diagonal() {
        let line = WinningLine::new(
            PatternDirection::Forward,
            Position::new(0, 2),
            Position::new(2, 0),
        );
        assert_eq!(
            line.cells(),
            [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)]
        );
        assert!(line.contains(Position::new(1, 1)));
        assert!(!line.contains(Position::new(0, 0)));
    }

    #[test]
    fn test_parse_modes() {
        assert_eq!("Computer".parse::<FirstPlayerMode>(), Ok(FirstPlayerMode::Computer));
        assert_eq!("random".parse::<BotType>(), Ok(BotType::Random));
        assert!("host".parse::<FirstPlayerMode>().is_err());
    }
}
