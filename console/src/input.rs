use std::io::{BufRead, ErrorKind, Write};
use trigram_common::games::trigram::{Board, Mark, Move, MoveSource};

const PROMPT: &str = "Enter row, column, and symbol (C, S, or E):";

/// Parses `row col symbol`. Commas count as separators and only the first character of
/// the symbol token matters. Range and emptiness checks are left to the game.
pub fn parse_move(line: &str) -> Result<Move, String> {
    let normalized = line.replace(',', " ");
    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(format!("expected 3 values, got {}", tokens.len()));
    }

    let row: usize = tokens[0]
        .parse()
        .map_err(|_| format!("'{}' is not a row number", tokens[0]))?;
    let col: usize = tokens[1]
        .parse()
        .map_err(|_| format!("'{}' is not a column number", tokens[1]))?;
    let symbol = tokens[2].chars().next().unwrap_or('?');
    let mark = Mark::from_char(symbol).ok_or_else(|| format!("'{}' is not a symbol", symbol))?;

    Ok(Move::new(row, col, mark))
}

pub struct TerminalInput<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> MoveSource for TerminalInput<R, W> {
    fn request_move(&mut self, _board: &Board) -> Option<Move> {
        loop {
            writeln!(self.writer, "{}", PROMPT).ok()?;
            self.writer.flush().ok()?;

            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                // The bad line has been consumed; ask again.
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    writeln!(self.writer, "Could not read move: input is not valid text.").ok()?;
                    continue;
                }
                Err(_) => return None,
            }
            if line.trim().is_empty() {
                continue;
            }

            match parse_move(&line) {
                Ok(mv) => return Some(mv),
                Err(e) => {
                    writeln!(self.writer, "Could not read move: {}.", e).ok()?;
                }
            }
        }
    }

    fn reject_move(&mut self, _mv: &Move, reason: &str) {
        let _ = writeln!(self.writer, "Invalid move: {}. Try again.", reason);
    }
}
