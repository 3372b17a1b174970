use std::io::Write;
use trigram_common::games::trigram::{
    BOARD_SIZE, Board, GameStatus, Position, SessionEvent, SessionObserver, Side,
    TrigramGameState, WinningLine,
};

/// Grid with row and column indices. Cells of `highlight` are bracketed.
pub fn render_board(board: &Board, highlight: Option<&WinningLine>) -> String {
    let mut out = String::from(" ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!(" {} ", col));
    }
    out.push('\n');

    for row in 0..BOARD_SIZE {
        out.push_str(&row.to_string());
        for col in 0..BOARD_SIZE {
            let position = Position::new(row, col);
            let mark = board.get(position);
            if highlight.is_some_and(|line| line.contains(position)) {
                out.push_str(&format!("[{}]", mark));
            } else {
                out.push_str(&format!(" {} ", mark));
            }
        }
        out.push('\n');
    }
    out
}

pub struct ConsoleRenderer<W: Write> {
    writer: W,
    computer_name: String,
    human_name: String,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(writer: W, computer_name: String, human_name: String) -> Self {
        Self {
            writer,
            computer_name,
            human_name,
        }
    }

    fn name(&self, side: Side) -> &str {
        match side {
            Side::Computer => &self.computer_name,
            Side::Human => &self.human_name,
        }
    }

    fn describe(&self, event: &SessionEvent) -> String {
        match event {
            SessionEvent::Started { first } => format!("{} starts the game.", self.name(*first)),
            SessionEvent::MovePlayed {
                side: Side::Computer,
                mv,
            } => format!(
                "{} plays at {} with {}",
                self.computer_name, mv.position, mv.mark
            ),
            SessionEvent::MovePlayed {
                side: Side::Human, ..
            } => format!("{} has made their move.", self.human_name),
            SessionEvent::Finished { status, .. } => match status {
                GameStatus::Won(side) => format!("{} wins!", self.name(*side)),
                GameStatus::Draw => "It's a draw!".to_string(),
                GameStatus::InProgress => "Game stopped.".to_string(),
            },
        }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> SessionObserver for ConsoleRenderer<W> {
    fn on_event(&mut self, event: &SessionEvent, state: &TrigramGameState) {
        let highlight = match event {
            SessionEvent::Finished { winning_line, .. } => winning_line.as_ref(),
            _ => None,
        };
        let text = format!(
            "{}\n{}",
            self.describe(event),
            render_board(&state.board, highlight)
        );
        // Nothing useful to do if the terminal is gone.
        let _ = writeln!(self.writer, "{}", text).and_then(|_| self.writer.flush());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trigram_common::games::trigram::{Mark, Move, PatternDirection};

    fn renderer() -> ConsoleRenderer<Vec<u8>> {
        ConsoleRenderer::new(Vec::new(), "Computer".to_string(), "Ada".to_string())
    }

    fn output(renderer: ConsoleRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_writer()).unwrap()
    }

    #[test]
    fn test_render_board_with_indices() {
        let board: Board = "CSE/S--/---".parse().unwrap();
        assert_eq!(
            render_board(&board, None),
            "  0  1  2 \n0 C  S  E \n1 S  -  - \n2 -  -  - \n"
        );
    }

    #[test]
    fn test_render_board_highlights_winning_line() {
        let board: Board = "CSE/---/---".parse().unwrap();
        let line = WinningLine::new(
            PatternDirection::Forward,
            Position::new(0, 0),
            Position::new(0, 2),
        );
        let rendered = render_board(&board, Some(&line));
        assert!(rendered.contains("0[C][S][E]\n"));
        assert!(rendered.contains("1 -  -  - \n"));
    }

    #[test]
    fn test_announces_computer_move() {
        let mut renderer = renderer();
        let state = TrigramGameState::from_board("CS-/---/---".parse().unwrap(), Side::Human);

        renderer.on_event(
            &SessionEvent::MovePlayed {
                side: Side::Computer,
                mv: Move::new(0, 1, Mark::S),
            },
            &state,
        );

        assert!(output(renderer).starts_with("Computer plays at 0,1 with S\n"));
    }

    #[test]
    fn test_announces_start_human_move_and_result() {
        let mut renderer = renderer();
        let state = TrigramGameState::from_board("CSE/---/---".parse().unwrap(), Side::Human);

        renderer.on_event(&SessionEvent::Started { first: Side::Human }, &state);
        renderer.on_event(
            &SessionEvent::MovePlayed {
                side: Side::Human,
                mv: Move::new(0, 2, Mark::E),
            },
            &state,
        );
        renderer.on_event(
            &SessionEvent::Finished {
                status: GameStatus::Won(Side::Human),
                winning_line: state.winning_line(),
            },
            &state,
        );

        let text = output(renderer);
        assert!(text.contains("Ada starts the game."));
        assert!(text.contains("Ada has made their move."));
        assert!(text.contains("Ada wins!"));
        assert!(text.contains("[C][S][E]"));
    }

    #[test]
    fn test_announces_draw() {
        let mut renderer = renderer();
        let state = TrigramGameState::from_board("CCS/SEE/CCS".parse().unwrap(), Side::Human);

        renderer.on_event(
            &SessionEvent::Finished {
                status: GameStatus::Draw,
                winning_line: None,
            },
            &state,
        );

        assert!(output(renderer).starts_with("It's a draw!\n"));
    }
}
