use crate::games::RandomSource;
use crate::{log, log_debug};
use super::board::Board;
use super::bot_controller::{SearchStats, calculate_move, find_best_move_with_stats};
use super::game_state::TrigramGameState;
use super::types::{BotType, FirstPlayerMode, GameStatus, Move, Side, WinningLine};

/// Human move source. The session keeps asking until a move passes validation.
pub trait MoveSource {
    /// `None` means the input is closed and the game cannot continue.
    fn request_move(&mut self, board: &Board) -> Option<Move>;

    fn reject_move(&mut self, mv: &Move, reason: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Started { first: Side },
    MovePlayed { side: Side, mv: Move },
    Finished { status: GameStatus, winning_line: Option<WinningLine> },
}

/// Read-only view of the game after each event, used for rendering.
pub trait SessionObserver {
    fn on_event(&mut self, event: &SessionEvent, state: &TrigramGameState);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionResult {
    Finished(GameStatus),
    InputClosed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrigramSessionSettings {
    pub first_player_mode: FirstPlayerMode,
    pub bot_type: BotType,
}

pub struct TrigramSession;

impl TrigramSession {
    pub fn run(
        settings: &TrigramSessionSettings,
        rng: &mut impl RandomSource,
        input: &mut impl MoveSource,
        observer: &mut impl SessionObserver,
    ) -> SessionResult {
        let state = TrigramGameState::new(settings.first_player_mode, rng);
        Self::run_from(state, settings.bot_type, rng, input, observer)
    }

    /// Plays an already constructed game to the end.
    pub fn run_from(
        mut state: TrigramGameState,
        bot_type: BotType,
        rng: &mut impl RandomSource,
        input: &mut impl MoveSource,
        observer: &mut impl SessionObserver,
    ) -> SessionResult {
        log!(
            "Game started: first={:?}, bot={:?}, seeded board:\n{}",
            state.first_side,
            bot_type,
            state.board
        );
        observer.on_event(&SessionEvent::Started { first: state.first_side }, &state);

        while !state.status.is_over() {
            let side = state.current_side;
            let mv = match side {
                Side::Computer => Self::computer_move(&mut state.board, bot_type, rng),
                Side::Human => Self::human_move(&state.board, input),
            };
            let Some(mv) = mv else {
                log!("No move available for {:?}, stopping", side);
                return SessionResult::InputClosed;
            };

            if let Err(e) = state.apply_move(side, mv) {
                // Moves are validated before this point.
                log!("Move {:?} by {:?} refused: {}", mv, side, e);
                continue;
            }
            log!("{:?} played {} at {}", side, mv.mark, mv.position);
            observer.on_event(&SessionEvent::MovePlayed { side, mv }, &state);
        }

        let winning_line = state.winning_line();
        match state.winner() {
            Some(side) => log!("Game over: {:?} wins after {} moves", side, state.ply_count),
            None => log!("Game over: draw after {} moves", state.ply_count),
        }
        observer.on_event(
            &SessionEvent::Finished {
                status: state.status,
                winning_line,
            },
            &state,
        );

        SessionResult::Finished(state.status)
    }

    fn computer_move(
        board: &mut Board,
        bot_type: BotType,
        rng: &mut impl RandomSource,
    ) -> Option<Move> {
        let bot_move = match bot_type {
            BotType::Minimax => {
                let mut stats = SearchStats::default();
                let best = find_best_move_with_stats(board, &mut stats);
                log_debug!(
                    "Search visited {} nodes ({} wins, {} draws), max depth {}",
                    stats.nodes,
                    stats.terminal_wins,
                    stats.terminal_draws,
                    stats.max_depth
                );
                best
            }
            BotType::Random => calculate_move(bot_type, board, rng),
        }?;
        Some(Move {
            position: bot_move.position,
            mark: bot_move.mark,
        })
    }

    fn human_move(board: &Board, input: &mut impl MoveSource) -> Option<Move> {
        loop {
            let mv = input.request_move(board)?;
            if board.is_valid_move(mv.position, mv.mark) {
                return Some(mv);
            }

            let reason = if !mv.position.in_bounds() {
                "row and column must be 0, 1 or 2"
            } else if !mv.mark.is_symbol() {
                "symbol must be C, S or E"
            } else {
                "that cell is already taken"
            };
            log_debug!("Rejected human move {:?}: {}", mv, reason);
            input.reject_move(&mv, reason);
        }
    }
}
