mod board;
mod bot_controller;
mod game_state;
mod session;
mod symbol_selector;
mod types;
mod win_detector;

pub use board::{Board, Placement};
pub use bot_controller::{
    BotMove, DRAW_SCORE, SearchStats, WIN_SCORE, calculate_move, find_best_move,
    find_best_move_with_stats, minimax,
};
pub use game_state::TrigramGameState;
pub use session::{
    MoveSource, SessionEvent, SessionObserver, SessionResult, TrigramSession,
    TrigramSessionSettings,
};
pub use symbol_selector::{SelectionMode, select_symbol};
pub use types::{
    BOARD_SIZE, BotType, FirstPlayerMode, GameStatus, Mark, Move, PatternDirection, Position,
    Side, WinningLine,
};
pub use win_detector::{
    PATTERN_SCORE, REVERSED_WIN_PATTERN, WIN_PATTERN, evaluate, find_winning_line, has_win,
};
