use crate::games::RandomSource;
use super::board::Board;
use super::symbol_selector::{SelectionMode, select_symbol};
use super::types::{BotType, Mark, Position};
use super::win_detector::has_win;

pub const WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotMove {
    pub position: Position,
    pub mark: Mark,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub terminal_wins: u64,
    pub terminal_draws: u64,
    pub max_depth: usize,
}

pub fn calculate_move(
    bot_type: BotType,
    board: &mut Board,
    rng: &mut impl RandomSource,
) -> Option<BotMove> {
    match bot_type {
        BotType::Minimax => find_best_move(board),
        BotType::Random => calculate_random_move(board, rng),
    }
}

fn calculate_random_move(board: &Board, rng: &mut impl RandomSource) -> Option<BotMove> {
    let available_moves = board.empty_positions();
    if available_moves.is_empty() {
        return None;
    }
    let position = available_moves[rng.choose(available_moves.len())];
    let mark = Mark::SYMBOLS[rng.choose(Mark::SYMBOLS.len())];
    Some(BotMove { position, mark })
}

/// Exhaustive search for the automated side. Returns `None` on a full board.
/// The board is left as it was found.
pub fn find_best_move(board: &mut Board) -> Option<BotMove> {
    find_best_move_with_stats(board, &mut SearchStats::default())
}

pub fn find_best_move_with_stats(board: &mut Board, stats: &mut SearchStats) -> Option<BotMove> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for position in board.empty_positions() {
        let mark = select_symbol(board, position, SelectionMode::Maximize);
        let score =
            minimax_with_stats(&mut board.place_speculative(position, mark), 0, false, stats);

        if score > best_score {
            best_score = score;
            best_move = Some(BotMove { position, mark });
        }
    }

    best_move
}

/// Scores the current board by searching every continuation to a terminal position.
///
/// A completed pattern scores `+WIN_SCORE` when `is_maximizing` and `-WIN_SCORE`
/// otherwise. The sign follows the branch flag, not a fixed side. `depth` is only
/// recorded, it neither limits the search nor discounts scores.
pub fn minimax(board: &mut Board, depth: usize, is_maximizing: bool) -> i32 {
    minimax_with_stats(board, depth, is_maximizing, &mut SearchStats::default())
}

fn minimax_with_stats(
    board: &mut Board,
    depth: usize,
    is_maximizing: bool,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;
    stats.max_depth = stats.max_depth.max(depth);

    if has_win(board) {
        stats.terminal_wins += 1;
        return if is_maximizing { WIN_SCORE } else { -WIN_SCORE };
    }
    if board.is_full() {
        stats.terminal_draws += 1;
        return DRAW_SCORE;
    }

    let mode = SelectionMode::for_turn(is_maximizing);
    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };

    for position in board.empty_positions() {
        let mark = select_symbol(board, position, mode);
        let score = minimax_with_stats(
            &mut board.place_speculative(position, mark),
            depth + 1,
            !is_maximizing,
            stats,
        );

        best_score = if is_maximizing {
            best_score.max(score)
        } else {
            best_score.min(score)
        };
    }

    best_score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::ScriptedRandom;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = board("CCS/SEE/CCS");
        assert_eq!(find_best_move(&mut board), None);
    }

    #[test]
    fn test_single_empty_cell_completing_win() {
        // Only (0,2) is open and E there completes C S E.
        let mut board = board("CS-/SEE/CCS");
        let before = board;

        let best = find_best_move(&mut board).unwrap();
        assert_eq!(best.position, Position::new(0, 2));
        assert_eq!(board, before);

        let mark = select_symbol(&mut board, best.position, SelectionMode::Maximize);
        assert_eq!(mark, Mark::E);
        assert_eq!(best.mark, mark);

        board.set(best.position, mark);
        assert!(has_win(&board));
    }

    #[test]
    fn test_seeded_board_move_targets_empty_cell() {
        for choice in [0, 1] {
            let mut rng = ScriptedRandom::new(vec![choice]);
            let mut board = Board::initialize(&mut rng);
            let seed_col = if choice == 0 { 0 } else { 2 };
            let before = board;

            let best = find_best_move(&mut board).unwrap();

            assert_ne!(best.position, Position::new(1, seed_col));
            assert_eq!(before.get(best.position), Mark::Empty);
            assert!(best.mark.is_symbol());
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_mid_game_move_targets_empty_cell_and_restores_board() {
        let mut board = board("C--/-S-/--C");
        let before = board;

        let best = find_best_move(&mut board).unwrap();

        assert_eq!(board.get(best.position), Mark::Empty);
        assert_eq!(board, before);
    }

    #[test]
    fn test_minimax_terminal_scores_follow_branch_flag() {
        let mut won = board("CSE/---/---");
        assert_eq!(minimax(&mut won, 0, true), WIN_SCORE);
        assert_eq!(minimax(&mut won, 0, false), -WIN_SCORE);
        // Depth does not discount.
        assert_eq!(minimax(&mut won, 7, true), WIN_SCORE);

        let mut drawn = board("CCS/SEE/CCS");
        assert_eq!(minimax(&mut drawn, 0, true), DRAW_SCORE);
        assert_eq!(minimax(&mut drawn, 0, false), DRAW_SCORE);
    }

    #[test]
    fn test_win_found_one_ply_deep_scores_for_next_branch() {
        // Maximizing fills (0,2) with E, completing the pattern; the child is evaluated
        // with is_maximizing = false and reports -WIN_SCORE.
        let mut board = board("CS-/SEE/CCS");
        let before = board;
        assert_eq!(minimax(&mut board, 0, true), -WIN_SCORE);
        assert_eq!(board, before);
    }

    #[test]
    fn test_minimizing_branch_avoids_completing_pattern() {
        // Minimizing picks C at (0,2): no line completes and the board fills up.
        let mut board = board("CS-/SEE/CCS");
        assert_eq!(minimax(&mut board, 0, false), DRAW_SCORE);
    }

    #[test]
    fn test_immediate_win_skipped_when_another_cell_is_open() {
        // E at (0,2) completes C S E, but the child node is minimizing and scores it
        // -WIN_SCORE. C at (2,2) leads to a draw (0), which is higher, so it is chosen.
        let mut board = board("CS-/SEE/CC-");
        let before = board;

        let best = find_best_move(&mut board).unwrap();

        assert_eq!(
            best,
            BotMove {
                position: Position::new(2, 2),
                mark: Mark::C
            }
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_first_seen_wins_ties() {
        // Both continuations draw, so the first empty cell in row-major order is kept.
        let mut board = board("CC-/SEE/CC-");
        let best = find_best_move(&mut board).unwrap();
        assert_eq!(best.position, Position::new(0, 2));
    }

    #[test]
    fn test_stats_track_depth_and_terminals() {
        let mut board = board("C--/-S-/--C");
        let mut stats = SearchStats::default();

        find_best_move_with_stats(&mut board, &mut stats);

        assert!(stats.nodes > 0);
        assert!(stats.max_depth <= 5);
        assert!(stats.terminal_wins + stats.terminal_draws > 0);
    }

    #[test]
    fn test_random_bot_picks_scripted_cell_and_symbol() {
        let mut board = board("C--/-S-/--C");
        let mut rng = ScriptedRandom::new(vec![2, 1]);

        let bot_move = calculate_move(BotType::Random, &mut board, &mut rng).unwrap();

        assert_eq!(bot_move.position, Position::new(1, 0));
        assert_eq!(bot_move.mark, Mark::S);
    }

    #[test]
    fn test_random_bot_on_full_board() {
        let mut board = board("CCS/SEE/CCS");
        let mut rng = ScriptedRandom::new(vec![]);
        assert_eq!(calculate_move(BotType::Random, &mut board, &mut rng), None);
    }
}
