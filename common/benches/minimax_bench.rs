use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use trigram_common::games::SessionRng;
use trigram_common::games::trigram::{
    Board, BotType, FirstPlayerMode, Move, TrigramGameState, calculate_move, find_best_move,
};

fn bench_best_move_seeded_board() {
    let mut rng = SessionRng::new(1);
    let mut board = Board::initialize(&mut rng);
    black_box(find_best_move(&mut board));
}

fn bench_best_move_mid_game() {
    let mut board: Board = "C--/SS-/--E".parse().expect("valid board");
    black_box(find_best_move(&mut board));
}

fn bench_full_game_bot_vs_bot() {
    let mut rng = SessionRng::new(5);
    let mut state = TrigramGameState::new(FirstPlayerMode::Computer, &mut rng);

    while !state.status.is_over() {
        let side = state.current_side;
        let Some(bot_move) = calculate_move(BotType::Minimax, &mut state.board, &mut rng) else {
            break;
        };
        let mv = Move {
            position: bot_move.position,
            mark: bot_move.mark,
        };
        if state.apply_move(side, mv).is_err() {
            break;
        }
    }
    black_box(state.status);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("best_move_seeded_board", |b| {
        b.iter(bench_best_move_seeded_board)
    });

    group.bench_function("best_move_mid_game", |b| b.iter(bench_best_move_mid_game));

    group.bench_function("full_game_bot_vs_bot", |b| {
        b.iter(bench_full_game_bot_vs_bot)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
