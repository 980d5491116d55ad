use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use parlor_chess::board::position::Position;
use parlor_chess::rules::check_detection::has_any_legal_move;
use parlor_chess::rules::game_status::GameStatus;
use parlor_chess::session::game_session::GameSession;

struct ScriptedGame {
    name: &'static str,
    moves: &'static [(&'static str, &'static str)],
    final_status: GameStatus,
}

const SCRIPTED_GAMES: &[ScriptedGame] = &[
    ScriptedGame {
        name: "fools_mate",
        moves: &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
        final_status: GameStatus::Checkmate,
    },
    ScriptedGame {
        name: "italian_opening",
        moves: &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("g1", "f3"),
            ("b8", "c6"),
            ("f1", "c4"),
            ("f8", "c5"),
            ("e1", "g1"),
            ("g8", "f6"),
        ],
        final_status: GameStatus::InProgress,
    },
];

fn square(text: &str) -> Position {
    Position::from_notation(text).expect("benchmark square should parse")
}

fn replay(moves: &[(&str, &str)]) -> GameSession {
    let mut session = GameSession::new();
    for (from, to) in moves {
        session
            .submit_move(square(from), square(to), None)
            .expect("scripted move should commit");
    }
    session
}

fn bench_mobility(c: &mut Criterion) {
    let mut group = c.benchmark_group("mobility_scan");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for game in SCRIPTED_GAMES {
        let session = replay(game.moves);

        // Correctness guard before benchmarking.
        assert_eq!(
            session.status(),
            game.final_status,
            "status mismatch in warmup for {}",
            game.name
        );

        let board = *session.board();
        let side = session.current_player();
        group.bench_with_input(
            BenchmarkId::from_parameter(game.name),
            &board,
            |b, board| {
                b.iter(|| black_box(has_any_legal_move(black_box(board), black_box(side))));
            },
        );
    }

    group.finish();
}

fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("game_replay");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for game in SCRIPTED_GAMES {
        group.bench_with_input(
            BenchmarkId::from_parameter(game.name),
            &game.moves,
            |b, moves| {
                b.iter(|| {
                    let session = replay(black_box(moves));
                    black_box(session.status())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(rules_benches, bench_mobility, bench_replay);
criterion_main!(rules_benches);
