//! Benchmarks for the scoring pipeline
//!
//! Run with: cargo bench --bench scoring
//!
//! Every edit on a scoreboard revalidates and rescores a whole sequence, so
//! these measure the full-pipeline cost per edit for a few typical games.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tenpin_tally::{
    aggregate, frame_scores, glyphs, validate, GameConfig, PlayerHandle, ScoreboardBuilder, Pins,
    ThrowSequence,
};

/// Nine strikes then `X X X`, entered naively into every slot.
fn perfect_game(config: &GameConfig) -> ThrowSequence {
    ThrowSequence::from_throws(config, vec![config.strike_value; config.slot_count()])
}

/// An open game with no bonuses.
fn open_game(config: &GameConfig) -> ThrowSequence {
    let throws: Vec<Pins> = (0..config.frame_count * 2)
        .map(|slot| if slot % 2 == 0 { 4 } else { 3 })
        .collect();
    ThrowSequence::from_throws(config, throws)
}

/// Raw input full of values that need repair.
fn messy_game(config: &GameConfig) -> ThrowSequence {
    let throws: Vec<Pins> = (0..config.slot_count())
        .map(|slot| match slot % 5 {
            0 => 12,
            1 => -3,
            2 => 7,
            3 => 9,
            _ => 10,
        })
        .collect();
    ThrowSequence::from_throws(config, throws)
}

fn bench_validate(c: &mut Criterion) {
    let config = GameConfig::tenpin();
    let mut group = c.benchmark_group("validate");

    for (name, raw) in [
        ("perfect", perfect_game(&config)),
        ("open", open_game(&config)),
        ("messy", messy_game(&config)),
    ] {
        group.bench_with_input(BenchmarkId::new("tenpin", name), &raw, |b, raw| {
            b.iter(|| {
                let mut throws = raw.clone();
                validate(black_box(&mut throws), &config)
            });
        });
    }

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for frame_count in [1usize, 5, 10, 30] {
        let config = GameConfig::short_game(frame_count).unwrap_or_default();
        let raw = messy_game(&config);
        group.throughput(Throughput::Elements(frame_count as u64));
        group.bench_with_input(BenchmarkId::new("frames", frame_count), &raw, |b, raw| {
            b.iter(|| {
                let mut throws = raw.clone();
                validate(&mut throws, &config);
                let frames = frame_scores(black_box(&throws), &config);
                let totals = aggregate(&frames);
                let rendered = glyphs(&throws, &config);
                (totals, rendered)
            });
        });
    }

    group.finish();
}

fn bench_scoreboard_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoreboard");

    for players in [1usize, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("record_and_render", players),
            &players,
            |b, &players| {
                let mut board = ScoreboardBuilder::new()
                    .with_num_players(players)
                    .build()
                    .unwrap_or_else(|err| panic!("benchmark board: {err}"));
                b.iter(|| {
                    for handle in 0..players {
                        let _ = board.record_throw(PlayerHandle::new(handle), 0, black_box(7));
                    }
                    board.score_cards()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_validate,
    bench_full_pipeline,
    bench_scoreboard_edit
);
criterion_main!(benches);
