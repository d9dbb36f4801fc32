use criterion::{black_box, criterion_group, criterion_main, Criterion};

use xp_progression::progression::{level_for_xp, LevelProgress};

fn bench_level_for_xp(c: &mut Criterion) {
    c.bench_function("level_for_xp", |b| {
        b.iter(|| {
            for shift in 0..64 {
                black_box(level_for_xp(black_box(1u64 << shift)));
            }
        })
    });
}

fn bench_level_progress(c: &mut Criterion) {
    c.bench_function("LevelProgress::from_xp", |b| {
        b.iter(|| LevelProgress::from_xp(black_box(123_456_789)))
    });
}

criterion_group!(benches, bench_level_for_xp, bench_level_progress);
criterion_main!(benches);
