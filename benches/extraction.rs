//! Extraction benchmark: recorded session → feature vector.

use cheatbuster::environment::{FixedLoad, ManualClock};
use cheatbuster::{RecordableAction, Session};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::sync::Arc;

fn make_session(clicks: i64) -> Session {
    let clock = Arc::new(ManualClock::new(0));
    let mut session = Session::new(clock.clone(), Arc::new(FixedLoad::default()));
    for i in 0..clicks {
        clock.set(i * 80);
        session.record(RecordableAction::LeftClick).unwrap();
        session.record(RecordableAction::BlockPlace).unwrap();
    }
    session
}

fn bench_first_extraction(c: &mut Criterion) {
    let mut g = c.benchmark_group("extract_cold");
    for n in [16, 128, 1024] {
        g.bench_function(format!("events_{}", n).as_str(), |b| {
            b.iter_batched(
                || make_session(n),
                |session| black_box(session.extract_features()),
                BatchSize::SmallInput,
            )
        });
    }
    g.finish();
}

fn bench_cached_extraction(c: &mut Criterion) {
    let session = make_session(1024);
    session.extract_features();

    c.bench_function("extract_cached_1024", |b| b.iter(|| black_box(session.extract_features())));
}

criterion_group!(benches, bench_first_extraction, bench_cached_extraction);
criterion_main!(benches);
