//! Append benchmark: recording actions into a live session.

use cheatbuster::environment::{FixedLoad, ManualClock};
use cheatbuster::{RecordableAction, Session, SharedSession};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

fn bench_record(c: &mut Criterion) {
    let clock = Arc::new(ManualClock::new(0));
    let load = Arc::new(FixedLoad::default());

    c.bench_function("record_1000_left_clicks", |b| {
        b.iter(|| {
            let mut session = Session::new(clock.clone(), load.clone());
            for _ in 0..1000 {
                session.record(black_box(RecordableAction::LeftClick)).unwrap();
            }
            black_box(session)
        })
    });
}

fn bench_record_shared(c: &mut Criterion) {
    let clock = Arc::new(ManualClock::new(0));
    let load = Arc::new(FixedLoad::default());

    c.bench_function("shared_record_1000_mixed", |b| {
        b.iter(|| {
            let shared = SharedSession::new(Session::new(clock.clone(), load.clone()));
            for i in 0..1000 {
                shared.record(RecordableAction::ALL[i % 4]).unwrap();
            }
            black_box(shared)
        })
    });
}

criterion_group!(benches, bench_record, bench_record_shared);
criterion_main!(benches);
