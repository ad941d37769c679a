use criterion::{black_box, criterion_group, criterion_main, Criterion};
use maxlfsr::{test_helper::CountingRng, MaxLfsr, Transition};

fn bench_next(c: &mut Criterion) {
    for width in [4, 16, 64] {
        let mut lfsr = MaxLfsr::new(width).unwrap();
        c.bench_function(&format!("next_width_{}", width), |b| {
            b.iter(|| black_box(lfsr.next()))
        });
    }
}

fn bench_next_state(c: &mut Criterion) {
    let transition = Transition::for_width(64).unwrap();
    c.bench_function("next_state_width_64", |b| {
        let mut state = 1u64;
        b.iter(|| {
            state = transition.next_state(black_box(state));
            state
        })
    });
}

fn bench_full_cycle(c: &mut Criterion) {
    c.bench_function("full_cycle_width_16", |b| {
        b.iter(|| {
            let mut lfsr = MaxLfsr::with_rng(16, CountingRng(1)).unwrap();
            let mut buf = vec![0u64; (1 << 16) - 1];
            lfsr.fill(&mut buf);
            black_box(buf)
        })
    });
}

criterion_group!(benches, bench_next, bench_next_state, bench_full_cycle);
criterion_main!(benches);
