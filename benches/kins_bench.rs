// Benchmark for per-cycle transform cost
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, Criterion};
use fiveaxis_kins::{FiveAxisKinematics, JointVector, Kinematics, KinsParams};
use std::hint::black_box;

fn bench_forward(c: &mut Criterion) {
    let kins = FiveAxisKinematics;
    let params = KinsParams { pivot_length: 250.0, tool_length: 35.0 };
    let joints = JointVector::from([10.0, -20.0, 5.0, 30.0, 0.0, 45.0, 0.0, 0.0, 2.0]);
    c.bench_function("forward tilted head", |b| {
        b.iter(|| kins.forward(black_box(&joints), black_box(&params)));
    });
}

fn bench_inverse(c: &mut Criterion) {
    let kins = FiveAxisKinematics;
    let params = KinsParams { pivot_length: 250.0, tool_length: 35.0 };
    let joints = JointVector::from([10.0, -20.0, 5.0, 30.0, 0.0, 45.0, 0.0, 0.0, 2.0]);
    let pose = kins.forward(&joints, &params);
    c.bench_function("inverse tilted head", |b| {
        b.iter(|| kins.inverse(black_box(&pose), black_box(&params)));
    });
}

fn bench_round_trip_10k(c: &mut Criterion) {
    let kins = FiveAxisKinematics;
    let params = KinsParams::default();
    c.bench_function("round trip 10k joints", |b| {
        b.iter(|| {
            let mut err = 0.0;
            for i in 0..10_000 {
                let angle = (i % 360) as f64;
                let joints = JointVector::from([i as f64, 0.0, 0.0, angle, 0.0, angle, 0.0, 0.0, 0.0]);
                let back = kins.inverse(&kins.forward(&joints, &params), &params);
                err += (back.x - joints.x).abs();
            }
            assert!(err < 1e-6);
        });
    });
}

criterion_group!(benches, bench_forward, bench_inverse, bench_round_trip_10k);
criterion_main!(benches);
