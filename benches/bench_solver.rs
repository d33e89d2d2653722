use criterion::{criterion_group, criterion_main, Criterion};

use twophase::cubie::CubieCube;
use twophase::facelet::FaceCube;
use twophase::moves::Move::*;
use twophase::solver::Solver;

fn bench_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("CubieCube Moves");
    group.bench_function("multiply_moves", |b| {
        b.iter(|| {
            let mut cc = CubieCube::default();
            cc.multiply_moves(&[R, U, R3, U3]);
        })
    });
    group.bench_function("apply_moves", |b| {
        b.iter(|| {
            let cc = CubieCube::default();
            let _ = cc.apply_moves(&[R, U, R3, U3]);
        })
    });
    group.finish();
}

fn bench_solver(c: &mut Criterion) {
    let fc =
        FaceCube::try_from("RLLBUFUUUBDURRBBUBRLRRFDFDDLLLUDFLRRDDFRLFDBUBFFLBBDUF").unwrap();
    let cube = CubieCube::try_from(&fc).unwrap();
    let mut solver = Solver::new("tables");
    solver.initialize_tables().unwrap();
    c.bench_function("Solver", |b| {
        b.iter(|| solver.solve(&cube, 22, 3.0).unwrap())
    });
}

criterion_group!(benches, bench_solver, bench_moves);
criterion_main!(benches);
