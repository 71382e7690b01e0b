use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mazecore::{
    algorithms::{Generator, Solver},
    observer::NoopObserver,
    Grid,
};

const ROWS: i32 = 300;
const COLS: i32 = 300;

pub fn backtracker_generate(c: &mut Criterion) {
    c.bench_function("backtracker_generate", |b| {
        b.iter(|| {
            let mut grid = Grid::new(black_box(ROWS), black_box(COLS)).unwrap();
            Generator::from_seed(Some(black_box(1)))
                .generate(&mut grid, &mut NoopObserver)
                .unwrap();
            grid
        })
    });
}

pub fn dfs_solve(c: &mut Criterion) {
    let mut grid = Grid::new(ROWS, COLS).unwrap();
    Generator::from_seed(Some(1))
        .generate(&mut grid, &mut NoopObserver)
        .unwrap();

    c.bench_function("dfs_solve", |b| {
        b.iter(|| Solver::new().solve(black_box(&mut grid), &mut NoopObserver).unwrap())
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = backtracker_generate, dfs_solve}
criterion_main!(benches);
