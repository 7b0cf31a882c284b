//! Dispatch benchmarks using criterion.
//!
//! Compares single and multiple dispatch through `VariantRef` against a
//! plain `match` over an owned enum, which is the floor dispatch should
//! approach.
//!
//! Run with: cargo bench --bench dispatch_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use variant_ref::{apply_multi_dispatch, dispatch2, VariantRef, Visit, Visitor};

struct Rock;
struct Paper;
struct Scissors;

type HandRef<'a> = VariantRef<'a, (Rock, Paper, Scissors)>;

trait Kind {
    const KIND: u8;
}

impl Kind for Rock {
    const KIND: u8 = 0;
}

impl Kind for Paper {
    const KIND: u8 = 1;
}

impl Kind for Scissors {
    const KIND: u8 = 2;
}

struct KindOf;

impl Visitor for KindOf {
    type Output = u8;
}

impl<T: Kind> Visit<&T> for KindOf {
    fn visit(&mut self, _: &T) -> u8 {
        T::KIND
    }
}

struct LosesTo;

impl Visitor for LosesTo {
    type Output = bool;
}

impl<A: Kind, B: Kind> Visit<(&A, &B)> for LosesTo {
    fn visit(&mut self, _: (&A, &B)) -> bool {
        (A::KIND + 1) % 3 == B::KIND
    }
}

impl<A: Kind, B: Kind, C: Kind> Visit<(&A, &B, &C)> for LosesTo {
    fn visit(&mut self, _: (&A, &B, &C)) -> bool {
        (A::KIND + 1) % 3 == B::KIND && (B::KIND + 1) % 3 == C::KIND
    }
}

#[derive(Clone, Copy)]
enum Plain {
    Rock,
    Paper,
    Scissors,
}

fn hands<'a>(rock: &'a Rock, paper: &'a Paper, scissors: &'a Scissors, len: usize) -> Vec<HandRef<'a>> {
    (0..len)
        .map(|i| match (i * 7) % 3 {
            0 => HandRef::new(rock),
            1 => HandRef::new(paper),
            _ => HandRef::new(scissors),
        })
        .collect()
}

/// Benchmark single dispatch against a plain enum match
fn bench_single_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_dispatch");
    let (rock, paper, scissors) = (Rock, Paper, Scissors);

    for len in [16usize, 256, 4096] {
        let refs = hands(&rock, &paper, &scissors, len);
        let plain: Vec<Plain> = refs
            .iter()
            .map(|r| match r.tag() {
                0 => Plain::Rock,
                1 => Plain::Paper,
                _ => Plain::Scissors,
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("variant_ref", len), &refs, |b, refs| {
            b.iter(|| {
                refs.iter()
                    .map(|r| u32::from(r.visit(&mut KindOf)))
                    .sum::<u32>()
            });
        });

        group.bench_with_input(BenchmarkId::new("enum_match", len), &plain, |b, plain| {
            b.iter(|| {
                plain
                    .iter()
                    .map(|p| match p {
                        Plain::Rock => 0u32,
                        Plain::Paper => 1,
                        Plain::Scissors => 2,
                    })
                    .sum::<u32>()
            });
        });
    }

    group.finish();
}

/// Benchmark two- and three-way dispatch
fn bench_multi_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_dispatch");
    let (rock, paper, scissors) = (Rock, Paper, Scissors);
    let refs = hands(&rock, &paper, &scissors, 1024);

    group.bench_function("dispatch2", |b| {
        b.iter(|| {
            refs.windows(2)
                .filter(|w| dispatch2(&mut LosesTo, black_box(w[0]), black_box(w[1])))
                .count()
        });
    });

    group.bench_function("apply_multi_dispatch_3", |b| {
        b.iter(|| {
            refs.windows(3)
                .filter(|w| {
                    apply_multi_dispatch::<3, _, _, _>(
                        &mut LosesTo,
                        (black_box(w[0]), black_box(w[1]), black_box(w[2])),
                        (),
                    )
                })
                .count()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_single_dispatch, bench_multi_dispatch);
criterion_main!(benches);
