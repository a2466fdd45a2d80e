use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use rebuildable_bst::Tree;

use crate::Lfsr;

/// The order values are inserted in.
#[derive(Debug, Clone, Copy)]
enum Input {
    /// Pseudo-random, producing a roughly logarithmic depth.
    Shuffled,
    /// Ascending, degrading the tree into a list.
    Ascending,
}

impl Input {
    fn values(self, n: usize) -> Vec<u16> {
        match self {
            Self::Shuffled => Lfsr::default().take_values(n),
            Self::Ascending => (0..n as u16).collect(),
        }
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_insert(&mut g, Input::Shuffled, n_values);
    }

    // Each insert walks the full list, so keep this small.
    for n_values in [1, 100, 1_000] {
        bench_insert(&mut g, Input::Ascending, n_values);
    }
}

/// Measure the time needed to insert `n_values` one at a time into an empty
/// tree, and then to delete them all again.
fn bench_insert<M>(g: &mut BenchmarkGroup<'_, M>, input: Input, n_values: usize)
where
    M: Measurement,
{
    let values = input.values(n_values);

    g.throughput(Throughput::Elements(n_values as _)); // Values per second
    g.bench_function(
        BenchmarkId::new(format!("{input:?}/insert_many/n_values"), n_values),
        |b| {
            b.iter_batched(
                || (Tree::new(), values.clone()),
                |(mut t, values)| {
                    t.insert_many(values).unwrap();
                    t
                },
                criterion::BatchSize::PerIteration,
            );
        },
    );

    g.bench_function(
        BenchmarkId::new(format!("{input:?}/delete/n_values"), n_values),
        |b| {
            b.iter_batched(
                || {
                    let mut t = Tree::new();
                    t.insert_many(values.iter().copied()).unwrap();
                    t
                },
                |mut t| {
                    for v in &values {
                        t.delete(v).unwrap();
                    }
                    t
                },
                criterion::BatchSize::PerIteration,
            );
        },
    );
}
