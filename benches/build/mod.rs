use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use rebuildable_bst::Tree;

use crate::Lfsr;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("build");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_build(&mut g, n_values);
        bench_rebalance(&mut g, n_values);
    }
}

/// Measure the time needed to build a balanced tree from `n_values` unsorted
/// values.
fn bench_build<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let values = Lfsr::default().take_values(n_values);

    let bench_name = BenchName {
        bench_name: "build",
        n_values,
    };
    g.throughput(Throughput::Elements(n_values as _));
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || values.clone(),
            |values| Tree::build(values).unwrap(),
            criterion::BatchSize::PerIteration,
        );
    });
}

/// Measure the time needed to rebalance a list-shaped tree of `n_values`.
fn bench_rebalance<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let bench_name = BenchName {
        bench_name: "rebalance",
        n_values,
    };
    g.throughput(Throughput::Elements(n_values as _));
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || {
                let mut t = Tree::new();
                t.insert_many(0..n_values).unwrap();
                t
            },
            |mut t| {
                t.rebalance();
                t
            },
            criterion::BatchSize::PerIteration,
        );
    });
}
