use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use rebuildable_bst::{BalanceCheck, Tree};

use crate::Lfsr;

#[derive(Debug)]
struct BenchName {
    check: BalanceCheck,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{:?}/n_values", v.check), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("is_balanced");

    for n_values in [1, 100, 1_000, 10_000] {
        // A balanced tree is walked in its entirety.
        let t = Tree::build(Lfsr::default().take_values(n_values)).unwrap();

        for check in [BalanceCheck::Recursive, BalanceCheck::Iterative] {
            bench_param(&mut g, &t, check, n_values);
        }
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, t: &Tree<u16>, check: BalanceCheck, n_values: usize)
where
    M: Measurement,
{
    let bench_name = BenchName { check, n_values };
    g.throughput(Throughput::Elements(n_values as _)); // Nodes checked per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| assert!(t.is_balanced_with(check)));
    });
}
