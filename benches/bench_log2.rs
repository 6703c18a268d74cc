use criterion::Criterion;
use fastapprox::approx::log2;

use bench_util::{bench_variants, configure_criterion};

fn bench_log2(c: &mut Criterion) {
    bench_variants(c, "log2", log2::VARIANTS, log2::reference);
}

fn main() {
    let mut c = configure_criterion();
    bench_log2(&mut c);
    c.final_summary();
}
