use criterion::Criterion;
use fastapprox::approx::log10;

use bench_util::{bench_variants, configure_criterion};

fn bench_log10(c: &mut Criterion) {
    bench_variants(c, "log10", log10::VARIANTS, log10::reference);
}

fn main() {
    let mut c = configure_criterion();
    bench_log10(&mut c);
    c.final_summary();
}
