use criterion::Criterion;
use fastapprox::approx::exp2;

use bench_util::{bench_variants, configure_criterion};

fn bench_exp2(c: &mut Criterion) {
    bench_variants(c, "exp2", exp2::VARIANTS, exp2::reference);
}

fn main() {
    let mut c = configure_criterion();
    bench_exp2(&mut c);
    c.final_summary();
}
