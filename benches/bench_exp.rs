use criterion::Criterion;
use fastapprox::approx::exp;

use bench_util::{bench_variants, configure_criterion};

fn bench_exp(c: &mut Criterion) {
    bench_variants(c, "exp", exp::VARIANTS, exp::reference);
}

fn main() {
    let mut c = configure_criterion();
    bench_exp(&mut c);
    c.final_summary();
}
