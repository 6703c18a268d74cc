//! Prints the measured worst error of every catalogue entry next to its
//! documented bound, as a markdown table. Not a timing run.
//!
//! `FASTAPPROX_DUMP_SAMPLES` sets the points per entry (default 100001);
//! `FASTAPPROX_BENCH_ONLY` or `--only` filters on `family/variant`.

use fastapprox::approx::{cos, exp, exp10, exp2, ln, log10, log2, pow, sin, sqrt, tan, tanh};
use fastapprox::{Binary, Unary};

use bench_util::bench_enabled;

struct Row {
    label: String,
    worst: f64,
    at: String,
    limit: f64,
}

fn samples() -> usize {
    std::env::var("FASTAPPROX_DUMP_SAMPLES")
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n >= 2)
        .unwrap_or(100_001)
}

fn dump_unary(rows: &mut Vec<Row>, family: &str, variants: &[Unary], exact: fn(f64) -> f64) {
    let n = samples();
    for v in variants {
        let label = format!("{family}/{}", v.name);
        if !bench_enabled(&label) {
            continue;
        }
        let mut worst = 0.0f64;
        let mut at = 0.0f32;
        for x in v.domain.samples(n) {
            let x = x as f32;
            let err = v.bound.measure((v.eval)(x) as f64, exact(x as f64));
            if !(err <= worst) {
                worst = err;
                at = x;
            }
        }
        rows.push(Row {
            label,
            worst,
            at: format!("{at:e}"),
            limit: v.bound.limit(),
        });
    }
}

fn dump_binary(rows: &mut Vec<Row>, family: &str, variants: &[Binary], bases: &[f32]) {
    let n = samples();
    for v in variants {
        let label = format!("{family}/{}", v.name);
        if !bench_enabled(&label) {
            continue;
        }
        let mut worst = 0.0f64;
        let mut at = (0.0f32, 0.0f32);
        for &a in bases {
            for b in v.domain.samples(n) {
                let b = b as f32;
                let exact = (a as f64).powf(b as f64);
                let err = v.bound.measure((v.eval)(a, b) as f64, exact);
                if !(err <= worst) {
                    worst = err;
                    at = (a, b);
                }
            }
        }
        rows.push(Row {
            label,
            worst,
            at: format!("({:e}, {:e})", at.0, at.1),
            limit: v.bound.limit(),
        });
    }
}

fn main() {
    let mut rows = Vec::new();
    dump_unary(&mut rows, "exp2", exp2::VARIANTS, f64::exp2);
    dump_unary(&mut rows, "log2", log2::VARIANTS, f64::log2);
    dump_unary(&mut rows, "ln", ln::VARIANTS, f64::ln);
    dump_unary(&mut rows, "log10", log10::VARIANTS, f64::log10);
    dump_unary(&mut rows, "exp", exp::VARIANTS, f64::exp);
    dump_unary(&mut rows, "exp10", exp10::VARIANTS, |x| 10f64.powf(x));
    dump_binary(&mut rows, "pow", pow::VARIANTS, &pow::BASES);
    dump_unary(&mut rows, "tanh", tanh::VARIANTS, f64::tanh);
    dump_unary(&mut rows, "sqrt", sqrt::VARIANTS, f64::sqrt);
    dump_unary(&mut rows, "sin", sin::VARIANTS, f64::sin);
    dump_unary(&mut rows, "cos", cos::VARIANTS, f64::cos);
    dump_unary(&mut rows, "tan", tan::VARIANTS, f64::tan);

    println!("| Variant | worst error | at | documented | ok |");
    println!("| :--- | ---: | ---: | ---: | :---: |");
    for row in &rows {
        let ok = if row.worst <= row.limit { "yes" } else { "NO" };
        println!(
            "| {} | {:.3e} | {} | {:.3e} | {} |",
            row.label, row.worst, row.at, row.limit, ok
        );
    }
}
