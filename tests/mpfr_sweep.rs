#![cfg(feature = "mpfr")]

use fastapprox::approx::{cos, exp, exp10, exp2, ln, log10, log2, sin, sqrt, tan, tanh};
use fastapprox::{Bound, Unary};
use rug::Float;
use std::env;

const MPFR_PREC: u32 = 256;

struct Family {
    name: &'static str,
    variants: &'static [Unary],
    exact: fn(&mut Float),
}

const FAMILIES: &[Family] = &[
    Family {
        name: "exp2",
        variants: exp2::VARIANTS,
        exact: |v| v.exp2_mut(),
    },
    Family {
        name: "log2",
        variants: log2::VARIANTS,
        exact: |v| v.log2_mut(),
    },
    Family {
        name: "ln",
        variants: ln::VARIANTS,
        exact: |v| v.ln_mut(),
    },
    Family {
        name: "log10",
        variants: log10::VARIANTS,
        exact: |v| v.log10_mut(),
    },
    Family {
        name: "exp",
        variants: exp::VARIANTS,
        exact: |v| v.exp_mut(),
    },
    Family {
        name: "exp10",
        variants: exp10::VARIANTS,
        exact: |v| v.exp10_mut(),
    },
    Family {
        name: "tanh",
        variants: tanh::VARIANTS,
        exact: |v| v.tanh_mut(),
    },
    Family {
        name: "sqrt",
        variants: sqrt::VARIANTS,
        exact: |v| v.sqrt_mut(),
    },
    Family {
        name: "sin",
        variants: sin::VARIANTS,
        exact: |v| v.sin_mut(),
    },
    Family {
        name: "cos",
        variants: cos::VARIANTS,
        exact: |v| v.cos_mut(),
    },
    Family {
        name: "tan",
        variants: tan::VARIANTS,
        exact: |v| v.tan_mut(),
    },
];

fn mpfr_exact(family: &Family, x: f32) -> f64 {
    let mut v = Float::with_val(MPFR_PREC, x);
    (family.exact)(&mut v);
    v.to_f64()
}

fn sweep_offsets(radius: i64, stride: i64) -> Vec<i64> {
    let mut offsets = Vec::new();
    let mut off = -radius;
    while off <= radius {
        offsets.push(off);
        off = off.saturating_add(stride);
        if off == i64::MAX {
            break;
        }
    }
    offsets
}

fn neighbour(x0: f32, offset: i64) -> f32 {
    let bits = x0.to_bits();
    if offset < 0 {
        f32::from_bits(bits.wrapping_sub((-offset) as u32))
    } else {
        f32::from_bits(bits.wrapping_add(offset as u32))
    }
}

struct ReportRow {
    family: &'static str,
    variant: &'static str,
    bound: Bound,
    worst: f64,
    worst_x: f32,
    skipped: usize,
}

/// Worst error of every variant in `family` over the bit neighbourhood of
/// `x0`; points outside a variant's measured domain are skipped.
fn sweep_family(family: &'static Family, x0: f32, radius: i64, stride: i64) -> Vec<ReportRow> {
    let offsets = sweep_offsets(radius, stride.max(1));
    family
        .variants
        .iter()
        .map(|v| {
            let mut row = ReportRow {
                family: family.name,
                variant: v.name,
                bound: v.bound,
                worst: 0.0,
                worst_x: x0,
                skipped: 0,
            };
            for &offset in &offsets {
                let x = neighbour(x0, offset);
                if !v.domain.contains(x as f64) {
                    row.skipped += 1;
                    continue;
                }
                let err = v.bound.measure((v.eval)(x) as f64, mpfr_exact(family, x));
                if !(err <= row.worst) {
                    row.worst = err;
                    row.worst_x = x;
                }
            }
            row
        })
        .collect()
}

fn print_report(rows: &[ReportRow]) {
    println!("| Family | Variant | x | error | bound | skipped |");
    println!("| :--- | :--- | ---: | ---: | ---: | ---: |");
    for row in rows {
        println!(
            "| {} | {} | {:.9e} | {:.3e} | {:?} | {} |",
            row.family, row.variant, row.worst_x, row.worst, row.bound, row.skipped
        );
    }
}

#[test]
fn mpfr_neighbourhood_sweep() {
    let x0 = match env::var("FASTAPPROX_SWEEP_X") {
        Ok(v) => v.parse::<f32>().expect("FASTAPPROX_SWEEP_X must be f32"),
        Err(_) => return,
    };
    let radius = env::var("FASTAPPROX_SWEEP_RADIUS")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(10_000);
    let stride = env::var("FASTAPPROX_SWEEP_STRIDE")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(1);
    let only = env::var("FASTAPPROX_SWEEP_FAMILY")
        .ok()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty());

    let mut report = Vec::new();
    for family in FAMILIES {
        if only.as_deref().is_some_and(|f| f != family.name) {
            continue;
        }
        report.extend(sweep_family(family, x0, radius, stride));
    }

    println!("MPFR sweep around x0={x0} (radius={radius} stride={stride})");
    let over: Vec<_> = report
        .iter()
        .filter(|r| r.worst > r.bound.limit())
        .map(|r| format!("{}::{}", r.family, r.variant))
        .collect();
    if over.is_empty() {
        println!("all variants within their documented bounds");
    } else {
        println!("over bound: {}", over.join(", "));
    }

    let report_enabled = env::var("FASTAPPROX_SWEEP_REPORT")
        .ok()
        .map(|v| v != "0")
        .unwrap_or(true);
    if report_enabled {
        print_report(&report);
    }
}

/// Octave boundaries are where the mantissa corrections switch segments.
#[test]
fn log2_octave_boundaries() {
    let family = &FAMILIES[1];
    for &x0 in &[0.5f32, 1.0, 2.0, 1024.0] {
        for row in sweep_family(family, x0, 4096, 1) {
            assert!(
                row.worst <= row.bound.limit(),
                "log2::{} near {x0}: {:e} at {} exceeds {:?}",
                row.variant,
                row.worst,
                row.worst_x,
                row.bound
            );
        }
    }
}

#[test]
fn exp2_integer_boundaries() {
    let family = &FAMILIES[0];
    for &x0 in &[-3.0f32, -1.0, 1.0, 7.0] {
        for row in sweep_family(family, x0, 4096, 1) {
            assert!(
                row.worst <= row.bound.limit(),
                "exp2::{} near {x0}: {:e} at {} exceeds {:?}",
                row.variant,
                row.worst,
                row.worst_x,
                row.bound
            );
        }
    }
}
