//! sin(x).
//!
//! The parabolic kernels fit sin on [-π, π] with a parabola in
//! `4/π·x - 4/π²·x|x|` and correct it with a short polynomial whose odd
//! coefficients take their sign from `x` by OR-ing in the sign bit. The
//! `_full` forms fold any argument into that interval first.

use super::bits::{abs_f32, f32_from_bits, f32_to_bits, floor_f32, round_f64, SIGN_MASK};
use super::variant::{Bound, Domain, Unary, Variant};

#[cfg(feature = "std")]
#[inline]
pub fn reference(x: f32) -> f32 {
    x.sin()
}

const FOUR_OVER_PI: f32 = 1.273_239_544_735_162_7;
const FOUR_OVER_PI_SQ: f32 = 0.405_284_734_569_351_09;
const TWO_PI: f32 = 6.283_185_307_179_586_5;
const INV_TWO_PI: f32 = 0.159_154_943_091_895_34;

#[inline(always)]
fn parabola(x: f32) -> f32 {
    FOUR_OVER_PI * x - FOUR_OVER_PI_SQ * x * abs_f32(x)
}

/// Parabola plus a quartic correction; valid on [-π, π].
#[inline]
pub fn parabolic(x: f32) -> f32 {
    const Q: f32 = 0.784_444_883_745_489_33;
    const P: f32 = 0.203_639_376_807_303_09;
    const R: f32 = 0.015_124_940_802_184_233;
    const S: f32 = -0.003_222_590_162_557_957_3;

    let sign = f32_to_bits(x) & SIGN_MASK;
    let p = f32_from_bits(f32_to_bits(P) | sign);
    let r = f32_from_bits(f32_to_bits(R) | sign);
    let s = f32_from_bits(f32_to_bits(S) ^ sign);

    let qp = parabola(x);
    let qps = qp * qp;
    Q * qp + qps * (p + qps * (r + qps * s))
}

/// Parabola with a single quadratic correction; valid on [-π, π].
#[inline]
pub fn parabolic_fast(x: f32) -> f32 {
    const Q: f32 = 0.776_330_232_480_074_99;
    const P: f32 = 0.223_085_100_601_894_63;

    let sign = f32_to_bits(x) & SIGN_MASK;
    let p = f32_from_bits(f32_to_bits(P) | sign);
    let qp = parabola(x);
    qp * (Q + p * qp)
}

/// Folds `x` by whole periods into [-π, π]. sin(x) = sin((k ± ½)·2π - x).
#[inline(always)]
fn fold(x: f32) -> f32 {
    let k = (x * INV_TWO_PI) as i32;
    let half = if x < 0.0 { -0.5 } else { 0.5 };
    (half + k as f32) * TWO_PI - x
}

#[inline]
pub fn parabolic_full(x: f32) -> f32 {
    parabolic(fold(x))
}

#[inline]
pub fn parabolic_fast_full(x: f32) -> f32 {
    parabolic_fast(fold(x))
}

/// Minimax cos on [-π/4, π/4].
#[inline(always)]
fn cos_core(x: f64) -> f64 {
    let x2 = x * x;
    let x4 = x2 * x2;
    let x8 = x4 * x4;
    (-2.723_637_043_978_770_8e-7 * x2 + 2.479_985_269_661_062_8e-5) * x8
        + (-1.388_888_505_479_969_5e-3 * x2 + 4.166_666_663_694_368_3e-2) * x4
        + (-4.999_999_999_996_302_4e-1 * x2 + 1.0)
}

/// Minimax sin on [-π/4, π/4], relative error about 5.5e-12.
#[inline(always)]
fn sin_core(x: f64) -> f64 {
    let x2 = x * x;
    let x4 = x2 * x2;
    ((2.718_121_627_547_973_2e-6 * x2 - 1.983_931_226_945_625_7e-4) * x4
        + (8.333_329_304_842_563_1e-3 * x2 - 1.666_666_664_079_704_8e-1))
        * x2
        * x
        + x
}

/// Double-precision sin with Cody-Waite reduction into quadrants of π/2;
/// relative error below 7e-12 on [-50000, 50000].
pub fn quadrant(x: f64) -> f64 {
    const TWO_OVER_PI: f64 = 6.366_197_723_675_813_8e-1;
    const PIO2_HI: f64 = 1.570_796_326_792_333_3e0;
    const PIO2_LO: f64 = 2.563_344_151_594_518_9e-12;

    let q = round_f64(x * TWO_OVER_PI);
    let quadrant = q as i32;
    let t = x - q * PIO2_HI;
    let t = t - q * PIO2_LO;
    let t = if quadrant & 1 != 0 {
        cos_core(t)
    } else {
        sin_core(t)
    };
    if quadrant & 2 != 0 {
        -t
    } else {
        t
    }
}

const HALF_SQRT_2: f32 = core::f32::consts::FRAC_1_SQRT_2;
/// sin at multiples of π/4.
const TABLE: [f32; 8] = [
    0.0,
    HALF_SQRT_2,
    1.0,
    HALF_SQRT_2,
    0.0,
    -HALF_SQRT_2,
    -1.0,
    -HALF_SQRT_2,
];

#[inline(always)]
fn hermite(v0: f32, v1: f32, v2: f32, v3: f32, t: f32) -> f32 {
    let slope0 = (v2 - v0) * 0.5;
    let slope1 = (v3 - v1) * 0.5;
    let v = v1 - v2;
    let w = slope0 + v;
    let a = w + v + slope1;
    let b_neg = w + a;
    let stage1 = a * t - b_neg;
    let stage2 = stage1 * t + slope0;
    stage2 * t + v1
}

/// Cubic Hermite interpolation in an 8-entry table; indices wrap by masking,
/// so any argument works.
pub fn hermite_table(x: f32) -> f32 {
    let idx = x * FOUR_OVER_PI;
    let base = floor_f32(idx);
    let i = base as i32;
    let t = idx - base;
    let at = |k: i32| TABLE[(i.wrapping_add(k) & 7) as usize];
    hermite(at(-1), at(0), at(1), at(2), t)
}

const HALF_TURN: Domain = Domain::new(-core::f64::consts::PI, core::f64::consts::PI);
const WIDE: Domain = Domain::new(-100.0, 100.0);

pub const VARIANTS: &[Unary] = &[
    Variant {
        name: "parabolic",
        eval: parabolic,
        domain: HALF_TURN,
        bound: Bound::Absolute(4.5e-5),
    },
    Variant {
        name: "parabolic_fast",
        eval: parabolic_fast,
        domain: HALF_TURN,
        bound: Bound::Absolute(9.5e-4),
    },
    Variant {
        name: "parabolic_full",
        eval: parabolic_full,
        domain: WIDE,
        bound: Bound::Absolute(5e-5),
    },
    Variant {
        name: "parabolic_fast_full",
        eval: parabolic_fast_full,
        domain: WIDE,
        bound: Bound::Absolute(9.5e-4),
    },
    Variant {
        name: "quadrant",
        eval: |x| quadrant(x as f64) as f32,
        domain: Domain::new(-50_000.0, 50_000.0),
        bound: Bound::Absolute(1e-7),
    },
    Variant {
        name: "hermite_table",
        eval: hermite_table,
        domain: WIDE,
        bound: Bound::Absolute(0.0095),
    },
];
