//! e^x.
//!
//! Schraudolph's method: `bits(e^x) ≈ 2^23/ln2 * x + bias`, one multiply and
//! one add straight into the integer view. The three biases give a
//! least-squares fit and guaranteed lower/upper bounds. [`rational`] and
//! [`affine`] go through the clamped exp2 kernels instead.

use super::bits::f32_from_i32;
use super::consts::{EXP_SCALE, LOG2_E, LOWER_BIAS, MIN_RMSE_BIAS, UPPER_BIAS};
use super::exp2;
use super::variant::{Bound, Domain, Unary, Variant};

#[cfg(feature = "std")]
#[inline]
pub fn reference(x: f32) -> f32 {
    x.exp()
}

#[inline(always)]
fn schraudolph(a: f32, bias: i32) -> f32 {
    f32_from_i32((EXP_SCALE * a + bias as f32) as i32)
}

/// Least-squares bias.
#[inline]
pub fn min_rmse(a: f32) -> f32 {
    schraudolph(a, MIN_RMSE_BIAS)
}

/// Never below e^x.
#[inline]
pub fn upper(a: f32) -> f32 {
    schraudolph(a, UPPER_BIAS)
}

/// Never above e^x.
#[inline]
pub fn lower(a: f32) -> f32 {
    schraudolph(a, LOWER_BIAS)
}

/// [`exp2::rational`] of x·log2(e).
#[inline]
pub fn rational(p: f32) -> f32 {
    exp2::rational(LOG2_E * p)
}

/// [`exp2::affine`] of x·log2(e).
#[inline]
pub fn affine(p: f32) -> f32 {
    exp2::affine(LOG2_E * p)
}

/// e^(x/2) / e^(-x/2) with each half from a Schraudolph step; the curvature
/// errors of numerator and denominator largely cancel near zero.
#[inline]
pub fn ratio(a: f32) -> f32 {
    const HALF_SCALE: f32 = 6_051_102.0;
    const HALF_BIAS: f32 = 1_056_478_197.0;
    let u = f32_from_i32((HALF_SCALE * a + HALF_BIAS) as i32);
    let v = f32_from_i32((HALF_BIAS - HALF_SCALE * a) as i32);
    u / v
}

const DOMAIN: Domain = Domain::new(-80.0, 80.0);

pub const VARIANTS: &[Unary] = &[
    Variant {
        name: "min_rmse",
        eval: min_rmse,
        domain: DOMAIN,
        bound: Bound::Relative(0.041),
    },
    Variant {
        name: "upper",
        eval: upper,
        domain: DOMAIN,
        bound: Bound::Relative(0.063),
    },
    Variant {
        name: "lower",
        eval: lower,
        domain: DOMAIN,
        bound: Bound::Relative(0.06),
    },
    Variant {
        name: "rational",
        eval: rational,
        domain: DOMAIN,
        bound: Bound::Relative(1e-4),
    },
    Variant {
        name: "affine",
        eval: affine,
        domain: DOMAIN,
        bound: Bound::Relative(0.041),
    },
    Variant {
        name: "ratio",
        eval: ratio,
        domain: Domain::new(-1.0, 1.0),
        bound: Bound::Relative(0.022),
    },
];
