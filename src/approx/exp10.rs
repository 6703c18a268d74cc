//! 10^x.
//!
//! The exp2 and Schraudolph kernels with log2(10) folded into the scale.

use super::bits::f32_from_i32;
use super::consts::{LN_10, LOG2_10, LOWER_BIAS, MIN_RMSE_BIAS};
use super::variant::{Bound, Domain, Unary, Variant};
use super::{exp, exp2, pow};

#[cfg(feature = "std")]
#[inline]
pub fn reference(x: f32) -> f32 {
    10.0f32.powf(x)
}

/// `bits(10) - UPPER_BIAS`: [`pow::lower`] with the base fixed at 10.
const LOWER_SCALE: f32 = 27_262_975.0;
/// 2^23 · log2(10).
const MIN_RMSE_SCALE: f32 = 27_866_352.220_187_82;

/// Never above 10^x for `x >= 0`; the error grows with |x|.
#[inline]
pub fn lower(x: f32) -> f32 {
    f32_from_i32((x * LOWER_SCALE + LOWER_BIAS as f32) as i32)
}

/// Schraudolph exponential with the least-squares bias.
#[inline]
pub fn min_rmse(x: f32) -> f32 {
    f32_from_i32((MIN_RMSE_SCALE * x + MIN_RMSE_BIAS as f32) as i32)
}

#[inline]
pub fn rational(x: f32) -> f32 {
    exp2::rational(LOG2_10 * x)
}

#[inline]
pub fn affine(x: f32) -> f32 {
    exp2::affine(LOG2_10 * x)
}

const DOMAIN: Domain = Domain::new(-30.0, 30.0);
const SHORT: Domain = Domain::new(-4.0, 4.0);

pub const VARIANTS: &[Unary] = &[
    Variant {
        name: "lower",
        eval: lower,
        domain: SHORT,
        bound: Bound::Relative(0.23),
    },
    Variant {
        name: "min_rmse",
        eval: min_rmse,
        domain: DOMAIN,
        bound: Bound::Relative(0.041),
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
        name: "pow_min_rmse",
        eval: |x| pow::min_rmse(10.0, x),
        domain: SHORT,
        bound: Bound::Relative(0.08),
    },
    Variant {
        name: "pow_upper",
        eval: |x| pow::upper(10.0, x),
        domain: SHORT,
        bound: Bound::Relative(0.11),
    },
    Variant {
        name: "pow_split",
        eval: |x| pow::split(10.0, x),
        domain: DOMAIN,
        bound: Bound::Relative(0.065),
    },
    Variant {
        name: "pow_split_ratio",
        eval: |x| pow::split_ratio(10.0, x),
        domain: DOMAIN,
        bound: Bound::Relative(0.022),
    },
    Variant {
        name: "exp_upper",
        eval: |x| exp::upper(x * LN_10),
        domain: DOMAIN,
        bound: Bound::Relative(0.063),
    },
    Variant {
        name: "exp_lower",
        eval: |x| exp::lower(x * LN_10),
        domain: DOMAIN,
        bound: Bound::Relative(0.06),
    },
    Variant {
        name: "exp_rational",
        eval: |x| exp::rational(x * LN_10),
        domain: DOMAIN,
        bound: Bound::Relative(1e-4),
    },
    Variant {
        name: "exp_affine",
        eval: |x| exp::affine(x * LN_10),
        domain: DOMAIN,
        bound: Bound::Relative(0.041),
    },
];
