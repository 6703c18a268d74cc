//! log2(x) from the integer view of a positive normal float.
//!
//! `bits(x) * 2^-23 - 127` is log2(x) with the mantissa read as a linear
//! fraction. [`affine`] shifts that line to centre the error; [`rational`]
//! and the quadratic variants remove the bulk of the remaining curvature.
//! None of these validate input: zero, negative and subnormal arguments give
//! meaningless values.

use super::bits::{
    f32_exponent, f32_mantissa_octave, f32_to_bits, INV_MANT_SCALE, MANT_BITS, MANT_MASK,
};
use super::consts::{
    EXP2_AFFINE_BIAS, LOG2_E, LOG2_RATIONAL_C0, LOG2_RATIONAL_C1, LOG2_RATIONAL_C2,
    LOG2_RATIONAL_C3,
};
use super::ln;
use super::variant::{Bound, Domain, Unary, Variant};

#[cfg(feature = "std")]
#[inline]
pub fn reference(x: f32) -> f32 {
    x.log2()
}

/// Mantissa part of the rational correction, `m` in [0.5, 1). Both terms
/// increase with `m`.
const fn rational_shape(m: f64) -> f64 {
    (2.0 - LOG2_RATIONAL_C1 as f64) * m
        - LOG2_RATIONAL_C2 as f64 / (LOG2_RATIONAL_C3 as f64 + m)
}

const RATIONAL_SHAPE0: f64 = rational_shape(0.5);
const RATIONAL_BASE: f64 = RATIONAL_SHAPE0 - 1.0 - LOG2_RATIONAL_C0 as f64;
/// Stretches the octave so its top end lands just under the next octave.
const RATIONAL_JOIN: f64 =
    (1.0 - 1.0 / 4_294_967_296.0) / (rational_shape(1.0) - RATIONAL_SHAPE0);

/// Linear exponent-plus-mantissa reading with a rational correction in the
/// mantissa mapped to [0.5, 1).
///
/// `bits * 2^-23 - C0 - C1 * m - C2 / (C3 + m)` is regrouped as the exponent
/// field plus a correction that only increases with `m`. Evaluated in `f64`
/// every rounding step is monotone, so the result never decreases as `x`
/// grows. Absolute error about 1.5e-4.
#[inline]
pub fn rational(x: f32) -> f32 {
    let vx = f32_to_bits(x);
    let m = 0.5 + (vx & MANT_MASK) as f64 * (1.0 / 16_777_216.0);
    let e = (vx >> MANT_BITS) as f64;
    ((e + RATIONAL_BASE) + (rational_shape(m) - RATIONAL_SHAPE0) * RATIONAL_JOIN) as f32
}

/// The bit pattern scaled by 2^-23, less the bias of
/// [`exp2::affine`](super::exp2::affine), which this inverts.
#[inline]
pub fn affine(x: f32) -> f32 {
    f32_to_bits(x) as f32 * INV_MANT_SCALE - EXP2_AFFINE_BIAS
}

/// 127 less half the peak of `log2(1 + m) - m` on [0, 1).
const MINIMAX_BIAS: f32 = 126.956_964_333_972_04;

/// [`affine`] with the bias centred on the error of the linear mantissa, so
/// the error is equioscillating at about ±0.043.
#[inline]
pub fn affine_minimax(x: f32) -> f32 {
    f32_to_bits(x) as f32 * INV_MANT_SCALE - MINIMAX_BIAS
}

/// `a m^2 + b m - c` on [1, 2), written in `v = 2 - m` as
/// `k0 - v (k1 - a v)`; with `a < 0` each step is monotone in `m`.
#[inline(always)]
fn quadratic_with(x: f32, a: f32, b: f32, c: f32) -> f32 {
    let v = 2.0 - f32_mantissa_octave(x);
    let k0 = 4.0 * a + 2.0 * b - c;
    let k1 = 4.0 * a + b;
    (f32_exponent(x) - 1) as f32 + (k0 - v * (k1 - a * v))
}

/// Exponent field plus a quadratic in the mantissa on [1, 2).
#[inline]
pub fn quadratic(x: f32) -> f32 {
    quadratic_with(x, -0.335_828_781_1, 2.0, 0.658_717_593_166_67)
}

/// [`quadratic`] with all three coefficients refitted for minimum max error.
#[inline]
pub fn quadratic_fit(x: f32) -> f32 {
    quadratic_with(x, -0.344_848_43, 2.024_665_78, 0.674_877_59)
}

const DOMAIN: Domain = Domain::new(1.0 / 1_048_576.0, 1_048_576.0);

pub const VARIANTS: &[Unary] = &[
    Variant {
        name: "rational",
        eval: rational,
        domain: DOMAIN,
        bound: Bound::Absolute(2e-4),
    },
    Variant {
        name: "affine",
        eval: affine,
        domain: DOMAIN,
        bound: Bound::Absolute(0.06),
    },
    Variant {
        name: "affine_minimax",
        eval: affine_minimax,
        domain: DOMAIN,
        bound: Bound::Absolute(0.044),
    },
    Variant {
        name: "quadratic",
        eval: quadratic,
        domain: DOMAIN,
        bound: Bound::Absolute(0.006),
    },
    Variant {
        name: "quadratic_fit",
        eval: quadratic_fit,
        domain: DOMAIN,
        bound: Bound::Absolute(0.0055),
    },
    Variant {
        name: "ln_minimax",
        eval: |x| ln::minimax(x) * LOG2_E,
        domain: DOMAIN,
        bound: Bound::Absolute(4e-6),
    },
    Variant {
        name: "ln_minimax_fast",
        eval: |x| ln::minimax_fast(x) * LOG2_E,
        domain: DOMAIN,
        bound: Bound::Absolute(3e-5),
    },
    Variant {
        name: "ln_min_rmse",
        eval: |x| ln::min_rmse(x) * LOG2_E,
        domain: DOMAIN,
        bound: Bound::Absolute(0.06),
    },
    Variant {
        name: "ln_lower",
        eval: |x| ln::lower(x) * LOG2_E,
        domain: DOMAIN,
        bound: Bound::Absolute(0.09),
    },
    Variant {
        name: "ln_rational_octave",
        eval: |x| ln::rational_octave(x) * LOG2_E,
        domain: DOMAIN,
        bound: Bound::Absolute(1e-5),
    },
    Variant {
        name: "ln_rational",
        eval: |x| ln::rational(x) * LOG2_E,
        domain: DOMAIN,
        bound: Bound::Absolute(2e-4),
    },
    Variant {
        name: "ln_affine",
        eval: |x| ln::affine(x) * LOG2_E,
        domain: DOMAIN,
        bound: Bound::Absolute(0.06),
    },
];
