//! log10(x), the log2 kernels with log10(2) folded into their constants.

use super::bits::{f32_from_bits, f32_to_bits, f32_to_i32, MANT_MASK};
use super::consts::{HALF_BITS, LOG10_E, LOG2_RATIONAL_C3, MIN_RMSE_BIAS};
use super::ln;
use super::variant::{Bound, Domain, Unary, Variant};

#[cfg(feature = "std")]
#[inline]
pub fn reference(x: f32) -> f32 {
    x.log10()
}

/// log10(2) · 2^-23.
const BIT_SCALE: f32 = 3.588_557_191_657_796e-8;

/// Inverse Schraudolph with the least-squares bias.
#[inline]
pub fn min_rmse(a: f32) -> f32 {
    f32_to_i32(a).wrapping_sub(MIN_RMSE_BIAS) as f32 * 3.588_557_239_564_167_5e-8
}

/// [`log2::rational`](super::log2::rational) times log10(2).
#[inline]
pub fn rational(x: f32) -> f32 {
    let vx = f32_to_bits(x);
    let mx = f32_from_bits((vx & MANT_MASK) | HALF_BITS);
    let y = vx as f32 * BIT_SCALE;
    y - 37.395_606_238_795_53 - 0.450_952_055_315_572_5 * mx
        - 0.519_541_645_906_251_8 / (LOG2_RATIONAL_C3 + mx)
}

/// [`log2::affine`](super::log2::affine) times log10(2).
#[inline]
pub fn affine(x: f32) -> f32 {
    f32_to_bits(x) as f32 * BIT_SCALE - 38.213_558_94
}

const DOMAIN: Domain = Domain::new(1.0 / 1_048_576.0, 1_048_576.0);

pub const VARIANTS: &[Unary] = &[
    Variant {
        name: "min_rmse",
        eval: min_rmse,
        domain: DOMAIN,
        bound: Bound::Absolute(0.018),
    },
    Variant {
        name: "rational",
        eval: rational,
        domain: DOMAIN,
        bound: Bound::Absolute(5e-5),
    },
    Variant {
        name: "affine",
        eval: affine,
        domain: DOMAIN,
        bound: Bound::Absolute(0.018),
    },
    Variant {
        name: "ln_minimax",
        eval: |x| ln::minimax(x) * LOG10_E,
        domain: DOMAIN,
        bound: Bound::Absolute(1.5e-6),
    },
    Variant {
        name: "ln_minimax_fast",
        eval: |x| ln::minimax_fast(x) * LOG10_E,
        domain: DOMAIN,
        bound: Bound::Absolute(1e-5),
    },
    Variant {
        name: "ln_lower",
        eval: |x| ln::lower(x) * LOG10_E,
        domain: DOMAIN,
        bound: Bound::Absolute(0.027),
    },
    Variant {
        name: "ln_upper",
        eval: |x| ln::upper(x) * LOG10_E,
        domain: DOMAIN,
        bound: Bound::Absolute(0.027),
    },
    Variant {
        name: "ln_rational_octave",
        eval: |x| ln::rational_octave(x) * LOG10_E,
        domain: DOMAIN,
        bound: Bound::Absolute(3e-6),
    },
];
