//! sqrt(x) by halving the biased exponent in the integer view.

use super::bits::{f32_from_bits, f32_to_bits, EXP_BIAS, MANT_BITS, MANT_MASK};
use super::variant::{Bound, Domain, Unary, Variant};

#[cfg(feature = "std")]
#[inline]
pub fn reference(x: f32) -> f32 {
    x.sqrt()
}

/// Adds the bias once more and shifts right: exact at even powers of two,
/// linear in between.
#[inline]
pub fn halve_exponent(x: f32) -> f32 {
    f32_from_bits(f32_to_bits(x).wrapping_add((EXP_BIAS as u32) << MANT_BITS) >> 1)
}

const SQRT_2: f32 = f32::from_bits(0x3fb5_04f3);

// Minimax fit of sqrt(m) on [1, 2), degree 7.
const P0: f32 = f32::from_bits(0x3e7e_ecfa);
const P1: f32 = f32::from_bits(0x3f9d_951e);
const P2: f32 = f32::from_bits(0xbf5c_bb39);
const P3: f32 = f32::from_bits(0x3f19_444e);
const P4: f32 = f32::from_bits(0xbe96_bd47);
const P5: f32 = f32::from_bits(0x3dc0_17cf);
const P6: f32 = f32::from_bits(0xbc8d_e15a);
const P7: f32 = f32::from_bits(0x3ab8_4945);

/// Halves the exponent in the bit field, fixes odd unbiased exponents with a
/// factor of sqrt(2) and evaluates a polynomial in the mantissa. Relative
/// error below 6e-7, worst just under 4 times an even power of two. Returns
/// 0 for `x <= 0`; NaN and infinity are not handled.
pub fn octave_poly(x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    let bits = f32_to_bits(x);
    let e = (bits >> MANT_BITS) & 0xff;
    let scale = if e & 1 != 0 { 1.0 } else { SQRT_2 };
    let half = (e + EXP_BIAS as u32) >> 1;
    let m = f32_from_bits((bits & MANT_MASK) | ((EXP_BIAS as u32) << MANT_BITS));
    let y = f32_from_bits(half << MANT_BITS);
    let p = P0 + m * (P1 + m * (P2 + m * (P3 + m * (P4 + m * (P5 + m * (P6 + m * P7))))));
    y * (scale * p)
}

const DOMAIN: Domain = Domain::new(1.0e-18, 1.0e18);

pub const VARIANTS: &[Unary] = &[
    Variant {
        name: "halve_exponent",
        eval: halve_exponent,
        domain: DOMAIN,
        bound: Bound::Relative(0.061),
    },
    Variant {
        name: "octave_poly",
        eval: octave_poly,
        domain: DOMAIN,
        bound: Bound::Relative(6e-7),
    },
];
