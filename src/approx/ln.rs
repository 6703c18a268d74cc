//! Natural logarithm.
//!
//! Two families live here. The Schraudolph inversions ([`min_rmse`],
//! [`lower`], [`upper`], [`double_high_word`]) read the bit pattern as an
//! affine function of ln(x) and are only a subtraction and a multiply. The
//! range-reduced kernels ([`minimax`], [`minimax_fast`], [`rational_octave`])
//! use the exponent field for the integer part and evaluate a polynomial or
//! rational in the mantissa.

use super::bits::{
    f32_from_bits, f32_to_bits, f32_to_i32, f64_hi_word, fmaf, INV_MANT_SCALE, ONE_BITS,
};
use super::consts::{
    HI_WORD_BIAS, HI_WORD_LN_SCALE, LN_2, LN_SCALE, LOWER_BIAS, MIN_RMSE_BIAS, UPPER_BIAS,
};
use super::log2;
use super::variant::{Bound, Domain, Unary, Variant};

#[cfg(feature = "std")]
#[inline]
pub fn reference(x: f32) -> f32 {
    x.ln()
}

/// Bit pattern of 2/3: reduction moves the mantissa into [2/3, 4/3).
const TWO_THIRDS_BITS: u32 = 0x3f2a_aaab;
const MIN_NORMAL: f32 = 1.175_494_351e-38;
const TWO23: f32 = 8_388_608.0;

/// ln(x) within 1 ulp over all positive floats.
///
/// The mantissa is reduced to [2/3, 4/3] so log1p(m - 1) is evaluated on
/// [-1/3, 1/3] by an odd/even split minimax polynomial. Subnormals are
/// rescaled by 2^23 first; zero, negative, infinite and NaN inputs return
/// -inf, NaN, inf and NaN.
pub fn minimax(a: f32) -> f32 {
    let mut a = a;
    let mut i = 0.0f32;
    if a < MIN_NORMAL {
        a *= TWO23;
        i = -23.0;
    }
    let e = (f32_to_bits(a).wrapping_sub(TWO_THIRDS_BITS) & 0xff80_0000) as i32;
    let m = f32_from_bits(f32_to_bits(a).wrapping_sub(e as u32));
    let i = fmaf(e as f32, INV_MANT_SCALE, i);
    let m = m - 1.0;
    let s = m * m;
    let mut r = -0.130_310_059f32;
    let mut t = 0.140_869_141f32;
    r = fmaf(r, s, -0.121_483_512);
    t = fmaf(t, s, 0.139_814_854);
    r = fmaf(r, s, -0.166_846_126);
    t = fmaf(t, s, 0.200_120_345);
    r = fmaf(r, s, -0.249_996_200);
    r = fmaf(t, m, r);
    r = fmaf(r, m, 0.333_331_972);
    r = fmaf(r, m, -0.5);
    r = fmaf(r, s, m);
    r = fmaf(i, LN_2, r);
    if !(a > 0.0 && a < f32::INFINITY) {
        r = a + a; // NaN stays NaN, +inf stays +inf
        if a < 0.0 {
            r = f32::NAN;
        }
        if a == 0.0 {
            r = f32::NEG_INFINITY;
        }
    }
    r
}

/// [`minimax`] with a degree-5 polynomial and no special-case handling;
/// maximum relative error about 1e-4 on positive normal floats.
#[inline]
pub fn minimax_fast(a: f32) -> f32 {
    let e = (f32_to_bits(a).wrapping_sub(TWO_THIRDS_BITS) & 0xff80_0000) as i32;
    let m = f32_from_bits(f32_to_bits(a).wrapping_sub(e as u32));
    let i = e as f32 * INV_MANT_SCALE;
    let f = m - 1.0;
    let s = f * f;
    let mut r = fmaf(0.230_836_749, f, -0.279_208_571);
    let t = fmaf(0.331_826_031, f, -0.498_910_338);
    r = fmaf(r, s, t);
    r = fmaf(r, s, f);
    fmaf(i, LN_2, r)
}

#[inline(always)]
fn schraudolph_inverse(a: f32, bias: i32) -> f32 {
    f32_to_i32(a).wrapping_sub(bias) as f32 * LN_SCALE
}

/// Inverse of the least-squares Schraudolph exponential.
#[inline]
pub fn min_rmse(a: f32) -> f32 {
    schraudolph_inverse(a, MIN_RMSE_BIAS)
}

/// Never above ln(x) (inverse of the upper-bound exponential).
#[inline]
pub fn lower(a: f32) -> f32 {
    schraudolph_inverse(a, UPPER_BIAS)
}

/// Never below ln(x) (inverse of the lower-bound exponential).
#[inline]
pub fn upper(a: f32) -> f32 {
    schraudolph_inverse(a, LOWER_BIAS)
}

/// Double-precision inversion on the high word only.
#[inline]
pub fn double_high_word(a: f64) -> f64 {
    (f64_hi_word(a) as i32).wrapping_sub(HI_WORD_BIAS) as f64 * HI_WORD_LN_SCALE
}

const RO_C0: f32 = -19.645_704;
const RO_C1: f32 = 0.767_002;
const RO_C2: f32 = 0.371_747_9;
const RO_C3: f32 = 5.265_398_5;

/// Exponent plus a (2,2) rational in the mantissa on [1, 2); the constant
/// term is solved from the others so that ln(1) is exactly 0.
#[inline]
pub fn rational_octave(x: f32) -> f32 {
    let c4 = -(1.0 + RO_C0) * (1.0 + RO_C1) / ((1.0 + RO_C2) * (1.0 + RO_C3));
    let mut ux = f32_to_bits(x);
    let e = (ux.wrapping_sub(ONE_BITS) as i32) >> 23;
    ux |= ONE_BITS;
    ux &= 0x3fff_ffff;
    let m = f32_from_bits(ux);
    let a = (m + RO_C0) * (m + RO_C1);
    let b = (m + RO_C2) * (m + RO_C3);
    let c = e as f32 + c4;
    (c + a / b) * LN_2
}

/// [`log2::rational`] scaled by ln 2.
#[inline]
pub fn rational(x: f32) -> f32 {
    LN_2 * log2::rational(x)
}

/// [`log2::affine`] with ln 2 folded into both constants.
#[inline]
pub fn affine(x: f32) -> f32 {
    f32_to_bits(x) as f32 * 8.262_958_288_192_749e-8 - 87.989_971_088
}

const DOMAIN: Domain = Domain::new(1.0 / 1_048_576.0, 1_048_576.0);

pub const VARIANTS: &[Unary] = &[
    Variant {
        name: "minimax",
        eval: minimax,
        domain: DOMAIN,
        bound: Bound::Absolute(1.5e-6),
    },
    Variant {
        name: "minimax_fast",
        eval: minimax_fast,
        domain: DOMAIN,
        bound: Bound::Absolute(2e-5),
    },
    Variant {
        name: "min_rmse",
        eval: min_rmse,
        domain: DOMAIN,
        bound: Bound::Absolute(0.042),
    },
    Variant {
        name: "lower",
        eval: lower,
        domain: DOMAIN,
        bound: Bound::Absolute(0.062),
    },
    Variant {
        name: "upper",
        eval: upper,
        domain: DOMAIN,
        bound: Bound::Absolute(0.062),
    },
    Variant {
        name: "rational_octave",
        eval: rational_octave,
        domain: DOMAIN,
        bound: Bound::Absolute(6e-6),
    },
    Variant {
        name: "rational",
        eval: rational,
        domain: DOMAIN,
        bound: Bound::Absolute(1.2e-4),
    },
    Variant {
        name: "affine",
        eval: affine,
        domain: DOMAIN,
        bound: Bound::Absolute(0.041),
    },
];
