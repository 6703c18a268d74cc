//! a^b for positive `a`.
//!
//! `bits(a) - bias` is proportional to log2(a), so scaling it by `b` and
//! adding the bias back is pow in a single multiply. The error of that
//! multiply grows with |b|; the split variants only approximate the
//! fractional part of the exponent and build the integer part by repeated
//! squaring, which keeps them accurate for large exponents.

use super::bits::{f32_from_i32, f32_to_i32, f64_hi_word, f64_with_hi_lo, ONE_BITS};
use super::consts::{HI_WORD_BIAS, LOWER_BIAS, MIN_RMSE_BIAS, UPPER_BIAS};
use super::exp;
use super::ln;
use super::variant::{Binary, Bound, Domain, Variant};

/// Bases the binary catalogue entries are measured on.
pub const BASES: [f32; 4] = [0.5, 2.0, 3.7, 10.0];

#[cfg(feature = "std")]
#[inline]
pub fn reference(a: f32, b: f32) -> f32 {
    a.powf(b)
}

#[inline(always)]
fn scale_biased(a: f32, b: f32, sub: i32, add: i32) -> f32 {
    let d = f32_to_i32(a).wrapping_sub(sub) as f32;
    f32_from_i32((b * d + add as f32) as i32)
}

/// Least-squares bias on both sides.
#[inline]
pub fn min_rmse(a: f32, b: f32) -> f32 {
    scale_biased(a, b, MIN_RMSE_BIAS, MIN_RMSE_BIAS)
}

/// Reads `a` with the upper-bound bias and writes with the lower one; never
/// above a^b for `b >= 0`.
#[inline]
pub fn lower(a: f32, b: f32) -> f32 {
    scale_biased(a, b, UPPER_BIAS, LOWER_BIAS)
}

/// Mirror of [`lower`]; never below a^b for `b >= 0`.
#[inline]
pub fn upper(a: f32, b: f32) -> f32 {
    scale_biased(a, b, LOWER_BIAS, UPPER_BIAS)
}

/// a^e for a non-negative integer `e` by repeated squaring.
#[inline(always)]
fn powi(mut a: f32, mut e: u32) -> f32 {
    let mut r = 1.0f32;
    while e != 0 {
        if e & 1 != 0 {
            r *= a;
        }
        a *= a;
        e >>= 1;
    }
    r
}

#[inline(always)]
fn powi_f64(mut a: f64, mut e: u32) -> f64 {
    let mut r = 1.0f64;
    while e != 0 {
        if e & 1 != 0 {
            r *= a;
        }
        a *= a;
        e >>= 1;
    }
    r
}

/// Integer part of the exponent by squaring, fractional part by the bit
/// trick. `split(a, 0.0) == 1.0` exactly; negative exponents invert the
/// positive power.
pub fn split(a: f32, b: f32) -> f32 {
    let flipped = b < 0.0;
    let b = if flipped { -b } else { b };
    let e = b as u32;
    let one = ONE_BITS as i32;
    let frac = b - e as f32;
    let u = f32_from_i32((frac * f32_to_i32(a).wrapping_sub(one) as f32 + one as f32) as i32);
    let r = powi(a, e) * u;
    if flipped {
        1.0 / r
    } else {
        r
    }
}

/// [`split`] with the fractional part taken as e^(frac·ln a) through
/// [`exp::ratio`] and [`ln::rational_octave`].
pub fn split_ratio(a: f32, b: f32) -> f32 {
    let flipped = b < 0.0;
    let b = if flipped { -b } else { b };
    let e = b as u32;
    let u = exp::ratio((b - e as f32) * ln::rational_octave(a));
    let r = powi(a, e) * u;
    if flipped {
        1.0 / r
    } else {
        r
    }
}

/// Double-precision single multiply on the high word; the low word is zeroed.
#[inline]
pub fn double_high_word(a: f64, b: f64) -> f64 {
    let d = (f64_hi_word(a) as i32).wrapping_sub(HI_WORD_BIAS);
    let hi = (b * d as f64 + HI_WORD_BIAS as f64) as i32;
    f64_with_hi_lo(hi as u32, 0)
}

/// Double-precision [`split`] on the high word. The fraction is read and
/// written with the exact high word of 1.0 so that a zero exponent gives 1.
pub fn double_split(a: f64, b: f64) -> f64 {
    const ONE_HI: i32 = 0x3ff0_0000;
    let flipped = b < 0.0;
    let b = if flipped { -b } else { b };
    let e = b as u32;
    let d = (f64_hi_word(a) as i32).wrapping_sub(ONE_HI);
    let hi = ((b - e as f64) * d as f64 + ONE_HI as f64) as i32;
    let r = powi_f64(a, e) * f64_with_hi_lo(hi as u32, 0);
    if flipped {
        1.0 / r
    } else {
        r
    }
}

/// Exponent range for the single-multiply variants; their error grows with |b|.
const SHORT: Domain = Domain::new(-4.0, 4.0);
const LONG: Domain = Domain::new(-20.0, 20.0);

pub const VARIANTS: &[Binary] = &[
    Variant {
        name: "min_rmse",
        eval: min_rmse,
        domain: SHORT,
        bound: Bound::Relative(0.2),
    },
    Variant {
        name: "lower",
        eval: lower,
        domain: SHORT,
        bound: Bound::Relative(0.23),
    },
    Variant {
        name: "upper",
        eval: upper,
        domain: SHORT,
        bound: Bound::Relative(0.36),
    },
    Variant {
        name: "split",
        eval: split,
        domain: LONG,
        bound: Bound::Relative(0.065),
    },
    Variant {
        name: "split_ratio",
        eval: split_ratio,
        domain: LONG,
        bound: Bound::Relative(0.022),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_exponent_is_exactly_one() {
        for &a in &[0.001f32, 0.5, 1.0, 2.0, 3.7, 10.0, 12345.0] {
            assert_eq!(split(a, 0.0), 1.0, "{a}^0");
            assert_eq!(split_ratio(a, 0.0), 1.0, "{a}^0");
            assert_eq!(double_split(a as f64, 0.0), 1.0, "{a}^0");
        }
    }

    #[test]
    fn integer_exponents_are_exact() {
        assert_eq!(split(2.0, 10.0), 1024.0);
        assert_eq!(split(2.0, -3.0), 0.125);
        assert_eq!(split(3.7, 1.0), 3.7);
        assert_eq!(split_ratio(2.0, 10.0), 1024.0);
        assert_eq!(double_split(2.0, 20.0), 1_048_576.0);
        assert_eq!(double_split(2.0, -2.0), 0.25);
    }

    #[test]
    fn single_multiply_drifts_at_large_exponents() {
        // about 52% high at 2^10
        let r = min_rmse(2.0, 10.0) / 1024.0;
        assert!(r > 1.4 && r < 1.6, "ratio {r}");
    }

    #[test]
    fn bounds_bracket_for_positive_exponents() {
        for &a in &BASES {
            for b in Domain::new(0.0, 4.0).samples(2001) {
                let b = b as f32;
                let exact = (a as f64).powf(b as f64);
                assert!(lower(a, b) as f64 <= exact * (1.0 + 1e-5), "lower({a}, {b})");
                assert!(upper(a, b) as f64 >= exact * (1.0 - 1e-5), "upper({a}, {b})");
            }
        }
    }

    #[test]
    fn double_variants_track_powf() {
        for &(a, b) in &[(2.0f64, 0.5f64), (10.0, 1.5), (3.7, -2.25), (0.5, 7.75)] {
            let exact = a.powf(b);
            assert!((double_split(a, b) / exact - 1.0).abs() < 0.065, "{a}^{b}");
        }
        for &(a, b) in &[(2.0f64, 0.5f64), (10.0, 1.5), (3.7, -2.25)] {
            let exact = a.powf(b);
            assert!((double_high_word(a, b) / exact - 1.0).abs() < 0.05, "{a}^{b}");
        }
    }
}
