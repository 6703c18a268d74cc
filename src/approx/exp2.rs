//! 2^x by writing an affine function of x straight into the exponent and
//! mantissa fields.
//!
//! `bits(2^x) = 2^23 * (x + 127)` holds exactly at integers; between them the
//! mantissa grows linearly while 2^x grows convexly. [`affine`] accepts that
//! error (about 4%), [`rational`] cancels most of it with a rational term in
//! the fractional part (about 6e-5 relative).

use super::bits::{
    f32_from_bits, f32_from_i32, f64_hi_word, f64_lo_word, f64_with_hi_lo, F64_EXP_BIAS,
    F64_EXP_MASK_HI, F64_EXP_SHIFT_HI, MANT_SCALE,
};
use super::consts::{
    EXP2_AFFINE_BIAS, EXP2_CLAMP, EXP2_MIN_RMSE_SCALE, EXP2_RATIONAL_C0, EXP2_RATIONAL_C1,
    EXP2_RATIONAL_C2, EXP2_RATIONAL_C3, LN_2, MIN_RMSE_BIAS,
};
use super::variant::{Bound, Domain, Unary, Variant};
use super::{exp, pow};

#[cfg(feature = "std")]
#[inline]
pub fn reference(x: f32) -> f32 {
    x.exp2()
}

#[inline(always)]
fn clamp(p: f32) -> f32 {
    if p < EXP2_CLAMP {
        EXP2_CLAMP
    } else {
        p
    }
}

/// Exponent-domain value of the correction at z = 0, less the integer part.
const RATIONAL_BASE: f64 =
    EXP2_RATIONAL_C0 as f64 + EXP2_RATIONAL_C1 as f64 / EXP2_RATIONAL_C2 as f64;
const RATIONAL_SLOPE0: f64 = 1.0 - EXP2_RATIONAL_C3 as f64;
/// Rescales the correction so it reaches just under 1 at z = 1; adjacent
/// integer segments then meet without a step down.
const RATIONAL_JOIN: f64 = (1.0 - 1.0 / 4_294_967_296.0)
    / (RATIONAL_SLOPE0
        + EXP2_RATIONAL_C1 as f64
            / (EXP2_RATIONAL_C2 as f64 * (EXP2_RATIONAL_C2 as f64 - 1.0)));

/// Clamped exp2 with a rational correction in the fractional part.
///
/// With `p = w + z`, `w = floor(p)`, the exponent-domain value
/// `p + C0 + C1 / (C2 - z) - C3 * z` is evaluated as
/// `w + C0 + C1 / C2 + z * (1 - C3 + C1 / (C2 * (C2 - z)))`. The slope factor
/// is positive and increasing on [0, 1], so every rounding step is monotone
/// and the result never decreases as `p` grows. Relative error about 6e-5.
#[inline]
pub fn rational(p: f32) -> f32 {
    let clipp = clamp(p) as f64;
    let mut w = clipp as i32;
    if w as f64 > clipp {
        w -= 1;
    }
    let z = clipp - w as f64;
    let slope = RATIONAL_SLOPE0
        + EXP2_RATIONAL_C1 as f64 / (EXP2_RATIONAL_C2 as f64 * (EXP2_RATIONAL_C2 as f64 - z));
    let t = (w as f64 + RATIONAL_BASE) + z * slope * RATIONAL_JOIN;
    f32_from_bits((MANT_SCALE as f64 * t) as u32)
}

/// Clamped exp2, pure affine: one add and one multiply.
#[inline]
pub fn affine(p: f32) -> f32 {
    let clipp = clamp(p);
    f32_from_bits((MANT_SCALE * (clipp + EXP2_AFFINE_BIAS)) as u32)
}

/// Schraudolph's exp2 with the least-squares bias; no clamp, so inputs below
/// -126 wrap into garbage.
#[inline]
pub fn schraudolph(a: f32) -> f32 {
    f32_from_i32((EXP2_MIN_RMSE_SCALE * a + MIN_RMSE_BIAS as f32) as i32)
}

/// Double-precision exp2 that writes the integer part of `x` into the
/// exponent of a number in [1, 2) whose mantissa is the fraction.
#[inline]
pub fn double_split(x: f64) -> f64 {
    if x >= 0.0 {
        return double_split_nonneg(x);
    }
    let e = (x + F64_EXP_BIAS as f64) as i32;
    let ret = x - (e - 1024) as f64;
    let hi = (f64_hi_word(ret) & !F64_EXP_MASK_HI).wrapping_add((e as u32) << F64_EXP_SHIFT_HI);
    f64_with_hi_lo(hi, f64_lo_word(ret))
}

/// [`double_split`] without the negative branch; only valid for `x >= 0`.
#[inline]
pub fn double_split_nonneg(x: f64) -> f64 {
    let e = x as i32;
    let ret = x - (e - 1) as f64;
    let hi = (f64_hi_word(ret) & !F64_EXP_MASK_HI)
        .wrapping_add(((e + F64_EXP_BIAS) as u32) << F64_EXP_SHIFT_HI);
    f64_with_hi_lo(hi, f64_lo_word(ret))
}

const DOMAIN: Domain = Domain::new(-120.0, 120.0);

pub const VARIANTS: &[Unary] = &[
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
        name: "schraudolph",
        eval: schraudolph,
        domain: DOMAIN,
        bound: Bound::Relative(0.041),
    },
    Variant {
        name: "pow_min_rmse",
        eval: |x| pow::min_rmse(2.0, x),
        domain: Domain::new(-4.0, 4.0),
        bound: Bound::Relative(0.18),
    },
    Variant {
        name: "pow_lower",
        eval: |x| pow::lower(2.0, x),
        domain: Domain::new(-4.0, 4.0),
        bound: Bound::Relative(0.06),
    },
    Variant {
        name: "pow_upper",
        eval: |x| pow::upper(2.0, x),
        domain: Domain::new(-4.0, 4.0),
        bound: Bound::Relative(0.35),
    },
    Variant {
        name: "pow_split",
        eval: |x| pow::split(2.0, x),
        domain: DOMAIN,
        bound: Bound::Relative(0.065),
    },
    Variant {
        name: "pow_split_ratio",
        eval: |x| pow::split_ratio(2.0, x),
        domain: DOMAIN,
        bound: Bound::Relative(0.022),
    },
    Variant {
        name: "exp_upper",
        eval: |x| exp::upper(x * LN_2),
        domain: DOMAIN,
        bound: Bound::Relative(0.063),
    },
    Variant {
        name: "exp_lower",
        eval: |x| exp::lower(x * LN_2),
        domain: DOMAIN,
        bound: Bound::Relative(0.06),
    },
    Variant {
        name: "exp_min_rmse",
        eval: |x| exp::min_rmse(x * LN_2),
        domain: DOMAIN,
        bound: Bound::Relative(0.041),
    },
    Variant {
        name: "exp_rational",
        eval: |x| exp::rational(x * LN_2),
        domain: DOMAIN,
        bound: Bound::Relative(1e-4),
    },
    Variant {
        name: "exp_affine",
        eval: |x| exp::affine(x * LN_2),
        domain: DOMAIN,
        bound: Bound::Relative(0.041),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_nearly_exact() {
        assert!((rational(3.0) / 8.0 - 1.0).abs() < 2e-6);
        assert!((rational(0.0) - 1.0).abs() < 2e-6);
        assert!((rational(-1.0) / 0.5 - 1.0).abs() < 2e-6);
        assert!((affine(3.0) - 8.0).abs() < 0.32);
        assert!((schraudolph(3.0) - 8.0).abs() < 0.32);
    }

    #[test]
    fn clamps_below_min_exponent() {
        assert_eq!(rational(-500.0).to_bits(), rational(-126.0).to_bits());
        assert_eq!(affine(-1e30).to_bits(), affine(-126.0).to_bits());
        assert!(rational(-126.0) > 0.0);
        assert!(affine(-126.0) > 0.0);
    }

    #[test]
    fn double_split_matches_integers() {
        for e in -60..60 {
            let x = e as f64;
            assert_eq!(double_split(x), x.exp2(), "2^{x}");
        }
        assert!((double_split(0.5) - 1.5).abs() < 1e-12);
        assert!((double_split(-0.5) - 0.75).abs() < 1e-12);
        assert_eq!(double_split_nonneg(10.0), 1024.0);
    }

    #[test]
    fn double_split_never_undershoots() {
        // (1 + f) / 2^f peaks at f = 1/ln2 - 1
        for x in Domain::new(-100.0, 100.0).samples(10_001) {
            let r = double_split(x) / x.exp2();
            assert!((1.0 - 1e-12..=1.062).contains(&r), "2^{x}: ratio {r}");
        }
    }
}
