//! tanh(x) = -1 + 2 / (1 + e^(-2x)) with any exp kernel plugged in.
//!
//! Accuracy is inherited from the exponential. The bit-trick exponentials
//! overflow their exponent field past |2x| of about 88, so every kernel
//! clamps its argument to [-40, 40] first; tanh is exactly ±1 in f32 there.

use super::bits::{f32_from_i32, f32_to_i32};
use super::exp;
use super::variant::{Bound, Domain, Unary, Variant};

/// Past this, tanh rounds to ±1 and e^(2x) still fits the exponent field.
const SATURATION: f32 = 40.0;

#[cfg(feature = "std")]
#[inline]
pub fn reference(x: f32) -> f32 {
    x.tanh()
}

/// tanh through the given exponential.
#[inline(always)]
pub fn from_exp<F: Fn(f32) -> f32>(x: f32, exp: F) -> f32 {
    let x = x.clamp(-SATURATION, SATURATION);
    -1.0 + 2.0 / (1.0 + exp(-2.0 * x))
}

#[inline]
pub fn exp_min_rmse(x: f32) -> f32 {
    from_exp(x, exp::min_rmse)
}

#[inline]
pub fn exp_upper(x: f32) -> f32 {
    from_exp(x, exp::upper)
}

#[inline]
pub fn exp_lower(x: f32) -> f32 {
    from_exp(x, exp::lower)
}

#[inline]
pub fn exp_rational(x: f32) -> f32 {
    from_exp(x, exp::rational)
}

#[inline]
pub fn exp_affine(x: f32) -> f32 {
    from_exp(x, exp::affine)
}

#[inline]
pub fn exp_ratio(x: f32) -> f32 {
    from_exp(x, exp::ratio)
}

/// Splits x·log2(e) into integer and fraction. The fraction goes through a
/// pair of cubics whose sum and difference stand in for 2^(±f); the integer
/// part is added straight into the exponent field of the sum (twice, since
/// tanh needs e^(2x)).
pub fn split_ratio(v: f32) -> f32 {
    const C1: f32 = 0.031_387_77;
    const C2: f32 = 0.276_281_267;
    const LOG2E: f32 = 1.442_695_022;

    let v = v.clamp(-SATURATION, SATURATION) * LOG2E;
    let int_part = v as i32;
    let x = v - int_part as f32;
    let xx = x * x;
    let v1 = LOG2E + C2 * xx;
    let v2 = x + xx * C1 * x;
    let v3 = f32_from_i32(f32_to_i32(v2 + v1).wrapping_add(int_part << 24));
    let v4 = v2 - v1;
    (v3 + v4) / (v3 - v4)
}

const DOMAIN: Domain = Domain::new(-10.0, 10.0);

pub const VARIANTS: &[Unary] = &[
    Variant {
        name: "exp_min_rmse",
        eval: exp_min_rmse,
        domain: DOMAIN,
        bound: Bound::Absolute(0.021),
    },
    Variant {
        name: "exp_upper",
        eval: exp_upper,
        domain: DOMAIN,
        bound: Bound::Absolute(0.03),
    },
    Variant {
        name: "exp_lower",
        eval: exp_lower,
        domain: DOMAIN,
        bound: Bound::Absolute(0.031),
    },
    Variant {
        name: "exp_rational",
        eval: exp_rational,
        domain: DOMAIN,
        bound: Bound::Absolute(3e-5),
    },
    Variant {
        name: "exp_affine",
        eval: exp_affine,
        domain: DOMAIN,
        bound: Bound::Absolute(0.021),
    },
    Variant {
        name: "exp_ratio",
        eval: exp_ratio,
        domain: DOMAIN,
        bound: Bound::Absolute(0.011),
    },
    Variant {
        name: "split_ratio",
        eval: split_ratio,
        domain: DOMAIN,
        bound: Bound::Absolute(2e-6),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_ratio_is_odd() {
        assert_eq!(split_ratio(0.0), 0.0);
        for x in Domain::new(0.0, 10.0).samples(1001) {
            let x = x as f32;
            assert_eq!(split_ratio(-x), -split_ratio(x), "tanh({x})");
        }
    }

    #[test]
    fn saturates_to_one() {
        assert_eq!(split_ratio(20.0), 1.0);
        assert_eq!(split_ratio(-20.0), -1.0);
        assert!((exp_rational(9.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn large_arguments_saturate_with_the_right_sign() {
        for v in VARIANTS {
            for x in [45.0f32, 60.0, 1.0e4, f32::INFINITY] {
                assert_eq!((v.eval)(x), 1.0, "tanh::{}({x})", v.name);
                assert_eq!((v.eval)(-x), -1.0, "tanh::{}(-{x})", v.name);
            }
        }
    }

    #[test]
    fn from_exp_accepts_closures() {
        let y = from_exp(0.5, |x: f32| x.exp());
        assert!((y - 0.5f32.tanh()).abs() < 1e-6);
    }
}
