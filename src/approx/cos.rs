//! cos(x), mostly by shifting into the sine kernels.

use super::bits::{abs_f32, floor_f32};
use super::sin;
use super::variant::{Bound, Domain, Unary, Variant};

#[cfg(feature = "std")]
#[inline]
pub fn reference(x: f32) -> f32 {
    x.cos()
}

/// [`sin::parabolic`] of `x + π/2`, wrapped back by 2π above π/2; valid on
/// [-π, π].
#[inline]
pub fn parabolic(x: f32) -> f32 {
    const HALF_PI: f32 = 1.570_796_326_794_896_6;
    const HALF_PI_MINUS_TWO_PI: f32 = -4.712_388_980_384_689_9;
    let offset = if x > HALF_PI {
        HALF_PI_MINUS_TWO_PI
    } else {
        HALF_PI
    };
    sin::parabolic(x + offset)
}

/// Cubic in `1 - 2|x|/π`; valid on [-π, π].
#[inline]
pub fn parabolic_fast(x: f32) -> f32 {
    const TWO_OVER_PI: f32 = 0.636_619_772_367_581_34;
    const P: f32 = 0.546_413_358_456_796_34;
    let q = 1.0 - TWO_OVER_PI * abs_f32(x);
    q + P * q * (1.0 - q * q)
}

#[inline(always)]
fn turns_parabola(x: f32) -> f32 {
    const INV_TWO_PI: f32 = 0.159_154_943_091_895_35;
    let mut t = x * INV_TWO_PI;
    t -= 0.25 + floor_f32(t + 0.25);
    t * (16.0 * (abs_f32(t) - 0.5))
}

/// Argument in turns, folded with floor to [-½, ½), then a parabola per
/// half period. Any argument works.
#[inline]
pub fn turns(x: f32) -> f32 {
    turns_parabola(x)
}

/// [`turns`] with one extra correction step.
#[inline]
pub fn turns_precise(x: f32) -> f32 {
    let t = turns_parabola(x);
    t + 0.225 * t * (abs_f32(t) - 1.0)
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
        bound: Bound::Absolute(0.007),
    },
    Variant {
        name: "turns",
        eval: turns,
        domain: WIDE,
        bound: Bound::Absolute(0.057),
    },
    Variant {
        name: "turns_precise",
        eval: turns_precise,
        domain: WIDE,
        bound: Bound::Absolute(0.0012),
    },
];
