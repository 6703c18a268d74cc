//! tan(x) as a rational in `y = 1 - x²` with x in units of π/2, so the
//! poles at ±1 come from the `1/y` term.

use super::variant::{Bound, Domain, Unary, Variant};

#[cfg(feature = "std")]
#[inline]
pub fn reference(x: f32) -> f32 {
    x.tan()
}

const TWO_OVER_PI: f32 = 0.636_619_772_367_581_4;

/// tan(x·π/2) for x in (-1, 1); the period is 2 in these units.
#[inline]
pub fn normalized(x: f32) -> f32 {
    let y = 1.0 - x * x;
    x * (-0.018_710_8 * y + 0.315_835_26 + 1.273_657_76 / y)
}

/// Radians on (-π/2, π/2) with a cubic correction in `y`.
#[inline]
pub fn rational(x: f32) -> f32 {
    let x = x * TWO_OVER_PI;
    let y = 1.0 - x * x;
    x * (((-0.000_221_184 * y + 0.002_497_110_4) * y - 0.023_019_370_96) * y
        + 0.318_299_460_4
        + 1.273_240_299_8 / y)
}

/// [`rational`] for any argument below 2^24 in magnitude: adding and removing
/// ±2^25 rounds to the nearest even number of half-periods, leaving x in
/// [-1, 1].
#[inline]
pub fn full(x: f32) -> f32 {
    const ROUND: f32 = 33_554_432.0;
    let x = x * TWO_OVER_PI;
    let s = if x > 0.0 {
        ROUND
    } else if x < 0.0 {
        -ROUND
    } else {
        0.0
    };
    let x = x - ((x - s) + s);
    let y = 1.0 - x * x;
    x * (((-0.000_235_52 * y + 0.002_530_368) * y - 0.023_045_536) * y
        + 0.318_307_363_6
        + 1.273_239_591_2 / y)
}

/// All entries take radians.
pub const VARIANTS: &[Unary] = &[
    Variant {
        name: "normalized",
        eval: |x| normalized(x * TWO_OVER_PI),
        domain: Domain::new(-1.4, 1.4),
        bound: Bound::Absolute(3.5e-4),
    },
    Variant {
        name: "rational",
        eval: rational,
        domain: Domain::new(-1.4, 1.4),
        bound: Bound::Absolute(5e-6),
    },
    Variant {
        name: "full",
        eval: full,
        domain: Domain::new(1.7, 4.6),
        bound: Bound::Absolute(3e-5),
    },
];
