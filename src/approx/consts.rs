//! Shared constants.
//!
//! The integer biases are offsets from `bits(1.0) = 1065353216` chosen so that
//! `bits(2^x) ≈ 2^23 * x + bias`: the mantissa is linear in the fraction of x
//! while 2^f is convex, so the offset trades where the error lands.

/// Bit pattern of 1.0; `bits(2^x)` is exact at integers with this bias.
pub const ONE_BIAS: i32 = 1_065_353_216;
/// `ONE_BIAS + 1`: the affine model never undershoots 2^x (upper bound).
pub const UPPER_BIAS: i32 = 1_065_353_217;
/// `ONE_BIAS - 486411`: least-squares fit of the affine model over one octave.
pub const MIN_RMSE_BIAS: i32 = 1_064_866_805;
/// `ONE_BIAS - 722019`: the affine model never overshoots 2^x (lower bound).
pub const LOWER_BIAS: i32 = 1_064_631_197;

/// 2^23 / ln 2, the slope of `bits(e^x)` in x.
pub const EXP_SCALE: f32 = 12_102_203.0;
/// ln 2 / 2^23, the inverse slope.
pub const LN_SCALE: f32 = 8.262_958_405_176_314e-8;
/// Slope 2^23 with the least-squares correction of the min-RMSE bias folded in.
pub const EXP2_MIN_RMSE_SCALE: f32 = 8_388_607.888_014_112;

/// Double-precision analogue of [`MIN_RMSE_BIAS`] applied to the high word.
pub const HI_WORD_BIAS: i32 = 1_072_632_447;
/// 1 / 1512775, where 1512775 = 2^20 / ln 2 for the high word.
pub const HI_WORD_LN_SCALE: f64 = 6.610_368_362_777_016e-7;

/// Fraction-aware correction of the base-2 exponential, from a least-squares
/// rational fit of `2^z - (1 + z)` on z in [0, 1):
/// `2^p ≈ bits((p + C0 + C1 / (C2 - z) - C3 * z) * 2^23)`.
pub const EXP2_RATIONAL_C0: f32 = 121.274_057_5;
pub const EXP2_RATIONAL_C1: f32 = 27.728_023_3;
pub const EXP2_RATIONAL_C2: f32 = 4.842_525_68;
pub const EXP2_RATIONAL_C3: f32 = 1.490_129_07;
/// Affine exp2 bias in the exponent domain: 127 minus the mean of
/// `z - log2(1 + z)` over an octave.
pub const EXP2_AFFINE_BIAS: f32 = 126.942_695_04;
/// Inputs below this would push the biased exponent negative.
pub const EXP2_CLAMP: f32 = -126.0;

/// Rational correction of the base-2 log with the mantissa mapped to
/// [0.5, 1), fitted by least squares over one octave:
/// `log2(x) ≈ i * 2^-23 - C0 - C1 * m - C2 / (C3 + m)`.
pub const LOG2_RATIONAL_C0: f32 = 124.225_514_99;
pub const LOG2_RATIONAL_C1: f32 = 1.498_030_302;
pub const LOG2_RATIONAL_C2: f32 = 1.725_879_99;
pub const LOG2_RATIONAL_C3: f32 = 0.352_088_706_8;
/// Mantissa mask result forced into [0.5, 1): exponent field of 0.5.
pub const HALF_BITS: u32 = 0x3f00_0000;

pub const LN_2: f32 = core::f32::consts::LN_2;
pub const LN_10: f32 = core::f32::consts::LN_10;
pub const LOG2_E: f32 = core::f32::consts::LOG2_E;
pub const LOG10_E: f32 = core::f32::consts::LOG10_E;
pub const LOG10_2: f32 = core::f32::consts::LOG10_2;
pub const LOG2_10: f32 = core::f32::consts::LOG2_10;
