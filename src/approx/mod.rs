#![allow(clippy::excessive_precision)]
#![allow(clippy::unusual_byte_groupings)]
#![allow(clippy::approx_constant)]

pub mod bits;
pub mod consts;
pub mod variant;

pub mod cos;
pub mod exp;
pub mod exp10;
pub mod exp2;
pub mod ln;
pub mod log10;
pub mod log2;
pub mod pow;
pub mod sin;
pub mod sqrt;
pub mod tan;
pub mod tanh;

pub use variant::{Binary, Bound, Domain, Unary, Variant};

// ========= canonical tiers =========
//
// "fast" is the rational-corrected tier, "faster" the pure affine one.

pub use exp2::{affine as faster_exp2, rational as fast_exp2};
pub use exp::{affine as faster_exp, rational as fast_exp};
pub use exp10::{affine as faster_exp10, rational as fast_exp10};
pub use ln::{affine as faster_ln, rational as fast_ln};
pub use log10::{affine as faster_log10, rational as fast_log10};
pub use log2::{affine_minimax as faster_log2, rational as fast_log2};
pub use pow::{min_rmse as faster_pow, split as fast_pow};
pub use tanh::{exp_affine as faster_tanh, exp_rational as fast_tanh};
