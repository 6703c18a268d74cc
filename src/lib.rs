//! Fast approximations of transcendental functions by bit reinterpretation.
//!
//! A positive `f32` read as an integer is an affine function of its log2, so
//! exp2 and log2 reduce to a multiply and an add on the bit pattern. Natural
//! and decimal log/exp, pow and tanh are rescalings of those two; sin, cos
//! and tan use range reduction with sign and rounding tricks on the bits.
//!
//! Every family lives in its own module under [`approx`] with a `VARIANTS`
//! table naming each kernel, the input range it is measured on and its
//! documented maximum error. Kernels do not validate their input. With the
//! `std` feature each family also exposes `reference`, the platform routine.
//!
//! The crate root re-exports two canonical tiers per family: `fast_*`
//! (rational correction) and `faster_*` (pure affine).

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(test, not(feature = "std")))]
extern crate std;

pub mod approx;

pub use approx::*;
