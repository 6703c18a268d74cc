//! Catalogue entries shared by every family.
//!
//! A [`Variant`] pairs a kernel with the input range and the maximum error it
//! is documented to meet there. Benches, the accuracy dump and the tests all
//! walk the per-family `VARIANTS` tables instead of naming kernels one by one.

use super::bits::{abs_f64, f64_from_bits, f64_to_bits};

/// Documented maximum error against the exact function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bound {
    /// `|approx - exact| <= e`
    Absolute(f32),
    /// `|approx / exact - 1| <= e`
    Relative(f32),
}

impl Bound {
    /// Error of `approx` against `exact` measured the way this bound is stated.
    pub fn measure(self, approx: f64, exact: f64) -> f64 {
        match self {
            Bound::Absolute(_) => abs_f64(approx - exact),
            Bound::Relative(_) => abs_f64(approx / exact - 1.0),
        }
    }

    pub fn limit(self) -> f64 {
        match self {
            Bound::Absolute(e) | Bound::Relative(e) => e as f64,
        }
    }

    pub fn holds(self, approx: f64, exact: f64) -> bool {
        self.measure(approx, exact) <= self.limit()
    }
}

/// Closed input interval `[lo, hi]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub lo: f64,
    pub hi: f64,
}

impl Domain {
    /// The endpoints may come in either order.
    pub const fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }

    /// `count` deterministic points covering the interval, endpoints included.
    ///
    /// Strictly positive intervals are walked geometrically by stepping the
    /// bit pattern, anything else linearly.
    pub fn samples(&self, count: usize) -> Samples {
        Samples {
            domain: *self,
            index: 0,
            count,
        }
    }
}

pub struct Samples {
    domain: Domain,
    index: usize,
    count: usize,
}

impl Iterator for Samples {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.count {
            return None;
        }
        let k = self.index as u64;
        self.index += 1;
        let last = (self.count.max(2) - 1) as u64;
        let Domain { lo, hi } = self.domain;
        if k >= last {
            return Some(hi);
        }
        if lo > 0.0 && hi > 0.0 {
            let a = f64_to_bits(lo);
            let b = f64_to_bits(hi);
            let step = a.abs_diff(b) / last;
            let u = if a <= b { a + step * k } else { a - step * k };
            Some(f64_from_bits(u))
        } else {
            Some(lo + (hi - lo) * (k as f64) / (last as f64))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.count - self.index.min(self.count);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Samples {}

/// A named kernel with its documented accuracy.
#[derive(Clone, Copy)]
pub struct Variant<F = fn(f32) -> f32> {
    pub name: &'static str,
    pub eval: F,
    pub domain: Domain,
    pub bound: Bound,
}

pub type Unary = Variant<fn(f32) -> f32>;
pub type Binary = Variant<fn(f32, f32) -> f32>;
