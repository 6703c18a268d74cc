//! Bit reinterpretation between IEEE-754 floats and integers.
//!
//! Every helper here is a type pun, never a numeric conversion: the bit
//! pattern is preserved exactly and all patterns (NaN, Inf, subnormals) are
//! accepted. The approximation kernels build on the fact that, for a positive
//! normal float, the integer view is an affine function of its log2.

pub const SIGN_MASK: u32 = 0x8000_0000;
pub const ABS_MASK: u32 = 0x7fff_ffff;
pub const MANT_MASK: u32 = 0x007f_ffff;
pub const MANT_BITS: u32 = 23;
pub const EXP_BIAS: i32 = 127;
/// Bit pattern of `1.0f32`, i.e. `127 << 23`.
pub const ONE_BITS: u32 = 0x3f80_0000;
/// 2^23 as a float: scales a value in the exponent domain into the bit domain.
pub const MANT_SCALE: f32 = 8_388_608.0;
/// 2^-23.
pub const INV_MANT_SCALE: f32 = 1.192_092_895_507_812_5e-7;

pub const F64_EXP_SHIFT_HI: u32 = 20;
pub const F64_EXP_MASK_HI: u32 = 0x7ff << F64_EXP_SHIFT_HI;
pub const F64_EXP_BIAS: i32 = 1023;

#[inline(always)]
pub fn f32_to_bits(x: f32) -> u32 {
    x.to_bits()
}

#[inline(always)]
pub fn f32_from_bits(u: u32) -> f32 {
    f32::from_bits(u)
}

/// Signed integer view of the bit pattern.
#[inline(always)]
pub fn f32_to_i32(x: f32) -> i32 {
    x.to_bits() as i32
}

#[inline(always)]
pub fn f32_from_i32(i: i32) -> f32 {
    f32::from_bits(i as u32)
}

#[inline(always)]
pub fn f64_to_bits(x: f64) -> u64 {
    x.to_bits()
}

#[inline(always)]
pub fn f64_from_bits(u: u64) -> f64 {
    f64::from_bits(u)
}

/// Sign, exponent and top 20 mantissa bits of a double.
#[inline(always)]
pub fn f64_hi_word(x: f64) -> u32 {
    (f64_to_bits(x) >> 32) as u32
}

#[inline(always)]
pub fn f64_lo_word(x: f64) -> u32 {
    (f64_to_bits(x) & 0xffff_ffffu64) as u32
}

#[inline(always)]
pub fn f64_with_hi_lo(hi: u32, lo: u32) -> f64 {
    f64_from_bits(((hi as u64) << 32) | (lo as u64))
}

/// Unbiased exponent of a normal float.
#[inline(always)]
pub fn f32_exponent(x: f32) -> i32 {
    ((f32_to_bits(x) >> MANT_BITS) & 0xff) as i32 - EXP_BIAS
}

/// Mantissa of `x` with the exponent forced to zero, i.e. a value in [1, 2).
#[inline(always)]
pub fn f32_mantissa_octave(x: f32) -> f32 {
    f32_from_bits((f32_to_bits(x) & MANT_MASK) | ONE_BITS)
}

#[inline(always)]
pub fn abs_f32(x: f32) -> f32 {
    f32_from_bits(f32_to_bits(x) & ABS_MASK)
}

#[inline(always)]
pub fn abs_f64(x: f64) -> f64 {
    f64_from_bits(f64_to_bits(x) & 0x7fff_ffff_ffff_ffff)
}

/// floor(x) by clearing fractional mantissa bits (no libm).
#[inline(always)]
pub fn floor_f32(x: f32) -> f32 {
    let u = f32_to_bits(x);
    let e = ((u >> MANT_BITS) & 0xff) as i32 - EXP_BIAS;
    if e >= MANT_BITS as i32 {
        // integral, Inf or NaN
        return x;
    }
    if e < 0 {
        // |x| < 1
        return if u & SIGN_MASK != 0 && (u & ABS_MASK) != 0 {
            -1.0
        } else {
            0.0
        };
    }
    let mask = MANT_MASK >> e;
    if u & mask == 0 {
        return x;
    }
    let mut ui = u & !mask;
    if u & SIGN_MASK != 0 {
        ui = ui.wrapping_add(1u32 << (MANT_BITS as i32 - e));
    }
    f32_from_bits(ui)
}

/// Round to nearest integer, ties away from zero.
#[inline(always)]
pub fn round_f64(x: f64) -> f64 {
    const TWO52: f64 = 4_503_599_627_370_496.0;
    let ax = abs_f64(x);
    if !(ax < TWO52) {
        return x;
    }
    // floor(|x| + 0.5); adding 2^52 leaves no fraction bits in the sum.
    let y = ax + 0.5;
    let mut t = (y + TWO52) - TWO52;
    if t > y {
        t -= 1.0;
    }
    if x.is_sign_negative() {
        -t
    } else {
        t
    }
}

/// a * b + c, fused when the platform libm is available.
#[inline(always)]
pub fn fmaf(a: f32, b: f32, c: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        a.mul_add(b, c)
    }
    #[cfg(not(feature = "std"))]
    {
        a * b + c
    }
}
