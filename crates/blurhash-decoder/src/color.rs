//! Color space conversion utilities for sRGB and linear RGB.
//!
//! The sRGB-to-linear direction only ever sees byte inputs, so it is served
//! from a 256-entry table computed at compile time. The linear-to-sRGB
//! direction works on arbitrary synthesized values and uses the transfer
//! function directly.

/// Build the sRGB-to-linear lookup table (0..=255 -> 0.0..=1.0).
const fn build_srgb_to_linear_lut() -> [f64; 256] {
    let mut lut = [0.0f64; 256];
    let mut i = 0u32;
    while i < 256 {
        let value = i as f64 / 255.0;
        lut[i as usize] = if value <= 0.04045 {
            value / 12.92
        } else {
            const_pow_2_4((value + 0.055) / 1.055)
        };
        i += 1;
    }
    lut
}

/// Compute `base^2.4` in const context using the identity
/// `x^2.4 = x^2 * (x^2)^(1/5)`, where the fifth root is computed via
/// Newton's method (converges to within 1e-15).
const fn const_pow_2_4(base: f64) -> f64 {
    if base <= 0.0 {
        return 0.0;
    }
    let x2 = base * base;
    x2 * const_fifth_root(x2)
}

/// Fifth root of `value` by Newton's method, usable in const context.
const fn const_fifth_root(value: f64) -> f64 {
    if value <= 0.0 {
        return 0.0;
    }
    if value == 1.0 {
        return 1.0;
    }
    // x_{k+1} = (4*x_k + value / x_k^4) / 5
    let mut x = if value < 1.0 { 1.0 } else { value };
    let mut i = 0;
    while i < 100 {
        let x4 = x * x * x * x;
        let next = (4.0 * x + value / x4) / 5.0;
        let diff = if next > x { next - x } else { x - next };
        if diff < 1e-15 {
            return next;
        }
        x = next;
        i += 1;
    }
    x
}

static SRGB_TO_LINEAR_LUT: [f64; 256] = build_srgb_to_linear_lut();

/// Convert an sRGB byte value (0..=255) to linear RGB (0.0..=1.0).
///
/// # Examples
///
/// ```
/// use blurhash_decoder::color::srgb_to_linear;
/// assert!((srgb_to_linear(0) - 0.0).abs() < 1e-10);
/// assert!((srgb_to_linear(255) - 1.0).abs() < 1e-10);
/// ```
#[inline]
pub fn srgb_to_linear(value: u8) -> f64 {
    SRGB_TO_LINEAR_LUT[value as usize]
}

/// Convert a linear RGB value to an sRGB byte value (0..=255).
///
/// The input is clamped to \[0.0, 1.0\] first. Both branches round
/// `encoded * 255 + 0.5`, so the top of the range rounds to 256 and is
/// clamped back to 255.
///
/// # Examples
///
/// ```
/// use blurhash_decoder::color::linear_to_srgb;
/// assert_eq!(linear_to_srgb(0.0), 0);
/// assert_eq!(linear_to_srgb(1.0), 255);
/// assert_eq!(linear_to_srgb(-3.0), 0);
/// ```
#[inline]
pub fn linear_to_srgb(value: f64) -> u8 {
    let v = value.clamp(0.0, 1.0);
    let encoded = if v <= 0.003_130_8 {
        (v * 12.92 * 255.0 + 0.5).round()
    } else {
        ((1.055 * v.powf(1.0 / 2.4) - 0.055) * 255.0 + 0.5).round()
    };
    // NaN input survives the clamp; `as` maps it to 0.
    encoded.clamp(0.0, 255.0) as u8
}

/// Compute `sign(value) * |value|^exp`.
///
/// This preserves the sign of the input while raising the absolute value
/// to the given exponent. Zero maps to zero.
///
/// # Examples
///
/// ```
/// use blurhash_decoder::color::sign_pow;
/// assert!((sign_pow(-0.5, 2.0) - (-0.25)).abs() < 1e-12);
/// assert_eq!(sign_pow(0.0, 2.0), 0.0);
/// ```
#[inline]
pub fn sign_pow(value: f64, exp: f64) -> f64 {
    value.abs().powf(exp).copysign(value)
}
