//! Dequantisation of the DC and AC components of a BlurHash.

use crate::color::{sign_pow, srgb_to_linear};
use crate::error::BlurhashError;
use crate::header::Blurhash;

/// Unpack a 24-bit packed sRGB value into its `[r, g, b]` bytes.
#[inline]
fn unpack_rgb(value: u64) -> [u8; 3] {
    [
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    ]
}

/// Map a base19 digit (0..=18) to a signed AC value.
#[inline]
fn dequantise(quant: u64, scale: f64) -> f64 {
    sign_pow((quant as f64 - 9.0) / 9.0, 2.0) * scale
}

/// Decode the component colours of `hash` in linear RGB.
///
/// The result has `components_x * components_y` entries in row-major order
/// (`i + j * components_x`); entry 0 is the DC term. AC terms are scaled by
/// the hash's maximum AC value and by `punch`.
///
/// # Examples
///
/// ```
/// use blurhash_decoder::{coefficients, Blurhash};
/// let hash = Blurhash::parse("LEHV6nWB2yk8pyo0adR*.7kCMdnj").unwrap();
/// let colours = coefficients::extract(&hash, 1.0).unwrap();
/// assert_eq!(colours.len(), 12);
/// ```
pub fn extract(hash: &Blurhash<'_>, punch: f64) -> Result<Vec<[f64; 3]>, BlurhashError> {
    let header = hash.header();
    let num_components = header.num_components();
    let scale = header.max_ac() * punch;

    let mut colours = Vec::with_capacity(num_components);
    let dc = unpack_rgb(hash.field(2, 6)?);
    colours.push(dc.map(srgb_to_linear));

    for component_idx in 1..num_components {
        let start = 4 + component_idx * 2;
        let ac_value = hash.field(start, start + 2)?;

        let quant_r = ac_value / (19 * 19);
        let quant_g = (ac_value / 19) % 19;
        let quant_b = ac_value % 19;

        colours.push([
            dequantise(quant_r, scale),
            dequantise(quant_g, scale),
            dequantise(quant_b, scale),
        ]);
    }

    Ok(colours)
}

/// Return the average colour of a BlurHash as sRGB bytes.
///
/// This is the DC component exactly as stored; no pixels are synthesised.
///
/// # Errors
///
/// Returns the same errors as [`Blurhash::parse`].
///
/// # Examples
///
/// ```
/// use blurhash_decoder::average_color;
/// assert_eq!(average_color("LEHV6nWB2yk8pyo0adR*.7kCMdnj").unwrap(), [151, 150, 149]);
/// ```
pub fn average_color(blurhash: &str) -> Result<[u8; 3], BlurhashError> {
    let hash = Blurhash::parse(blurhash)?;
    Ok(unpack_rgb(hash.field(2, 6)?))
}
