//! BlurHash decoding: convert a BlurHash string into a pixel buffer.
//!
//! The decoder validates the hash, dequantises its components, and
//! reconstructs an image of the requested dimensions. All validation happens
//! before any pixel is computed.

use crate::coefficients;
use crate::error::BlurhashError;
use crate::header::Blurhash;
use crate::synth::{self, PixelFormat};

/// Punch value that leaves the encoded contrast unchanged.
pub const DEFAULT_PUNCH: f64 = 1.0;

/// Options controlling how a hash is rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodeOptions {
    /// Contrast multiplier applied to every AC component.
    pub punch: f64,
    /// Byte layout of the output pixels.
    pub format: PixelFormat,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            punch: DEFAULT_PUNCH,
            format: PixelFormat::Rgba,
        }
    }
}

impl DecodeOptions {
    /// Set the punch value.
    pub fn with_punch(mut self, punch: f64) -> Self {
        self.punch = punch;
        self
    }

    /// Set the output pixel format.
    pub fn with_format(mut self, format: PixelFormat) -> Self {
        self.format = format;
        self
    }
}

/// Decode a BlurHash string into a flat RGBA byte array.
///
/// # Arguments
///
/// * `blurhash` - The BlurHash string to decode.
/// * `width` - The desired output image width.
/// * `height` - The desired output image height.
/// * `punch` - Factor to boost/reduce contrast of the decoded image
///   ([`DEFAULT_PUNCH`] = normal).
///
/// # Returns
///
/// A `Vec<u8>` of length `width * height * 4` containing RGBA pixel data in
/// row-major order. Alpha is always 255.
///
/// # Errors
///
/// Returns an error if the BlurHash string is invalid (too short, wrong
/// length, or invalid characters) or if `width` or `height` is zero.
///
/// # Examples
///
/// ```
/// use blurhash_decoder::decode;
/// let pixels = decode("LEHV6nWB2yk8pyo0adR*.7kCMdnj", 32, 32, 1.0).unwrap();
/// assert_eq!(pixels.len(), 32 * 32 * 4);
/// ```
pub fn decode(
    blurhash: &str,
    width: u32,
    height: u32,
    punch: f64,
) -> Result<Vec<u8>, BlurhashError> {
    decode_with(
        blurhash,
        width,
        height,
        &DecodeOptions::default().with_punch(punch),
    )
}

/// Decode a BlurHash string with explicit [`DecodeOptions`].
///
/// # Errors
///
/// Same as [`decode`].
///
/// # Examples
///
/// ```
/// use blurhash_decoder::{decode_with, DecodeOptions, PixelFormat};
/// let options = DecodeOptions::default().with_format(PixelFormat::Rgb);
/// let pixels = decode_with("LEHV6nWB2yk8pyo0adR*.7kCMdnj", 8, 8, &options).unwrap();
/// assert_eq!(pixels.len(), 8 * 8 * 3);
/// ```
pub fn decode_with(
    blurhash: &str,
    width: u32,
    height: u32,
    options: &DecodeOptions,
) -> Result<Vec<u8>, BlurhashError> {
    let hash = Blurhash::parse(blurhash)?;
    let header = hash.header();
    tracing::debug!(
        components_x = header.components_x,
        components_y = header.components_y,
        max_ac = header.max_ac(),
        width,
        height,
        punch = options.punch,
        "decoding blurhash"
    );

    if width == 0 || height == 0 {
        return Err(BlurhashError::InvalidDimensions {
            width,
            height,
            reason: "width and height must be > 0",
        });
    }

    let colours = coefficients::extract(&hash, options.punch)?;
    synth::synthesize(
        &colours,
        header.components_x,
        header.components_y,
        width,
        height,
        options.format,
    )
}
