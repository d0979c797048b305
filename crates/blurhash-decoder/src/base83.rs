//! Base83 encoding and decoding used by the BlurHash format.
//!
//! BlurHash packs every integer field of a hash into digits of a custom
//! 83-character alphabet. This module maps characters to digit values and
//! back, and converts whole digit strings to and from integers.

use crate::error::BlurhashError;

/// The 83-character alphabet used by BlurHash base83 encoding.
pub const ALPHABET: &[u8; 83] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz#$%*+,-.:;=?@[]^_{|}~";

/// Lookup table mapping ASCII byte values to their base83 digit value.
/// Invalid characters map to `255`.
const fn build_decode_lut() -> [u8; 128] {
    let mut lut = [255u8; 128];
    let mut i = 0;
    while i < 83 {
        lut[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    lut
}

static DECODE_LUT: [u8; 128] = build_decode_lut();

/// Return the digit value of `ch`, or `None` if it is not in the alphabet.
///
/// # Examples
///
/// ```
/// use blurhash_decoder::base83::digit;
/// assert_eq!(digit('0'), Some(0));
/// assert_eq!(digit('~'), Some(82));
/// assert_eq!(digit('!'), None);
/// ```
#[inline]
pub fn digit(ch: char) -> Option<u8> {
    if !ch.is_ascii() {
        return None;
    }
    match DECODE_LUT[ch as usize] {
        255 => None,
        d => Some(d),
    }
}

/// Return the alphabet character for `digit`, or `None` if `digit >= 83`.
#[inline]
pub fn char_for(digit: u8) -> Option<char> {
    ALPHABET.get(digit as usize).map(|&b| b as char)
}

/// Decode a base83 string into an integer.
///
/// # Errors
///
/// Returns [`BlurhashError::InvalidCharacter`] if the string contains a
/// character not in the base83 alphabet, and
/// [`BlurhashError::ValueOutOfRange`] if the value does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use blurhash_decoder::base83::decode;
/// assert_eq!(decode("0").unwrap(), 0);
/// assert_eq!(decode("~").unwrap(), 82);
/// assert_eq!(decode("10").unwrap(), 83);
/// ```
pub fn decode(base83_str: &str) -> Result<u64, BlurhashError> {
    decode_at(base83_str, 0)
}

/// Decode `digits`, reporting error positions relative to `offset`.
///
/// Used by the hash parser so that an invalid character is reported at its
/// index within the whole hash rather than within the field.
pub(crate) fn decode_at(digits: &str, offset: usize) -> Result<u64, BlurhashError> {
    let mut value: u64 = 0;
    for (position, ch) in digits.chars().enumerate() {
        let d = digit(ch).ok_or(BlurhashError::InvalidCharacter {
            character: ch,
            position: offset + position,
        })?;
        value = value
            .checked_mul(83)
            .and_then(|v| v.checked_add(u64::from(d)))
            .ok_or(BlurhashError::ValueOutOfRange {
                value,
                digits: digits.chars().count(),
            })?;
    }
    Ok(value)
}

/// Encode an integer into a base83 string of exactly `length` digits.
///
/// # Errors
///
/// Returns [`BlurhashError::ValueOutOfRange`] if the value is too large to
/// be represented in the given number of digits.
///
/// # Examples
///
/// ```
/// use blurhash_decoder::base83::encode;
/// assert_eq!(encode(0, 4).unwrap(), "0000");
/// assert_eq!(encode(82, 1).unwrap(), "~");
/// ```
pub fn encode(value: u64, length: usize) -> Result<String, BlurhashError> {
    // 83^length is the first value that does NOT fit.
    let fits = u32::try_from(length)
        .ok()
        .and_then(|len| 83u64.checked_pow(len))
        .map_or(true, |limit| value < limit);
    if !fits {
        return Err(BlurhashError::ValueOutOfRange {
            value,
            digits: length,
        });
    }

    let mut result = vec![0u8; length];
    let mut remaining = value;
    for slot in result.iter_mut().rev() {
        *slot = ALPHABET[(remaining % 83) as usize];
        remaining /= 83;
    }
    Ok(result.into_iter().map(char::from).collect())
}
