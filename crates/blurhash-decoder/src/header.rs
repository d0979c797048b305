//! BlurHash structure: size flag, quantised maximum AC value, and validation.
//!
//! A hash is laid out as
//!
//! | chars | field |
//! |-------|-------|
//! | 0 | size flag, `(x - 1) + (y - 1) * 9` |
//! | 1 | quantised maximum AC value |
//! | 2..6 | DC component (packed sRGB) |
//! | 6.. | AC components, 2 chars each |
//!
//! so a hash with `x * y` components is exactly `4 + 2 * x * y` characters long.

use crate::base83;
use crate::error::BlurhashError;

/// Shortest possible hash: size flag, max AC, and a 4-character DC.
pub const MIN_LEN: usize = 6;

/// Largest component count on either axis.
pub const MAX_COMPONENTS: u32 = 9;

/// Parsed fixed-size prefix of a BlurHash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlurhashHeader {
    /// Number of horizontal components (1..=9).
    pub components_x: u32,
    /// Number of vertical components (1..=9).
    pub components_y: u32,
    /// Quantised maximum AC magnitude (0..=82).
    pub quantised_max_ac: u32,
}

impl BlurhashHeader {
    /// Total number of components, DC included.
    pub fn num_components(&self) -> usize {
        (self.components_x * self.components_y) as usize
    }

    /// Hash length implied by the component grid.
    pub fn expected_len(&self) -> usize {
        expected_len(self.components_x, self.components_y)
    }

    /// Dequantised maximum AC magnitude, `(q + 1) / 166`.
    pub fn max_ac(&self) -> f64 {
        (f64::from(self.quantised_max_ac) + 1.0) / 166.0
    }
}

/// Split a size flag into `(components_x, components_y)`.
fn grid_from_flag(flag: u8) -> Result<(u32, u32), BlurhashError> {
    let size_x = u32::from(flag % 9) + 1;
    let size_y = u32::from(flag / 9) + 1;
    // A single base83 digit reaches 82, which would give y = 10.
    if size_y > MAX_COMPONENTS {
        return Err(BlurhashError::InvalidComponentCount {
            component: "y",
            value: size_y,
        });
    }
    Ok((size_x, size_y))
}

/// Hash length for a `components_x * components_y` grid.
fn expected_len(components_x: u32, components_y: u32) -> usize {
    4 + 2 * (components_x * components_y) as usize
}

/// Read the size flag from the first character of `blurhash`.
fn read_grid(blurhash: &str, length: usize) -> Result<(u32, u32), BlurhashError> {
    if length < MIN_LEN {
        return Err(BlurhashError::TokenTooShort { length });
    }
    let first = blurhash
        .chars()
        .next()
        .ok_or(BlurhashError::TokenTooShort { length })?;
    let flag = base83::digit(first).ok_or(BlurhashError::InvalidCharacter {
        character: first,
        position: 0,
    })?;
    grid_from_flag(flag)
}

/// A BlurHash whose length and alphabet have been validated.
///
/// Every character is known to be a base83 digit (and therefore ASCII), so
/// field offsets can be sliced directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blurhash<'a> {
    hash: &'a str,
    header: BlurhashHeader,
}

impl<'a> Blurhash<'a> {
    /// Validate `hash` and parse its header.
    ///
    /// Checks run in order: minimum length, size flag, total length against
    /// the declared grid, then the alphabet of the remaining characters.
    ///
    /// # Errors
    ///
    /// - [`BlurhashError::TokenTooShort`] for fewer than 6 characters.
    /// - [`BlurhashError::InvalidCharacter`] for a character outside the alphabet.
    /// - [`BlurhashError::InvalidComponentCount`] for a size flag above 80.
    /// - [`BlurhashError::LengthMismatch`] when the length disagrees with the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use blurhash_decoder::Blurhash;
    /// let hash = Blurhash::parse("LEHV6nWB2yk8pyo0adR*.7kCMdnj").unwrap();
    /// assert_eq!(hash.header().components_x, 4);
    /// assert_eq!(hash.header().components_y, 3);
    /// ```
    pub fn parse(hash: &'a str) -> Result<Self, BlurhashError> {
        let length = hash.chars().count();
        let (components_x, components_y) = read_grid(hash, length)?;

        let expected = expected_len(components_x, components_y);
        if length != expected {
            return Err(BlurhashError::LengthMismatch {
                expected,
                actual: length,
            });
        }

        if let Some((position, character)) = hash
            .chars()
            .enumerate()
            .find(|&(_, ch)| base83::digit(ch).is_none())
        {
            return Err(BlurhashError::InvalidCharacter {
                character,
                position,
            });
        }

        let quantised_max_ac = base83::decode_at(&hash[1..2], 1)? as u32;
        Ok(Self {
            hash,
            header: BlurhashHeader {
                components_x,
                components_y,
                quantised_max_ac,
            },
        })
    }

    /// The parsed header.
    pub fn header(&self) -> &BlurhashHeader {
        &self.header
    }

    /// The underlying hash string.
    pub fn as_str(&self) -> &'a str {
        self.hash
    }

    /// Decode the base83 field covering `start..end`.
    pub(crate) fn field(&self, start: usize, end: usize) -> Result<u64, BlurhashError> {
        base83::decode_at(&self.hash[start..end], start)
    }
}

/// Extract the number of X and Y components from a BlurHash string.
///
/// Only the size flag is inspected; the rest of the hash is not validated.
///
/// # Errors
///
/// Returns [`BlurhashError::TokenTooShort`] if the hash has fewer than 6
/// characters, [`BlurhashError::InvalidCharacter`] if the size flag is not a
/// base83 digit, and [`BlurhashError::InvalidComponentCount`] if it declares
/// more than 9 rows.
///
/// # Examples
///
/// ```
/// use blurhash_decoder::components;
/// assert_eq!(components("LEHV6nWB2yk8pyo0adR*.7kCMdnj").unwrap(), (4, 3));
/// ```
pub fn components(blurhash: &str) -> Result<(u32, u32), BlurhashError> {
    read_grid(blurhash, blurhash.chars().count())
}

/// Return whether `blurhash` has the length its size flag declares.
///
/// Only the size flag and the total length are checked; payload characters
/// are left to [`Blurhash::parse`] and [`decode`](crate::decode), so a token
/// that passes here can still fail to decode. Never panics and never errors:
/// a short token or an unreadable size flag yields `false`.
///
/// # Examples
///
/// ```
/// use blurhash_decoder::is_valid;
/// assert!(is_valid("LEHV6nWB2yk8pyo0adR*.7kCMdnj"));
/// assert!(!is_valid("LEHV6"));
/// assert!(!is_valid(""));
/// ```
pub fn is_valid(blurhash: &str) -> bool {
    let length = blurhash.chars().count();
    read_grid(blurhash, length).is_ok_and(|(x, y)| length == expected_len(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_HASH: &str = "LEHV6nWB2yk8pyo0adR*.7kCMdnj";

    /// Build a hash of the right length for the grid, filled with `0` digits.
    fn zero_hash(x: u32, y: u32) -> String {
        let flag = base83::encode(u64::from((x - 1) + (y - 1) * 9), 1).unwrap();
        let len = 4 + 2 * (x * y) as usize;
        format!("{flag}{}", "0".repeat(len - 1))
    }

    #[test]
    fn test_components_extraction() {
        // Size flag 'L' = 21 = (4-1) + (3-1)*9
        assert_eq!(components(KNOWN_HASH).unwrap(), (4, 3));
    }

    #[test]
    fn test_components_too_short() {
        assert_eq!(
            components("ABC").unwrap_err(),
            BlurhashError::TokenTooShort { length: 3 }
        );
    }

    #[test]
    fn test_components_ignores_payload() {
        // Wrong length for the grid, but components() only reads the flag.
        assert_eq!(components("L00000").unwrap(), (4, 3));
    }

    #[test]
    fn test_parse_known_hash() {
        let hash = Blurhash::parse(KNOWN_HASH).unwrap();
        let header = hash.header();
        assert_eq!(header.components_x, 4);
        assert_eq!(header.components_y, 3);
        // 'E' = 14
        assert_eq!(header.quantised_max_ac, 14);
        assert!((header.max_ac() - 15.0 / 166.0).abs() < 1e-12);
        assert_eq!(header.expected_len(), KNOWN_HASH.len());
        assert_eq!(hash.as_str(), KNOWN_HASH);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(
            Blurhash::parse("").unwrap_err(),
            BlurhashError::TokenTooShort { length: 0 }
        );
    }

    #[test]
    fn test_parse_five_chars() {
        assert_eq!(
            Blurhash::parse("00000").unwrap_err(),
            BlurhashError::TokenTooShort { length: 5 }
        );
    }

    #[test]
    fn test_parse_invalid_flag_char() {
        assert_eq!(
            Blurhash::parse("!EHV6nWB2yk8pyo0adR*.7kCMdnj").unwrap_err(),
            BlurhashError::InvalidCharacter {
                character: '!',
                position: 0
            }
        );
    }

    #[test]
    fn test_parse_invalid_payload_char() {
        let mut hash = KNOWN_HASH.to_string();
        hash.replace_range(10..11, "!");
        assert_eq!(
            Blurhash::parse(&hash).unwrap_err(),
            BlurhashError::InvalidCharacter {
                character: '!',
                position: 10
            }
        );
    }

    #[test]
    fn test_parse_length_mismatch_4x4() {
        // 'U' = 30 = 3 + 3*9, a 4x4 grid needing 36 characters.
        let hash = format!("U{}", "0".repeat(27));
        assert_eq!(
            Blurhash::parse(&hash).unwrap_err(),
            BlurhashError::LengthMismatch {
                expected: 36,
                actual: 28
            }
        );
    }

    #[test]
    fn test_parse_length_counts_chars_not_bytes() {
        // Six characters, eight bytes; the 'é' is reported, not a slicing panic.
        let err = Blurhash::parse("00é000").unwrap_err();
        assert_eq!(
            err,
            BlurhashError::InvalidCharacter {
                character: 'é',
                position: 2
            }
        );
    }

    #[test]
    fn test_parse_rejects_ten_rows() {
        // '}' = 81 -> x = 1, y = 10
        let hash = format!("}}{}", "0".repeat(23));
        assert_eq!(
            Blurhash::parse(&hash).unwrap_err(),
            BlurhashError::InvalidComponentCount {
                component: "y",
                value: 10
            }
        );
        assert!(!is_valid(&hash));
    }

    #[test]
    fn test_is_valid_every_grid() {
        for x in 1..=9 {
            for y in 1..=9 {
                let hash = zero_hash(x, y);
                assert!(is_valid(&hash), "{x}x{y} should be valid");

                let mut longer = hash.clone();
                longer.push('0');
                assert!(!is_valid(&longer), "{x}x{y} plus one char");

                let shorter = &hash[..hash.len() - 1];
                assert!(!is_valid(shorter), "{x}x{y} minus one char");
            }
        }
    }

    #[test]
    fn test_is_valid_ignores_payload_alphabet() {
        // Size flag '0' declares 1x1, which needs exactly 6 characters.
        assert!(is_valid("00!!!!"));
        assert!(is_valid("00é000"));
        assert_eq!(
            Blurhash::parse("00!!!!").unwrap_err(),
            BlurhashError::InvalidCharacter {
                character: '!',
                position: 2
            }
        );
    }

    #[test]
    fn test_is_valid_never_panics_on_garbage() {
        for input in ["", " ", "~", "!!!!!!", "\u{0}\u{0}\u{0}\u{0}\u{0}\u{0}", "ééééééé"] {
            assert!(!is_valid(input), "{input:?}");
        }
    }
}
