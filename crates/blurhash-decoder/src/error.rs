//! Error types for BlurHash decoding.

use thiserror::Error;

/// Errors that can occur while validating or decoding a BlurHash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlurhashError {
    /// A character outside the base83 alphabet was encountered.
    #[error("invalid base83 character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Character index within the decoded string.
        position: usize,
    },

    /// The BlurHash is shorter than the 6-character minimum.
    #[error("BlurHash too short: {length} characters (minimum is 6)")]
    TokenTooShort {
        /// The actual length in characters.
        length: usize,
    },

    /// The BlurHash length does not match the grid declared by its size flag.
    #[error("invalid BlurHash length: expected {expected}, got {actual}")]
    LengthMismatch {
        /// The length implied by the size flag.
        expected: usize,
        /// The actual length.
        actual: usize,
    },

    /// The size flag declares a component count outside 1..=9.
    #[error("component count out of range: {component} = {value} (must be 1..=9)")]
    InvalidComponentCount {
        /// Which component axis ("x" or "y").
        component: &'static str,
        /// The invalid value.
        value: u32,
    },

    /// The requested output dimensions are invalid.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// The width value.
        width: u32,
        /// The height value.
        height: u32,
        /// Why the dimensions are invalid.
        reason: &'static str,
    },

    /// A base83 value does not fit the requested number of digits.
    #[error("base83 value {value} does not fit in {digits} digits")]
    ValueOutOfRange {
        /// The value being encoded, or the partial value when decoding overflowed.
        value: u64,
        /// The number of base83 digits available.
        digits: usize,
    },
}
