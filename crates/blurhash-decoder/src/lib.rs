//! # blurhash-decoder
//!
//! Fast BlurHash decoding in pure Rust.
//!
//! [BlurHash](https://blurha.sh/) is a compact representation of a placeholder
//! for an image. A short base83 string stores the average colour and a few
//! low-frequency cosine components; decoding evaluates them at every pixel of
//! the requested output size to paint a blurred preview.
//!
//! ## Quick Start
//!
//! ```
//! use blurhash_decoder::{decode, is_valid};
//!
//! let hash = "LEHV6nWB2yk8pyo0adR*.7kCMdnj";
//! assert!(is_valid(hash));
//!
//! // BlurHash string -> RGBA pixels
//! let pixels = decode(hash, 32, 32, 1.0).unwrap();
//! assert_eq!(pixels.len(), 32 * 32 * 4);
//! ```
//!
//! ## Features
//!
//! - `parallel`: synthesise rows on the rayon thread pool for large outputs.
//!   The output is byte-identical to the sequential path.

pub mod base83;
pub mod coefficients;
pub mod color;
pub mod error;
pub mod header;
pub mod synth;

mod decode_impl;

// Re-export primary functions at crate root.
pub use coefficients::average_color;
pub use color::{linear_to_srgb, sign_pow, srgb_to_linear};
pub use decode_impl::{decode, decode_with, DecodeOptions, DEFAULT_PUNCH};
pub use error::BlurhashError;
pub use header::{components, is_valid, Blurhash, BlurhashHeader};
pub use synth::{synthesize, PixelFormat};
