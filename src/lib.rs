//! Alpha2set is a minimal static membership index for two-letter lowercase codes (e.g. ISO-3166 alpha-2 country codes), trading a few bytes of memory for guaranteed-constant, branch-free lookups.
//!
//! ## Key Features:
//!
//! - **Perfect Encoding**: every code is mapped to a unique small integer via the Cantor pairing function over the characters' `0..26` ordinals. The encoding is collision-free over its domain, so membership is a single bit test with no hashing and no probing.
//!
//! - **Zero-copy Access**: the index is a fixed 163-byte bitmap. The [`CodeSetRef`] type queries the raw bitmap bytes directly from any type implementing `AsRef<[u8]>` without copying them into an owned structure.
//!
//! - **Validated Inputs**: raw strings are checked for length and character class before any arithmetic; malformed input surfaces as a typed error instead of a wrong answer.

use thiserror::Error;

mod bitmap;
mod code;
mod iso3166;
mod pair;
mod set;
mod set_ref;

#[cfg(any(test, feature = "testutil"))]
pub mod baseline;
#[cfg(any(test, feature = "testutil"))]
pub mod testutil;

pub use bitmap::BITMAP_SIZE;
pub use code::Code;
pub use iso3166::ISO_3166_ALPHA2;
pub use pair::{MAX_PAIR_INDEX, PairIndex};
pub use set::CodeSet;
pub use set_ref::CodeSetRef;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseCodeErr {
    #[error("expected exactly 2 characters, got {0}")]
    InvalidLength(usize),

    #[error("expected ASCII lowercase letters, got {0:?}")]
    InvalidCharacter(char),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigErr {
    #[error("code list is empty")]
    Empty,

    #[error("malformed code {code:?} at entry {index}")]
    Malformed {
        code: String,
        index: usize,
        #[source]
        source: ParseCodeErr,
    },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErr {
    #[error("expected a {BITMAP_SIZE} byte bitmap, got {0} bytes")]
    InvalidLength(usize),
}
