//! Cantor pairing over two character ordinals.
//!
//! `pair` is a bijection from `ℕ×ℕ` onto `ℕ`; restricted to ordinals in
//! `0..ALPHABET` it stays injective, which is what makes direct bit
//! addressing possible: at most one code ever maps to a given index.

/// The encoded form of a two-letter code, in `0..=MAX_PAIR_INDEX`.
pub type PairIndex = u16;

/// Number of symbols in the code alphabet (`a..=z`).
pub(crate) const ALPHABET: u8 = 26;

/// The largest value `pair` produces over the valid domain.
///
/// Computed from the pairing formula rather than stated as a literal.
pub const MAX_PAIR_INDEX: PairIndex = pair(ALPHABET - 1, ALPHABET - 1);

static_assertions::const_assert_eq!(MAX_PAIR_INDEX, 1300);

/// Encode an ordinal pair into its Cantor pair index.
///
/// Both ordinals must be in `0..ALPHABET`.
#[inline]
pub(crate) const fn pair(k1: u8, k2: u8) -> PairIndex {
    debug_assert!(k1 < ALPHABET && k2 < ALPHABET);
    let s = k1 as u16 + k2 as u16;
    s * (s + 1) / 2 + k2 as u16
}

/// Invert `pair`, recovering the ordinal pair.
///
/// Total over `u16`, but only indices in the image of the valid domain
/// decode to ordinals below `ALPHABET`; callers filter the rest.
#[inline]
pub(crate) const fn unpair(index: PairIndex) -> (u8, u8) {
    let z = index as u32;
    let w = ((8 * z + 1).isqrt() - 1) / 2;
    let t = (w * w + w) / 2;
    let k2 = z - t;
    let k1 = w - k2;
    (k1 as u8, k2 as u8)
}
