use std::{fmt, str::FromStr};

use crate::{
    ParseCodeErr,
    pair::{ALPHABET, PairIndex, pair, unpair},
};

/// A validated two-letter lowercase code.
///
/// Both characters are guaranteed to be ASCII `a..=z`, so encoding can run
/// unchecked arithmetic without ever indexing out of bounds. Construct one
/// by parsing:
///
/// ```
/// use alpha2set::Code;
///
/// let code: Code = "fr".parse().unwrap();
/// assert_eq!(code.to_string(), "fr");
///
/// assert!("usa".parse::<Code>().is_err());
/// assert!("F1".parse::<Code>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code([u8; 2]);

impl Code {
    /// Returns this code's Cantor pair index.
    ///
    /// The mapping is collision-free: distinct codes always produce
    /// distinct indices.
    ///
    /// ```
    /// use alpha2set::Code;
    ///
    /// let ad: Code = "ad".parse().unwrap();
    /// assert_eq!(ad.pair_index(), 9);
    /// ```
    #[inline]
    pub fn pair_index(self) -> PairIndex {
        pair(self.0[0] - b'a', self.0[1] - b'a')
    }

    /// Decodes a pair index back into its code.
    ///
    /// Returns `None` when the index does not correspond to any two-letter
    /// code; the pairing is injective but not onto, so the index range
    /// contains holes.
    ///
    /// ```
    /// use alpha2set::Code;
    ///
    /// let code: Code = "zw".parse().unwrap();
    /// assert_eq!(Code::from_pair_index(code.pair_index()), Some(code));
    /// assert_eq!(Code::from_pair_index(1275), None);
    /// ```
    pub fn from_pair_index(index: PairIndex) -> Option<Self> {
        let (k1, k2) = unpair(index);
        (k1 < ALPHABET && k2 < ALPHABET).then(|| Self([k1 + b'a', k2 + b'a']))
    }

    /// The code as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).expect("code is ASCII")
    }
}

impl FromStr for Code {
    type Err = ParseCodeErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(c1), Some(c2), None) => {
                for c in [c1, c2] {
                    if !c.is_ascii_lowercase() {
                        return Err(ParseCodeErr::InvalidCharacter(c));
                    }
                }
                Ok(Self([c1 as u8, c2 as u8]))
            }
            _ => Err(ParseCodeErr::InvalidLength(s.chars().count())),
        }
    }
}

impl TryFrom<&str> for Code {
    type Error = ParseCodeErr;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code({:?})", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::MAX_PAIR_INDEX;

    #[test]
    fn test_parse() {
        let code: Code = "ad".parse().unwrap();
        assert_eq!(code.as_str(), "ad");
        assert_eq!(format!("{code:?}"), "Code(\"ad\")");
    }

    #[test]
    fn test_parse_invalid_length() {
        assert_matches!("".parse::<Code>(), Err(ParseCodeErr::InvalidLength(0)));
        assert_matches!("a".parse::<Code>(), Err(ParseCodeErr::InvalidLength(1)));
        assert_matches!("usa".parse::<Code>(), Err(ParseCodeErr::InvalidLength(3)));
    }

    #[test]
    fn test_parse_invalid_character() {
        assert_matches!(
            "a1".parse::<Code>(),
            Err(ParseCodeErr::InvalidCharacter('1'))
        );
        // uppercase is rejected, not normalized
        assert_matches!(
            "AD".parse::<Code>(),
            Err(ParseCodeErr::InvalidCharacter('A'))
        );
        assert_matches!(
            "aé".parse::<Code>(),
            Err(ParseCodeErr::InvalidCharacter('é'))
        );
    }

    #[test]
    fn test_pair_index_roundtrip() {
        for index in 0..=MAX_PAIR_INDEX {
            if let Some(code) = Code::from_pair_index(index) {
                assert_eq!(code.pair_index(), index);
            }
        }
    }
}
