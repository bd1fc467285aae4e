use bytes::Bytes;

use crate::{
    Code, ConfigErr, ParseCodeErr,
    bitmap::{BITMAP_EMPTY, Bitmap, BitmapExt, BitmapMutExt},
    set_ref::CodeSetRef,
};

/// A static membership index for two-letter lowercase codes.
///
/// `CodeSet` is built once from a fixed list of codes and is immutable
/// afterwards. Each code is encoded into its Cantor pair index and stored as
/// a single bit in a fixed-size bitmap, so a lookup is one subtraction, one
/// multiply, one shift, and one byte fetch, independent of how many codes
/// are configured. The built set is safe to share across threads; queries
/// never mutate state.
///
/// For zero-copy querying of the raw bitmap bytes, see [`CodeSetRef`].
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// use alpha2set::CodeSet;
///
/// let set = CodeSet::from_csv("ad,fr,zw").unwrap();
///
/// assert_eq!(set.contains_str("fr"), Ok(true));
/// assert_eq!(set.contains_str("zz"), Ok(false));
/// assert_eq!(set.cardinality(), 3);
/// ```
///
/// Building from parsed codes:
///
/// ```
/// use alpha2set::{Code, CodeSet};
///
/// let codes: Vec<Code> = ["is", "no", "se"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let set = CodeSet::build(codes);
///
/// assert!(set.contains("no".parse().unwrap()));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct CodeSet(Bitmap);

impl CodeSet {
    /// An empty CodeSet, suitable for usage in a const context.
    pub const EMPTY: Self = CodeSet(BITMAP_EMPTY);

    /// Builds an index from an ordered sequence of codes.
    ///
    /// Duplicate codes are idempotent: the encoding is collision-free, so a
    /// duplicate sets the same bit twice. Building twice from the same list
    /// yields byte-identical bitmaps.
    pub fn build(codes: impl IntoIterator<Item = Code>) -> Self {
        let mut bitmap = BITMAP_EMPTY;
        for code in codes {
            bitmap.insert(code.pair_index());
        }
        Self(bitmap)
    }

    /// Builds an index from a comma-separated code list, the configuration
    /// form used for embedded lists.
    ///
    /// Fails with [`ConfigErr::Empty`] on an empty string and
    /// [`ConfigErr::Malformed`] on any entry that is not exactly two ASCII
    /// lowercase letters. Entries are not trimmed or case-normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha2set::{CodeSet, ConfigErr};
    ///
    /// let set = CodeSet::from_csv("ad,ae,af").unwrap();
    /// assert_eq!(set.cardinality(), 3);
    ///
    /// assert_eq!(CodeSet::from_csv(""), Err(ConfigErr::Empty));
    /// assert!(matches!(
    ///     CodeSet::from_csv("ad,USA,af"),
    ///     Err(ConfigErr::Malformed { index: 1, .. })
    /// ));
    /// ```
    pub fn from_csv(list: &str) -> Result<Self, ConfigErr> {
        if list.is_empty() {
            return Err(ConfigErr::Empty);
        }
        let mut bitmap = BITMAP_EMPTY;
        for (index, entry) in list.split(',').enumerate() {
            let code: Code = entry.parse().map_err(|source| ConfigErr::Malformed {
                code: entry.to_owned(),
                index,
                source,
            })?;
            bitmap.insert(code.pair_index());
        }
        Ok(Self(bitmap))
    }

    /// Returns `true` if this set contains the given code.
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha2set::{Code, CodeSet};
    ///
    /// let set = CodeSet::from_csv("de,fr").unwrap();
    /// let de: Code = "de".parse().unwrap();
    /// let it: Code = "it".parse().unwrap();
    ///
    /// assert!(set.contains(de));
    /// assert!(!set.contains(it));
    /// ```
    #[inline]
    pub fn contains(&self, code: Code) -> bool {
        self.0.contains(code.pair_index())
    }

    /// Validates `s` as a two-letter lowercase code and tests membership.
    ///
    /// Returns `Ok(false)` for well-formed codes that are not in the set.
    /// Malformed input is reported as an error, never silently treated as a
    /// miss.
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha2set::{CodeSet, ParseCodeErr};
    ///
    /// let set = CodeSet::from_csv("ad,zw").unwrap();
    ///
    /// assert_eq!(set.contains_str("ad"), Ok(true));
    /// assert_eq!(set.contains_str("zz"), Ok(false));
    /// assert_eq!(set.contains_str("a1"), Err(ParseCodeErr::InvalidCharacter('1')));
    /// assert_eq!(set.contains_str("usa"), Err(ParseCodeErr::InvalidLength(3)));
    /// ```
    #[inline]
    pub fn contains_str(&self, s: &str) -> Result<bool, ParseCodeErr> {
        Ok(self.contains(s.parse()?))
    }

    /// Returns the number of codes in this set.
    #[inline]
    pub fn cardinality(&self) -> usize {
        self.0.cardinality()
    }

    /// Returns `true` if this set contains no codes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.0.has_bits_set()
    }

    /// Returns an iterator over all codes in the set, in pair index order.
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha2set::CodeSet;
    ///
    /// let set = CodeSet::from_csv("ab,ba").unwrap();
    /// let codes: Vec<String> = set.iter().map(|c| c.to_string()).collect();
    ///
    /// // same diagonal; "ba" encodes below "ab"
    /// assert_eq!(codes, ["ba", "ab"]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = Code> + '_ {
        self.0.indices().filter_map(Code::from_pair_index)
    }

    /// The raw bitmap backing this set.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Copies the bitmap into a freshly allocated [`Bytes`].
    pub fn encode_to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(&self.0)
    }

    /// Encodes this set into a [`CodeSetRef`] for zero-copy querying.
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha2set::CodeSet;
    ///
    /// let set = CodeSet::from_csv("jp,kr").unwrap();
    /// let set_ref = set.encode_to_ref();
    ///
    /// assert_eq!(set_ref.cardinality(), 2);
    /// assert_eq!(set_ref.contains_str("jp"), Ok(true));
    /// ```
    pub fn encode_to_ref(&self) -> CodeSetRef<Bytes> {
        CodeSetRef::new(self.encode_to_bytes())
    }
}

impl FromIterator<Code> for CodeSet {
    fn from_iter<I: IntoIterator<Item = Code>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl std::fmt::Debug for CodeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: Vec<_> = self.iter().take(10).collect();
        f.debug_struct("CodeSet")
            .field("cardinality", &self.cardinality())
            .field("prefix", &prefix)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use itertools::Itertools;
    use proptest::{collection::vec, proptest};

    use super::*;
    use crate::{
        baseline::{HashedPair, HashedStr, LinearScan},
        testutil::{all_codes, mkset},
    };

    #[test]
    fn test_sanity() {
        let set = mkset(&["ad", "fr", "zw"]);

        assert!(set.contains("ad".parse().unwrap()));
        assert!(set.contains("zw".parse().unwrap()));
        assert!(!set.contains("zz".parse().unwrap()));
        assert_eq!(set.cardinality(), 3);
        assert!(!set.is_empty());
        assert!(CodeSet::EMPTY.is_empty());
    }

    #[test]
    fn test_contains_str_scenarios() {
        let set = CodeSet::iso3166();

        assert_eq!(set.contains_str("ad"), Ok(true));
        assert_eq!(set.contains_str("zw"), Ok(true));
        assert_eq!(set.contains_str("zz"), Ok(false));
        assert_eq!(
            set.contains_str("a1"),
            Err(ParseCodeErr::InvalidCharacter('1'))
        );
        assert_eq!(set.contains_str("usa"), Err(ParseCodeErr::InvalidLength(3)));
    }

    #[test]
    fn test_from_csv_errors() {
        assert_eq!(CodeSet::from_csv(""), Err(ConfigErr::Empty));

        assert_matches!(
            CodeSet::from_csv("ad,,zw"),
            Err(ConfigErr::Malformed {
                index: 1,
                source: ParseCodeErr::InvalidLength(0),
                ..
            })
        );
        assert_matches!(
            CodeSet::from_csv("ad, fr"),
            Err(ConfigErr::Malformed {
                index: 1,
                source: ParseCodeErr::InvalidCharacter(' '),
                ..
            })
        );
    }

    #[test]
    fn test_build_idempotent() {
        let codes = ["mx", "us", "ca"].map(|s| s.parse::<Code>().unwrap());

        let a = CodeSet::build(codes);
        let b = CodeSet::build(codes);
        assert_eq!(a, b);
        assert_eq!(a.as_bytes(), b.as_bytes());

        // duplicates set the same bit twice
        let dup = CodeSet::build(codes.iter().copied().chain(codes));
        assert_eq!(dup.as_bytes(), a.as_bytes());
        assert_eq!(dup.cardinality(), 3);
    }

    #[test]
    fn test_iter_roundtrip() {
        let set = CodeSet::iso3166();
        let codes = set.iter().collect_vec();

        assert_eq!(codes.len(), set.cardinality());
        assert!(codes.iter().all(|&c| set.contains(c)));
        assert!(
            codes
                .iter()
                .tuple_windows()
                .all(|(a, b)| a.pair_index() < b.pair_index())
        );
    }

    #[test]
    fn test_oracle_equivalence() {
        let set = CodeSet::iso3166();
        let members = set.iter().collect_vec();

        let linear = LinearScan::build(members.clone());
        let hashed_str = HashedStr::build(members.clone());
        let hashed_pair = HashedPair::build(members);

        // every two-letter combination over the full alphabet
        for code in all_codes() {
            let expected = linear.contains(code);
            assert_eq!(set.contains(code), expected, "code {code}");
            assert_eq!(hashed_str.contains(code), expected, "code {code}");
            assert_eq!(hashed_pair.contains(code), expected, "code {code}");
        }
    }

    proptest! {
        #[test]
        fn test_build_matches_linear_scan_proptest(
            indices in vec(0..676usize, 0..64),
            probe in 0..676usize,
        ) {
            let universe = all_codes().collect_vec();
            let codes = indices.iter().map(|&i| universe[i]).collect_vec();

            let set = CodeSet::build(codes.iter().copied());
            let oracle = LinearScan::build(codes);

            let probe = universe[probe];
            assert_eq!(set.contains(probe), oracle.contains(probe));
            assert_eq!(set.cardinality(), set.iter().count());
        }
    }
}
