use std::fmt::Debug;

use bytes::Bytes;

use crate::{
    Code, CodeSet, DecodeErr, ParseCodeErr,
    bitmap::{BITMAP_SIZE, Bitmap, BitmapExt},
};

/// A zero-copy membership view over raw bitmap bytes.
///
/// `CodeSetRef` wraps any byte container implementing `AsRef<[u8]>` and
/// answers queries directly against it without deserializing or copying.
/// The only validation is structural: the container must hold exactly
/// [`BITMAP_SIZE`](crate::BITMAP_SIZE) bytes.
///
/// # Examples
///
/// ```
/// use alpha2set::{CodeSet, CodeSetRef};
///
/// let set = CodeSet::from_csv("nl,be,lu").unwrap();
/// let bytes = set.encode_to_bytes();
///
/// let set_ref = CodeSetRef::from_bytes(bytes).unwrap();
/// assert_eq!(set_ref.contains_str("be"), Ok(true));
/// assert_eq!(set_ref.contains_str("fr"), Ok(false));
/// ```
#[derive(Clone)]
pub struct CodeSetRef<T> {
    data: T,
}

impl<T> CodeSetRef<T> {
    #[inline]
    pub fn inner(&self) -> &T {
        &self.data
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.data
    }
}

impl CodeSetRef<Bytes> {
    #[inline]
    pub fn encode_to_bytes(&self) -> Bytes {
        self.data.clone()
    }
}

impl<T: AsRef<[u8]>> CodeSetRef<T> {
    /// Wraps `data` as a membership view.
    ///
    /// Fails with [`DecodeErr::InvalidLength`] unless `data` is exactly the
    /// size of a bitmap.
    pub fn from_bytes(data: T) -> Result<Self, DecodeErr> {
        let len = data.as_ref().len();
        if len != BITMAP_SIZE {
            return Err(DecodeErr::InvalidLength(len));
        }
        Ok(Self { data })
    }

    /// Caller guarantees `data` is exactly `BITMAP_SIZE` bytes.
    #[inline]
    pub(crate) fn new(data: T) -> Self {
        debug_assert_eq!(data.as_ref().len(), BITMAP_SIZE);
        Self { data }
    }

    #[inline]
    fn load_unchecked(&self) -> &Bitmap {
        self.data
            .as_ref()
            .try_into()
            .expect("bitmap length was validated")
    }

    /// Returns `true` if the underlying bitmap contains the given code.
    #[inline]
    pub fn contains(&self, code: Code) -> bool {
        self.load_unchecked().contains(code.pair_index())
    }

    /// Validates `s` and tests membership; see [`CodeSet::contains_str`].
    #[inline]
    pub fn contains_str(&self, s: &str) -> Result<bool, ParseCodeErr> {
        Ok(self.contains(s.parse()?))
    }

    /// Returns the number of codes in the underlying bitmap.
    #[inline]
    pub fn cardinality(&self) -> usize {
        self.load_unchecked().cardinality()
    }

    /// Returns `true` if no bits are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.load_unchecked().has_bits_set()
    }

    /// Returns an iterator over all codes, in pair index order.
    pub fn iter(&self) -> impl Iterator<Item = Code> + '_ {
        self.load_unchecked().indices().filter_map(Code::from_pair_index)
    }

    /// Copies the bitmap into an owned [`CodeSet`].
    pub fn copy_to_owned(&self) -> CodeSet {
        CodeSet::build(self.iter())
    }
}

impl<T: AsRef<[u8]>> Debug for CodeSetRef<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: Vec<_> = self.iter().take(10).collect();
        f.debug_struct("CodeSetRef")
            .field("cardinality", &self.cardinality())
            .field("prefix", &prefix)
            .finish()
    }
}

impl<T: AsRef<[u8]>> PartialEq<CodeSet> for CodeSetRef<T> {
    #[inline]
    fn eq(&self, other: &CodeSet) -> bool {
        self.data.as_ref() == other.as_bytes()
    }
}

impl<T: AsRef<[u8]>> PartialEq<CodeSetRef<T>> for CodeSet {
    #[inline]
    fn eq(&self, other: &CodeSetRef<T>) -> bool {
        other == self
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use itertools::assert_equal;

    use super::*;
    use crate::testutil::all_codes;

    #[test]
    fn test_from_bytes_length() {
        assert_matches!(
            CodeSetRef::from_bytes([0u8; 44]),
            Err(DecodeErr::InvalidLength(44))
        );
        assert_matches!(
            CodeSetRef::from_bytes(Bytes::new()),
            Err(DecodeErr::InvalidLength(0))
        );

        let empty = CodeSetRef::from_bytes([0u8; BITMAP_SIZE]).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.cardinality(), 0);
    }

    #[test]
    fn test_ref_matches_owned() {
        let set = CodeSet::iso3166();
        let set_ref = set.encode_to_ref();

        assert_eq!(set_ref, set);
        assert_eq!(set_ref.cardinality(), set.cardinality());
        for code in all_codes() {
            assert_eq!(set_ref.contains(code), set.contains(code), "code {code}");
        }
        assert_equal(set_ref.iter(), set.iter());
        assert_eq!(set_ref.copy_to_owned(), set);
    }

    #[test]
    fn test_borrowed_backing() {
        let set = CodeSet::from_csv("ad,zw").unwrap();
        // query somebody else's bytes without copying them
        let set_ref = CodeSetRef::from_bytes(set.as_bytes()).unwrap();

        assert_eq!(set_ref.contains_str("ad"), Ok(true));
        assert_eq!(set_ref.contains_str("zz"), Ok(false));
        assert_eq!(set, set_ref);
    }
}
