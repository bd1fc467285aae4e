//! Reference lookup strategies.
//!
//! These are the baselines the bitmap index is measured against: a linear
//! scan, a hashed-string set, and a hashed-integer set. They double as test
//! oracles: every strategy must agree with [`CodeSet`](crate::CodeSet) on
//! every possible query.

use std::collections::HashSet;

use crate::{Code, PairIndex};

/// O(n) scan over the configured code list.
pub struct LinearScan(Vec<Code>);

impl LinearScan {
    pub fn build(codes: impl IntoIterator<Item = Code>) -> Self {
        Self(codes.into_iter().collect())
    }

    #[inline]
    pub fn contains(&self, code: Code) -> bool {
        self.0.iter().any(|&c| c == code)
    }
}

/// Amortized O(1) lookup hashing the code's string form.
pub struct HashedStr(HashSet<String>);

impl HashedStr {
    pub fn build(codes: impl IntoIterator<Item = Code>) -> Self {
        Self(codes.into_iter().map(|c| c.to_string()).collect())
    }

    #[inline]
    pub fn contains(&self, code: Code) -> bool {
        self.0.contains(code.as_str())
    }
}

/// Amortized O(1) lookup hashing the code's pair index.
pub struct HashedPair(HashSet<PairIndex>);

impl HashedPair {
    pub fn build(codes: impl IntoIterator<Item = Code>) -> Self {
        Self(codes.into_iter().map(|c| c.pair_index()).collect())
    }

    #[inline]
    pub fn contains(&self, code: Code) -> bool {
        self.0.contains(&code.pair_index())
    }
}
