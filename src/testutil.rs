use itertools::iproduct;
use rand::{SeedableRng, seq::index};

use crate::{Code, CodeSet};

/// Build a [`CodeSet`] from string literals, panicking on malformed input.
pub fn mkset(codes: &[&str]) -> CodeSet {
    CodeSet::build(codes.iter().map(|s| s.parse().expect("valid code")))
}

/// All 676 two-letter lowercase codes in alphabetical order.
pub fn all_codes() -> impl Iterator<Item = Code> {
    iproduct!(b'a'..=b'z', b'a'..=b'z').map(|(c1, c2)| {
        let s = [c1, c2];
        std::str::from_utf8(&s)
            .expect("ascii")
            .parse()
            .expect("valid code")
    })
}

/// Deterministic code sampler seeded the same way across runs.
pub struct CodeGen {
    rng: rand::rngs::StdRng,
}

impl CodeGen {
    pub fn new(seed: u64) -> Self {
        let rng = rand::rngs::StdRng::seed_from_u64(seed);
        Self { rng }
    }

    /// Sample `len` distinct codes from the full 676-code universe.
    pub fn distinct(&mut self, len: usize) -> Vec<Code> {
        let universe: Vec<Code> = all_codes().collect();
        index::sample(&mut self.rng, universe.len(), len)
            .into_iter()
            .map(|i| universe[i])
            .collect()
    }
}
