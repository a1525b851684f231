//! Incremental hashing of ordered key/value sequences using XXH3-128

use crate::types::Hashable;
use xxhash_rust::xxh3::Xxh3;

/// Streaming hash accumulator
///
/// The seed string is the first input fed to a fresh XXH3 state; every
/// subsequent `feed` appends to the stream.
#[derive(Clone)]
pub struct IncrementalHasher {
    state: Xxh3,
}

impl IncrementalHasher {
    /// Start a new hash seeded with `seed`
    pub fn seeded(seed: &str) -> Self {
        let mut state = Xxh3::new();
        state.update(seed.as_bytes());
        Self { state }
    }

    /// Feed the next part of the stream
    pub fn feed(&mut self, part: &str) -> &mut Self {
        self.state.update(part.as_bytes());
        self
    }

    /// Digest of everything fed so far, as 32 lowercase hex characters
    pub fn finalize(&self) -> String {
        hex::encode(self.state.digest128().to_be_bytes())
    }
}

/// Fold an ordered sequence of key/value pairs into one hash string
///
/// The first key seeds the hash and is not fed again. Every value is fed,
/// each one after its own key. An empty sequence yields `""`, which callers
/// treat as "nothing to hash" rather than an error.
pub fn fold_hash<T: Hashable>(sequence: &[T]) -> String {
    let Some(first) = sequence.first() else {
        return String::new();
    };

    let mut hasher = IncrementalHasher::seeded(&first.hash_key());
    hasher.feed(&first.hash_value());

    for item in &sequence[1..] {
        hasher.feed(&item.hash_key());
        hasher.feed(&item.hash_value());
    }

    hasher.finalize()
}
