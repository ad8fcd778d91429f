//! Sliding super-token window.
//!
//! Holds the hashes of the last `N` accepted tokens as `2N` 32-bit words (high half first),
//! oldest token first. Slots that have not been filled yet stay zero. Re-hashing the whole
//! window with [`hash_words2`] gives one hash per n-gram, so the fingerprint becomes sensitive
//! to local token order.

use std::num::NonZeroU32;

use crate::lookup3::hash_words2;
use crate::simhash::Seeds;

/// Fixed-size window over the most recent token hashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperTokenWindow {
    words: Vec<u32>,
}

impl SuperTokenWindow {
    /// A zeroed window of `size` token slots.
    pub fn new(size: NonZeroU32) -> Self {
        Self {
            words: vec![0; 2 * size.get() as usize],
        }
    }

    /// Number of token slots.
    pub fn size(&self) -> usize {
        self.words.len() / 2
    }

    /// Current contents, two words per slot.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Drop the oldest slot and append `token_hash` as the newest.
    pub fn push(&mut self, token_hash: u64) -> &[u32] {
        let n = self.words.len();
        if n > 2 {
            self.words.copy_within(2.., 0);
        }
        self.words[n - 2] = (token_hash >> 32) as u32;
        self.words[n - 1] = token_hash as u32;
        &self.words
    }

    /// Hash of the current window.
    pub fn super_token(&self, seeds: Seeds) -> u64 {
        let (hi, lo) = hash_words2(&self.words, seeds.a, seeds.b);
        (u64::from(hi) << 32) | u64::from(lo)
    }
}
