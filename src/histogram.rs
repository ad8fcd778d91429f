//! Per-bit vote counters and the two finalization rules.
//!
//! Counter `i` tracks bit `i` of the fingerprint. Fast mode only counts set bits and compares
//! against half the token count; wide mode votes `+w`/`-w` and compares against zero. The two
//! rules give different fingerprints for the same tokens and both are kept as they are, since
//! stored fingerprints are only comparable when produced by the same rule.

/// Fingerprint width in bits.
pub const BITS: usize = 64;

/// 64 signed counters plus the number of tokens that voted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counters: [i64; BITS],
    tokens: usize,
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Histogram {
    /// All counters zero.
    pub fn new() -> Self {
        Self {
            counters: [0; BITS],
            tokens: 0,
        }
    }

    /// Fast-mode vote: add 1 to each counter whose bit is set in `hash`.
    #[inline]
    pub fn count_set_bits(&mut self, hash: u64) {
        for (i, c) in self.counters.iter_mut().enumerate() {
            *c += ((hash >> i) & 1) as i64;
        }
        self.tokens += 1;
    }

    /// Wide-mode vote: `+weight` where `hash` has the bit set, `-weight` elsewhere.
    #[inline]
    pub fn vote(&mut self, hash: u64, weight: i32) {
        let w = i64::from(weight);
        for (i, c) in self.counters.iter_mut().enumerate() {
            if (hash >> i) & 1 == 1 {
                *c += w;
            } else {
                *c -= w;
            }
        }
        self.tokens += 1;
    }

    /// Counter for bit `bit` (0..64).
    pub fn counter(&self, bit: usize) -> i64 {
        self.counters[bit]
    }

    /// Number of votes cast.
    pub fn tokens(&self) -> usize {
        self.tokens
    }

    /// Fast-mode fingerprint: bit `i` is set iff `counter[i] - tokens / 2 >= 0`.
    ///
    /// The threshold uses integer division, so with an odd token count a bit set in
    /// exactly half (rounded down) of the tokens is still set.
    pub fn finish_fast(&self) -> u64 {
        let threshold = (self.tokens / 2) as i64;
        self.pack(|c| c - threshold >= 0)
    }

    /// Wide-mode fingerprint: bit `i` is set iff `counter[i] >= 0`. Ties go to 1.
    pub fn finish_wide(&self) -> u64 {
        self.pack(|c| c >= 0)
    }

    fn pack(&self, set: impl Fn(i64) -> bool) -> u64 {
        let mut out = 0u64;
        for (i, &c) in self.counters.iter().enumerate() {
            if set(c) {
                out |= 1u64 << i;
            }
        }
        out
    }
}
