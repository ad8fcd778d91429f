//! SimHash: 64-bit document fingerprints for near-duplicate detection.
//!
//! SimHash (Charikar, 2002) maps a document's tokens to a fixed-width bitstring such that
//! similar documents have small Hamming distance. Two pipelines are provided:
//!
//! - **fast**: each token hash votes once for every bit it has set; a bit survives if at least
//!   half of the tokens (rounded down) voted for it.
//! - **wide**: tokens pass through a [`TokenPolicy`], the last `N` token hashes are re-hashed as
//!   one super-token, and super-tokens vote `+w`/`-w` per bit.
//!
//! The two pipelines use different finalization rules and are not interchangeable, even for
//! `N == 1`.
//!
//! # Example
//!
//! ```rust
//! use simi::{SimHash, SimHashConfig};
//!
//! let sh = SimHash::new(SimHashConfig::default()).unwrap();
//! let a = sh.fingerprint(b"the quick brown fox jumps over the lazy dog");
//! let b = sh.fingerprint(b"the quick brown fox jumps over the lazy dog again");
//! assert!(a.hamming_distance(&b) < 32);
//! ```

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::histogram::Histogram;
use crate::lookup3::hash_bytes2;
use crate::observe::{NoopObserver, Observer};
use crate::policy::{DefaultPolicy, TokenPolicy};
use crate::tokenize::tokens;
use crate::window::SuperTokenWindow;

/// A pair of 32-bit seeds for the lookup3 mixer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seeds {
    /// Primary seed (`pc`); becomes the high half of the 64-bit result.
    pub a: u32,
    /// Secondary seed (`pb`); becomes the low half of the 64-bit result.
    pub b: u32,
}

impl Seeds {
    /// Seeds for hashing token bytes.
    pub const TOKEN: Seeds = Seeds {
        a: 0xac867c1d,
        b: 0x5434e4c4,
    };

    /// Seeds for hashing super-token windows.
    pub const WINDOW: Seeds = Seeds {
        a: 0x2c759c01,
        b: 0xfef136d7,
    };

    /// Create a seed pair.
    pub const fn new(a: u32, b: u32) -> Self {
        Self { a, b }
    }
}

/// Which pipeline computes the fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Plain per-token hashing with the halved-count threshold.
    #[default]
    Fast,
    /// Super-token hashing over a window of `super_token_size` tokens.
    Wide {
        /// Tokens per super-token; must be at least 1.
        super_token_size: u32,
    },
}

impl Mode {
    /// Map a super-token size to a mode: 1 is [`Mode::Fast`], larger sizes are [`Mode::Wide`].
    pub fn from_super_token_size(size: u32) -> Result<Self> {
        match size {
            0 => Err(Error::InvalidParam("super_token_size must be >= 1")),
            1 => Ok(Mode::Fast),
            n => Ok(Mode::Wide {
                super_token_size: n,
            }),
        }
    }

    fn validate(self) -> Result<()> {
        match self {
            Mode::Wide {
                super_token_size: 0,
            } => Err(Error::InvalidParam("super_token_size must be >= 1")),
            _ => Ok(()),
        }
    }
}

/// Configuration for [`SimHash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimHashConfig {
    /// Pipeline selection.
    pub mode: Mode,
    /// Seeds for per-token hashing.
    pub token_seeds: Seeds,
    /// Seeds for super-token hashing (wide mode only).
    pub window_seeds: Seeds,
}

impl Default for SimHashConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Fast,
            token_seeds: Seeds::TOKEN,
            window_seeds: Seeds::WINDOW,
        }
    }
}

impl SimHashConfig {
    /// Fast mode with the standard seeds.
    pub fn fast() -> Self {
        Self::default()
    }

    /// Wide mode over `super_token_size` tokens with the standard seeds.
    pub fn wide(super_token_size: u32) -> Self {
        Self {
            mode: Mode::Wide { super_token_size },
            ..Default::default()
        }
    }
}

/// A SimHash fingerprint (64-bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SimHashFingerprint(pub u64);

impl SimHashFingerprint {
    /// Hamming distance between two fingerprints (XOR + popcount).
    pub fn hamming_distance(&self, other: &Self) -> u32 {
        hamming_distance(self.0, other.0)
    }

    /// Bits where the two fingerprints differ.
    pub fn xor(&self, other: &Self) -> Self {
        Self(self.0 ^ other.0)
    }
}

impl From<u64> for SimHashFingerprint {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl From<SimHashFingerprint> for u64 {
    fn from(fp: SimHashFingerprint) -> Self {
        fp.0
    }
}

impl fmt::Display for SimHashFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl fmt::LowerHex for SimHashFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl FromStr for SimHashFingerprint {
    type Err = Error;

    /// Parse up to 16 hex digits, with or without a `0x` prefix.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let hex = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if hex.is_empty() || hex.len() > 16 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidFingerprint(s.to_string()));
        }
        u64::from_str_radix(hex, 16)
            .map(Self)
            .map_err(|_| Error::InvalidFingerprint(s.to_string()))
    }
}

/// SimHash generator over byte buffers.
#[derive(Debug, Clone)]
pub struct SimHash {
    config: SimHashConfig,
}

impl SimHash {
    /// Create a generator. Fails if the configured super-token size is 0.
    pub fn new(config: SimHashConfig) -> Result<Self> {
        config.mode.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &SimHashConfig {
        &self.config
    }

    /// Fingerprint a document with the default token policy.
    pub fn fingerprint(&self, data: &[u8]) -> SimHashFingerprint {
        self.fingerprint_with(data, &DefaultPolicy, &mut NoopObserver)
    }

    /// Fingerprint a document with a custom policy and observer.
    ///
    /// The policy is only consulted in wide mode.
    pub fn fingerprint_with<P, O>(
        &self,
        data: &[u8],
        policy: &P,
        observer: &mut O,
    ) -> SimHashFingerprint
    where
        P: TokenPolicy + ?Sized,
        O: Observer + ?Sized,
    {
        let hist = match self.config.mode {
            Mode::Fast => self.accumulate_fast(data, observer),
            Mode::Wide { super_token_size } => {
                // `new` rejects size 0.
                let size = NonZeroU32::new(super_token_size).unwrap_or(NonZeroU32::MIN);
                self.accumulate_wide(data, size, policy, observer)
            }
        };
        let fp = match self.config.mode {
            Mode::Fast => hist.finish_fast(),
            Mode::Wide { .. } => hist.finish_wide(),
        };
        observer.finish(fp, hist.tokens());
        SimHashFingerprint(fp)
    }

    fn accumulate_fast<O>(&self, data: &[u8], observer: &mut O) -> Histogram
    where
        O: Observer + ?Sized,
    {
        let mut hist = Histogram::new();
        for token in tokens(data) {
            let h = hash_token(token, self.config.token_seeds);
            observer.token(token, h);
            hist.count_set_bits(h);
        }
        hist
    }

    fn accumulate_wide<P, O>(
        &self,
        data: &[u8],
        size: NonZeroU32,
        policy: &P,
        observer: &mut O,
    ) -> Histogram
    where
        P: TokenPolicy + ?Sized,
        O: Observer + ?Sized,
    {
        let mut hist = Histogram::new();
        let mut window = SuperTokenWindow::new(size);
        for token in tokens(data) {
            let stemmed = policy.stem(token);
            let h = hash_token(&stemmed, self.config.token_seeds);
            observer.token(&stemmed, h);

            if policy.is_stopword(h) {
                observer.stopword(h);
                continue;
            }
            let weight = policy.weight(h);

            window.push(h);
            let st = window.super_token(self.config.window_seeds);
            observer.super_token(window.words(), st);
            hist.vote(st, weight);
        }
        hist
    }
}

/// Hash one token's bytes to 64 bits: high half is lookup3's `c`, low half its `b`.
pub fn hash_token(token: &[u8], seeds: Seeds) -> u64 {
    let (hi, lo) = hash_bytes2(token, seeds.a, seeds.b);
    (u64::from(hi) << 32) | u64::from(lo)
}

/// Fingerprint `data` in `mode` with the standard seeds and the default policy.
///
/// Fails only for `Mode::Wide { super_token_size: 0 }`, before any hashing.
pub fn fingerprint(data: &[u8], mode: Mode) -> Result<u64> {
    let sh = SimHash::new(SimHashConfig {
        mode,
        ..Default::default()
    })?;
    Ok(sh.fingerprint(data).0)
}

/// Number of differing bits between two fingerprints, in `0..=64`.
#[inline]
pub fn hamming_distance(a: u64, b: u64) -> u32 {
    (a ^ b).count_ones()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

    #[test]
    fn token_hash_golden() {
        assert_eq!(hash_token(b"hello", Seeds::TOKEN), 0x05358ff3f8851ed1);
        assert_eq!(hash_token(b"a", Seeds::TOKEN), 0x03ad04467bdf4a1d);
    }

    #[test]
    fn fast_golden() {
        assert_eq!(fingerprint(FOX, Mode::Fast).unwrap(), 0xfff4fb2ffd73ff79);
        assert_eq!(fingerprint(b"hello world", Mode::Fast).unwrap(), 0x57ffdffbfba7dedd);
    }

    #[test]
    fn wide_golden() {
        let wide = |n| fingerprint(FOX, Mode::Wide { super_token_size: n }).unwrap();
        assert_eq!(wide(1), 0xd03186761bfe26d9);
        assert_eq!(wide(3), 0x398dcf00984cd07b);
    }

    #[test]
    fn empty_document_is_all_ones() {
        assert_eq!(fingerprint(b"", Mode::Fast).unwrap(), 0xFFFF_FFFF_FFFF_FFFF);
        assert_eq!(fingerprint(b"   \n\t ", Mode::Fast).unwrap(), 0xFFFF_FFFF_FFFF_FFFF);
        assert_eq!(
            fingerprint(b"", Mode::Wide { super_token_size: 2 }).unwrap(),
            0xFFFF_FFFF_FFFF_FFFF
        );
    }

    #[test]
    fn single_token_fast_is_all_ones() {
        // One token: threshold 0, every counter passes.
        assert_eq!(fingerprint(b"hello", Mode::Fast).unwrap(), u64::MAX);
        assert_eq!(
            fingerprint(b"hello", Mode::Wide { super_token_size: 1 }).unwrap(),
            0x2be7e8605cacf523
        );
    }

    #[test]
    fn zero_super_token_size_is_rejected() {
        assert!(matches!(
            fingerprint(FOX, Mode::Wide { super_token_size: 0 }),
            Err(Error::InvalidParam(_))
        ));
        assert!(SimHash::new(SimHashConfig::wide(0)).is_err());
        assert!(Mode::from_super_token_size(0).is_err());
    }

    #[test]
    fn mode_from_size() {
        assert_eq!(Mode::from_super_token_size(1).unwrap(), Mode::Fast);
        assert_eq!(
            Mode::from_super_token_size(4).unwrap(),
            Mode::Wide { super_token_size: 4 }
        );
    }

    #[test]
    fn fast_ignores_policy() {
        struct DropAll;
        impl TokenPolicy for DropAll {
            fn is_stopword(&self, _: u64) -> bool {
                true
            }
        }
        let sh = SimHash::new(SimHashConfig::fast()).unwrap();
        assert_eq!(
            sh.fingerprint_with(FOX, &DropAll, &mut NoopObserver),
            sh.fingerprint(FOX)
        );
    }

    #[test]
    fn custom_seeds_change_fingerprint() {
        let std = SimHash::new(SimHashConfig::fast()).unwrap();
        let other = SimHash::new(SimHashConfig {
            token_seeds: Seeds::new(1, 2),
            ..SimHashConfig::fast()
        })
        .unwrap();
        assert_ne!(std.fingerprint(FOX), other.fingerprint(FOX));
    }

    #[test]
    fn fingerprint_display_and_parse() {
        let fp = SimHashFingerprint(0x00f4fb2ffd73ff79);
        assert_eq!(fp.to_string(), "00f4fb2ffd73ff79");
        assert_eq!("00f4fb2ffd73ff79".parse::<SimHashFingerprint>().unwrap(), fp);
        assert_eq!("0xf4fb2ffd73ff79".parse::<SimHashFingerprint>().unwrap(), fp);
        assert_eq!(format!("{fp:x}"), "f4fb2ffd73ff79");
        assert!("".parse::<SimHashFingerprint>().is_err());
        assert!("+1".parse::<SimHashFingerprint>().is_err());
        assert!("00000000000000000".parse::<SimHashFingerprint>().is_err());
        assert!("xyz".parse::<SimHashFingerprint>().is_err());
    }

    #[test]
    fn hamming_basics() {
        assert_eq!(hamming_distance(0, 0), 0);
        assert_eq!(hamming_distance(0, u64::MAX), 64);
        assert_eq!(hamming_distance(0b1010, 0b0110), 2);
        let a = SimHashFingerprint(0xff);
        let b = SimHashFingerprint(0x0f);
        assert_eq!(a.hamming_distance(&b), 4);
        assert_eq!(a.xor(&b), SimHashFingerprint(0xf0));
    }
}
