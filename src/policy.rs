//! Token policy hooks for the super-token pipeline.
//!
//! Stemming, stopword filtering and token weighting depend on the language of the input, so the
//! crate does not solve them. [`TokenPolicy`] is the seam where a caller plugs them in;
//! [`DefaultPolicy`] leaves every token untouched.
//!
//! Hooks run per token in a fixed order: stem the bytes, hash them, drop the token if its hash is
//! a stopword, then weigh it.

use std::borrow::Cow;

/// Per-token policy used by wide (super-token) hashing.
pub trait TokenPolicy {
    /// Normalize a token before it is hashed.
    ///
    /// May return a sub-slice of `token` or new bytes.
    fn stem<'a>(&self, token: &'a [u8]) -> Cow<'a, [u8]> {
        Cow::Borrowed(token)
    }

    /// True if the token with this hash should not contribute to the fingerprint.
    ///
    /// A rejected token neither votes nor enters the super-token window.
    fn is_stopword(&self, _token_hash: u64) -> bool {
        false
    }

    /// Vote multiplier for the token with this hash.
    fn weight(&self, _token_hash: u64) -> i32 {
        1
    }
}

/// Identity policy: no stemming, no stopwords, weight 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultPolicy;

impl TokenPolicy for DefaultPolicy {}

impl<P: TokenPolicy + ?Sized> TokenPolicy for &P {
    fn stem<'a>(&self, token: &'a [u8]) -> Cow<'a, [u8]> {
        (**self).stem(token)
    }

    fn is_stopword(&self, token_hash: u64) -> bool {
        (**self).is_stopword(token_hash)
    }

    fn weight(&self, token_hash: u64) -> i32 {
        (**self).weight(token_hash)
    }
}
