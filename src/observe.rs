//! Diagnostic hooks.
//!
//! Hashing is pure; anything a caller wants to see along the way (tokens, their hashes, the
//! super-token windows) is reported through an [`Observer`] passed into the call.
//! [`TracingObserver`] turns those callbacks into `tracing` events.

use std::fmt;

use tracing::{debug, trace};

/// Longest token prefix rendered in diagnostics.
const MAX_RENDERED: usize = 1023;

/// Receives intermediate values while a fingerprint is computed.
///
/// Every method has a no-op default.
pub trait Observer {
    /// A token was hashed (after stemming, in wide mode).
    fn token(&mut self, _bytes: &[u8], _hash: u64) {}

    /// A token was rejected by the stopword filter.
    fn stopword(&mut self, _hash: u64) {}

    /// A super-token was formed from `window` (2 words per token, oldest first).
    fn super_token(&mut self, _window: &[u32], _hash: u64) {}

    /// The fingerprint is ready; `tokens` counts the tokens that voted.
    fn finish(&mut self, _fingerprint: u64, _tokens: usize) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

/// Observer that emits `tracing` events under the `simi` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn token(&mut self, bytes: &[u8], hash: u64) {
        trace!(target: "simi", token = %render(bytes), hash = %Hex(hash), "token");
    }

    fn stopword(&mut self, hash: u64) {
        trace!(target: "simi", hash = %Hex(hash), "stopword");
    }

    fn super_token(&mut self, window: &[u32], hash: u64) {
        trace!(
            target: "simi",
            slots = window.len() / 2,
            hash = %Hex(hash),
            "super-token"
        );
    }

    fn finish(&mut self, fingerprint: u64, tokens: usize) {
        debug!(
            target: "simi",
            tokens,
            fingerprint = %Hex(fingerprint),
            "fingerprint computed"
        );
    }
}

/// Zero-padded hex rendering for event fields.
struct Hex(u64);

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Lossy, length-capped rendering of token bytes.
pub(crate) fn render(bytes: &[u8]) -> String {
    let cut = &bytes[..bytes.len().min(MAX_RENDERED)];
    String::from_utf8_lossy(cut).into_owned()
}
