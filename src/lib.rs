//! `simi`: Charikar similarity hashing for documents.
//!
//! A document (any byte buffer) is split into tokens, each token is hashed with lookup3, and the
//! token hashes vote per bit into a 64-bit fingerprint. Near-duplicate documents end up with
//! fingerprints a few bits apart, so comparing two documents costs one XOR and a popcount.
//!
//! Scope here is the fingerprint itself: tokenizing, hashing, voting, and distance. Storing or
//! indexing fingerprints belongs elsewhere.
//!
//! ```rust
//! use simi::{fingerprint, hamming_distance, Mode};
//!
//! let a = fingerprint(b"to be or not to be, that is the question", Mode::Fast).unwrap();
//! let b = fingerprint(b"to be or not to be: that is the question", Mode::Fast).unwrap();
//! assert_eq!(hamming_distance(a, b), 0);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod histogram;
pub mod lookup3;
pub mod observe;
pub mod policy;
pub mod simhash;
pub mod tokenize;
pub mod window;

pub use error::{Error, Result};
pub use histogram::Histogram;
pub use observe::{NoopObserver, Observer, TracingObserver};
pub use policy::{DefaultPolicy, TokenPolicy};
pub use simhash::{
    fingerprint, hamming_distance, hash_token, Mode, Seeds, SimHash, SimHashConfig,
    SimHashFingerprint,
};
pub use tokenize::{is_meaningful, tokens, Token, Tokens};
pub use window::SuperTokenWindow;
