//! Hashing: turn the input string into 16 digest bytes.
//!
//! This module defines the [`Digester`] trait for pluggable 128-bit
//! digests and the [`DigestKind`] enum for selecting one at runtime.
//!
//! Neither digest is used for its cryptographic strength. Any hash works
//! as long as it yields 128 bits in a stable byte order; MD5 is the
//! default so identicons match those produced by other implementations.

use std::fmt;
use std::hash::Hasher as _;

use md5::{Digest as _, Md5};
use serde::{Deserialize, Serialize};
use siphasher::sip128::{Hasher128 as _, SipHasher13};

use crate::types::{DIGEST_LEN, HashBytes};

/// Selects which 128-bit digest to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestKind {
    /// MD5 via the RustCrypto `md-5` crate.
    #[default]
    Md5,
    /// SipHash-1-3 with 128-bit output and all-zero keys.
    Sip128,
}

impl fmt::Display for DigestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Md5 => f.write_str("md5"),
            Self::Sip128 => f.write_str("sip128"),
        }
    }
}

/// Trait for digest strategies.
///
/// Input: raw bytes (the UTF-8 encoding of the text).
/// Output: exactly [`DIGEST_LEN`] bytes in big-endian digest order.
pub trait Digester {
    /// Digest the given bytes.
    fn digest(&self, input: &[u8]) -> HashBytes;
}

impl Digester for DigestKind {
    fn digest(&self, input: &[u8]) -> HashBytes {
        match *self {
            Self::Md5 => md5_digest(input),
            Self::Sip128 => sip128_digest(input),
        }
    }
}

/// Hash a string with the chosen digest.
#[must_use]
pub fn hash_input(input: &str, kind: DigestKind) -> HashBytes {
    kind.digest(input.as_bytes())
}

fn md5_digest(input: &[u8]) -> HashBytes {
    let mut bytes = [0u8; DIGEST_LEN];
    bytes.copy_from_slice(&Md5::digest(input));
    HashBytes::new(bytes)
}

fn sip128_digest(input: &[u8]) -> HashBytes {
    let mut hasher = SipHasher13::new();
    hasher.write(input);
    HashBytes::new(hasher.finish128().as_u128().to_be_bytes())
}
