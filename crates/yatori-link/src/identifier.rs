//! Random `yid` generation for payment correlation.

use std::fmt;
use std::sync::Mutex;

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};

/// Characters a generated identifier is drawn from.
pub const YID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Default identifier length for plain links.
pub const DEFAULT_YID_LENGTH: usize = 10;

/// Generates lowercase alphanumeric identifiers from an injected CSPRNG.
///
/// Identifiers are only probabilistically unique; no collision check is made.
pub struct IdentifierGenerator {
    rng: Mutex<Box<dyn RngCore + Send>>,
}

impl IdentifierGenerator {
    /// Creates a generator backed by the operating system's RNG.
    pub fn new() -> Self {
        Self::from_rng(OsRng)
    }

    /// Creates a generator backed by `rng`.
    ///
    /// Tests pass a seeded `StdRng` for reproducible output.
    pub fn from_rng<R>(rng: R) -> Self
    where
        R: RngCore + CryptoRng + Send + 'static,
    {
        Self {
            rng: Mutex::new(Box::new(rng)),
        }
    }

    /// Generates an identifier of `length` characters.
    pub fn generate(&self, length: usize) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        (0..length)
            .map(|_| YID_ALPHABET[rng.gen_range(0..YID_ALPHABET.len())] as char)
            .collect()
    }

    /// Generates `length` random characters behind an optional prefix.
    ///
    /// An empty prefix is treated as no prefix.
    pub fn generate_prefixed(&self, prefix: Option<&str>, length: usize) -> String {
        let random = self.generate(length);
        match prefix {
            Some(prefix) if !prefix.is_empty() => format!("{prefix}{random}"),
            _ => random,
        }
    }
}

impl Default for IdentifierGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IdentifierGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentifierGenerator").finish_non_exhaustive()
    }
}

/// Generates an identifier of `length` characters from the OS RNG.
pub fn generate_yid(length: usize) -> String {
    IdentifierGenerator::new().generate(length)
}
