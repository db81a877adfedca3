//! `hawk-client` must perform certain cryptographic operations in order to function,
//! and applications may need control over which library is used for these.
//!
//! This module can be used for that purpose. If you do not disable the `use_ring`
//! feature, none of this matters, as `ring` will be used for everything.
//!
//! Otherwise, call `set_cryptographer` once, early in the lifetime of the program,
//! with your own implementation of `Cryptographer`.
use crate::DigestAlgorithm;
use failure::Fail;

pub(crate) mod holder;
pub(crate) use holder::get_cryptographer;
pub use holder::{set_boxed_cryptographer, set_cryptographer, SetCryptographerError};

#[cfg(feature = "use_ring")]
mod ring;

#[derive(Fail, Debug)]
pub enum CryptoError {
    /// The backend has no implementation of the given digest algorithm.
    #[fail(display = "Digest algorithm {:?} is unsupported by this Cryptographer", _0)]
    UnsupportedDigest(DigestAlgorithm),

    /// No cryptographer was installed and no default backend is compiled in.
    #[fail(display = "No cryptographer installed; call `set_cryptographer` first")]
    Uninitialized,

    /// The backend returned output of the wrong length for the algorithm.
    #[fail(
        display = "Cryptographer returned {} bytes for {}, expected {}",
        actual, algorithm, expected
    )]
    DigestLength {
        algorithm: DigestAlgorithm,
        expected: usize,
        actual: usize,
    },

    /// The backend failed for a reason of its own.
    #[fail(display = "{}", _0)]
    Other(String),
}

/// An HMAC key bound to a digest algorithm.
pub trait HmacKey: Send + Sync + 'static {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

/// A streaming hasher, created with `Cryptographer::new_hasher`.
pub trait Hasher: Send + 'static {
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError>;
    // Takes `&mut self` so that it can be called through a `Box<dyn Hasher>`.
    fn finish(&mut self) -> Result<Vec<u8>, CryptoError>;
}

/// A trait encapsulating the cryptographic operations required by this library.
pub trait Cryptographer: Send + Sync + 'static {
    fn new_key(
        &self,
        algorithm: DigestAlgorithm,
        key: &[u8],
    ) -> Result<Box<dyn HmacKey>, CryptoError>;
    fn new_hasher(&self, algorithm: DigestAlgorithm) -> Result<Box<dyn Hasher>, CryptoError>;
}
