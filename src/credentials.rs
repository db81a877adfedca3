use crate::crypto::{self, HmacKey};
use crate::error::*;
use crate::DigestAlgorithm;
use std::fmt;

/// Hawk key.
///
/// While any sequence of bytes can be specified as a key, note that each digest algorithm has
/// a suggested key length, and that passwords should *not* be used as keys.  Keys of incorrect
/// length are handled according to the digest's implementation.
///
/// The key bytes are handed to the cryptographer and never retained or logged.
pub struct Key {
    key: Box<dyn HmacKey>,
    algorithm: DigestAlgorithm,
}

impl Key {
    pub fn new<B>(key: B, algorithm: DigestAlgorithm) -> Result<Key>
    where
        B: AsRef<[u8]>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(Error::MissingCredential("key"));
        }
        Ok(Key {
            key: crypto::get_cryptographer()?.new_key(algorithm, key)?,
            algorithm,
        })
    }

    pub fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mac = self.key.sign(data)?;
        Ok(self.algorithm.check_len(mac)?)
    }

    /// The digest algorithm used for both the MAC and the payload hash.
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Key")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

/// Hawk credentials: an ID and a key associated with that ID.  The digest algorithm
/// must be agreed between the server and the client.
#[derive(Debug)]
pub struct Credentials {
    pub id: String,
    pub key: Key,
}

impl Credentials {
    /// Build credentials, resolving `algorithm` through the global registry.
    ///
    /// An empty id or key is `Error::MissingCredential`; an unknown algorithm is
    /// `Error::UnsupportedAlgorithm`.
    pub fn new<S, B>(id: S, key: B, algorithm: &str) -> Result<Credentials>
    where
        S: Into<String>,
        B: AsRef<[u8]>,
    {
        let algorithm = algorithm.parse::<DigestAlgorithm>()?;
        Credentials::with_algorithm(id, key, algorithm)
    }

    pub fn with_algorithm<S, B>(id: S, key: B, algorithm: DigestAlgorithm) -> Result<Credentials>
    where
        S: Into<String>,
        B: AsRef<[u8]>,
    {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::MissingCredential("id"));
        }
        Ok(Credentials {
            id,
            key: Key::new(key, algorithm)?,
        })
    }
}
