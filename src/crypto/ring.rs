use super::{CryptoError, Cryptographer, Hasher, HmacKey};
use crate::DigestAlgorithm;
use ring::{digest, hmac};

pub struct RingCryptographer;

struct RingHmacKey(hmac::Key);

impl HmacKey for RingHmacKey {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let tag = hmac::sign(&self.0, data);
        Ok(tag.as_ref().to_vec())
    }
}

// This is always `Some` until `finish` is called.
struct RingHasher(Option<digest::Context>);

impl Hasher for RingHasher {
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        match self.0.as_mut() {
            Some(ctx) => {
                ctx.update(data);
                Ok(())
            }
            None => Err(CryptoError::Other("update called after `finish`".to_string())),
        }
    }

    fn finish(&mut self) -> Result<Vec<u8>, CryptoError> {
        match self.0.take() {
            Some(ctx) => Ok(ctx.finish().as_ref().to_vec()),
            None => Err(CryptoError::Other("`finish` called twice".to_string())),
        }
    }
}

impl Cryptographer for RingCryptographer {
    fn new_key(
        &self,
        algorithm: DigestAlgorithm,
        key: &[u8],
    ) -> Result<Box<dyn HmacKey>, CryptoError> {
        let k = hmac::Key::new(hmac_algorithm(algorithm), key);
        Ok(Box::new(RingHmacKey(k)))
    }

    fn new_hasher(&self, algorithm: DigestAlgorithm) -> Result<Box<dyn Hasher>, CryptoError> {
        let ctx = digest::Context::new(digest_algorithm(algorithm));
        Ok(Box::new(RingHasher(Some(ctx))))
    }
}

fn digest_algorithm(algorithm: DigestAlgorithm) -> &'static digest::Algorithm {
    match algorithm {
        DigestAlgorithm::Sha1 => &digest::SHA1_FOR_LEGACY_USE_ONLY,
        DigestAlgorithm::Sha256 => &digest::SHA256,
        DigestAlgorithm::Sha384 => &digest::SHA384,
        DigestAlgorithm::Sha512 => &digest::SHA512,
    }
}

fn hmac_algorithm(algorithm: DigestAlgorithm) -> hmac::Algorithm {
    match algorithm {
        DigestAlgorithm::Sha1 => hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
        DigestAlgorithm::Sha256 => hmac::HMAC_SHA256,
        DigestAlgorithm::Sha384 => hmac::HMAC_SHA384,
        DigestAlgorithm::Sha512 => hmac::HMAC_SHA512,
    }
}
