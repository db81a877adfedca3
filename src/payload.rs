use crate::b64;
use crate::crypto::Hasher;
use crate::error::*;
use crate::DigestAlgorithm;
use std::fmt;

/// The base64-encoded hash of a request payload, as sent in the `hash` attribute and
/// bound into the MAC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadDigest(String);

impl PayloadDigest {
    /// Wrap the raw digest bytes.
    pub fn from_bytes(digest: &[u8]) -> Self {
        PayloadDigest(b64::encode(digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PayloadDigest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A utility for hashing payloads. Feed your entity body to this, then call `finish` to
/// get the digest for the request.
///
/// The hashed string is `hawk.1.payload\n<content-type>\n<body>\n`.  Neither the content
/// type nor the body is escaped.
pub struct PayloadHasher {
    hasher: Box<dyn Hasher>,
    algorithm: DigestAlgorithm,
}

impl PayloadHasher {
    /// Create a new PayloadHasher. The `content_type` is hashed exactly as given.
    pub fn new<B>(content_type: B, algorithm: DigestAlgorithm) -> Result<Self>
    where
        B: AsRef<[u8]>,
    {
        let mut hasher = PayloadHasher {
            hasher: algorithm.hasher()?,
            algorithm,
        };
        hasher.update(b"hawk.1.payload\n")?;
        hasher.update(content_type)?;
        hasher.update(b"\n")?;
        Ok(hasher)
    }

    /// Hash a single value and return it
    pub fn hash<B1, B2>(
        content_type: B1,
        algorithm: DigestAlgorithm,
        payload: B2,
    ) -> Result<PayloadDigest>
    where
        B1: AsRef<[u8]>,
        B2: AsRef<[u8]>,
    {
        let mut hasher = PayloadHasher::new(content_type, algorithm)?;
        hasher.update(payload)?;
        hasher.finish()
    }

    /// Update the hash with new data.
    pub fn update<B>(&mut self, data: B) -> Result<()>
    where
        B: AsRef<[u8]>,
    {
        self.hasher.update(data.as_ref())?;
        Ok(())
    }

    /// Finish hashing and return the result
    pub fn finish(mut self) -> Result<PayloadDigest> {
        self.update(b"\n")?;
        let digest = self.algorithm.check_len(self.hasher.finish()?)?;
        Ok(PayloadDigest::from_bytes(&digest))
    }
}

#[cfg(test)]
mod tests {
    use super::PayloadHasher;
    use crate::DigestAlgorithm;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_text_plain() {
        let digest = PayloadHasher::hash("text/plain", DigestAlgorithm::Sha256, "").unwrap();
        assert_eq!(digest.as_str(), "q/t+NNAkQZNlq/aAD6PlexImwQTxwgT2MahfTa9XRLA=");
    }

    #[test]
    fn json_body() {
        let digest = PayloadHasher::hash(
            "application/json",
            DigestAlgorithm::Sha256,
            "{\"name\":\"value\"}",
        )
        .unwrap();
        assert_eq!(digest.as_str(), "MfdKig8i5ykUIFjQkiIfmdJ0eKx5nWatljTRy2hIYkc=");
    }

    #[test]
    fn other_algorithms() {
        let sha1 = PayloadHasher::hash("text/plain", DigestAlgorithm::Sha1, "").unwrap();
        assert_eq!(sha1.as_str(), "0EBpUACN9C6ODrwMDQGu2FqXKD0=");
        let sha512 = PayloadHasher::hash("text/plain", DigestAlgorithm::Sha512, "").unwrap();
        assert_eq!(
            sha512.as_str(),
            "OgFT8g7g8DRYHzZycxI78Ew4DcZbcUi42xKQUs2kLRoin05X4IHHkYdSq9JttcXRkJcY1/eLPNoe6ryfTM2XSw=="
        );
    }

    #[test]
    fn hash_consistency() {
        let mut hasher1 = PayloadHasher::new("text/plain", DigestAlgorithm::Sha256).unwrap();
        hasher1.update("pay").unwrap();
        hasher1.update("load").unwrap();
        let hash1 = hasher1.finish().unwrap();

        let mut hasher2 = PayloadHasher::new("text/plain", DigestAlgorithm::Sha256).unwrap();
        hasher2.update("payload").unwrap();
        let hash2 = hasher2.finish().unwrap();

        let hash3 = PayloadHasher::hash("text/plain", DigestAlgorithm::Sha256, "payload").unwrap();

        assert_eq!(hash2, hash1);
        assert_eq!(hash3, hash1);
    }

    #[test]
    fn content_type_is_not_normalized() {
        let lower = PayloadHasher::hash("text/plain", DigestAlgorithm::Sha256, "x").unwrap();
        let upper = PayloadHasher::hash("Text/Plain", DigestAlgorithm::Sha256, "x").unwrap();
        assert!(lower != upper);
    }
}
