// Installing a cryptographer is process-wide, so this file holds a single test.
use hawk_client::crypto::{
    set_cryptographer, CryptoError, Cryptographer, Hasher, HmacKey,
};
use hawk_client::{Credentials, DigestAlgorithm, Error, RequestBuilder};
use pretty_assertions::assert_eq;
use std::cell::Cell;

/// Encode `len` big-endian, zero-padded to `out_len` bytes.
fn length_digest(len: usize, out_len: usize) -> Vec<u8> {
    let mut digest = (len as u32).to_be_bytes().to_vec();
    digest.resize(out_len, 0);
    digest
}

struct LengthKey(usize);

impl HmacKey for LengthKey {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Ok(length_digest(data.len(), self.0))
    }
}

// `Cell` makes this hasher `Send` but not `Sync`.
struct LengthHasher {
    count: Cell<usize>,
    out_len: usize,
}

impl Hasher for LengthHasher {
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        self.count.set(self.count.get() + data.len());
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<u8>, CryptoError> {
        Ok(length_digest(self.count.get(), self.out_len))
    }
}

/// Toy "digests" that encode input lengths.  sha256 is well-formed, sha512 output is
/// truncated to 4 bytes, and anything else is unsupported.
struct LengthCryptographer;

impl Cryptographer for LengthCryptographer {
    fn new_key(
        &self,
        algorithm: DigestAlgorithm,
        _key: &[u8],
    ) -> Result<Box<dyn HmacKey>, CryptoError> {
        match algorithm {
            DigestAlgorithm::Sha256 => Ok(Box::new(LengthKey(32))),
            DigestAlgorithm::Sha512 => Ok(Box::new(LengthKey(4))),
            alg => Err(CryptoError::UnsupportedDigest(alg)),
        }
    }

    fn new_hasher(&self, algorithm: DigestAlgorithm) -> Result<Box<dyn Hasher>, CryptoError> {
        let out_len = match algorithm {
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Sha512 => 4,
            alg => return Err(CryptoError::UnsupportedDigest(alg)),
        };
        Ok(Box::new(LengthHasher {
            count: Cell::new(0),
            out_len,
        }))
    }
}

#[test]
fn custom_cryptographer() {
    set_cryptographer(&LengthCryptographer).unwrap();
    assert!(set_cryptographer(&LengthCryptographer).is_err());

    let request = RequestBuilder::from_url("GET", "http://example.com/")
        .unwrap()
        .content_type("text/plain")
        .request();

    // "hawk.1.payload\ntext/plain\n\n" is 27 bytes
    let credentials = Credentials::new("me", "secret", "sha256").unwrap();
    let header = request
        .make_header_full(&credentials, 1, "nonce1")
        .unwrap();
    assert_eq!(
        header.hash.as_str(),
        "AAAAGwAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA="
    );
    assert_eq!(header.mac.len(), 32);

    // an unsupported digest aborts signing
    match Credentials::new("me", "secret", "sha1") {
        Err(Error::Signing(CryptoError::UnsupportedDigest(DigestAlgorithm::Sha1))) => {}
        Err(e) => panic!("unexpected error {}", e),
        Ok(c) => panic!("unexpected credentials {:?}", c),
    }

    // so does a digest of the wrong length
    let credentials = Credentials::new("me", "secret", "sha512").unwrap();
    match request.make_header_full(&credentials, 1, "nonce1") {
        Err(Error::Signing(CryptoError::DigestLength {
            algorithm: DigestAlgorithm::Sha512,
            expected: 64,
            actual: 4,
        })) => {}
        Err(e) => panic!("unexpected error {}", e),
        Ok(h) => panic!("unexpected header {}", h),
    }
}
