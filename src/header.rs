use crate::mac::Mac;
use crate::payload::PayloadDigest;
use crate::DigestAlgorithm;
use std::fmt;

/// Representation of a Hawk `Authorization` header value.
///
/// Formatting a `Header` yields the complete value, including the `Hawk ` prefix:
///
/// ```text
/// Hawk id="<id>", ts="<ts>", nonce="<nonce>", mac="<mac>", hash="<hash>", alg="<alg>"
/// ```
///
/// Values are written verbatim between double quotes.  Nothing is escaped, so an `id`
/// containing `"` produces a header that servers will not parse.
#[derive(Clone, PartialEq, Debug)]
pub struct Header {
    pub id: String,
    pub ts: u64,
    pub nonce: String,
    pub mac: Mac,
    pub hash: PayloadDigest,
    pub alg: DigestAlgorithm,
}

impl Header {
    pub fn new<S1, S2>(
        id: S1,
        ts: u64,
        nonce: S2,
        mac: Mac,
        hash: PayloadDigest,
        alg: DigestAlgorithm,
    ) -> Header
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        let id = id.into();
        if id.contains('"') {
            log::warn!("Hawk id {:?} contains a double quote; the header will be malformed", id);
        }
        Header {
            id,
            ts,
            nonce: nonce.into(),
            mac,
            hash,
            alg,
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Hawk id=\"{}\", ts=\"{}\", nonce=\"{}\", mac=\"{}\", hash=\"{}\", alg=\"{}\"",
            self.id, self.ts, self.nonce, self.mac, self.hash, self.alg,
        )
    }
}
