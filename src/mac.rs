use crate::b64;
use crate::credentials::Key;
use crate::error::*;
use crate::message::CanonicalMessage;
use std::fmt;
use std::ops::Deref;

/// A Hawk MAC: the HMAC of a canonical message under the client's key.
///
/// Formatting a `Mac` produces its base64 encoding, as sent in the `mac` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mac(Vec<u8>);

impl Mac {
    pub fn new(key: &Key, message: &CanonicalMessage) -> Result<Mac> {
        let bytes = message.to_bytes();
        log::trace!(
            "signing canonical message:\n{}",
            String::from_utf8_lossy(&bytes)
        );
        Ok(Mac(key.sign(&bytes)?))
    }
}

impl From<Vec<u8>> for Mac {
    fn from(original: Vec<u8>) -> Self {
        Mac(original)
    }
}

impl Deref for Mac {
    type Target = Vec<u8>;
    fn deref(&self) -> &Vec<u8> {
        &self.0
    }
}

impl AsRef<[u8]> for Mac {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

impl fmt::Display for Mac {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&b64::encode(&self.0))
    }
}

#[cfg(test)]
mod test {
    use super::Mac;
    use crate::credentials::Key;
    use crate::message::CanonicalMessage;
    use crate::payload::{PayloadDigest, PayloadHasher};
    use crate::target::RequestTarget;
    use crate::DigestAlgorithm;
    use pretty_assertions::assert_eq;

    const KEY: &str = "werxhqb98rpaxn39848xrunpaw3489ruxnpa98w4rxn";

    fn target() -> RequestTarget {
        RequestTarget::parse("https://example.com:8000/resource/1?b=1&a=2").unwrap()
    }

    fn hash() -> PayloadDigest {
        PayloadHasher::hash("text/plain", DigestAlgorithm::Sha256, "").unwrap()
    }

    fn mac_for(ext: Option<&str>) -> String {
        let key = Key::new(KEY, DigestAlgorithm::Sha256).unwrap();
        let target = target();
        let hash = hash();
        let msg = CanonicalMessage::new(1353832234, "j4h3g2", "GET", &target, &hash, ext);
        Mac::new(&key, &msg).unwrap().to_string()
    }

    #[test]
    fn test_make_mac() {
        assert_eq!(mac_for(None), "P5mVg2feznevIDl0sw5uhk152b/vnlMZArCV7S64e3s=");
    }

    #[test]
    fn test_make_mac_ext() {
        assert_eq!(
            mac_for(Some("some-app-ext-data")),
            "JRkld+bKQCghe0ELlKAaLaV7dQWKPWnGizVeIQPZgxI="
        );
    }

    #[test]
    fn empty_ext_equals_none() {
        assert_eq!(mac_for(Some("")), mac_for(None));
    }

    #[test]
    fn display_is_base64() {
        let mac = Mac::from(vec![1u8, 2, 3, 4]);
        assert_eq!(mac.to_string(), "AQIDBA==");
        assert_eq!(mac.len(), 4);
    }
}
