use crate::payload::PayloadDigest;
use crate::target::RequestTarget;
use std::borrow::Cow;
use std::fmt;

const HEADER_LINE: &str = "hawk.1.header";

/// The normalized request string covered by the Hawk MAC.
///
/// The record has exactly eight fields, written in a fixed order after the
/// `hawk.1.header` line, each terminated by `\n`:
///
/// ```text
/// hawk.1.header
/// <ts>
/// <nonce>
/// <method>
/// <resource>
/// <host>
/// <port>
/// <hash>
/// <ext>
/// ```
///
/// Fields are not escaped; a field containing `\n` shifts the lines that follow.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalMessage<'a> {
    pub ts: u64,
    pub nonce: &'a str,
    /// Used exactly as given; not upper-cased.
    pub method: &'a str,
    pub resource: &'a str,
    pub host: &'a str,
    pub port: u16,
    pub hash: &'a str,
    pub ext: &'a str,
}

impl<'a> CanonicalMessage<'a> {
    pub fn new(
        ts: u64,
        nonce: &'a str,
        method: &'a str,
        target: &'a RequestTarget,
        hash: &'a PayloadDigest,
        ext: Option<&'a str>,
    ) -> Self {
        CanonicalMessage {
            ts,
            nonce,
            method,
            resource: target.canonical_resource(),
            host: target.host(),
            port: target.port(),
            hash: hash.as_str(),
            ext: ext.unwrap_or(""),
        }
    }

    /// The eight fields, in signing order.
    pub fn fields(&self) -> [Cow<'a, str>; 8] {
        [
            Cow::Owned(self.ts.to_string()),
            Cow::Borrowed(self.nonce),
            Cow::Borrowed(self.method),
            Cow::Borrowed(self.resource),
            Cow::Borrowed(self.host),
            Cow::Owned(self.port.to_string()),
            Cow::Borrowed(self.hash),
            Cow::Borrowed(self.ext),
        ]
    }

    /// The bytes that are signed.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl<'a> fmt::Display for CanonicalMessage<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", HEADER_LINE)?;
        for field in self.fields().iter() {
            writeln!(f, "{}", field)?;
        }
        Ok(())
    }
}
