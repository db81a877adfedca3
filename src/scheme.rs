use crate::b64;
use crate::error::*;
use crate::header::Header;
use std::fmt;

/// The value of an HTTP `Authorization` header, in one of the supported schemes.
///
/// # Examples
///
/// ```
/// use hawk_client::Authorization;
///
/// let auth = Authorization::basic("alice", "secret").unwrap();
/// assert_eq!(auth.to_string(), "Basic YWxpY2U6c2VjcmV0");
///
/// let auth = Authorization::bearer("Bearer abc.def");
/// assert_eq!(auth.to_string(), "Bearer abc.def");
/// ```
#[derive(Clone, PartialEq, Debug)]
pub enum Authorization {
    /// A signed Hawk header.
    Hawk(Header),
    /// `Basic base64(id:key)`.
    Basic(String),
    /// A caller-supplied value, sent verbatim.
    Bearer(String),
}

impl Authorization {
    pub fn hawk(header: Header) -> Self {
        Authorization::Hawk(header)
    }

    /// Build a Basic value from an id and key.  Both must be non-empty.
    pub fn basic<B>(id: &str, key: B) -> Result<Self>
    where
        B: AsRef<[u8]>,
    {
        let key = key.as_ref();
        if id.is_empty() {
            return Err(Error::MissingCredential("id"));
        }
        if key.is_empty() {
            return Err(Error::MissingCredential("key"));
        }
        let mut userpass = Vec::with_capacity(id.len() + 1 + key.len());
        userpass.extend_from_slice(id.as_bytes());
        userpass.push(b':');
        userpass.extend_from_slice(key);
        Ok(Authorization::Basic(b64::encode(&userpass)))
    }

    /// Pass a token through unchanged.  No prefix is added.
    pub fn bearer<S: Into<String>>(token: S) -> Self {
        Authorization::Bearer(token.into())
    }
}

impl From<Header> for Authorization {
    fn from(header: Header) -> Self {
        Authorization::Hawk(header)
    }
}

impl fmt::Display for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Authorization::Hawk(header) => fmt::Display::fmt(header, f),
            Authorization::Basic(encoded) => write!(f, "Basic {}", encoded),
            Authorization::Bearer(token) => f.write_str(token),
        }
    }
}
