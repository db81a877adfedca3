use crate::error::*;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// The protocols a request can be signed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    pub fn default_port(self) -> u16 {
        match self {
            Protocol::Http => 80,
            Protocol::Https => 443,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl FromStr for Protocol {
    type Err = Error;
    fn from_str(s: &str) -> Result<Protocol> {
        // case-sensitive, like the server side
        match s {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            _ => Err(Error::UnsupportedProtocol(s.to_string())),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The addressing components of a request URL, as they are bound into the Hawk MAC.
///
/// The resource (path and query) is kept byte-for-byte as it appeared in the URL: no
/// percent-decoding, no query reordering, no trailing-slash normalization.  The port is
/// always resolved, falling back to the protocol default.
///
/// # Examples
///
/// ```
/// use hawk_client::RequestTarget;
///
/// let target: RequestTarget = "https://example.com/api/v1/x?a=1".parse().unwrap();
/// assert_eq!(target.host(), "example.com");
/// assert_eq!(target.port(), 443);
/// assert_eq!(target.resource(), "/api/v1/x?a=1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    protocol: Protocol,
    host: String,
    port: u16,
    resource: String,
}

impl RequestTarget {
    /// Create a target from already-separated components.
    ///
    /// The host must be non-empty and contain neither `:` nor `/`, an explicit port
    /// must be non-zero, and the resource must be empty or start with `/`.  Anything
    /// else is `Error::MalformedUrl`.
    pub fn new<H, R>(protocol: Protocol, host: H, port: Option<u16>, resource: R) -> Result<Self>
    where
        H: Into<String>,
        R: Into<String>,
    {
        let host = host.into();
        let resource = resource.into();
        if host.is_empty() || host.contains(|c: char| c == ':' || c == '/') {
            return Err(Error::MalformedUrl(format!("invalid host {:?}", host)));
        }
        if port == Some(0) {
            return Err(Error::MalformedUrl(format!("host {} has port 0", host)));
        }
        if !resource.is_empty() && !resource.starts_with('/') {
            return Err(Error::MalformedUrl(format!(
                "resource {:?} does not start with '/'",
                resource
            )));
        }
        Ok(RequestTarget {
            protocol,
            host,
            port: port.unwrap_or_else(|| protocol.default_port()),
            resource,
        })
    }

    /// Parse a URL of the form `scheme://host[:port][/path]`.
    ///
    /// A missing scheme, or any scheme other than `http` or `https`, yields
    /// `Error::UnsupportedProtocol`; any other deviation from that shape yields
    /// `Error::MalformedUrl`.
    pub fn parse(url: &str) -> Result<Self> {
        let sep = url
            .find("://")
            .ok_or_else(|| Error::UnsupportedProtocol(url.to_string()))?;
        let protocol = Protocol::from_str(&url[..sep])?;
        let rest = &url[sep + 3..];

        let host_end = rest.find(|c: char| c == ':' || c == '/').unwrap_or_else(|| rest.len());
        let host = &rest[..host_end];
        if host.is_empty() {
            return Err(Error::MalformedUrl(format!("url {} has no host", url)));
        }
        let mut rest = &rest[host_end..];

        let mut port = None;
        if rest.starts_with(':') {
            let digits_end = rest[1..]
                .find(|c: char| !c.is_ascii_digit())
                .map(|i| i + 1)
                .unwrap_or_else(|| rest.len());
            let digits = &rest[1..digits_end];
            port = match u16::from_str(digits) {
                Ok(0) | Err(_) => {
                    return Err(Error::MalformedUrl(format!(
                        "url {} has an invalid port",
                        url
                    )))
                }
                Ok(p) => Some(p),
            };
            rest = &rest[digits_end..];
        }

        // whatever remains must be empty or a path starting with '/'
        if !rest.is_empty() && !rest.starts_with('/') {
            return Err(Error::MalformedUrl(format!(
                "url {} has unexpected characters after the host",
                url
            )));
        }

        RequestTarget::new(protocol, host, port, rest)
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// The path and query exactly as given, possibly empty.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// The resource as it appears in the canonical message, where an empty resource
    /// is written as `/`.
    pub fn canonical_resource(&self) -> &str {
        if self.resource.is_empty() {
            "/"
        } else {
            &self.resource
        }
    }
}

impl FromStr for RequestTarget {
    type Err = Error;
    fn from_str(s: &str) -> Result<RequestTarget> {
        RequestTarget::parse(s)
    }
}

/// Build a target from a parsed `Url`, subject to the same checks as `RequestTarget::new`;
/// IPv6 literal hosts are rejected.  Note that `Url` normalizes its input (for example
/// lower-casing the host and percent-encoding the path), so the resource may differ from
/// the string the `Url` was parsed from.
impl TryFrom<&Url> for RequestTarget {
    type Error = Error;
    fn try_from(url: &Url) -> Result<RequestTarget> {
        let protocol = Protocol::from_str(url.scheme())?;
        let host = url
            .host_str()
            .ok_or_else(|| Error::MalformedUrl(format!("url {} has no host", url)))?;
        let resource = match url.query() {
            Some(q) => format!("{}?{}", url.path(), q),
            None => url.path().to_string(),
        };
        RequestTarget::new(protocol, host, url.port(), resource)
    }
}
