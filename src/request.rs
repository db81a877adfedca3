use crate::context::{Clock, RandomSource, SystemClock, ThreadRandom};
use crate::credentials::Credentials;
use crate::error::*;
use crate::header::Header;
use crate::mac::Mac;
use crate::message::CanonicalMessage;
use crate::nonce::generate_nonce;
use crate::payload::{PayloadDigest, PayloadHasher};
use crate::target::RequestTarget;
use std::convert::TryFrom;
use url::Url;

/// Request represents a single HTTP request to be signed.
///
/// The structure is created using `RequestBuilder`.  Most uses of this library will
/// hold several of the fields fixed; cloning a request is a convenient way to avoid
/// repeating them.
///
/// # Examples
///
/// ```
/// use hawk_client::{Credentials, RequestBuilder};
///
/// let credentials = Credentials::new("dh37fgj492je", "werxhqb98rpaxn39848xrunpaw3489ruxnpa98w4rxn", "sha256").unwrap();
/// let request = RequestBuilder::from_url("POST", "https://example.com/api/v1/x")
///     .unwrap()
///     .content_type("application/json")
///     .body(b"{\"name\":\"value\"}")
///     .request();
///
/// let header = request.make_header(&credentials).unwrap();
/// assert!(header.to_string().starts_with("Hawk id=\"dh37fgj492je\", ts=\""));
/// ```
#[derive(Debug, Clone)]
pub struct Request<'a> {
    method: &'a str,
    target: RequestTarget,
    content_type: &'a str,
    body: &'a [u8],
    ext: Option<&'a str>,
}

impl<'a> Request<'a> {
    /// Create a new Header for this request, inventing a new nonce and setting the
    /// timestamp to the current time.
    pub fn make_header(&self, credentials: &Credentials) -> Result<Header> {
        self.make_header_with(credentials, &SystemClock, &ThreadRandom)
    }

    /// Similar to `make_header`, but sampling the time and nonce from the given sources.
    pub fn make_header_with(
        &self,
        credentials: &Credentials,
        clock: &dyn Clock,
        random: &dyn RandomSource,
    ) -> Result<Header> {
        let ts = clock.now();
        let nonce = generate_nonce(random);
        self.make_header_full(credentials, ts, nonce)
    }

    /// Similar to `make_header`, but allowing specification of the timestamp
    /// and nonce.
    pub fn make_header_full<S>(&self, credentials: &Credentials, ts: u64, nonce: S) -> Result<Header>
    where
        S: Into<String>,
    {
        let nonce = nonce.into();
        let alg = credentials.key.algorithm();
        let hash = self.payload_digest(alg)?;
        let message = self.canonical_message(ts, &nonce, &hash);
        let mac = Mac::new(&credentials.key, &message)?;
        log::debug!(
            "signed {} {}:{}{} for id {:?} with {}",
            self.method,
            self.target.host(),
            self.target.port(),
            self.target.canonical_resource(),
            credentials.id,
            alg
        );
        Ok(Header::new(
            credentials.id.clone(),
            ts,
            nonce,
            mac,
            hash,
            alg,
        ))
    }

    /// Hash this request's content type and body.
    pub fn payload_digest(&self, algorithm: crate::DigestAlgorithm) -> Result<PayloadDigest> {
        log::trace!(
            "hashing payload:\nhawk.1.payload\n{}\n{}\n",
            self.content_type,
            String::from_utf8_lossy(self.body)
        );
        PayloadHasher::hash(self.content_type, algorithm, self.body)
    }

    /// The canonical message that would be signed for the given timestamp, nonce and
    /// payload digest.
    pub fn canonical_message<'b>(
        &'b self,
        ts: u64,
        nonce: &'b str,
        hash: &'b PayloadDigest,
    ) -> CanonicalMessage<'b> {
        CanonicalMessage::new(ts, nonce, self.method, &self.target, hash, self.ext)
    }

    pub fn method(&self) -> &str {
        self.method
    }

    pub fn target(&self) -> &RequestTarget {
        &self.target
    }
}

#[derive(Debug, Clone)]
pub struct RequestBuilder<'a>(Request<'a>);

impl<'a> RequestBuilder<'a> {
    /// Create a new request with the given method and target.  The content type and body
    /// default to empty.
    pub fn new(method: &'a str, target: RequestTarget) -> Self {
        RequestBuilder(Request {
            method,
            target,
            content_type: "",
            body: b"",
            ext: None,
        })
    }

    /// Create a new request for a URL string, which must have the form
    /// `http[s]://host[:port][/path]`.
    pub fn from_url(method: &'a str, url: &str) -> Result<Self> {
        Ok(RequestBuilder::new(method, RequestTarget::parse(url)?))
    }

    /// Create a new request for a parsed `Url`.
    pub fn from_parsed_url(method: &'a str, url: &Url) -> Result<Self> {
        Ok(RequestBuilder::new(method, RequestTarget::try_from(url)?))
    }

    /// Set the request method.  It is signed exactly as given.
    pub fn method(mut self, method: &'a str) -> Self {
        self.0.method = method;
        self
    }

    /// Set the content type, which is hashed with the body.
    pub fn content_type(mut self, content_type: &'a str) -> Self {
        self.0.content_type = content_type;
        self
    }

    /// Set the request body.
    pub fn body<B>(mut self, body: &'a B) -> Self
    where
        B: AsRef<[u8]> + ?Sized,
    {
        self.0.body = body.as_ref();
        self
    }

    /// Set the `ext` Hawk property for the request
    pub fn ext(mut self, ext: Option<&'a str>) -> Self {
        self.0.ext = ext;
        self
    }

    /// Get the request from this builder
    pub fn request(self) -> Request<'a> {
        self.0
    }
}
