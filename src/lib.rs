//! The `hawk-client` crate builds `Authorization` header values for outgoing HTTP
//! requests: Hawk request signatures, plus the simpler Basic and Bearer schemes.
//!
//! Only the client side of Hawk is provided.  Verifying headers, tracking nonces and
//! checking clock skew are the server's business.
//!
//! # Examples
//!
//! ## Hawk
//!
//! ```
//! use hawk_client::{Credentials, RequestBuilder};
//!
//! // provide the Hawk id, key and algorithm
//! let credentials = Credentials::new(
//!     "dh37fgj492je",
//!     "werxhqb98rpaxn39848xrunpaw3489ruxnpa98w4rxn",
//!     "sha256",
//! ).unwrap();
//!
//! // provide the details of the request to be authorized
//! let request = RequestBuilder::from_url("GET", "http://localhost:8000/resource?a=1")
//!     .unwrap()
//!     .content_type("text/plain")
//!     .request();
//!
//! // get the resulting header, including the calculated MAC
//! let header = request.make_header(&credentials).unwrap().to_string();
//! assert!(header.starts_with("Hawk id=\"dh37fgj492je\", ts=\""));
//! assert!(header.ends_with(", alg=\"sha256\""));
//! ```
//!
//! ## Deterministic signing
//!
//! The timestamp and nonce can be supplied explicitly, which makes the header
//! reproducible:
//!
//! ```
//! use hawk_client::{Credentials, RequestBuilder};
//!
//! let credentials = Credentials::new("dh37fgj492je", "werxhqb98rpaxn39848xrunpaw3489ruxnpa98w4rxn", "sha256").unwrap();
//! let request = RequestBuilder::from_url("GET", "https://example.com:8000/resource/1?b=1&a=2")
//!     .unwrap()
//!     .content_type("text/plain")
//!     .request();
//! let header = request.make_header_full(&credentials, 1353832234, "j4h3g2").unwrap();
//! assert_eq!(header.mac.to_string(), "P5mVg2feznevIDl0sw5uhk152b/vnlMZArCV7S64e3s=");
//! ```
//!
//! ## Basic and Bearer
//!
//! ```
//! use hawk_client::Authorization;
//!
//! assert_eq!(Authorization::basic("alice", "secret").unwrap().to_string(), "Basic YWxpY2U6c2VjcmV0");
//! assert_eq!(Authorization::bearer("Bearer t0k3n").to_string(), "Bearer t0k3n");
//! ```
//!
//! # Logging
//!
//! Signing logs through the `log` facade: one `debug` record per signed request, and
//! `trace` records with the exact payload string and canonical message.  Keys are
//! never logged.

mod algorithm;
pub use crate::algorithm::{AlgorithmRegistry, DigestAlgorithm};

mod b64;

mod context;
pub use crate::context::{Clock, FixedClock, FixedNonce, RandomSource, SystemClock, ThreadRandom};

mod credentials;
pub use crate::credentials::{Credentials, Key};

pub mod crypto;

mod error;
pub use crate::error::*;

mod header;
pub use crate::header::Header;

mod mac;
pub use crate::mac::Mac;

mod message;
pub use crate::message::CanonicalMessage;

mod nonce;
pub use crate::nonce::{generate_nonce, NONCE_ALPHABET, NONCE_LENGTH};

mod payload;
pub use crate::payload::{PayloadDigest, PayloadHasher};

mod request;
pub use crate::request::{Request, RequestBuilder};

mod scheme;
pub use crate::scheme::Authorization;

mod target;
pub use crate::target::{Protocol, RequestTarget};
