use crate::crypto::CryptoError;
use failure::Fail;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Fail, Debug)]
pub enum Error {
    #[fail(display = "Unsupported hash algorithm `{}`, available: {}", name, available)]
    UnsupportedAlgorithm {
        name: String,
        available: AlgorithmNames,
    },

    #[fail(display = "Malformed url: {}", _0)]
    MalformedUrl(String),

    #[fail(display = "Unsupported protocol in url: {}", _0)]
    UnsupportedProtocol(String),

    #[fail(display = "Missing credential: {} must be set", _0)]
    MissingCredential(&'static str),

    #[fail(display = "Signing error: {}", _0)]
    Signing(#[fail(cause)] CryptoError),
}

/// The set of algorithm names a registry would have accepted, carried on
/// `Error::UnsupportedAlgorithm`.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmNames(pub Vec<String>);

impl AlgorithmNames {
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }
}

impl fmt::Display for AlgorithmNames {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "'{}'", self.0.join("', '"))
    }
}

impl From<CryptoError> for Error {
    fn from(e: CryptoError) -> Self {
        Error::Signing(e)
    }
}
