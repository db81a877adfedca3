use crate::crypto::{self, CryptoError, Hasher};
use crate::error::*;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A digest algorithm usable for Hawk payload hashes and MACs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl DigestAlgorithm {
    /// The name sent in the `alg` attribute of the Hawk header.
    pub fn name(self) -> &'static str {
        match self {
            DigestAlgorithm::Sha1 => "sha1",
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Sha384 => "sha384",
            DigestAlgorithm::Sha512 => "sha512",
        }
    }

    /// Length of the raw digest, in bytes.
    pub fn output_len(self) -> usize {
        match self {
            DigestAlgorithm::Sha1 => 20,
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Sha384 => 48,
            DigestAlgorithm::Sha512 => 64,
        }
    }

    /// Reject a backend output that is not a digest of this algorithm.
    pub(crate) fn check_len(self, digest: Vec<u8>) -> std::result::Result<Vec<u8>, CryptoError> {
        if digest.len() == self.output_len() {
            Ok(digest)
        } else {
            Err(CryptoError::DigestLength {
                algorithm: self,
                expected: self.output_len(),
                actual: digest.len(),
            })
        }
    }

    /// A fresh streaming hasher for this algorithm, from the installed cryptographer.
    pub fn hasher(self) -> Result<Box<dyn Hasher>> {
        Ok(crypto::get_cryptographer()?.new_hasher(self)?)
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves a name through the process-wide registry.
impl FromStr for DigestAlgorithm {
    type Err = Error;
    fn from_str(s: &str) -> Result<DigestAlgorithm> {
        AlgorithmRegistry::global().lookup(s)
    }
}

static GLOBAL_REGISTRY: Lazy<AlgorithmRegistry> = Lazy::new(AlgorithmRegistry::standard);

/// A table mapping algorithm names to digest algorithms.
///
/// Names are matched exactly, so `"sha256"` resolves but `"SHA256"` does not unless it
/// has been registered.  An unknown name is always an error; there is no fallback to a
/// default algorithm.
///
/// # Examples
///
/// ```
/// use hawk_client::{AlgorithmRegistry, DigestAlgorithm};
///
/// let mut registry = AlgorithmRegistry::standard();
/// registry.register("SHA-256", DigestAlgorithm::Sha256);
/// assert_eq!(registry.lookup("SHA-256").unwrap(), DigestAlgorithm::Sha256);
/// assert!(registry.lookup("md4").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AlgorithmRegistry {
    table: BTreeMap<String, DigestAlgorithm>,
}

impl AlgorithmRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry containing `sha1`, `sha256`, `sha384` and `sha512`.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for alg in &[
            DigestAlgorithm::Sha1,
            DigestAlgorithm::Sha256,
            DigestAlgorithm::Sha384,
            DigestAlgorithm::Sha512,
        ] {
            registry.register(alg.name(), *alg);
        }
        registry
    }

    /// The read-only registry used by `DigestAlgorithm::from_str`.
    pub fn global() -> &'static AlgorithmRegistry {
        &GLOBAL_REGISTRY
    }

    /// Add (or replace) an entry.
    pub fn register<S: Into<String>>(&mut self, name: S, algorithm: DigestAlgorithm) -> &mut Self {
        self.table.insert(name.into(), algorithm);
        self
    }

    pub fn lookup(&self, name: &str) -> Result<DigestAlgorithm> {
        match self.table.get(name) {
            Some(alg) => Ok(*alg),
            None => Err(Error::UnsupportedAlgorithm {
                name: name.to_string(),
                available: AlgorithmNames(self.names().map(str::to_string).collect()),
            }),
        }
    }

    /// All registered names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn standard_names() {
        let registry = AlgorithmRegistry::standard();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["sha1", "sha256", "sha384", "sha512"]);
    }

    #[test]
    fn from_str_known() {
        assert_eq!(
            DigestAlgorithm::from_str("sha384").unwrap(),
            DigestAlgorithm::Sha384
        );
        assert_eq!("sha1".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha1);
    }

    #[test]
    fn unknown_lists_available() {
        match DigestAlgorithm::from_str("md4") {
            Err(Error::UnsupportedAlgorithm { name, available }) => {
                assert_eq!(name, "md4");
                assert!(available.contains("sha256"));
                assert_eq!(available.0.len(), 4);
            }
            r => panic!("unexpected result {:?}", r),
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!(DigestAlgorithm::from_str("SHA256").is_err());
    }

    #[test]
    fn register_alias() {
        let mut registry = AlgorithmRegistry::new();
        registry
            .register("SHA-512", DigestAlgorithm::Sha512)
            .register("sha512", DigestAlgorithm::Sha512);
        assert_eq!(registry.lookup("SHA-512").unwrap(), DigestAlgorithm::Sha512);
        assert_eq!(registry.lookup("SHA-512").unwrap().name(), "sha512");
        assert!(registry.lookup("sha256").is_err());
    }

    #[test]
    fn output_len_matches_name() {
        assert_eq!(DigestAlgorithm::Sha1.output_len(), 20);
        assert_eq!(DigestAlgorithm::Sha512.output_len(), 64);
        assert_eq!(format!("{}", DigestAlgorithm::Sha256), "sha256");
    }

    #[test]
    fn hasher_handle() {
        let mut hasher = DigestAlgorithm::Sha384.hasher().unwrap();
        hasher.update(b"abc").unwrap();
        assert_eq!(hasher.finish().unwrap().len(), 48);
    }

    #[test]
    fn check_len() {
        assert_eq!(DigestAlgorithm::Sha1.check_len(vec![0; 20]).unwrap().len(), 20);
        match DigestAlgorithm::Sha256.check_len(vec![0; 4]) {
            Err(CryptoError::DigestLength {
                algorithm,
                expected,
                actual,
            }) => {
                assert_eq!(algorithm, DigestAlgorithm::Sha256);
                assert_eq!(expected, 32);
                assert_eq!(actual, 4);
            }
            r => panic!("unexpected result {:?}", r),
        }
    }
}
