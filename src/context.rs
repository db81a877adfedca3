use rand::seq::SliceRandom;
use std::time::{SystemTime, UNIX_EPOCH};

/// A source of the current time, in seconds since the Unix epoch.
///
/// Production code uses `SystemClock`; tests inject a `FixedClock`.
pub trait Clock {
    fn now(&self) -> u64;
}

/// A source of random tokens drawn from an alphabet.
pub trait RandomSource {
    fn token(&self, alphabet: &[u8], length: usize) -> String;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// A clock that always reads the same time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}

/// Random tokens from the thread-local generator.  This is not required to be a
/// cryptographically secure source: nonces only need to avoid collisions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn token(&self, alphabet: &[u8], length: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..length)
            .filter_map(|_| alphabet.choose(&mut rng))
            .map(|&b| char::from(b))
            .collect()
    }
}

/// A source that always returns the same token, ignoring the alphabet and length.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedNonce(pub String);

impl RandomSource for FixedNonce {
    fn token(&self, _alphabet: &[u8], _length: usize) -> String {
        self.0.clone()
    }
}
