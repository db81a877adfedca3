use crate::context::RandomSource;

/// Nonces are drawn from lowercase ASCII letters and digits.
pub const NONCE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Number of characters in a generated nonce.
pub const NONCE_LENGTH: usize = 6;

/// Generate a fresh nonce.  Nothing is remembered between calls, so two requests may
/// (rarely) share a nonce.
pub fn generate_nonce(random: &dyn RandomSource) -> String {
    random.token(NONCE_ALPHABET, NONCE_LENGTH)
}
