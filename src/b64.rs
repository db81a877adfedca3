//! This module contains basic base64 functionality as used in Hawk.

use base64::engine::general_purpose::{GeneralPurpose, STANDARD};
use base64::Engine;

/// STANDARD_ENGINE encodes with the standard alphabet and includes padding.
pub(crate) const STANDARD_ENGINE: GeneralPurpose = STANDARD;

/// Encode bytes with the standard alphabet, as used for `mac`, `hash` and Basic credentials.
pub(crate) fn encode<T: AsRef<[u8]>>(input: T) -> String {
    STANDARD_ENGINE.encode(input)
}
