//! OTPX entity model.

use serde::{Deserialize, Serialize};

/// Single-row record without an identifying field.
///
/// Storage rejects an empty `note`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpxEntity {
    pub note: String,
}

impl OtpxEntity {
    pub fn new(note: impl Into<String>) -> Self {
        Self { note: note.into() }
    }
}
