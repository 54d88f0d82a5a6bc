//! XPTO entity model.

use serde::{Deserialize, Serialize};

/// Database-assigned identifier of an XPTO entity.
pub type XptoId = u64;

/// Record identified by a database-generated id.
///
/// `id` stays `0` until the entity has been created through a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XptoEntity {
    pub id: XptoId,
    pub label: String,
}

impl XptoEntity {
    /// Creates a not-yet-persisted entity.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: 0,
            label: label.into(),
        }
    }

    /// Returns whether a repository has assigned an identifier.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
