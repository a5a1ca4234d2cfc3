//! Audit metadata shared by persisted entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation and modification timestamps, managed by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditMetadata {
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl AuditMetadata {
    /// Stamp a freshly inserted record
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump the modification time, keeping the creation time
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for AuditMetadata {
    fn default() -> Self {
        Self::now()
    }
}
