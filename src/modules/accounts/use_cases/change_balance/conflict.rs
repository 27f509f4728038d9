use thiserror::Error;

use crate::modules::accounts::core::ports::RecordStoreError;

/// The stored version moved between our read and our write.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("account {account_id} was modified concurrently: expected version {expected}, found {actual}")]
pub struct VersionConflict {
    pub account_id: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Classification {
    Retryable(VersionConflict),
    Fatal(RecordStoreError),
}

/// Only a version mismatch is worth another attempt.
pub fn classify(error: RecordStoreError) -> Classification {
    match error {
        RecordStoreError::VersionMismatch {
            id,
            expected,
            actual,
        } => Classification::Retryable(VersionConflict {
            account_id: id,
            expected,
            actual,
        }),
        other => Classification::Fatal(other),
    }
}
