use rust_decimal::Decimal;
use std::time::Duration;
use thiserror::Error;

use crate::modules::accounts::core::ports::RecordStoreError;
use crate::modules::accounts::use_cases::change_balance::conflict::VersionConflict;

/// Every outcome other than success that an account operation reports to its caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("account {0} not found")]
    NotFound(String),

    #[error("insufficient funds on account {account_id}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        account_id: String,
        balance: Decimal,
        requested: Decimal,
    },

    #[error("operation failed after {attempts} attempts due to concurrent modification: {last_conflict}")]
    ConcurrencyExhausted {
        attempts: u32,
        last_conflict: VersionConflict,
    },

    #[error("deadline of {deadline:?} exceeded after {attempts} attempts")]
    DeadlineExceeded { deadline: Duration, attempts: u32 },

    #[error(transparent)]
    Store(RecordStoreError),
}

impl From<RecordStoreError> for ApplicationError {
    fn from(error: RecordStoreError) -> Self {
        match error {
            RecordStoreError::NotFound(id) => ApplicationError::NotFound(id),
            other => ApplicationError::Store(other),
        }
    }
}
