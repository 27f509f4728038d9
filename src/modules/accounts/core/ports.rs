// Ports define what the accounts core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the versioned record store as a trait so the mutation engine never depends on a database.
//
// Responsibilities
// - `conditional_update` must be atomic: compare the stored version with the expected one,
//   write the new fields and assign a fresh version, or fail with `VersionMismatch`.
//
// Testing guidance
// - The in memory adapter implements this port for tests and local development.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::accounts::core::account::{Account, BalanceUpdate, NewAccount};
use crate::shared::core::primitives::VersionToken;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordStoreError {
    #[error("version mismatch on account {id}: expected {expected}, actual {actual}")]
    VersionMismatch {
        id: String,
        expected: String,
        actual: String,
    },

    #[error("account {0} not found")]
    NotFound(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait AccountStore<V: VersionToken>: Send + Sync {
    async fn get(&self, id: &str) -> Result<Account<V>, RecordStoreError>;

    async fn conditional_update(
        &self,
        id: &str,
        expected_version: &V,
        update: BalanceUpdate,
    ) -> Result<Account<V>, RecordStoreError>;

    async fn create(&self, account: NewAccount) -> Result<Account<V>, RecordStoreError>;

    async fn delete(&self, id: &str) -> Result<(), RecordStoreError>;

    async fn list_all(&self) -> Result<Vec<Account<V>>, RecordStoreError>;
}
