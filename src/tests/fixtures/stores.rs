// Store fixtures shared by handler and inbound adapter tests.

use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use rust_decimal::Decimal;

use crate::modules::accounts::adapters::outbound::account_store_in_memory::InMemoryAccountStore;
use crate::modules::accounts::core::account::{Account, BalanceUpdate, NewAccount};
use crate::modules::accounts::core::ports::{AccountStore, RecordStoreError};
use crate::shared::core::primitives::{CounterVersion, VersionToken};

pub async fn seeded_store(
    balance: &str,
) -> (
    Arc<InMemoryAccountStore<CounterVersion>>,
    Account<CounterVersion>,
) {
    let store = Arc::new(InMemoryAccountStore::<CounterVersion>::new());
    let account = store
        .create(NewAccount {
            owner_name: "Ada Lovelace".to_string(),
            balance: Decimal::from_str(balance).unwrap(),
        })
        .await
        .unwrap();
    (store, account)
}

/// A store whose record always moves on just before our write lands.
pub struct AlwaysConflictingStore {
    balance: Decimal,
    reads: AtomicU64,
    writes: AtomicU64,
}

impl AlwaysConflictingStore {
    pub fn new(balance: &str) -> Self {
        Self {
            balance: Decimal::from_str(balance).unwrap(),
            reads: AtomicU64::new(0),
            writes: AtomicU64::new(0),
        }
    }

    pub fn reads(&self) -> u64 {
        self.reads.load(Ordering::Relaxed)
    }

    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }
}

#[async_trait::async_trait]
impl AccountStore<CounterVersion> for AlwaysConflictingStore {
    async fn get(&self, id: &str) -> Result<Account<CounterVersion>, RecordStoreError> {
        let read = self.reads.fetch_add(1, Ordering::Relaxed);
        Ok(Account {
            id: id.to_string(),
            owner_name: "Contended".to_string(),
            balance: self.balance,
            version: CounterVersion(read),
        })
    }

    async fn conditional_update(
        &self,
        id: &str,
        expected_version: &CounterVersion,
        _update: BalanceUpdate,
    ) -> Result<Account<CounterVersion>, RecordStoreError> {
        self.writes.fetch_add(1, Ordering::Relaxed);
        Err(RecordStoreError::VersionMismatch {
            id: id.to_string(),
            expected: expected_version.to_string(),
            actual: expected_version.successor().to_string(),
        })
    }

    async fn create(
        &self,
        _account: NewAccount,
    ) -> Result<Account<CounterVersion>, RecordStoreError> {
        Err(RecordStoreError::Backend("read-only fixture".into()))
    }

    async fn delete(&self, _id: &str) -> Result<(), RecordStoreError> {
        Err(RecordStoreError::Backend("read-only fixture".into()))
    }

    async fn list_all(&self) -> Result<Vec<Account<CounterVersion>>, RecordStoreError> {
        Ok(Vec::new())
    }
}
