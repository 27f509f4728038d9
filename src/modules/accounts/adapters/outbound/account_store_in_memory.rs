// In memory implementation of the AccountStore port.
//
// Purpose
// - Support handler tests, concurrency tests and local development without a database.
//
// Responsibilities
// - Store accounts in a map keyed by id.
// - Enforce optimistic concurrency: a conditional update only lands when the expected version
//   still matches, and it assigns the successor version under the same write lock.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::accounts::core::account::{Account, BalanceUpdate, NewAccount};
use crate::modules::accounts::core::ports::{AccountStore, RecordStoreError};
use crate::shared::core::primitives::VersionToken;

pub struct InMemoryAccountStore<V: VersionToken> {
    accounts: RwLock<HashMap<String, Account<V>>>,
    is_offline: bool,
    delay_update_ms: AtomicU64,
    reads: AtomicU64,
    committed_updates: AtomicU64,
}

impl<V: VersionToken> Default for InMemoryAccountStore<V> {
    fn default() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            is_offline: false,
            delay_update_ms: AtomicU64::new(0),
            reads: AtomicU64::new(0),
            committed_updates: AtomicU64::new(0),
        }
    }
}

impl<V: VersionToken> InMemoryAccountStore<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Sleep before every conditional update. Widens the window between read and write so
    /// concurrent callers collide.
    pub fn set_delay_update_ms(&self, ms: u64) {
        self.delay_update_ms.store(ms, Ordering::Relaxed);
    }

    pub fn reads(&self) -> u64 {
        self.reads.load(Ordering::Relaxed)
    }

    pub fn committed_updates(&self) -> u64 {
        self.committed_updates.load(Ordering::Relaxed)
    }

    fn ensure_online(&self) -> Result<(), RecordStoreError> {
        if self.is_offline {
            return Err(RecordStoreError::Backend("Account store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<V: VersionToken> AccountStore<V> for InMemoryAccountStore<V> {
    async fn get(&self, id: &str) -> Result<Account<V>, RecordStoreError> {
        self.ensure_online()?;
        self.reads.fetch_add(1, Ordering::Relaxed);
        self.accounts
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| RecordStoreError::NotFound(id.to_string()))
    }

    async fn conditional_update(
        &self,
        id: &str,
        expected_version: &V,
        update: BalanceUpdate,
    ) -> Result<Account<V>, RecordStoreError> {
        self.ensure_online()?;
        let delay = self.delay_update_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.accounts.write().await;
        let account = guard
            .get_mut(id)
            .ok_or_else(|| RecordStoreError::NotFound(id.to_string()))?;
        if account.version != *expected_version {
            return Err(RecordStoreError::VersionMismatch {
                id: id.to_string(),
                expected: expected_version.to_string(),
                actual: account.version.to_string(),
            });
        }
        account.balance = update.balance;
        account.version = account.version.successor();
        self.committed_updates.fetch_add(1, Ordering::Relaxed);
        Ok(account.clone())
    }

    async fn create(&self, account: NewAccount) -> Result<Account<V>, RecordStoreError> {
        self.ensure_online()?;
        let created = Account {
            id: Uuid::now_v7().to_string(),
            owner_name: account.owner_name,
            balance: account.balance,
            version: V::initial(),
        };
        self.accounts
            .write()
            .await
            .insert(created.id.clone(), created.clone());
        Ok(created)
    }

    async fn delete(&self, id: &str) -> Result<(), RecordStoreError> {
        self.ensure_online()?;
        self.accounts
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| RecordStoreError::NotFound(id.to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Account<V>>, RecordStoreError> {
        self.ensure_online()?;
        let mut accounts: Vec<_> = self.accounts.read().await.values().cloned().collect();
        // v7 ids sort in creation order
        accounts.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(accounts)
    }
}
