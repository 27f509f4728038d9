use std::marker::PhantomData;
use std::sync::Arc;

use crate::modules::accounts::core::account::Account;
use crate::modules::accounts::core::errors::ApplicationError;
use crate::modules::accounts::core::ports::AccountStore;
use crate::shared::core::primitives::VersionToken;

/// Read side: single snapshots straight from the store, nothing cached.
pub struct AccountQueries<V, TStore>
where
    V: VersionToken,
    TStore: AccountStore<V> + 'static,
{
    store: Arc<TStore>,
    _version: PhantomData<fn() -> V>,
}

impl<V, TStore> AccountQueries<V, TStore>
where
    V: VersionToken,
    TStore: AccountStore<V> + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self {
            store,
            _version: PhantomData,
        }
    }

    pub async fn find(&self, account_id: &str) -> Result<Account<V>, ApplicationError> {
        Ok(self.store.get(account_id).await?)
    }

    pub async fn list(&self) -> Result<Vec<Account<V>>, ApplicationError> {
        Ok(self.store.list_all().await?)
    }
}
