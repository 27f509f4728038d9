use std::marker::PhantomData;
use std::sync::Arc;

use tracing::info;

use crate::modules::accounts::core::errors::ApplicationError;
use crate::modules::accounts::core::ports::AccountStore;
use crate::shared::core::primitives::VersionToken;

pub struct CloseAccountHandler<V, TStore>
where
    V: VersionToken,
    TStore: AccountStore<V> + 'static,
{
    store: Arc<TStore>,
    _version: PhantomData<fn() -> V>,
}

impl<V, TStore> CloseAccountHandler<V, TStore>
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

    /// Checks the account exists, then removes it. The store's own delete also reports a
    /// missing id, so an account removed between the two steps still yields `NotFound`.
    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, account_id: &str) -> Result<(), ApplicationError> {
        self.store.get(account_id).await?;
        self.store.delete(account_id).await?;
        info!(account_id, "account closed");
        Ok(())
    }
}
