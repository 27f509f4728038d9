use std::marker::PhantomData;
use std::sync::Arc;

use tracing::info;

use crate::modules::accounts::core::account::Account;
use crate::modules::accounts::core::errors::ApplicationError;
use crate::modules::accounts::core::ports::AccountStore;
use crate::modules::accounts::use_cases::open_account::command::{OpenAccount, decide_open};
use crate::shared::core::primitives::VersionToken;

pub struct OpenAccountHandler<V, TStore>
where
    V: VersionToken,
    TStore: AccountStore<V> + 'static,
{
    store: Arc<TStore>,
    _version: PhantomData<fn() -> V>,
}

impl<V, TStore> OpenAccountHandler<V, TStore>
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

    #[tracing::instrument(skip_all, fields(owner_name = %command.owner_name))]
    pub async fn handle(&self, command: OpenAccount) -> Result<Account<V>, ApplicationError> {
        let new_account =
            decide_open(command).map_err(|e| ApplicationError::Validation(e.to_string()))?;
        let account = self.store.create(new_account).await?;
        info!(account_id = %account.id, balance = %account.balance, "account opened");
        Ok(account)
    }
}

#[cfg(test)]
mod open_account_handler_tests {
    use super::*;
    use crate::modules::accounts::adapters::outbound::account_store_in_memory::InMemoryAccountStore;
    use crate::modules::accounts::core::ports::RecordStoreError;
    use crate::shared::core::primitives::CounterVersion;
    use rstest::{fixture, rstest};
    use rust_decimal::Decimal;

    #[fixture]
    fn command() -> OpenAccount {
        OpenAccount {
            owner_name: "Cliente Concorrente".into(),
            initial_balance: Decimal::from(100),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_open_and_persist_the_account(command: OpenAccount) {
        let store = Arc::new(InMemoryAccountStore::<CounterVersion>::new());
        let handler = OpenAccountHandler::<CounterVersion, _>::new(store.clone());
        let account = handler.handle(command).await.unwrap();
        assert_eq!(account.balance, Decimal::from(100));
        assert_eq!(account.version, CounterVersion(0));
        assert_eq!(store.get(&account.id).await.unwrap(), account);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_touch_the_store_for_an_invalid_account(command: OpenAccount) {
        let store = Arc::new(InMemoryAccountStore::<CounterVersion>::new());
        let handler = OpenAccountHandler::<CounterVersion, _>::new(store.clone());
        let result = handler
            .handle(OpenAccount {
                initial_balance: Decimal::NEGATIVE_ONE,
                ..command
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::Validation(_))));
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_store_is_offline(command: OpenAccount) {
        let mut store = InMemoryAccountStore::<CounterVersion>::new();
        store.toggle_offline();
        let handler = OpenAccountHandler::<CounterVersion, _>::new(Arc::new(store));
        let result = handler.handle(command).await;
        assert_eq!(
            result,
            Err(ApplicationError::Store(RecordStoreError::Backend(
                "Account store offline".into()
            )))
        );
    }
}
