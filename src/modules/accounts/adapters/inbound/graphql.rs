use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};
use rust_decimal::Decimal;

use crate::modules::accounts::core::account::Account;
use crate::modules::accounts::use_cases::change_balance::command::BalanceChange;
use crate::modules::accounts::use_cases::open_account::command::OpenAccount;
use crate::shared::core::primitives::VersionToken;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlAccount {
    pub id: ID,
    pub owner_name: String,
    pub balance: Decimal,
    pub version: String,
}

impl<V: VersionToken> From<Account<V>> for GqlAccount {
    fn from(account: Account<V>) -> Self {
        Self {
            id: ID(account.id),
            owner_name: account.owner_name,
            balance: account.balance,
            version: account.version.to_string(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn account(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlAccount> {
        let state = context.data_unchecked::<AppState>();
        let account = state
            .queries
            .find(&id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(account.into())
    }

    async fn accounts(&self, context: &Context<'_>) -> GqlResult<Vec<GqlAccount>> {
        let state = context.data_unchecked::<AppState>();
        let accounts = state
            .queries
            .list()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(accounts.into_iter().map(Into::into).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn open_account(
        &self,
        context: &Context<'_>,
        owner_name: String,
        balance: Option<Decimal>,
    ) -> GqlResult<GqlAccount> {
        let state = context.data_unchecked::<AppState>();
        let account = state
            .open_handler
            .handle(OpenAccount {
                owner_name,
                initial_balance: balance.unwrap_or_default(),
            })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(account.into())
    }

    async fn deposit(
        &self,
        context: &Context<'_>,
        id: ID,
        amount: Decimal,
    ) -> GqlResult<GqlAccount> {
        change_balance(context, &id, BalanceChange::Deposit(amount)).await
    }

    async fn withdraw(
        &self,
        context: &Context<'_>,
        id: ID,
        amount: Decimal,
    ) -> GqlResult<GqlAccount> {
        change_balance(context, &id, BalanceChange::Withdrawal(amount)).await
    }

    async fn close_account(&self, context: &Context<'_>, id: ID) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        state
            .close_handler
            .handle(&id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(id)
    }
}

async fn change_balance(
    context: &Context<'_>,
    account_id: &str,
    change: BalanceChange,
) -> GqlResult<GqlAccount> {
    let state = context.data_unchecked::<AppState>();
    let account = state
        .mutation_engine
        .apply_delta(account_id, change)
        .await
        .map_err(|e| async_graphql::Error::new(e.to_string()))?;
    Ok(account.into())
}
