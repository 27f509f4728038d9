// Optimistic read-modify-write of an account balance.
//
// Each attempt reads a fresh snapshot, decides the new balance and writes it conditionally on
// the version it read. A version mismatch is retried after the policy's backoff; every other
// failure ends the call. No lock is held across attempts, including during the backoff sleep.

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::modules::accounts::core::account::Account;
use crate::modules::accounts::core::errors::ApplicationError;
use crate::modules::accounts::core::ports::AccountStore;
use crate::modules::accounts::use_cases::change_balance::command::BalanceChange;
use crate::modules::accounts::use_cases::change_balance::conflict::{Classification, classify};
use crate::modules::accounts::use_cases::change_balance::decide::{
    DecideError, decide_balance_change, validate_change,
};
use crate::modules::accounts::use_cases::change_balance::retry_policy::RetryPolicy;
use crate::shared::core::primitives::VersionToken;

pub struct MutationEngine<V, TStore>
where
    V: VersionToken,
    TStore: AccountStore<V> + 'static,
{
    store: Arc<TStore>,
    policy: RetryPolicy,
    _version: PhantomData<fn() -> V>,
}

impl<V, TStore> MutationEngine<V, TStore>
where
    V: VersionToken,
    TStore: AccountStore<V> + 'static,
{
    pub fn new(store: Arc<TStore>, policy: RetryPolicy) -> Self {
        Self {
            store,
            policy,
            _version: PhantomData,
        }
    }

    pub async fn deposit(
        &self,
        account_id: &str,
        amount: Decimal,
    ) -> Result<Account<V>, ApplicationError> {
        self.apply_delta(account_id, BalanceChange::Deposit(amount))
            .await
    }

    pub async fn withdraw(
        &self,
        account_id: &str,
        amount: Decimal,
    ) -> Result<Account<V>, ApplicationError> {
        self.apply_delta(account_id, BalanceChange::Withdrawal(amount))
            .await
    }

    pub async fn deposit_within(
        &self,
        account_id: &str,
        amount: Decimal,
        deadline: Duration,
    ) -> Result<Account<V>, ApplicationError> {
        self.apply_delta_within(account_id, BalanceChange::Deposit(amount), deadline)
            .await
    }

    pub async fn withdraw_within(
        &self,
        account_id: &str,
        amount: Decimal,
        deadline: Duration,
    ) -> Result<Account<V>, ApplicationError> {
        self.apply_delta_within(account_id, BalanceChange::Withdrawal(amount), deadline)
            .await
    }

    #[tracing::instrument(skip(self), fields(kind = change.kind()))]
    pub async fn apply_delta(
        &self,
        account_id: &str,
        change: BalanceChange,
    ) -> Result<Account<V>, ApplicationError> {
        validate_change(&change).map_err(|e| rejection(account_id, e))?;
        let mut attempts = 0;
        self.run(account_id, &change, &mut attempts).await
    }

    /// Like [`Self::apply_delta`], but gives up once `deadline` has elapsed. An attempt cut short
    /// by the deadline never leaves a partial write behind: the conditional write either landed
    /// before the cut or not at all.
    #[tracing::instrument(skip(self), fields(kind = change.kind()))]
    pub async fn apply_delta_within(
        &self,
        account_id: &str,
        change: BalanceChange,
        deadline: Duration,
    ) -> Result<Account<V>, ApplicationError> {
        validate_change(&change).map_err(|e| rejection(account_id, e))?;
        let mut attempts = 0;
        let outcome =
            tokio::time::timeout(deadline, self.run(account_id, &change, &mut attempts)).await;
        match outcome {
            Ok(result) => result,
            Err(_) => {
                warn!(account_id, attempts, ?deadline, "deadline exceeded");
                Err(ApplicationError::DeadlineExceeded { deadline, attempts })
            }
        }
    }

    async fn run(
        &self,
        account_id: &str,
        change: &BalanceChange,
        attempts: &mut u32,
    ) -> Result<Account<V>, ApplicationError> {
        loop {
            *attempts += 1;
            let attempt = *attempts;

            let current = self.store.get(account_id).await?;
            let update =
                decide_balance_change(&current, change).map_err(|e| rejection(account_id, e))?;

            let error = match self
                .store
                .conditional_update(account_id, &current.version, update)
                .await
            {
                Ok(updated) => {
                    debug!(account_id, attempt, version = %updated.version, "balance updated");
                    return Ok(updated);
                }
                Err(error) => error,
            };

            let conflict = match classify(error) {
                Classification::Fatal(error) => return Err(error.into()),
                Classification::Retryable(conflict) => conflict,
            };

            if !self.policy.has_attempts_left(attempt) {
                warn!(account_id, attempts = attempt, %conflict, "retry budget exhausted");
                return Err(ApplicationError::ConcurrencyExhausted {
                    attempts: attempt,
                    last_conflict: conflict,
                });
            }

            let delay = self.policy.delay_for(attempt);
            debug!(account_id, attempt, ?delay, %conflict, "version conflict, retrying");
            tokio::time::sleep(delay).await;
        }
    }
}

fn rejection(account_id: &str, error: DecideError) -> ApplicationError {
    match error {
        DecideError::InsufficientFunds { balance, requested } => {
            ApplicationError::InsufficientFunds {
                account_id: account_id.to_string(),
                balance,
                requested,
            }
        }
        other => ApplicationError::Validation(other.to_string()),
    }
}
