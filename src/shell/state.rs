use std::sync::Arc;

use crate::modules::accounts::adapters::outbound::account_store_in_memory::InMemoryAccountStore;
use crate::modules::accounts::use_cases::change_balance::handler::MutationEngine;
use crate::modules::accounts::use_cases::change_balance::retry_policy::RetryPolicy;
use crate::modules::accounts::use_cases::close_account::handler::CloseAccountHandler;
use crate::modules::accounts::use_cases::open_account::handler::OpenAccountHandler;
use crate::modules::accounts::use_cases::query_accounts::handler::AccountQueries;
use crate::shared::core::primitives::CounterVersion;

pub type AccountVersion = CounterVersion;
pub type Store = InMemoryAccountStore<AccountVersion>;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<AccountQueries<AccountVersion, Store>>,
    pub open_handler: Arc<OpenAccountHandler<AccountVersion, Store>>,
    pub close_handler: Arc<CloseAccountHandler<AccountVersion, Store>>,
    pub mutation_engine: Arc<MutationEngine<AccountVersion, Store>>,
}

impl AppState {
    pub fn new(store: Arc<Store>, policy: RetryPolicy) -> Self {
        Self {
            queries: Arc::new(AccountQueries::new(store.clone())),
            open_handler: Arc::new(OpenAccountHandler::new(store.clone())),
            close_handler: Arc::new(CloseAccountHandler::new(store.clone())),
            mutation_engine: Arc::new(MutationEngine::new(store, policy)),
        }
    }
}
