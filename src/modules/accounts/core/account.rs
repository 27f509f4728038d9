use rust_decimal::Decimal;
use serde::Serialize;

use crate::shared::core::primitives::VersionToken;

/// A balance-holding account as stored, together with the version it was read at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account<V: VersionToken> {
    pub id: String,
    pub owner_name: String,
    pub balance: Decimal,
    pub version: V,
}

/// Fields of an account that does not exist yet. The store assigns id and version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub owner_name: String,
    pub balance: Decimal,
}

/// Fields written by a conditional update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceUpdate {
    pub balance: Decimal,
}
