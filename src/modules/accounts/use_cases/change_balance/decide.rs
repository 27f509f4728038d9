// Pure decision functions for balance changes.
//
// Responsibilities
// - Reject non-positive amounts before anything is read.
// - Compute the candidate balance from a snapshot and refuse to go below zero.
// - Never perform input or output.

use rust_decimal::Decimal;

use crate::modules::accounts::core::account::{Account, BalanceUpdate};
use crate::modules::accounts::use_cases::change_balance::command::BalanceChange;
use crate::shared::core::primitives::VersionToken;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("the {kind} amount must be positive, got {amount}")]
    NonPositiveAmount { kind: &'static str, amount: Decimal },

    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Decimal, requested: Decimal },

    #[error("balance overflow")]
    Overflow,

    #[error("the {kind} of {amount} cannot be represented exactly on a balance of {balance}")]
    PrecisionLoss {
        kind: &'static str,
        amount: Decimal,
        balance: Decimal,
    },
}

pub fn validate_change(change: &BalanceChange) -> Result<(), DecideError> {
    if change.amount() <= Decimal::ZERO {
        return Err(DecideError::NonPositiveAmount {
            kind: change.kind(),
            amount: change.amount(),
        });
    }
    Ok(())
}

pub fn decide_balance_change<V: VersionToken>(
    account: &Account<V>,
    change: &BalanceChange,
) -> Result<BalanceUpdate, DecideError> {
    validate_change(change)?;
    let candidate = account
        .balance
        .checked_add(change.signed_amount())
        .ok_or(DecideError::Overflow)?;
    // checked_add rounds once the sum needs more than 28 significant digits
    if candidate - account.balance != change.signed_amount() {
        return Err(DecideError::PrecisionLoss {
            kind: change.kind(),
            amount: change.amount(),
            balance: account.balance,
        });
    }
    if candidate < Decimal::ZERO {
        return Err(DecideError::InsufficientFunds {
            balance: account.balance,
            requested: change.amount(),
        });
    }
    Ok(BalanceUpdate { balance: candidate })
}
