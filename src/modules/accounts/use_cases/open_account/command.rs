use rust_decimal::Decimal;

use crate::modules::accounts::core::account::NewAccount;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAccount {
    pub owner_name: String,
    pub initial_balance: Decimal,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OpenAccountError {
    #[error("owner name must not be blank")]
    BlankOwnerName,

    #[error("initial balance must not be negative, got {0}")]
    NegativeBalance(Decimal),
}

pub fn decide_open(command: OpenAccount) -> Result<NewAccount, OpenAccountError> {
    let owner_name = command.owner_name.trim();
    if owner_name.is_empty() {
        return Err(OpenAccountError::BlankOwnerName);
    }
    if command.initial_balance < Decimal::ZERO {
        return Err(OpenAccountError::NegativeBalance(command.initial_balance));
    }
    Ok(NewAccount {
        owner_name: owner_name.to_string(),
        balance: command.initial_balance,
    })
}

#[cfg(test)]
mod open_account_decide_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_accept_a_zero_balance_and_trim_the_name() {
        let account = decide_open(OpenAccount {
            owner_name: "  Ada ".into(),
            initial_balance: Decimal::ZERO,
        })
        .unwrap();
        assert_eq!(account.owner_name, "Ada");
        assert_eq!(account.balance, Decimal::ZERO);
    }

    #[rstest]
    #[case("", Decimal::ONE, OpenAccountError::BlankOwnerName)]
    #[case("Ada", Decimal::NEGATIVE_ONE, OpenAccountError::NegativeBalance(Decimal::NEGATIVE_ONE))]
    fn it_should_reject_invalid_accounts(
        #[case] owner_name: &str,
        #[case] initial_balance: Decimal,
        #[case] expected: OpenAccountError,
    ) {
        let decision = decide_open(OpenAccount {
            owner_name: owner_name.into(),
            initial_balance,
        });
        assert_eq!(decision, Err(expected));
    }
}
