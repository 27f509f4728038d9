use rust_decimal::Decimal;

/// A single balance movement. Amounts are magnitudes; the sign comes from the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceChange {
    Deposit(Decimal),
    Withdrawal(Decimal),
}

impl BalanceChange {
    pub fn amount(&self) -> Decimal {
        match self {
            Self::Deposit(amount) | Self::Withdrawal(amount) => *amount,
        }
    }

    pub fn signed_amount(&self) -> Decimal {
        match self {
            Self::Deposit(amount) => *amount,
            Self::Withdrawal(amount) => -*amount,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Deposit(_) => "deposit",
            Self::Withdrawal(_) => "withdrawal",
        }
    }
}
