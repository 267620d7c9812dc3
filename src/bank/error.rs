use crate::ids::ClientId;
use crate::{Currency, Money, MoneyError, Timestamp};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Cannot register operation with amount {0:?}: provide a positive number")]
    InvalidAmount(String),

    #[error("Operation type {0:?} is not supported, try one of [deposit, withdraw]")]
    InvalidOperationKind(String),

    #[error("Not enough money to proceed: balance is {balance}, requested {requested}")]
    InsufficientFunds { balance: Money, requested: Money },

    #[error("Invalid currency code: {0:?}")]
    InvalidCurrency(String),

    #[error("Account for {client_id} is held in {expected}, not {requested}")]
    CurrencyMismatch {
        client_id: ClientId,
        expected: Currency,
        requested: Currency,
    },

    #[error("Invalid client id: {0:?}")]
    InvalidClientId(String),

    #[error("Invalid timestamp {0:?}, use format YYYY-MM-DD HH:MM:SS")]
    InvalidTimestamp(String),

    #[error("Operation dated {timestamp} is older than the last logged operation ({last})")]
    OutOfOrder { timestamp: Timestamp, last: Timestamp },

    #[error(transparent)]
    Money(#[from] MoneyError),
}
