use crate::timestamp::{self, Timestamp};
use crate::{IntoMoney, LedgerError, Money, MoneyError, Result};

use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Deposit,
    Withdraw,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
        }
    }
}

impl FromStr for OperationKind {
    type Err = LedgerError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deposit" => Ok(Self::Deposit),
            "withdraw" => Ok(Self::Withdraw),
            _ => Err(LedgerError::InvalidOperationKind(s.to_string())),
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single deposit or withdrawal. Once built it cannot be changed; the timestamp is taken from
/// the system clock at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    kind: OperationKind,
    amount: Money,
    timestamp: Timestamp,
    description: String,
}

/// An operation laid out for a statement table: the amount sits in exactly one of the two columns
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRow {
    pub timestamp: Timestamp,
    pub description: String,
    pub withdrawal: Option<Money>,
    pub deposit: Option<Money>,
}

impl Operation {
    /// Builds an operation from a kind name (`"deposit"` or `"withdraw"`, any case) and a
    /// strictly positive amount. A missing or blank description defaults to the kind's name.
    pub fn new(kind: &str, amount: impl IntoMoney, description: Option<&str>) -> Result<Self> {
        let kind = kind.parse()?;

        Self::from_kind(kind, amount, description)
    }

    pub fn from_kind(
        kind: OperationKind,
        amount: impl IntoMoney,
        description: Option<&str>,
    ) -> Result<Self> {
        Self::stamped(kind, amount, description, timestamp::now())
    }

    pub(crate) fn stamped(
        kind: OperationKind,
        amount: impl IntoMoney,
        description: Option<&str>,
        timestamp: Timestamp,
    ) -> Result<Self> {
        let amount = amount.into_money().map_err(|e| match e {
            MoneyError::Parse(_, input) => LedgerError::InvalidAmount(input),
            other => LedgerError::InvalidAmount(other.to_string()),
        })?;

        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount.to_string()));
        }

        let description = match description.map(str::trim) {
            Some(description) if !description.is_empty() => description.to_string(),
            _ => kind.as_str().to_string(),
        };

        Ok(Self {
            kind,
            amount,
            timestamp,
            description,
        })
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Balance after this operation: deposits add, withdrawals subtract
    pub fn apply_to(&self, balance: Money) -> Result<Money> {
        let mut balance = balance;

        match self.kind {
            OperationKind::Deposit => balance.add(&self.amount)?,
            OperationKind::Withdraw => balance.sub(&self.amount)?,
        }

        Ok(balance)
    }

    pub fn table_row(&self) -> OperationRow {
        let (withdrawal, deposit) = match self.kind {
            OperationKind::Withdraw => (Some(self.amount), None),
            OperationKind::Deposit => (None, Some(self.amount)),
        };

        OperationRow {
            timestamp: self.timestamp,
            description: self.description.clone(),
            withdrawal,
            deposit,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "date: {} | type: {} | amount: {}",
            timestamp::format_timestamp(&self.timestamp),
            self.kind,
            self.amount
        )
    }
}
