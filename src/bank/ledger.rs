use crate::{LedgerError, Money, Operation, Result, Timestamp};

/// Represents a WORM (Write Once, Read Many) log of one account's operations, along with the
/// balance they fold to.
///
/// Operations are kept in append order, which is also non-decreasing timestamp order: anything
/// older than the last logged operation is refused.
#[derive(Debug, Default)]
pub(crate) struct Ledger {
    history: Vec<Operation>,
    balance: Money,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn history(&self) -> &[Operation] {
        &self.history
    }

    /// Appends `operation` unless it would take the balance below zero. A refused operation
    /// leaves both the history and the balance as they were.
    pub fn append(&mut self, operation: Operation) -> Result<usize> {
        if let Some(last) = self.history.last() {
            if operation.timestamp() < last.timestamp() {
                return Err(LedgerError::OutOfOrder {
                    timestamp: *operation.timestamp(),
                    last: *last.timestamp(),
                });
            }
        }

        let balance = operation.apply_to(self.balance)?;

        if balance.is_negative() {
            return Err(LedgerError::InsufficientFunds {
                balance: self.balance,
                requested: operation.amount(),
            });
        }

        let index = self.history.len();

        self.history.push(operation);
        self.balance = balance;

        Ok(index)
    }

    /// Balance right after every operation stamped at or before `date`
    pub fn balance_as_of(&self, date: &Timestamp) -> Result<Money> {
        self.replay_while(|timestamp| timestamp <= date)
    }

    /// Timestamp of the newest logged operation
    pub fn last_timestamp(&self) -> Option<&Timestamp> {
        self.history.last().map(Operation::timestamp)
    }

    /// Operations stamped within the inclusive bounds, in log order
    pub fn operations_between<'a>(
        &'a self,
        since: &'a Timestamp,
        till: &'a Timestamp,
    ) -> impl Iterator<Item = &'a Operation> + 'a {
        self.history.iter().filter(move |operation| {
            let timestamp = operation.timestamp();
            since <= timestamp && timestamp <= till
        })
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // relies on the history being sorted by timestamp
    fn replay_while(&self, keep: impl Fn(&Timestamp) -> bool) -> Result<Money> {
        let mut balance = Money::ZERO;

        for operation in self.history.iter() {
            if !keep(operation.timestamp()) {
                break;
            }

            balance = operation.apply_to(balance)?;
        }

        Ok(balance)
    }
}
