use crate::ids::ClientId;
use crate::ledger::Ledger;
use crate::{
    timestamp, Currency, IntoMoney, Money, Operation, OperationKind, Registry, Result,
    StatementReport, StatementRow, Timestamp,
};

use std::sync::Arc;

use parking_lot::RwLock;

/// A client's account: the ordered history of its operations plus the running balance.
///
/// Appends take the write lock for the whole check-and-push, so readers only ever see a balance
/// that matches the history.
#[derive(Debug)]
pub struct Account {
    client_id: ClientId,
    currency: Currency,
    ledger: RwLock<Ledger>,
}

impl Account {
    pub(crate) fn new(client_id: ClientId, currency: Currency) -> Self {
        Self {
            client_id,
            currency,
            ledger: RwLock::new(Ledger::new()),
        }
    }

    /// The one account of `client_id` in the process-wide registry, created on first use
    pub fn get_or_create(client_id: impl Into<ClientId>) -> Arc<Account> {
        Registry::global().get_or_create(client_id)
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn balance(&self) -> Money {
        self.ledger.read().balance()
    }

    /// Copy of the operation log, oldest first
    pub fn operations(&self) -> Vec<Operation> {
        self.ledger.read().history().to_vec()
    }

    pub fn len(&self) -> usize {
        self.ledger.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.read().is_empty()
    }

    /// Appends `operation`, failing with `InsufficientFunds` if it would leave a negative balance
    pub fn append(&self, operation: Operation) -> Result {
        let mut ledger = self.ledger.write();

        self.append_to(&mut ledger, operation)
    }

    /// Builds an operation and appends it. Errors from either step are returned as they are.
    ///
    /// The operation is stamped with the current time, or with the newest logged timestamp if the
    /// clock reads earlier than that, so a clock stepping backwards never rejects it.
    pub fn create_and_append(
        &self,
        kind: &str,
        amount: impl IntoMoney,
        description: Option<&str>,
    ) -> Result {
        let kind: OperationKind = kind.parse()?;

        let mut ledger = self.ledger.write();

        let now = timestamp::now();
        let stamp = match ledger.last_timestamp() {
            Some(last) if *last > now => *last,
            _ => now,
        };
        let operation = Operation::stamped(kind, amount, description, stamp)?;

        self.append_to(&mut ledger, operation)
    }

    /// Balance reconstructed from every operation up to and including `date`
    pub fn balance_as_of(&self, date: &Timestamp) -> Result<Money> {
        self.ledger.read().balance_as_of(date)
    }

    /// Statement for operations stamped between `since` and `till`, both inclusive.
    ///
    /// The opening balance is `balance_as_of(since)`, so an operation stamped exactly at `since`
    /// is counted in it and is also listed as the first row. Running balances start from the
    /// opening balance, and `total_deposits - total_withdrawals == closing - opening` holds.
    ///
    /// Totals use the same checked arithmetic as balances. A column whose sum exceeds the `i64`
    /// range fails with `LedgerError::Money` even when every balance fits, e.g. after deposit
    /// `MAX`, withdraw `MAX`, deposit `MAX`.
    pub fn statement(&self, since: &Timestamp, till: &Timestamp) -> Result<StatementReport> {
        let ledger = self.ledger.read();

        let opening_balance = ledger.balance_as_of(since)?;

        let mut balance = opening_balance;
        let mut total_withdrawals = Money::ZERO;
        let mut total_deposits = Money::ZERO;
        let mut rows = vec![];

        for operation in ledger.operations_between(since, till) {
            balance = operation.apply_to(balance)?;

            let row = operation.table_row();

            if let Some(amount) = row.withdrawal {
                total_withdrawals.add(&amount)?;
            }
            if let Some(amount) = row.deposit {
                total_deposits.add(&amount)?;
            }

            rows.push(StatementRow {
                timestamp: row.timestamp,
                description: row.description,
                withdrawal: row.withdrawal,
                deposit: row.deposit,
                balance,
            });
        }

        log::debug!(
            "Built statement for {} with {} rows between {since} and {till}",
            self.client_id,
            rows.len()
        );

        Ok(StatementReport {
            client_id: self.client_id.clone(),
            currency: self.currency,
            since: *since,
            till: *till,
            opening_balance,
            rows,
            total_withdrawals,
            total_deposits,
            closing_balance: balance,
        })
    }

    fn append_to(&self, ledger: &mut Ledger, operation: Operation) -> Result {
        log::debug!("Appending to {}: {operation}", self.client_id);

        match ledger.append(operation) {
            Ok(index) => {
                log::debug!(
                    "Appended at index {index}, balance of {} is now {}",
                    self.client_id,
                    ledger.balance()
                );
                Ok(())
            }
            Err(e) => {
                log::debug!("Rejected operation for {}: {e}", self.client_id);
                Err(e)
            }
        }
    }
}
