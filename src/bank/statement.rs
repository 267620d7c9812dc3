use crate::ids::ClientId;
use crate::{Currency, Money, Result, Timestamp};

/// One operation inside a statement window, with the balance right after it
#[derive(Debug, Clone, PartialEq)]
pub struct StatementRow {
    pub timestamp: Timestamp,
    pub description: String,
    pub withdrawal: Option<Money>,
    pub deposit: Option<Money>,
    pub balance: Money,
}

/// Read-only report over the operations of one account between `since` and `till` (inclusive).
///
/// `total_deposits - total_withdrawals == closing_balance - opening_balance` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementReport {
    pub client_id: ClientId,
    pub currency: Currency,
    pub since: Timestamp,
    pub till: Timestamp,
    pub opening_balance: Money,
    pub rows: Vec<StatementRow>,
    pub total_withdrawals: Money,
    pub total_deposits: Money,
    pub closing_balance: Money,
}

impl StatementReport {
    /// Closing balance minus opening balance
    pub fn net_change(&self) -> Result<Money> {
        let mut net = self.closing_balance;
        net.sub(&self.opening_balance)?;

        Ok(net)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
