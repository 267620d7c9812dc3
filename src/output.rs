use crate::format::{format_money, Locale};

use bank::timestamp::format_timestamp;
use bank::{Money, StatementReport};

use serde::Serialize;

/// One printed row of a bank statement table
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StatementLine {
    pub client: String,
    pub date: String,
    pub description: String,
    pub withdrawals: String,
    pub deposits: String,
    pub balance: String,
}

/// Lays a report out as rows: the previous balance, one row per operation, then the totals
pub fn statement_lines(report: &StatementReport, locale: &Locale) -> Vec<StatementLine> {
    let money = |amount: Money| format_money(amount, report.currency, locale);
    let line = |date: String, description: &str, withdrawals: String, deposits: String, balance: Money| {
        StatementLine {
            client: report.client_id.as_str().to_string(),
            date,
            description: description.to_string(),
            withdrawals,
            deposits,
            balance: money(balance),
        }
    };

    let mut lines = Vec::with_capacity(report.rows.len() + 2);

    lines.push(line(
        String::new(),
        "Previous balance",
        String::new(),
        String::new(),
        report.opening_balance,
    ));

    for row in report.rows.iter() {
        lines.push(line(
            format_timestamp(&row.timestamp),
            &row.description,
            row.withdrawal.map(money).unwrap_or_default(),
            row.deposit.map(money).unwrap_or_default(),
            row.balance,
        ));
    }

    lines.push(line(
        String::new(),
        "Totals",
        money(report.total_withdrawals),
        money(report.total_deposits),
        report.closing_balance,
    ));

    lines
}
