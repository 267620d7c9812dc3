pub mod account;
mod currency;
mod error;
pub mod ids;
mod ledger;
mod money;
pub mod operation;
pub mod registry;
mod result;
pub mod statement;
pub mod timestamp;

pub use account::Account;
pub use currency::Currency;
pub use error::LedgerError;
pub use money::{IntoMoney, Money, MoneyError};
pub use operation::{Operation, OperationKind, OperationRow};
pub use registry::Registry;
pub use result::Result;
pub use statement::{StatementReport, StatementRow};
pub use timestamp::Timestamp;
