use crate::LedgerError;

/// Convenience type to make error mapping cleaner
pub type Result<T = ()> = std::result::Result<T, LedgerError>;
