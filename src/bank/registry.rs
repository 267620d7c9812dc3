use crate::ids::ClientId;
use crate::{Account, Currency, LedgerError, Result};

use std::sync::{Arc, OnceLock};

use dashmap::DashMap;

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Keyed store of accounts guaranteeing one account per client.
///
/// Lookups and creation go through the map's entry API, so concurrent callers asking for the
/// same client always get the same `Arc<Account>`.
#[derive(Debug, Default)]
pub struct Registry {
    accounts: DashMap<ClientId, Arc<Account>>,
    default_currency: Currency,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry whose new accounts are held in `currency`
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            accounts: DashMap::new(),
            default_currency: currency,
        }
    }

    /// Process-wide registry, created on first use and never dropped
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(Registry::new)
    }

    pub fn default_currency(&self) -> Currency {
        self.default_currency
    }

    /// Returns the client's account, creating it in the default currency on first reference
    pub fn get_or_create(&self, client_id: impl Into<ClientId>) -> Arc<Account> {
        self.find_or_create(client_id.into(), self.default_currency)
    }

    /// Like [`Registry::get_or_create`], but the first call fixes the account's currency and
    /// later calls asking for a different one fail with `CurrencyMismatch`.
    pub fn get_or_create_in(
        &self,
        client_id: impl Into<ClientId>,
        currency: Currency,
    ) -> Result<Arc<Account>> {
        let client_id = client_id.into();
        let account = self.find_or_create(client_id.clone(), currency);

        if account.currency() != currency {
            return Err(LedgerError::CurrencyMismatch {
                client_id,
                expected: account.currency(),
                requested: currency,
            });
        }

        Ok(account)
    }

    pub fn get(&self, client_id: &ClientId) -> Option<Arc<Account>> {
        self.accounts
            .get(client_id)
            .map(|account| Arc::clone(account.value()))
    }

    /// Registered client ids, sorted
    pub fn client_ids(&self) -> Vec<ClientId> {
        let mut ids: Vec<ClientId> = self
            .accounts
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        ids.sort();

        ids
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn find_or_create(&self, client_id: ClientId, currency: Currency) -> Arc<Account> {
        let entry = self
            .accounts
            .entry(client_id.clone())
            .or_insert_with(|| {
                log::debug!("Creating {currency} account for {client_id}");
                Arc::new(Account::new(client_id, currency))
            });

        Arc::clone(entry.value())
    }
}
