use crate::format::Locale;

use bank::Currency;

use std::env;

use anyhow::{Context, Result};
use log::LevelFilter;
use simple_logger::SimpleLogger;

const CURRENCY_VAR: &str = "BANK_CURRENCY";
const LOCALE_VAR: &str = "BANK_LOCALE";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Currency new accounts are opened in
    pub currency: Currency,

    /// How money is printed in statements
    pub locale: Locale,
}

/// Sets up logging (warnings by default, `RUST_LOG` overrides) and reads the environment
pub fn configure_app() -> Result<AppConfig> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    let config = build_config(env::var(CURRENCY_VAR).ok(), env::var(LOCALE_VAR).ok())?;

    log::debug!("Using {config:?}");

    return Ok(config);
}

fn build_config(currency: Option<String>, locale: Option<String>) -> Result<AppConfig> {
    let currency = match currency {
        Some(code) => code
            .parse::<Currency>()
            .with_context(|| format!("Invalid {CURRENCY_VAR}"))?,
        None => Currency::default(),
    };

    let locale = match locale {
        Some(name) => name
            .parse::<Locale>()
            .with_context(|| format!("Invalid {LOCALE_VAR}"))?,
        None => Locale::default(),
    };

    Ok(AppConfig { currency, locale })
}
