use crate::LedgerError;

use std::{fmt, str::FromStr};

/// Three letter currency code an account is held in. Accounts never convert between currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency([u8; 3]);

impl Currency {
    pub const USD: Self = Self(*b"USD");
    pub const EUR: Self = Self(*b"EUR");
    pub const GBP: Self = Self(*b"GBP");

    pub fn as_str(&self) -> &str {
        // only ever built from ASCII letters
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::USD
    }
}

impl FromStr for Currency {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();

        let bytes: [u8; 3] = code
            .as_bytes()
            .try_into()
            .map_err(|_| LedgerError::InvalidCurrency(s.to_string()))?;

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(LedgerError::InvalidCurrency(s.to_string()));
        }

        Ok(Self(bytes))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("usd".parse::<Currency>(), Ok(Currency::USD));
        assert_eq!(" Eur ".parse::<Currency>(), Ok(Currency::EUR));
        assert_eq!("chf".parse::<Currency>().map(|c| c.to_string()), Ok("CHF".to_string()));
    }

    #[test]
    fn parse_rejects_invalid_codes() {
        for input in ["", "US", "USDT", "U$D", "12a"] {
            assert_eq!(
                input.parse::<Currency>(),
                Err(LedgerError::InvalidCurrency(input.to_string()))
            );
        }
    }

    #[test]
    fn default_is_usd() {
        assert_eq!(Currency::default(), Currency::USD);
        assert_eq!(Currency::default().as_str(), "USD");
    }
}
