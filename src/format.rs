use bank::{Currency, Money};

use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LocaleError {
    #[error("Unsupported locale {0:?}, try one of [en_US, de_DE]")]
    Unsupported(String),
}

/// How money is written out for a region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub group_separator: char,
    pub decimal_separator: char,
    pub symbol_first: bool,
}

impl Locale {
    pub const EN_US: Self = Self {
        group_separator: ',',
        decimal_separator: '.',
        symbol_first: true,
    };

    pub const DE_DE: Self = Self {
        group_separator: '.',
        decimal_separator: ',',
        symbol_first: false,
    };
}

impl Default for Locale {
    fn default() -> Self {
        Self::EN_US
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('-', "_").to_lowercase().as_str() {
            "en_us" => Ok(Self::EN_US),
            "de_de" => Ok(Self::DE_DE),
            _ => Err(LocaleError::Unsupported(s.to_string())),
        }
    }
}

pub fn currency_symbol(currency: Currency) -> String {
    match currency {
        Currency::USD => "$".to_string(),
        Currency::EUR => "€".to_string(),
        Currency::GBP => "£".to_string(),
        other => other.to_string(),
    }
}

/// Formats `amount` for display, e.g. `$1,234.50` (en_US) or `1.234,50 €` (de_DE)
pub fn format_money(amount: Money, currency: Currency, locale: &Locale) -> String {
    let plain = amount.to_string();

    let (sign, digits) = match plain.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", plain.as_str()),
    };
    let (units, fraction) = digits.split_once('.').unwrap_or((digits, ""));

    let number = format!(
        "{}{}{fraction}",
        group_digits(units, locale.group_separator),
        locale.decimal_separator
    );

    let symbol = currency_symbol(currency);
    // bare currency codes need a gap, "CHF 5.00"
    let gap = if symbol.chars().all(|c| c.is_ascii_alphabetic()) || !locale.symbol_first {
        " "
    } else {
        ""
    };

    if locale.symbol_first {
        format!("{sign}{symbol}{gap}{number}")
    } else {
        format!("{sign}{number}{gap}{symbol}")
    }
}

fn group_digits(units: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(units.len() + units.len() / 3);

    for (idx, digit) in units.chars().enumerate() {
        if idx > 0 && (units.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn en_us() {
        let locale = Locale::EN_US;

        assert_eq!(format_money(Money(301_000), Currency::USD, &locale), "$30.10");
        assert_eq!(format_money(Money(12_345_000), Currency::USD, &locale), "$1,234.50");
        assert_eq!(
            format_money(Money(12_345_678_900_000), Currency::USD, &locale),
            "$1,234,567,890.00"
        );
        assert_eq!(format_money(Money(-50_000), Currency::USD, &locale), "-$5.00");
        assert_eq!(format_money(Money(3_990_160), Currency::USD, &locale), "$399.016");
        assert_eq!(format_money(Money::ZERO, Currency::GBP, &locale), "£0.00");
    }

    #[test]
    fn de_de() {
        let locale = Locale::DE_DE;

        assert_eq!(format_money(Money(12_345_000), Currency::EUR, &locale), "1.234,50 €");
        assert_eq!(format_money(Money(-50_000), Currency::USD, &locale), "-5,00 $");
    }

    #[test]
    fn currency_codes_without_symbol() {
        let chf: Currency = "CHF".parse().unwrap();

        assert_eq!(format_money(Money(50_000), chf, &Locale::EN_US), "CHF 5.00");
        assert_eq!(format_money(Money(50_000), chf, &Locale::DE_DE), "5,00 CHF");
    }

    #[test]
    fn parse_locale() {
        assert_eq!("en_US".parse::<Locale>(), Ok(Locale::EN_US));
        assert_eq!("de-DE".parse::<Locale>(), Ok(Locale::DE_DE));
        assert_eq!(
            "fr_FR".parse::<Locale>(),
            Err(LocaleError::Unsupported("fr_FR".to_string()))
        );
    }

    #[test]
    fn group_digits() {
        assert_eq!(super::group_digits("1", ','), "1");
        assert_eq!(super::group_digits("123", ','), "123");
        assert_eq!(super::group_digits("1234", ','), "1,234");
        assert_eq!(super::group_digits("123456", '.'), "123.456");
    }
}
