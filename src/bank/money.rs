use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1} and {2}")]
    Underflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Fixed-point monetary value with four decimal places, stored as ten-thousandths of a unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const DECIMALS: usize = 4;
    pub const SCALE: i64 = 10_000;

    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    /// Parses a plain decimal string such as `"20"`, `"0.1"` or `"-123.4567"`.
    ///
    /// More than four fraction digits is an error rather than a silent truncation.
    pub fn parse(string: &str) -> Result<Self, MoneyError> {
        let trimmed = string.trim();

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let mut parts = unsigned.split('.');
        let units = parts.next().unwrap_or_default();
        let fraction = parts.next().unwrap_or_default();

        if parts.next().is_some() {
            return Err(MoneyError::Parse("Too many decimal points", string.to_string()));
        }

        if units.is_empty() && fraction.is_empty() {
            return Err(MoneyError::Parse("No digits found", string.to_string()));
        }

        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(units) || !is_digits(fraction) {
            return Err(MoneyError::Parse("Not a number", string.to_string()));
        }

        if fraction.len() > Self::DECIMALS {
            return Err(MoneyError::Parse("Too many decimal places", string.to_string()));
        }

        let too_large = || MoneyError::Parse("Amount too large", string.to_string());

        let units: i64 = match units {
            "" => 0,
            units => units.parse().map_err(|_| too_large())?,
        };
        let fraction: i64 = format!("{:0<width$}", fraction, width = Self::DECIMALS)
            .parse()
            .map_err(|_| too_large())?;

        let value = units
            .checked_mul(Self::SCALE)
            .and_then(|value| value.checked_add(fraction))
            .ok_or_else(too_large)?;

        Ok(Money(if negative { -value } else { value }))
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds `other` in place. On overflow `self` is left untouched.
    pub fn add(&mut self, other: &Self) -> Result<(), MoneyError> {
        self.0 = match self.0.checked_add(other.0) {
            Some(value) => value,
            None if other.0 > 0 => return Err(MoneyError::Overflow("add", *self, *other)),
            None => return Err(MoneyError::Underflow("add", *self, *other)),
        };

        Ok(())
    }

    /// Subtracts `other` in place. On overflow `self` is left untouched.
    pub fn sub(&mut self, other: &Self) -> Result<(), MoneyError> {
        self.0 = match self.0.checked_sub(other.0) {
            Some(value) => value,
            None if other.0 > 0 => return Err(MoneyError::Underflow("sub", *self, *other)),
            None => return Err(MoneyError::Overflow("sub", *self, *other)),
        };

        Ok(())
    }
}

impl fmt::Display for Money {
    /// Plain decimal with two to four fraction digits, e.g. `30.10` or `0.0001`
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = Self::SCALE.unsigned_abs();

        let mut fraction = format!("{:0width$}", abs % scale, width = Self::DECIMALS);
        while fraction.len() > 2 && fraction.ends_with('0') {
            fraction.pop();
        }

        write!(f, "{sign}{}.{fraction}", abs / scale)
    }
}

/// Anything an operation amount may be given as: a decimal string, an integer or a float
pub trait IntoMoney {
    fn into_money(self) -> Result<Money, MoneyError>;
}

impl IntoMoney for Money {
    fn into_money(self) -> Result<Money, MoneyError> {
        Ok(self)
    }
}

impl IntoMoney for &str {
    fn into_money(self) -> Result<Money, MoneyError> {
        Money::parse(self)
    }
}

impl IntoMoney for String {
    fn into_money(self) -> Result<Money, MoneyError> {
        Money::parse(&self)
    }
}

impl IntoMoney for &String {
    fn into_money(self) -> Result<Money, MoneyError> {
        Money::parse(self)
    }
}

macro_rules! impl_into_money_for_int {
    ($($int:ty),*) => {
        $(
            impl IntoMoney for $int {
                fn into_money(self) -> Result<Money, MoneyError> {
                    i64::try_from(self)
                        .ok()
                        .and_then(|units| units.checked_mul(Money::SCALE))
                        .map(Money)
                        .ok_or_else(|| MoneyError::Parse("Amount too large", self.to_string()))
                }
            }
        )*
    };
}

impl_into_money_for_int!(i32, i64, u32, u64);

macro_rules! impl_into_money_for_float {
    ($($float:ty),*) => {
        $(
            impl IntoMoney for $float {
                fn into_money(self) -> Result<Money, MoneyError> {
                    if !self.is_finite() {
                        return Err(MoneyError::Parse("Not a finite number", self.to_string()));
                    }

                    // shortest round-trip rendering, so 0.1 stays "0.1"
                    Money::parse(&self.to_string())
                }
            }
        )*
    };
}

impl_into_money_for_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(Money::parse("20"), Ok(Money(200_000)));
        assert_eq!(Money::parse("0.1"), Ok(Money(1_000)));
        assert_eq!(Money::parse(" 123.4567 "), Ok(Money(1_234_567)));
        assert_eq!(Money::parse("-5"), Ok(Money(-50_000)));
        assert_eq!(Money::parse("+5.5"), Ok(Money(55_000)));
        assert_eq!(Money::parse(".5"), Ok(Money(5_000)));
        assert_eq!(Money::parse("5."), Ok(Money(50_000)));
    }

    #[test]
    fn parse_rejects_garbage() {
        for input in ["", " ", "-", ".", "abc", "1.2.3", "1e5", "12a", "- 5", "0x10"] {
            assert!(
                matches!(Money::parse(input), Err(MoneyError::Parse(..))),
                "expected parse error for {input:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_excess_precision() {
        assert_eq!(
            Money::parse("500.98412"),
            Err(MoneyError::Parse("Too many decimal places", "500.98412".to_string()))
        );
    }

    #[test]
    fn parse_rejects_overflow() {
        assert!(Money::parse("9223372036854775807").is_err());
        assert!(Money::parse("922337203685477.5807").is_ok());
    }

    #[test]
    fn add_and_sub() {
        let mut money = Money(100);

        assert!(money.add(&Money(50)).is_ok());
        assert_eq!(money, Money(150));

        assert!(money.sub(&Money(200)).is_ok());
        assert_eq!(money, Money(-50));
    }

    #[test]
    fn add_overflow_leaves_value_untouched() {
        let mut money = Money::MAX;

        assert_eq!(
            money.add(&Money(1)),
            Err(MoneyError::Overflow("add", Money::MAX, Money(1)))
        );
        assert_eq!(money, Money::MAX);

        let mut money = Money::MIN;
        assert!(matches!(money.sub(&Money(1)), Err(MoneyError::Underflow(..))));
        assert_eq!(money, Money::MIN);
    }

    #[test]
    fn display() {
        assert_eq!(Money(301_000).to_string(), "30.10");
        assert_eq!(Money(0).to_string(), "0.00");
        assert_eq!(Money(1).to_string(), "0.0001");
        assert_eq!(Money(12_345).to_string(), "1.2345");
        assert_eq!(Money(-50_000).to_string(), "-5.00");
        assert_eq!(Money::MIN.to_string(), "-922337203685477.5808");
    }

    #[test]
    fn into_money() {
        assert_eq!(20i32.into_money(), Ok(Money(200_000)));
        assert_eq!(0.1f64.into_money(), Ok(Money(1_000)));
        assert_eq!(125.5f32.into_money(), Ok(Money(1_255_000)));
        assert_eq!("40".into_money(), Ok(Money(400_000)));
        assert_eq!(String::from("-1").into_money(), Ok(Money(-10_000)));

        assert!(f64::NAN.into_money().is_err());
        assert!(f64::INFINITY.into_money().is_err());
        assert!(u64::MAX.into_money().is_err());
    }
}
