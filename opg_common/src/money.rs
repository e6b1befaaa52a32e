use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Sub, SubAssign},
    str::FromStr,
};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sqlx::Type;
use thiserror::Error;

use crate::op;

pub const DEFAULT_CURRENCY_CODE: &str = "USD";

const CENTS_PER_UNIT: i64 = 100;

//--------------------------------------       Money       -----------------------------------------------------------

/// A fixed-point monetary amount, held as integer cents.
///
/// Binary floating point never touches the value. Amounts are parsed from, and rendered as, decimal strings with at
/// most two fraction digits ("100.00", "99", "0.5"), so totals round-trip exactly over JSON and the database.
#[derive(Debug, Clone, Copy, Default, Type, Ord, PartialOrd)]
#[sqlx(transparent)]
pub struct Money(i64);

op!(binary Money, Add, add);
op!(binary Money, Sub, sub);
op!(inplace Money, SubAssign, sub_assign);

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[derive(Debug, Clone, Error)]
#[error("Value cannot be represented as a money amount: {0}")]
pub struct MoneyConversionError(pub String);

impl Money {
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// The amount in integer cents.
    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl From<i64> for Money {
    fn from(cents: i64) -> Self {
        Self(cents)
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Money {}

impl FromStr for Money {
    type Err = MoneyConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('-') {
            return Err(MoneyConversionError(format!("Amounts may not be negative: {s}")));
        }
        let (units, cents) = match s.split_once('.') {
            Some((u, c)) => (u, c),
            None => (s, ""),
        };
        if units.is_empty() && cents.is_empty() {
            return Err(MoneyConversionError(format!("'{s}' is not a decimal amount")));
        }
        if cents.len() > 2 {
            return Err(MoneyConversionError(format!("At most two fraction digits are supported: {s}")));
        }
        let all_digits = units.chars().chain(cents.chars()).all(|c| c.is_ascii_digit());
        if !all_digits {
            return Err(MoneyConversionError(format!("'{s}' is not a decimal amount")));
        }
        let units = if units.is_empty() {
            0i64
        } else {
            units.parse::<i64>().map_err(|e| MoneyConversionError(format!("'{s}': {e}")))?
        };
        let cents = match cents.len() {
            0 => 0,
            // "0.5" means 50 cents, not 5
            1 => cents.parse::<i64>().map_err(|e| MoneyConversionError(format!("'{s}': {e}")))? * 10,
            _ => cents.parse::<i64>().map_err(|e| MoneyConversionError(format!("'{s}': {e}")))?,
        };
        units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|v| v.checked_add(cents))
            .map(Self)
            .ok_or_else(|| MoneyConversionError(format!("Value {s} is too large to represent in cents")))
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.abs();
        write!(f, "{sign}{}.{:02}", cents / CENTS_PER_UNIT, cents % CENTS_PER_UNIT)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_whole_amounts() {
        assert_eq!("100".parse::<Money>().unwrap(), Money::from_cents(10_000));
        assert_eq!("0".parse::<Money>().unwrap(), Money::from_cents(0));
    }

    #[test]
    fn parse_fractional_amounts() {
        assert_eq!("100.00".parse::<Money>().unwrap(), Money::from_cents(10_000));
        assert_eq!("99.99".parse::<Money>().unwrap(), Money::from_cents(9_999));
        assert_eq!("0.5".parse::<Money>().unwrap(), Money::from_cents(50));
        assert_eq!(".75".parse::<Money>().unwrap(), Money::from_cents(75));
        assert_eq!("12.".parse::<Money>().unwrap(), Money::from_cents(1_200));
    }

    #[test]
    fn reject_invalid_amounts() {
        assert!("-1".parse::<Money>().is_err());
        assert!("".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
        assert!("1.234".parse::<Money>().is_err());
        assert!("12,50".parse::<Money>().is_err());
        assert!("ten".parse::<Money>().is_err());
        assert!("1e3".parse::<Money>().is_err());
    }

    #[test]
    fn display_round_trips_exactly() {
        for s in ["100.00", "0.05", "0.50", "1234567.89"] {
            let amount = s.parse::<Money>().unwrap();
            assert_eq!(amount.to_string(), s);
        }
        assert_eq!("7".parse::<Money>().unwrap().to_string(), "7.00");
    }

    #[test]
    fn arithmetic() {
        let a = Money::from_cents(150);
        let b = Money::from_cents(50);
        assert_eq!(a + b, Money::from_cents(200));
        assert_eq!(a - b, Money::from_cents(100));
        assert_eq!(vec![a, b, b].into_iter().sum::<Money>(), Money::from_cents(250));
        let mut c = a;
        c -= b;
        assert_eq!(c, Money::from_cents(100));
    }

    #[test]
    fn serde_uses_decimal_strings() {
        let amount = "100.00".parse::<Money>().unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, r#""100.00""#);
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
    }
}
