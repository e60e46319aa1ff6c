//! # Fixed-Point Amounts
//!
//! Balances and transfer amounts are signed 64-bit counts of minor units with
//! eight fractional decimal digits. Every replica performs the same integer
//! arithmetic, so a block applied on any platform yields identical balances.
//!
//! ## Wire Form
//!
//! Amounts serialize as decimal strings (`"111"`, `"99.9"`, `"-5"`). Plain
//! JSON integers are accepted on input as whole coins; JSON floats are
//! rejected because they cannot be decoded deterministically.

use crate::errors::AmountError;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use serde_with::SerializeDisplay;
use std::fmt;
use std::str::FromStr;

/// Number of fractional decimal digits.
pub const DECIMALS: u32 = 8;

/// Minor units in one whole coin.
pub const MINOR_UNITS_PER_COIN: i64 = 100_000_000;

/// A fixed-point quantity of coins.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay,
)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Whole coins, `None` if the value does not fit.
    pub fn from_coins(coins: i64) -> Option<Self> {
        coins.checked_mul(MINOR_UNITS_PER_COIN).map(Self)
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }

    /// `self * percentage / 100`, rounded half-to-even on minor units.
    ///
    /// The intermediate product is computed in 128 bits and the result is
    /// bounded by `self` for percentages up to 100, so it cannot overflow.
    pub fn percentage_half_even(self, percentage: u8) -> Amount {
        let negative = self.0 < 0;
        let numerator = i128::from(self.0).abs() * i128::from(percentage);
        let mut quotient = numerator / 100;
        let remainder = numerator % 100;
        if remainder > 50 || (remainder == 50 && quotient % 2 == 1) {
            quotient += 1;
        }
        let magnitude = i64::try_from(quotient).unwrap_or(i64::MAX);
        Amount(if negative { -magnitude } else { magnitude })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let scale = MINOR_UNITS_PER_COIN as u64;
        let whole = magnitude / scale;
        let fraction = magnitude % scale;
        if fraction == 0 {
            return write!(f, "{sign}{whole}");
        }
        let digits = format!("{fraction:08}");
        write!(f, "{sign}{whole}.{}", digits.trim_end_matches('0'))
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AmountError::InvalidLiteral(s.to_string());

        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, fraction) = match body.split_once('.') {
            Some((w, f)) => (w, Some(f)),
            None => (body, None),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let fraction = fraction.unwrap_or("");
        if body.contains('.') && fraction.is_empty() {
            return Err(invalid());
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if fraction.len() > DECIMALS as usize {
            return Err(AmountError::TooPrecise { max: DECIMALS });
        }
        // i64::MAX has 19 digits; anything longer overflows regardless of scale.
        if whole.len() > 19 {
            return Err(AmountError::Overflow);
        }

        let whole: i128 = whole.parse().map_err(|_| invalid())?;
        let mut fraction_minor: i128 = 0;
        if !fraction.is_empty() {
            let padded = format!("{fraction:0<8}");
            fraction_minor = padded.parse().map_err(|_| invalid())?;
        }

        let mut minor = whole * i128::from(MINOR_UNITS_PER_COIN) + fraction_minor;
        if negative {
            minor = -minor;
        }
        i64::try_from(minor)
            .map(Amount)
            .map_err(|_| AmountError::Overflow)
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal string or an integer number of coins")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
        Amount::from_coins(v).ok_or_else(|| E::custom(AmountError::Overflow))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
        let coins = i64::try_from(v).map_err(|_| E::custom(AmountError::Overflow))?;
        self.visit_i64(coins)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amt(s: &str) -> Amount {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(amt("111").minor(), 111 * MINOR_UNITS_PER_COIN);
        assert_eq!(amt("99.9").minor(), 9_990_000_000);
        assert_eq!(amt("0.00000001").minor(), 1);
        assert_eq!(amt("-111").minor(), -111 * MINOR_UNITS_PER_COIN);

        assert_eq!(amt("99.90").to_string(), "99.9");
        assert_eq!(amt("0.00000001").to_string(), "0.00000001");
        assert_eq!(amt("-2.5").to_string(), "-2.5");
        assert_eq!(Amount::ZERO.to_string(), "0");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "-", ".5", "5.", "1.2.3", "+1", "1e3", " 1", "abc", "1,5"] {
            assert!(bad.parse::<Amount>().is_err(), "accepted {bad:?}");
        }
        assert_eq!(
            "1.000000001".parse::<Amount>(),
            Err(AmountError::TooPrecise { max: DECIMALS })
        );
        assert_eq!(
            "99999999999999999999".parse::<Amount>(),
            Err(AmountError::Overflow)
        );
        assert_eq!("92233720369".parse::<Amount>(), Err(AmountError::Overflow));
    }

    #[test]
    fn test_percentage_half_even() {
        // 10% of 111 is exact.
        assert_eq!(amt("111").percentage_half_even(10), amt("11.1"));
        // 0.5 minor units rounds to even.
        assert_eq!(Amount::from_minor(5).percentage_half_even(10), Amount::from_minor(0));
        assert_eq!(Amount::from_minor(15).percentage_half_even(10), Amount::from_minor(2));
        assert_eq!(Amount::from_minor(25).percentage_half_even(10), Amount::from_minor(2));
        // Above half rounds up, below half rounds down.
        assert_eq!(Amount::from_minor(7).percentage_half_even(10), Amount::from_minor(1));
        assert_eq!(Amount::from_minor(3).percentage_half_even(10), Amount::from_minor(0));

        assert_eq!(amt("111").percentage_half_even(0), Amount::ZERO);
        assert_eq!(amt("111").percentage_half_even(100), amt("111"));
        let max = Amount::from_minor(i64::MAX);
        assert_eq!(max.percentage_half_even(100), max);
    }

    #[test]
    fn test_checked_arithmetic() {
        let max = Amount::from_minor(i64::MAX);
        assert_eq!(max.checked_add(Amount::from_minor(1)), None);
        assert_eq!(amt("11").checked_sub(amt("111")), Some(amt("-100")));
    }

    #[test]
    fn test_json_forms() {
        assert_eq!(serde_json::to_string(&amt("99.9")).unwrap(), "\"99.9\"");
        assert_eq!(serde_json::from_str::<Amount>("\"111\"").unwrap(), amt("111"));
        assert_eq!(serde_json::from_str::<Amount>("111").unwrap(), amt("111"));
        assert_eq!(serde_json::from_str::<Amount>("-111").unwrap(), amt("-111"));
        assert!(serde_json::from_str::<Amount>("111.5").is_err());
    }
}
