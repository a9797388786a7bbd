//! Fixed-point money and discount-rate arithmetic.
//!
//! Every amount is an integer count of minor units (cents). Decimal input is
//! parsed by string splitting and truncated toward zero at two fraction
//! digits; nothing in the ledger ever touches floating point.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// An amount of currency in minor units.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_minor_units(units: i64) -> Self {
        Money(units)
    }

    pub fn minor_units(self) -> i64 {
        self.0
    }

    /// Parses a decimal string such as `"300"` or `"300.125"`, truncating
    /// toward zero at two fraction digits (`"300.125"` becomes 30012 cents).
    pub fn parse(text: &str) -> Result<Self, LedgerError> {
        parse_fixed_2dp(text)
            .map(Money)
            .ok_or_else(|| LedgerError::InvalidAmount(format!("not a decimal amount: {text}")))
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// A merchant discount rate stored at scale 10⁻⁴ (one basis point per unit),
/// bounded to `0 ..= 10_000` (0% to 100%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DiscountRate(u32);

const RATE_SCALE: i64 = 10_000;

impl DiscountRate {
    /// Parses a percent string such as `"0.5"` (50 basis points). A trailing
    /// `%` is tolerated.
    pub fn from_percent(text: &str) -> Result<Self, LedgerError> {
        let trimmed = text.trim().trim_end_matches('%');
        let basis_points = parse_fixed_2dp(trimmed)
            .ok_or_else(|| LedgerError::InvalidDiscountRate(text.to_string()))?;
        Self::from_basis_points(basis_points)
    }

    pub fn from_basis_points(basis_points: i64) -> Result<Self, LedgerError> {
        if !(0..=RATE_SCALE).contains(&basis_points) {
            return Err(LedgerError::InvalidDiscountRate(format!(
                "{basis_points} basis points is outside 0..=10000"
            )));
        }
        Ok(DiscountRate(basis_points as u32))
    }

    pub fn basis_points(self) -> u32 {
        self.0
    }

    /// Discount owed on `amount`: `floor(amount * rate / 10_000)`. Truncation
    /// guarantees the discount leg plus the remainder leg sum exactly to the
    /// gross amount.
    pub fn discount_on(self, amount: Money) -> Money {
        let scaled = i128::from(amount.0) * i128::from(self.0) / i128::from(RATE_SCALE);
        Money(scaled as i64)
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Parses `text` as a decimal scaled by 100, truncating extra fraction
/// digits. Returns `None` for anything that is not a plain decimal number.
fn parse_fixed_2dp(text: &str) -> Option<i64> {
    let text = text.trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (digits, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }
    let whole: i64 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().ok()?
    };
    let mut frac = frac_part.bytes().take(2);
    let tens = frac.next().map_or(0, |b| i64::from(b - b'0'));
    let units = frac.next().map_or(0, |b| i64::from(b - b'0'));
    let minor = whole.checked_mul(100)?.checked_add(tens * 10 + units)?;
    Some(if negative { -minor } else { minor })
}
