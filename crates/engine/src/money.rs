use std::{
    fmt,
    ops::Neg,
    str::FromStr,
};

use crate::{Currency, EngineError};

/// Signed money amount represented as **integer minor units** (paise).
///
/// Used by the exact balance to avoid floating-point drift.
///
/// The value is signed:
/// - positive = money in
/// - negative = money out
///
/// # Examples
///
/// ```rust
/// use engine::{Currency, Money};
///
/// let amount = Money::new(1_234_50);
/// assert_eq!(amount.minor(), 123450);
/// assert_eq!(amount.format(Currency::Inr), "1,234.50 ₹");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator; rejects >
/// 2 decimals):
///
/// ```rust
/// use engine::Money;
///
/// assert_eq!("10".parse::<Money>().unwrap().minor(), 1000);
/// assert_eq!("10,5".parse::<Money>().unwrap().minor(), 1050);
/// assert!("12.345".parse::<Money>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from integer minor units.
    #[must_use]
    pub const fn new(minor: i64) -> Self {
        Self(minor)
    }

    /// Returns the raw value in minor units.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Formats the amount with thousands separators and the currency symbol,
    /// e.g. `-1,234.50 ₹`.
    #[must_use]
    pub fn format(self, currency: Currency) -> String {
        let digits = u32::from(currency.minor_units());
        let scale = 10u64.pow(digits);
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let major = group_thousands(abs / scale);
        let minor = abs % scale;
        let width = digits as usize;
        format!("{sign}{major}.{minor:0width$} {}", currency.symbol())
    }
}

fn group_thousands(value: u64) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (idx, ch) in raw.chars().enumerate() {
        if idx > 0 && (raw.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money(-self.0)
    }
}

impl FromStr for Money {
    type Err = EngineError;

    /// Parses a decimal string into minor units.
    ///
    /// Accepts `.` or `,` as decimal separator and an optional leading `+`/`-`.
    /// A missing integer part is read as zero (`.5` is `0.50`), like a
    /// numeric form field does.
    ///
    /// Validation rules:
    /// - max 2 fractional digits (rejects `12.345`)
    /// - rejects empty/invalid strings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || EngineError::InvalidAmount("empty amount".to_string());
        let invalid = || EngineError::InvalidAmount(format!("invalid amount: {s:?}"));
        let overflow = || EngineError::InvalidAmount("amount too large".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let rest = rest.trim().replace(',', ".");
        if rest.is_empty() {
            return Err(empty());
        }

        let mut parts = rest.split('.');
        let major_str = parts.next().ok_or_else(invalid)?;
        let minor_str = parts.next();
        if parts.next().is_some() {
            return Err(invalid());
        }

        if major_str.is_empty() && minor_str.is_none_or(str::is_empty) {
            return Err(invalid());
        }
        if !major_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let major: i64 = if major_str.is_empty() {
            0
        } else {
            major_str.parse().map_err(|_| overflow())?
        };

        let minor: i64 = match minor_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => frac.parse::<i64>().map_err(|_| invalid())?,
                    _ => {
                        return Err(EngineError::InvalidAmount(
                            "too many decimals".to_string(),
                        ));
                    }
                }
            }
        };

        let total = major
            .checked_mul(100)
            .and_then(|v| v.checked_add(minor))
            .ok_or_else(overflow)?;

        let signed = if negative {
            total.checked_neg().ok_or_else(overflow)?
        } else {
            total
        };

        Ok(Money(signed))
    }
}
