//! The module contains the `Entry` type, one recorded cash movement.
//!
//! Both money going out and money coming in are represented by `Entry`,
//! distinguished by [`EntryKind`].
use core::fmt;

use chrono::{DateTime, Utc};

use crate::{EngineError, Money};

/// Direction of a cash movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Debit, subtracted from the balance.
    Out,
    /// Credit, added to the balance.
    In,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Out => "out",
            Self::In => "in",
        }
    }

    /// Upper-case label used on the create button.
    pub fn label(self) -> &'static str {
        match self {
            Self::Out => "OUT",
            Self::In => "IN",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A committed cash movement. Never modified after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub note: String,
    /// The amount exactly as it was typed in the form.
    pub amount: String,
    pub kind: EntryKind,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    pub fn new(
        note: impl Into<String>,
        amount: impl Into<String>,
        kind: EntryKind,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            note: note.into(),
            amount: amount.into(),
            kind,
            created_at,
        }
    }

    /// Amount as a float, signed by kind. Unparsable text yields NaN.
    pub fn signed_amount(&self) -> f64 {
        let value = self.amount.trim().parse::<f64>().unwrap_or(f64::NAN);
        match self.kind {
            EntryKind::Out => -value,
            EntryKind::In => value,
        }
    }

    /// Amount in minor units, signed by kind.
    pub fn signed_money(&self) -> Result<Money, EngineError> {
        let value: Money = self.amount.parse()?;
        Ok(match self.kind {
            EntryKind::Out => -value,
            EntryKind::In => value,
        })
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.amount, self.note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: EntryKind, amount: &str) -> Entry {
        Entry::new("tea", amount, kind, DateTime::<Utc>::UNIX_EPOCH)
    }

    #[test]
    fn signed_amount_follows_kind() {
        assert_eq!(entry(EntryKind::In, "12.5").signed_amount(), 12.5);
        assert_eq!(entry(EntryKind::Out, "12.5").signed_amount(), -12.5);
    }

    #[test]
    fn signed_amount_is_nan_for_garbage() {
        assert!(entry(EntryKind::In, "abc").signed_amount().is_nan());
    }

    #[test]
    fn signed_money_follows_kind() {
        assert_eq!(entry(EntryKind::Out, "3.20").signed_money().unwrap(), Money::new(-320));
        assert!(entry(EntryKind::In, "3.201").signed_money().is_err());
    }

    #[test]
    fn display_shows_kind_amount_note() {
        assert_eq!(entry(EntryKind::Out, "9").to_string(), "out 9 tea");
    }
}
