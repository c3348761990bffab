//! Running balance of the cashbook.
//!
//! [`balance`] folds the entries with `f64` arithmetic, which is what the
//! screen has always shown: `0.1 + 0.2` prints as `0.30000000000000004`.
//! [`exact_balance`] is the same fold over integer minor units. Switching the
//! screen from one to the other changes visible output, so it is a
//! configuration choice, not a silent fix.

use crate::{EngineError, Entry, Money};

/// Signed float sum of the entries: credits added, debits subtracted.
///
/// An entry whose amount is not a number poisons the result with NaN.
pub fn balance(entries: &[Entry]) -> f64 {
    entries
        .iter()
        .fold(0.0, |acc, entry| acc + entry.signed_amount())
}

/// Signed sum of the entries in minor units.
pub fn exact_balance(entries: &[Entry]) -> Result<Money, EngineError> {
    entries.iter().try_fold(Money::ZERO, |acc, entry| {
        acc.checked_add(entry.signed_money()?)
            .ok_or_else(|| EngineError::InvalidAmount("balance overflow".to_string()))
    })
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;
    use crate::EntryKind;

    fn entry(kind: EntryKind, amount: &str) -> Entry {
        Entry::new("note", amount, kind, DateTime::<Utc>::UNIX_EPOCH)
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(balance(&[]), 0.0);
        assert_eq!(exact_balance(&[]).unwrap(), Money::ZERO);
    }

    #[test]
    fn single_debit_is_negative() {
        let entries = [entry(EntryKind::Out, "50")];
        assert_eq!(balance(&entries), -50.0);
        assert_eq!(exact_balance(&entries).unwrap(), Money::new(-5000));
    }

    #[test]
    fn credit_minus_debit() {
        let entries = [entry(EntryKind::In, "100"), entry(EntryKind::Out, "30")];
        assert_eq!(balance(&entries), 70.0);
        assert_eq!(exact_balance(&entries).unwrap(), Money::new(7000));
    }

    #[test]
    fn float_fold_drifts_where_exact_does_not() {
        let entries = [entry(EntryKind::In, "0.1"), entry(EntryKind::In, "0.2")];
        assert_eq!(balance(&entries).to_string(), "0.30000000000000004");
        assert_eq!(exact_balance(&entries).unwrap().to_string(), "0.30");
    }

    #[test]
    fn garbage_amount() {
        let entries = [entry(EntryKind::In, "10"), entry(EntryKind::In, "ten")];
        assert!(balance(&entries).is_nan());
        assert!(matches!(
            exact_balance(&entries),
            Err(EngineError::InvalidAmount(_))
        ));
    }

    #[test]
    fn exact_balance_reports_overflow() {
        let entries = [
            entry(EntryKind::In, "92233720368547758"),
            entry(EntryKind::In, "1"),
        ];
        assert_eq!(
            exact_balance(&entries),
            Err(EngineError::InvalidAmount("balance overflow".to_string()))
        );
    }
}
