//! Display strings for entry timestamps and the header balance.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use engine::{Currency, EngineError, Money};

use crate::config::{BalanceMode, DateStyle};

const ABSOLUTE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders `at` for the entry list. `now` is only read by the relative style.
pub fn format_timestamp(at: DateTime<Utc>, now: DateTime<Utc>, style: DateStyle, tz: Tz) -> String {
    match style {
        DateStyle::Absolute => absolute(at, tz),
        DateStyle::Relative => relative(at, now).unwrap_or_else(|| absolute(at, tz)),
    }
}

fn absolute(at: DateTime<Utc>, tz: Tz) -> String {
    at.with_timezone(&tz).format(ABSOLUTE_FORMAT).to_string()
}

/// `None` once the entry is older than a week.
fn relative(at: DateTime<Utc>, now: DateTime<Utc>) -> Option<String> {
    let elapsed = now.signed_duration_since(at);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        Some("just now".to_string())
    } else if hours < 1 {
        Some(ago(minutes, "minute"))
    } else if days < 1 {
        Some(ago(hours, "hour"))
    } else if days < 7 {
        Some(ago(days, "day"))
    } else {
        None
    }
}

fn ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Header balance text, e.g. `70 ₹` (float) or `70.00 ₹` (exact).
pub fn format_balance(
    float: f64,
    exact: Result<Money, EngineError>,
    mode: BalanceMode,
    currency: Currency,
) -> String {
    match mode {
        BalanceMode::Float => format!("{} {}", float_text(float), currency.symbol()),
        BalanceMode::Exact => match exact {
            Ok(money) => money.format(currency),
            Err(err) => {
                tracing::warn!(%err, "exact balance unavailable");
                format!("? {}", currency.symbol())
            }
        },
    }
}

/// Float rendered the way a browser prints a number: no trailing `.0`,
/// no negative zero, exponent form below 1e-6 and from 1e21 up.
fn float_text(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value.is_nan() || (1e-6..1e21).contains(&value.abs()) {
        return value.to_string();
    }

    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use engine::{Entry, EntryKind, balance, exact_balance};

    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn absolute_uses_timezone() {
        let text = format_timestamp(
            at(0),
            at(0),
            DateStyle::Absolute,
            chrono_tz::Asia::Kolkata,
        );
        assert_eq!(text, "1970-01-01 05:30:00");
    }

    #[test]
    fn relative_buckets() {
        let now = at(1_700_000_000);
        let cases = [
            (Duration::seconds(-30), "just now"),
            (Duration::seconds(59), "just now"),
            (Duration::minutes(1), "1 minute ago"),
            (Duration::minutes(42), "42 minutes ago"),
            (Duration::hours(1), "1 hour ago"),
            (Duration::hours(23), "23 hours ago"),
            (Duration::days(1), "1 day ago"),
            (Duration::days(6), "6 days ago"),
        ];
        for (delta, expected) in cases {
            let text = format_timestamp(now - delta, now, DateStyle::Relative, chrono_tz::UTC);
            assert_eq!(text, expected, "delta {delta}");
        }
    }

    #[test]
    fn relative_falls_back_to_absolute_after_a_week() {
        let now = at(1_700_000_000);
        let text = format_timestamp(
            now - Duration::days(8),
            now,
            DateStyle::Relative,
            chrono_tz::UTC,
        );
        assert_eq!(text, "2023-11-06 22:13:20");
    }

    #[test]
    fn float_balance_prints_like_a_browser() {
        let fmt = |v| format_balance(v, Ok(Money::ZERO), BalanceMode::Float, Currency::Inr);
        assert_eq!(fmt(0.0), "0 ₹");
        assert_eq!(fmt(-0.0), "0 ₹");
        assert_eq!(fmt(70.0), "70 ₹");
        assert_eq!(fmt(-50.0), "-50 ₹");
        assert_eq!(fmt(0.1 + 0.2), "0.30000000000000004 ₹");
        assert_eq!(fmt(f64::NAN), "NaN ₹");
        assert_eq!(fmt(0.000001), "0.000001 ₹");
        assert_eq!(fmt(1e20), "100000000000000000000 ₹");
        assert_eq!(fmt(1e21), "1e+21 ₹");
        assert_eq!(fmt(-1.5e22), "-1.5e+22 ₹");
        assert_eq!(fmt(-2.5e-7), "-2.5e-7 ₹");
        assert_eq!(fmt(f64::INFINITY), "Infinity ₹");
        assert_eq!(fmt(f64::NEG_INFINITY), "-Infinity ₹");
    }

    #[test]
    fn float_drift_leftover_prints_in_exponent_form() {
        let entries = [
            Entry::new("a", "0.1", EntryKind::In, at(0)),
            Entry::new("b", "0.2", EntryKind::In, at(0)),
            Entry::new("c", "0.3", EntryKind::Out, at(0)),
        ];
        let text = format_balance(
            balance(&entries),
            exact_balance(&entries),
            BalanceMode::Float,
            Currency::Inr,
        );
        assert_eq!(text, "5.551115123125783e-17 ₹");

        let text = format_balance(
            balance(&entries),
            exact_balance(&entries),
            BalanceMode::Exact,
            Currency::Inr,
        );
        assert_eq!(text, "0.00 ₹");
    }

    #[test]
    fn exact_balance_uses_money_format() {
        let text = format_balance(0.0, Ok(Money::new(-123_450)), BalanceMode::Exact, Currency::Inr);
        assert_eq!(text, "-1,234.50 ₹");

        let text = format_balance(
            0.0,
            Err(EngineError::InvalidAmount("x".to_string())),
            BalanceMode::Exact,
            Currency::Inr,
        );
        assert_eq!(text, "? ₹");
    }
}
