use serde::Deserialize;

use crate::EngineError;

/// Currency used to format amounts and balances.
///
/// The cashbook is mono-currency (`INR`), the type only carries the
/// formatting details (symbol and minor units).
///
/// ## Minor units
///
/// `minor_units()` returns how many decimal digits are used when converting
/// between major units (typed text, e.g. `10.50`) and the integer minor units
/// stored by [`Money`](crate::Money) (e.g. `1050`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Currency {
    #[default]
    Inr,
}

impl Currency {
    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Inr => "INR",
        }
    }

    /// Symbol shown next to amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Inr => "₹",
        }
    }

    /// Number of fraction digits used when formatting/parsing amounts.
    #[must_use]
    pub const fn minor_units(self) -> u8 {
        match self {
            Currency::Inr => 2,
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "INR" | "₹" => Ok(Currency::Inr),
            other => Err(EngineError::UnsupportedCurrency(other.to_string())),
        }
    }
}

impl TryFrom<String> for Currency {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Currency::try_from(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_code_case_insensitive() {
        assert_eq!(Currency::try_from("inr").unwrap(), Currency::Inr);
        assert_eq!(Currency::try_from(" INR ").unwrap(), Currency::Inr);
        assert_eq!(Currency::try_from("₹").unwrap(), Currency::Inr);
    }

    #[test]
    fn rejects_unknown_code() {
        let err = Currency::try_from("usd").unwrap_err();
        assert_eq!(err, EngineError::UnsupportedCurrency("USD".to_string()));
    }
}
