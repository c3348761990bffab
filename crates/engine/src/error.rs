//! The module contains the errors the engine can return.
//!
//! The errors are:
//!
//! - [`InvalidAmount`] returned when an amount cannot be turned into [`Money`].
//! - [`SubmitDisabled`] returned when a submission is attempted while the
//!   form is incomplete.
//! - [`UnsupportedCurrency`] returned when a currency code is not known.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`SubmitDisabled`]: EngineError::SubmitDisabled
//!  [`UnsupportedCurrency`]: EngineError::UnsupportedCurrency
//!  [`Money`]: super::Money
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Submit disabled: {0}")]
    SubmitDisabled(String),
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
}
