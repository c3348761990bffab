//! Cashbook engine: the ledger state machine and its balance.
//!
//! The state is a plain value ([`LedgerState`]) moved through [`apply`] by the
//! closed set of [`Action`]s. [`Ledger`] wraps it for the UI and enforces the
//! submission gate.

pub use action::Action;
pub use balance::{balance, exact_balance};
pub use clock::{Clock, SystemClock};
pub use currency::Currency;
pub use entry::{Entry, EntryKind};
pub use error::EngineError;
pub use ledger::Ledger;
pub use money::Money;
pub use reducer::apply;
pub use state::LedgerState;

mod action;
mod balance;
mod clock;
mod currency;
mod entry;
mod error;
mod ledger;
mod money;
mod reducer;
mod state;

type ResultEngine<T> = Result<T, EngineError>;
