use crate::{Entry, EntryKind, Money};

/// Everything the cashbook screen shows, plus the form being filled in.
///
/// A new value replaces the old one on every transition, see
/// [`apply`](crate::apply).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LedgerState {
    pub modal_visible: bool,
    /// Kind of the entry the open form creates; `None` until a form is opened.
    pub pending_kind: Option<EntryKind>,
    /// Amount text as typed; empty means unset.
    pub pending_amount: String,
    pub pending_note: String,
    /// Append-only, in insertion order.
    pub entries: Vec<Entry>,
}

impl LedgerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the create button is enabled.
    ///
    /// Both fields must be filled in and the amount must be a positive
    /// decimal, so neither an empty nor a zero amount can be committed.
    pub fn can_submit(&self) -> bool {
        self.submit_blocker().is_none()
    }

    /// Why the create button is disabled, if it is.
    pub fn submit_blocker(&self) -> Option<&'static str> {
        if self.pending_amount.trim().is_empty() {
            return Some("amount is empty");
        }
        if self.pending_note.trim().is_empty() {
            return Some("note is empty");
        }
        match self.pending_amount.parse::<Money>() {
            Ok(amount) if amount.is_positive() => None,
            Ok(_) => Some("amount must be greater than zero"),
            Err(_) => Some("amount is not a valid number"),
        }
    }

    pub fn last_entry(&self) -> Option<&Entry> {
        self.entries.last()
    }
}
