//! The closed set of transitions the ledger accepts.

use crate::EntryKind;

/// A transition of [`LedgerState`](crate::LedgerState).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Show the entry form for the given kind.
    OpenModal(EntryKind),
    /// Hide the entry form. Pending text is kept.
    CloseModal,
    /// Replace the pending amount text.
    SetAmount(String),
    /// Replace the pending note text.
    SetNote(String),
    /// Empty both pending fields.
    ClearPending,
    /// Append an entry built from the pending fields.
    CommitEntry,
}

impl Action {
    /// Short name used in logs; never includes user text.
    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenModal(_) => "open_modal",
            Self::CloseModal => "close_modal",
            Self::SetAmount(_) => "set_amount",
            Self::SetNote(_) => "set_note",
            Self::ClearPending => "clear_pending",
            Self::CommitEntry => "commit_entry",
        }
    }
}

/// The submission sequence, in the order it must be applied.
pub const SUBMIT_SEQUENCE: [Action; 3] =
    [Action::CommitEntry, Action::CloseModal, Action::ClearPending];
