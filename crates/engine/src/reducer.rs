//! The transition function of the ledger.

use chrono::{DateTime, Utc};

use crate::{Action, Entry, EntryKind, LedgerState};

/// Applies `action` to `state` and returns the next state.
///
/// `now` is only read by [`Action::CommitEntry`]; a commit without a pending
/// kind records a credit. The function does not
/// validate the pending fields: gating the commit is the caller's job (see
/// [`Ledger::submit`](crate::Ledger::submit)).
#[must_use]
pub fn apply(state: LedgerState, action: Action, now: DateTime<Utc>) -> LedgerState {
    match action {
        Action::OpenModal(kind) => LedgerState {
            modal_visible: true,
            pending_kind: Some(kind),
            ..state
        },
        Action::CloseModal => LedgerState {
            modal_visible: false,
            ..state
        },
        Action::SetAmount(amount) => LedgerState {
            pending_amount: amount,
            ..state
        },
        Action::SetNote(note) => LedgerState {
            pending_note: note,
            ..state
        },
        Action::ClearPending => LedgerState {
            pending_amount: String::new(),
            pending_note: String::new(),
            ..state
        },
        Action::CommitEntry => {
            let kind = state.pending_kind.unwrap_or(EntryKind::In);
            let entry = Entry::new(
                state.pending_note.clone(),
                state.pending_amount.clone(),
                kind,
                now,
            );
            let mut entries = state.entries;
            entries.push(entry);
            LedgerState { entries, ..state }
        }
    }
}
