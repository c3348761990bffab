use std::cell::Cell;

use chrono::{DateTime, TimeZone, Utc};

use engine::{Action, EngineError, EntryKind, Ledger, Money};

fn ledger_at(secs: i64) -> Ledger<impl Fn() -> DateTime<Utc>> {
    Ledger::with_clock(move || Utc.timestamp_opt(secs, 0).unwrap())
}

fn fill(ledger: &mut Ledger<impl engine::Clock>, kind: EntryKind, amount: &str, note: &str) {
    ledger.dispatch(Action::OpenModal(kind));
    ledger.dispatch(Action::SetAmount(amount.to_string()));
    ledger.dispatch(Action::SetNote(note.to_string()));
}

#[test]
fn submit_commits_closes_and_clears() {
    let mut ledger = ledger_at(1_700_000_000);
    fill(&mut ledger, EntryKind::In, "25", "coffee");

    let entry = ledger.submit().unwrap().clone();
    assert_eq!(entry.note, "coffee");
    assert_eq!(entry.amount, "25");
    assert_eq!(entry.kind, EntryKind::In);
    assert_eq!(entry.created_at, Utc.timestamp_opt(1_700_000_000, 0).unwrap());

    let state = ledger.state();
    assert!(!state.modal_visible);
    assert_eq!(state.pending_amount, "");
    assert_eq!(state.pending_note, "");
    assert_eq!(state.last_entry(), Some(&entry));
}

#[test]
fn submit_with_empty_note_creates_nothing() {
    for amount in ["", "0", "25", "1000.50"] {
        let mut ledger = ledger_at(0);
        fill(&mut ledger, EntryKind::Out, amount, "");
        let before = ledger.state().clone();

        let err = ledger.submit().unwrap_err();
        assert!(matches!(err, EngineError::SubmitDisabled(_)), "amount {amount:?}");
        assert!(ledger.entries().is_empty());
        assert_eq!(ledger.state(), &before);
    }
}

#[test]
fn submit_with_zero_amount_creates_nothing() {
    let mut ledger = ledger_at(0);
    fill(&mut ledger, EntryKind::Out, "0", "nothing");

    assert_eq!(
        ledger.submit().unwrap_err(),
        EngineError::SubmitDisabled("amount must be greater than zero".to_string())
    );
    assert!(ledger.entries().is_empty());
    assert!(ledger.state().modal_visible);
}

#[test]
fn reopening_after_submit_starts_blank() {
    let mut ledger = ledger_at(0);
    fill(&mut ledger, EntryKind::Out, "30", "bus");
    ledger.submit().unwrap();

    ledger.dispatch(Action::OpenModal(EntryKind::In));
    let state = ledger.state();
    assert!(state.modal_visible);
    assert_eq!(state.pending_kind, Some(EntryKind::In));
    assert_eq!(state.pending_amount, "");
    assert_eq!(state.pending_note, "");
}

#[test]
fn close_clear_reopen_does_not_resurrect_pending() {
    let mut ledger = ledger_at(0);
    fill(&mut ledger, EntryKind::Out, "30", "bus");
    ledger.dispatch(Action::CloseModal);
    ledger.dispatch(Action::ClearPending);
    ledger.dispatch(Action::OpenModal(EntryKind::Out));

    assert_eq!(ledger.state().pending_amount, "");
    assert_eq!(ledger.state().pending_note, "");
}

#[test]
fn balance_tracks_committed_entries() {
    let mut ledger = ledger_at(0);
    assert_eq!(ledger.balance(), 0.0);

    fill(&mut ledger, EntryKind::In, "100", "salary");
    ledger.submit().unwrap();
    fill(&mut ledger, EntryKind::Out, "30", "groceries");
    ledger.submit().unwrap();

    assert_eq!(ledger.balance(), 70.0);
    assert_eq!(ledger.exact_balance().unwrap(), Money::new(7000));
}

#[test]
fn entries_keep_insertion_order_and_timestamps() {
    let tick = Cell::new(10);
    let mut ledger = Ledger::with_clock(|| {
        let secs = tick.get();
        tick.set(secs + 10);
        Utc.timestamp_opt(secs, 0).unwrap()
    });

    for (kind, amount, note) in [
        (EntryKind::In, "5", "first"),
        (EntryKind::Out, "2", "second"),
        (EntryKind::In, "1", "third"),
    ] {
        fill(&mut ledger, kind, amount, note);
        ledger.submit().unwrap();
    }

    let notes: Vec<_> = ledger.entries().iter().map(|e| e.note.as_str()).collect();
    assert_eq!(notes, ["first", "second", "third"]);
    assert!(
        ledger
            .entries()
            .windows(2)
            .all(|pair| pair[0].created_at < pair[1].created_at)
    );
    assert_eq!(ledger.balance(), 4.0);
}

#[test]
fn clock_is_read_once_per_commit() {
    let reads = Cell::new(0);
    let mut ledger = Ledger::with_clock(|| {
        reads.set(reads.get() + 1);
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    });

    fill(&mut ledger, EntryKind::Out, "12", "bus");
    ledger.dispatch(Action::CloseModal);
    ledger.dispatch(Action::OpenModal(EntryKind::Out));
    assert_eq!(reads.get(), 0);

    ledger.submit().unwrap();
    assert_eq!(reads.get(), 1);
    assert_eq!(ledger.entries()[0].created_at, Utc.timestamp_opt(1_700_000_000, 0).unwrap());
}
