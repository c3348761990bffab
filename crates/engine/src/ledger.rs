use chrono::{DateTime, Utc};

use crate::{
    Action, Clock, EngineError, Entry, LedgerState, Money, ResultEngine, SystemClock,
    action::SUBMIT_SEQUENCE, balance, exact_balance, reducer,
};

/// Owns the current [`LedgerState`] and the clock used to stamp entries.
///
/// This is what the UI talks to: it dispatches single transitions and runs
/// the submission sequence behind the create button.
#[derive(Debug)]
pub struct Ledger<C = SystemClock> {
    state: LedgerState,
    clock: C,
}

impl Ledger<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Ledger<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Ledger<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            state: LedgerState::new(),
            clock,
        }
    }

    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    pub fn entries(&self) -> &[Entry] {
        &self.state.entries
    }

    /// Applies one transition. The clock is read for commits only.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(action = action.name(), "dispatch");
        let now = if matches!(action, Action::CommitEntry) {
            if self.state.pending_kind.is_none() {
                tracing::warn!("commit without an entry kind, recording as credit");
            }
            self.clock.now()
        } else {
            DateTime::<Utc>::UNIX_EPOCH
        };
        let state = std::mem::take(&mut self.state);
        self.state = reducer::apply(state, action, now);
    }

    /// Commits the pending entry, closes the form and clears it.
    ///
    /// Refused with [`EngineError::SubmitDisabled`] while
    /// [`LedgerState::can_submit`] is false; the state is then unchanged.
    pub fn submit(&mut self) -> ResultEngine<&Entry> {
        if let Some(reason) = self.state.submit_blocker() {
            tracing::warn!(reason, "submit refused");
            return Err(EngineError::SubmitDisabled(reason.to_string()));
        }

        for action in SUBMIT_SEQUENCE {
            self.dispatch(action);
        }

        let entry = self
            .state
            .last_entry()
            .ok_or_else(|| EngineError::SubmitDisabled("no entry committed".to_string()))?;
        tracing::info!(kind = %entry.kind, count = self.state.entries.len(), "entry committed");
        Ok(entry)
    }

    /// Float balance, see [`balance`](crate::balance()).
    pub fn balance(&self) -> f64 {
        balance(&self.state.entries)
    }

    /// Minor-unit balance, see [`exact_balance`](crate::exact_balance()).
    pub fn exact_balance(&self) -> ResultEngine<Money> {
        exact_balance(&self.state.entries)
    }
}
