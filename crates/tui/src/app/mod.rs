use std::time::Duration;

use chrono::Utc;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use engine::{Action, Clock, EntryKind, Ledger, SystemClock};

use crate::{
    config::ViewSettings,
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

/// Field of the entry form that receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Amount,
    Note,
}

impl FormField {
    fn toggle(self) -> Self {
        match self {
            Self::Amount => Self::Note,
            Self::Note => Self::Amount,
        }
    }
}

#[derive(Debug)]
pub struct AppState<C = SystemClock> {
    pub ledger: Ledger<C>,
    pub focus: FormField,
    /// Highlighted row of the entry list.
    pub selected: usize,
    pub view: ViewSettings,
}

impl<C: Clock> AppState<C> {
    fn select_next(&mut self) {
        let len = self.ledger.entries().len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(len - 1);
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

pub struct App<C = SystemClock> {
    pub state: AppState<C>,
    should_quit: bool,
}

impl App<SystemClock> {
    pub fn new(view: ViewSettings) -> Self {
        Self::with_clock(view, SystemClock)
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(250);

        while !self.should_quit() {
            terminal
                .draw(|frame| ui::render(frame, &self.state, Utc::now()))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    _ => {}
                }
            }
        }

        Ok(())
    }
}

impl<C: Clock> App<C> {
    pub fn with_clock(view: ViewSettings, clock: C) -> Self {
        Self {
            state: AppState {
                ledger: Ledger::with_clock(clock),
                focus: FormField::default(),
                selected: 0,
                view,
            },
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = map_key(key);
        if action == AppAction::Quit {
            self.should_quit = true;
            return;
        }

        if self.state.ledger.state().modal_visible {
            self.handle_form_key(action);
        } else {
            self.handle_list_key(action);
        }
    }

    fn handle_list_key(&mut self, action: AppAction) {
        match action {
            AppAction::Input('q' | 'Q') => self.should_quit = true,
            AppAction::Input('o' | 'O') => self.open_form(EntryKind::Out),
            AppAction::Input('i' | 'I') => self.open_form(EntryKind::In),
            AppAction::Up | AppAction::Input('k' | 'K') => self.state.select_prev(),
            AppAction::Down | AppAction::Input('j' | 'J') => self.state.select_next(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, action: AppAction) {
        match action {
            AppAction::Cancel => self.state.ledger.dispatch(Action::CloseModal),
            AppAction::NextField | AppAction::PrevField => {
                self.state.focus = self.state.focus.toggle();
            }
            AppAction::Submit => self.submit(),
            AppAction::Backspace => {
                let mut value = self.focused_value().to_string();
                if value.pop().is_some() {
                    self.set_focused_value(value);
                }
            }
            AppAction::Input(ch) => {
                let current = self.focused_value();
                let accepted = match self.state.focus {
                    FormField::Amount => amount_accepts(current, ch),
                    FormField::Note => !ch.is_control(),
                };
                if accepted {
                    let mut value = current.to_string();
                    value.push(ch);
                    self.set_focused_value(value);
                }
            }
            _ => {}
        }
    }

    fn open_form(&mut self, kind: EntryKind) {
        self.state.focus = FormField::Amount;
        self.state.ledger.dispatch(Action::OpenModal(kind));
    }

    /// Enter on a disabled create button does nothing.
    fn submit(&mut self) {
        if !self.state.ledger.state().can_submit() {
            tracing::debug!("create button disabled, ignoring enter");
            return;
        }
        if let Err(err) = self.state.ledger.submit() {
            tracing::warn!(%err, "submit failed");
            return;
        }
        self.state.selected = self.state.ledger.entries().len().saturating_sub(1);
    }

    fn focused_value(&self) -> &str {
        let state = self.state.ledger.state();
        match self.state.focus {
            FormField::Amount => &state.pending_amount,
            FormField::Note => &state.pending_note,
        }
    }

    fn set_focused_value(&mut self, value: String) {
        let action = match self.state.focus {
            FormField::Amount => Action::SetAmount(value),
            FormField::Note => Action::SetNote(value),
        };
        self.state.ledger.dispatch(action);
    }
}

/// Integer digits accepted by the amount field; sums stay far inside `Money`.
const MAX_INTEGER_DIGITS: usize = 12;

/// Numeric input: digits, one decimal separator, at most two decimals.
fn amount_accepts(current: &str, ch: char) -> bool {
    let separator = current.find(['.', ',']);
    match ch {
        '0'..='9' => match separator {
            Some(idx) => current.len() - idx - 1 < 2,
            None => current.len() < MAX_INTEGER_DIGITS,
        },
        '.' | ',' => separator.is_none(),
        _ => false,
    }
}
