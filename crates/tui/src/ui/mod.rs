pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use chrono::{DateTime, Utc};
use engine::Clock;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
};

use crate::app::AppState;

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render<C: Clock>(frame: &mut Frame<'_>, state: &AppState<C>, now: DateTime<Utc>) {
    let area = frame.area();
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Title + balance
            Constraint::Min(0),    // Entries
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    screens::cashbook::render_header(frame, layout[0], state, &theme);
    screens::cashbook::render_entries(frame, layout[1], state, now, &theme);
    render_bottom_bar(frame, layout[2], state, &theme);

    if state.ledger.state().modal_visible {
        screens::entry_form::render(frame, area, state, &theme);
    }
}

fn render_bottom_bar<C: Clock>(frame: &mut Frame<'_>, area: Rect, state: &AppState<C>, theme: &Theme) {
    let hints = if state.ledger.state().modal_visible {
        components::hints::common::form_editing()
    } else {
        components::hints::common::list_actions()
    };
    let bar = Paragraph::new(Line::from(components::hints::hints_to_spans(&hints, theme)));
    frame.render_widget(bar, area);
}
