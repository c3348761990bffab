use engine::{Clock, EntryKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::{
    app::{AppState, FormField},
    ui::{
        components::{card::Card, centered_rect},
        theme::Theme,
    },
};

const FORM_WIDTH: u16 = 44;
const FORM_HEIGHT: u16 = 10;

/// The "New Entry" form, drawn over the cashbook while it is open.
pub fn render<C: Clock>(frame: &mut Frame<'_>, area: Rect, state: &AppState<C>, theme: &Theme) {
    let ledger = state.ledger.state();
    let popup = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);

    // Clear the area behind the form
    frame.render_widget(Clear, popup);

    let card = Card::new("New Entry", theme).focused(true);
    let inner = card.inner(popup);
    frame.render_widget(card.block(), popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Note
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Button
            Constraint::Length(1), // Why disabled
        ])
        .margin(1)
        .split(inner);

    let placeholder = format!("{}0.00", state.view.currency.symbol());
    render_input(
        frame,
        rows[0],
        "Amount",
        &ledger.pending_amount,
        &placeholder,
        state.focus == FormField::Amount,
        theme,
    );
    render_input(
        frame,
        rows[2],
        "Note",
        &ledger.pending_note,
        "",
        state.focus == FormField::Note,
        theme,
    );

    let kind = ledger.pending_kind.unwrap_or(EntryKind::Out);
    let blocker = ledger.submit_blocker();
    let kind_color = match kind {
        EntryKind::Out => theme.negative,
        EntryKind::In => theme.positive,
    };
    let button_style = if blocker.is_none() {
        Style::default().fg(kind_color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.disabled)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!("[ {} ]", kind.label()), button_style))
            .alignment(Alignment::Center),
        rows[4],
    );

    if let Some(reason) = blocker {
        frame.render_widget(
            Paragraph::new(Span::styled(reason, Style::default().fg(theme.dim)))
                .alignment(Alignment::Center),
            rows[5],
        );
    }
}

/// One labelled input row; the focused one shows a cursor bar.
fn render_input(
    frame: &mut Frame<'_>,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    theme: &Theme,
) {
    let cursor = if focused { "│" } else { "" };
    let (text, text_style) = if value.is_empty() {
        (placeholder, Style::default().fg(theme.dim))
    } else if focused {
        (value, Style::default().fg(theme.accent))
    } else {
        (value, Style::default().fg(theme.text))
    };

    let line = Line::from(vec![
        Span::styled(format!("{label:<7}"), Style::default().fg(theme.dim)),
        Span::styled(text.to_string(), text_style),
        Span::styled(cursor, Style::default().fg(theme.accent)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
