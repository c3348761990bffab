use chrono::{DateTime, Utc};
use engine::{Clock, Entry, EntryKind};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    app::AppState,
    format::{format_balance, format_timestamp},
    ui::{
        components::{
            card::{Card, StatCard},
            money::{column_amount, styled_balance},
        },
        theme::Theme,
    },
};

const NOTE_WIDTH: usize = 28;
const AMOUNT_WIDTH: usize = 12;

pub fn render_header<C: Clock>(frame: &mut Frame<'_>, area: Rect, state: &AppState<C>, theme: &Theme) {
    let view = &state.view;
    let float = state.ledger.balance();
    let text = format_balance(
        float,
        state.ledger.exact_balance(),
        view.balance_mode,
        view.currency,
    );

    StatCard::new("My Cashbook", styled_balance(text, float, theme), theme)
        .caption("Today's Balance")
        .render(frame, area);
}

pub fn render_entries<C: Clock>(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState<C>,
    now: DateTime<Utc>,
    theme: &Theme,
) {
    let card = Card::new("Entries", theme);
    let entries = state.ledger.entries();

    if entries.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No Entry found!",
                Style::default().fg(theme.dim),
            )))
            .alignment(Alignment::Center)
            .block(card.block()),
            area,
        );
        return;
    }

    let mut items = vec![ListItem::new(column_titles(theme))];
    items.extend(
        entries
            .iter()
            .map(|entry| ListItem::new(entry_line(entry, state, now, theme))),
    );

    let mut list_state = ListState::default();
    // Row 0 is the column header.
    list_state.select(Some(state.selected.min(entries.len() - 1) + 1));

    let list = List::new(items)
        .block(card.block())
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn column_titles(theme: &Theme) -> Line<'static> {
    let style = Style::default().fg(theme.dim);
    Line::from(vec![
        Span::styled(format!("{:<19}  ", "When"), style),
        Span::styled(format!("{:<NOTE_WIDTH$} ", "Note"), style),
        Span::styled(format!("{:>AMOUNT_WIDTH$} ", "Out"), Style::default().fg(theme.negative)),
        Span::styled(format!("{:>AMOUNT_WIDTH$}", "In"), Style::default().fg(theme.positive)),
    ])
}

fn entry_line<C: Clock>(
    entry: &Entry,
    state: &AppState<C>,
    now: DateTime<Utc>,
    theme: &Theme,
) -> Line<'static> {
    let view = &state.view;
    let when = format_timestamp(entry.created_at, now, view.date_style, view.timezone);
    let note = truncate(&entry.note, NOTE_WIDTH);

    let (out, inn) = match entry.kind {
        EntryKind::Out => (Some(entry.amount.as_str()), None),
        EntryKind::In => (None, Some(entry.amount.as_str())),
    };
    let out = column_amount(out, Style::default().fg(theme.negative), theme);
    let inn = column_amount(inn, Style::default().fg(theme.positive), theme);

    Line::from(vec![
        Span::styled(format!("{when:<19}  "), Style::default().fg(theme.dim)),
        Span::styled(format!("{note:<NOTE_WIDTH$} "), Style::default().fg(theme.text)),
        Span::styled(format!("{:>AMOUNT_WIDTH$} ", out.content), out.style),
        Span::styled(format!("{:>AMOUNT_WIDTH$}", inn.content), inn.style),
    ])
}

/// Cuts `text` to `width` characters, marking the cut with `…`.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
