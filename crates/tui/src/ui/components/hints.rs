use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: String,
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Converts a list of key hints into styled spans for rendering.
pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            hint.key.clone(),
            Style::default().fg(theme.accent),
        ));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

/// Hint groups shown in the bottom bar.
pub mod common {
    use super::KeyHint;

    /// Entry list: the two entry buttons, selection and quit.
    pub fn list_actions() -> Vec<KeyHint> {
        vec![
            KeyHint::new("o", "out"),
            KeyHint::new("i", "in"),
            KeyHint::new("↑↓", "select"),
            KeyHint::new("q", "quit"),
        ]
    }

    /// Hints for the entry form.
    pub fn form_editing() -> Vec<KeyHint> {
        vec![
            KeyHint::new("Tab", "next field"),
            KeyHint::new("Enter", "create"),
            KeyHint::new("Esc", "close"),
        ]
    }
}
