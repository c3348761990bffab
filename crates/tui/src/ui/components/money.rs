use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// Balance text colored by sign: green above zero, red below, neutral at
/// zero or when the float balance is NaN.
#[must_use]
pub fn styled_balance(text: String, sign: f64, theme: &Theme) -> Span<'static> {
    let color = if sign > 0.0 {
        theme.positive
    } else if sign < 0.0 {
        theme.negative
    } else {
        theme.text
    };
    Span::styled(text, Style::default().fg(color))
}

/// Amount cell of the Out/In columns: the amount when the column applies,
/// a dimmed `-` otherwise.
#[must_use]
pub fn column_amount(amount: Option<&str>, style: Style, theme: &Theme) -> Span<'static> {
    match amount {
        Some(amount) => Span::styled(amount.to_string(), style),
        None => Span::styled("-", Style::default().fg(theme.dim)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_color_follows_sign() {
        let theme = Theme::default();
        let fg = |v: f64| styled_balance(String::new(), v, &theme).style.fg;
        assert_eq!(fg(5.0), Some(theme.positive));
        assert_eq!(fg(-5.0), Some(theme.negative));
        assert_eq!(fg(0.0), Some(theme.text));
        assert_eq!(fg(f64::NAN), Some(theme.text));
    }

    #[test]
    fn missing_column_amount_is_a_dash() {
        let theme = Theme::default();
        let span = column_amount(None, Style::default(), &theme);
        assert_eq!(span.content, "-");
        let span = column_amount(Some("12"), Style::default(), &theme);
        assert_eq!(span.content, "12");
    }
}
