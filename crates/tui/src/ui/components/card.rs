use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::ui::theme::Theme;

/// A bordered panel with rounded corners and an accent title.
pub struct Card<'a> {
    title: &'a str,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> Card<'a> {
    pub fn new(title: &'a str, theme: &'a Theme) -> Self {
        Self {
            title,
            theme,
            focused: false,
        }
    }

    /// Mark this card as focused (uses accent border color).
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn block(&self) -> Block<'a> {
        let border_color = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border
        };

        Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(self.theme.accent),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
    }

    /// Returns the inner area after accounting for borders.
    pub fn inner(&self, area: Rect) -> Rect {
        self.block().inner(area)
    }
}

/// A card showing one bold, centered value with a caption underneath.
pub struct StatCard<'a> {
    title: &'a str,
    value: Span<'static>,
    caption: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> StatCard<'a> {
    pub fn new(title: &'a str, value: Span<'static>, theme: &'a Theme) -> Self {
        Self {
            title,
            value,
            caption: None,
            theme,
        }
    }

    pub fn caption(mut self, caption: &'a str) -> Self {
        self.caption = Some(caption);
        self
    }

    pub fn render(self, frame: &mut Frame<'_>, area: Rect) {
        let card = Card::new(self.title, self.theme).focused(true);
        let value = self.value.patch_style(Style::default().add_modifier(Modifier::BOLD));

        let mut lines = vec![Line::from(value)];
        if let Some(caption) = self.caption {
            lines.push(Line::from(Span::styled(
                caption,
                Style::default().fg(self.theme.dim),
            )));
        }

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(card.block()),
            area,
        );
    }
}
