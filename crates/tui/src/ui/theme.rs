use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focused: Color,
    /// Money in, the `In` button and column.
    pub positive: Color,
    /// Money out, the `Out` button and column.
    pub negative: Color,
    pub disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::Rgb(220, 220, 220),
            dim: Color::Rgb(140, 140, 140),
            accent: Color::Rgb(80, 160, 160),
            border: Color::Rgb(70, 80, 90),
            border_focused: Color::Rgb(80, 160, 160),
            positive: Color::Rgb(90, 180, 110),
            negative: Color::Rgb(200, 80, 80),
            disabled: Color::Rgb(90, 90, 90),
        }
    }
}
