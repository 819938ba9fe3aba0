use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub border: Color,
    pub text: Color,
    pub muted_text: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,
}

const FAIRWAY: Theme = Theme {
    border: Color::DarkGray,
    text: Color::White,
    muted_text: Color::Gray,
    accent: Color::Cyan,
    success: Color::Green,
    warning: Color::Yellow,
    danger: Color::Red,
    info: Color::Blue,
};

const MONO: Theme = Theme {
    border: Color::Reset,
    text: Color::Reset,
    muted_text: Color::Reset,
    accent: Color::Reset,
    success: Color::Reset,
    warning: Color::Reset,
    danger: Color::Reset,
    info: Color::Reset,
};

#[must_use]
pub fn theme_for(no_color: bool) -> Theme {
    if no_color { MONO } else { FAIRWAY }
}
