use ratatui::style::Color;

pub struct Theme {
    pub border_focus: Color,
    pub border_inactive: Color,
    pub prompt: Color,
    pub cursor_fg: Color,
    pub cursor_bg: Color,
    pub echo_input: Color,
    pub error: Color,
}

pub const THEME: Theme = Theme {
    border_focus: Color::Cyan,
    border_inactive: Color::DarkGray,
    prompt: Color::Green,
    cursor_fg: Color::Black,
    cursor_bg: Color::Gray,
    echo_input: Color::Blue,
    error: Color::Red,
};
