use ratatui::style::{Color, Modifier, Style};

/// Styles used when composing a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Prompt marker on the header line.
    pub prompt: Style,
    /// Marker in front of the selected row.
    pub marker: Style,
    /// Unmatched text of the selected row.
    pub selected: Style,
    /// Matched characters on other rows.
    pub highlight: Style,
    /// Matched characters on the selected row.
    pub selected_highlight: Style,
}

pub const MOCHA: Theme = Theme {
    prompt: Style::new().fg(Color::Rgb(116, 199, 236)),
    marker: Style::new().fg(Color::Rgb(243, 139, 168)),
    selected: Style::new().fg(Color::White),
    highlight: Style::new().fg(Color::Rgb(250, 179, 135)),
    selected_highlight: Style::new()
        .fg(Color::Rgb(250, 179, 135))
        .add_modifier(Modifier::BOLD),
};

/// Colourless variant for `--no-color`: emphasis through weight and underline.
pub const PLAIN: Theme = Theme {
    prompt: Style::new().add_modifier(Modifier::BOLD),
    marker: Style::new().add_modifier(Modifier::BOLD),
    selected: Style::new(),
    highlight: Style::new().add_modifier(Modifier::UNDERLINED),
    selected_highlight: Style::new()
        .add_modifier(Modifier::BOLD)
        .add_modifier(Modifier::UNDERLINED),
};

impl Theme {
    pub fn for_color(color: bool) -> Self {
        if color { MOCHA } else { PLAIN }
    }
}

impl Default for Theme {
    fn default() -> Self {
        MOCHA
    }
}
