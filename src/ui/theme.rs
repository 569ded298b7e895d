use crate::snapshot::Role;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub bar: Color,      // Untouched array slot
    pub compare: Color,  // Yellow
    pub swap: Color,     // Red
    pub key: Color,      // Pink
    pub min: Color,      // Cyan
    pub shift: Color,    // Orange
    pub visited: Color,  // Green
    pub frontier: Color, // Blue
    pub excluded: Color, // Dim grey for discarded search ranges
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for the status bar
    bar: Color::Rgb(137, 180, 250),
    compare: Color::Rgb(249, 226, 175),
    swap: Color::Rgb(243, 139, 168),
    key: Color::Rgb(245, 194, 231),
    min: Color::Rgb(148, 226, 213),
    shift: Color::Rgb(250, 179, 135),
    visited: Color::Rgb(166, 227, 161),
    frontier: Color::Rgb(137, 180, 250),
    excluded: Color::Rgb(69, 71, 90),
};

impl Theme {
    /// Highlight color for an array slot playing `role`
    pub fn role_color(&self, role: Role) -> Color {
        match role {
            Role::Compare | Role::Active => self.compare,
            Role::Swap => self.swap,
            Role::Key => self.key,
            Role::Min => self.min,
            Role::Shift => self.shift,
            Role::Found => self.success,
        }
    }
}
