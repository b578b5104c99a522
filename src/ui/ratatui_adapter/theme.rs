//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used by the prompt overlays.

use crate::session::BorderTone;
use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the highlighted browser entry
    pub selection_bg: Color,
    /// Foreground color for the highlighted browser entry
    pub selection_fg: Color,
    /// Color for the cursor indicator and key hints
    pub cursor: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for info messages
    pub info: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
    /// Color for directories in the file browser
    pub directory: Color,
    /// Color for file names in the file browser
    pub path: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            error: Color::Red,
            info: Color::Cyan,
            dimmed: Color::DarkGray,
            directory: Color::LightBlue,
            path: Color::White,
        }
    }

    /// Border color of the drop zone for a tone
    #[must_use]
    pub const fn border_color(tone: BorderTone) -> Color {
        let (r, g, b) = tone.rgb();
        Color::Rgb(r, g, b)
    }

    /// Style for the drop zone border
    #[must_use]
    pub fn border_style(&self, tone: BorderTone) -> Style {
        let style = Style::default().fg(Self::border_color(tone));
        match tone {
            BorderTone::Neutral => style,
            BorderTone::Active => style.add_modifier(Modifier::BOLD),
        }
    }

    /// Style for the currently selected item
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the cursor indicator (>) and key hints
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the modal title
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Style for error messages
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for info messages
    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for the area behind the modal
    #[must_use]
    pub fn backdrop_style(&self) -> Style {
        Style::default()
            .fg(self.dimmed)
            .add_modifier(Modifier::DIM)
    }

    /// Style for directories
    #[must_use]
    pub fn directory_style(&self) -> Style {
        Style::default()
            .fg(self.directory)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for file paths
    #[must_use]
    pub fn path_style(&self) -> Style {
        Style::default().fg(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_colors() {
        assert_eq!(Theme::border_color(BorderTone::Neutral), Color::Rgb(0x88, 0x88, 0x88));
        assert_eq!(Theme::border_color(BorderTone::Active), Color::Rgb(0x03, 0xa9, 0xfc));
    }

    #[test]
    fn test_active_border_is_bold() {
        let theme = Theme::default();
        assert!(
            theme
                .border_style(BorderTone::Active)
                .add_modifier
                .contains(Modifier::BOLD)
        );
        assert!(
            !theme
                .border_style(BorderTone::Neutral)
                .add_modifier
                .contains(Modifier::BOLD)
        );
    }
}
