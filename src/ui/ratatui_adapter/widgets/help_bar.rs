//! Help bar widget for displaying keybind hints

use crate::ui::ratatui_adapter::state::Mode;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "Enter", "ctrl+h")
    pub key: &'static str,
    /// Action description (e.g., "browse", "hidden files")
    pub action: &'static str,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Hints shown for each frontend mode
#[must_use]
pub fn hints_for(mode: Mode) -> &'static [KeyHint] {
    const MODAL: &[KeyHint] = &[
        KeyHint::new("Enter", "browse"),
        KeyHint::new("u", "from URL"),
        KeyHint::new("paste", "drop path or URL"),
        KeyHint::new("ESC", "cancel"),
    ];
    const BROWSER: &[KeyHint] = &[
        KeyHint::new("Enter", "open"),
        KeyHint::new("type", "filter"),
        KeyHint::new("Bksp", "parent"),
        KeyHint::new("ctrl+h", "hidden files"),
        KeyHint::new("ESC", "close"),
    ];
    const URL_INPUT: &[KeyHint] = &[
        KeyHint::new("Enter", "fetch"),
        KeyHint::new("ctrl+u", "clear"),
        KeyHint::new("ESC", "cancel"),
    ];

    match mode {
        Mode::Modal => MODAL,
        Mode::Browser => BROWSER,
        Mode::UrlInput => URL_INPUT,
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    /// Hints to display
    hints: &'a [KeyHint],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key, self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
