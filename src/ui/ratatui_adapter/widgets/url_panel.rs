//! "From URL" panel
//!
//! A single-line URL input with a Fetch button, drawn on top of the drop
//! modal. Enter or a click on the button submits, ESC or a click anywhere
//! past the input line closes it.

use crate::session::{FETCH_BUTTON_LABEL, URL_BUTTON_LABEL, URL_PLACEHOLDER};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// Editing state of the URL input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlInputState {
    /// Current input buffer
    pub buffer: String,
    /// Cursor position (character index, not byte)
    pub cursor: usize,
}

impl UrlInputState {
    /// Create an empty input
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get byte index from cursor (character) position
    fn byte_index(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    /// Insert a character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.byte_index();
        self.buffer.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Insert pasted text at cursor position, dropping line breaks
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars().filter(|c| !matches!(c, '\r' | '\n')) {
            self.insert_char(c);
        }
    }

    /// Delete character before cursor (backspace)
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let byte_idx = self.byte_index();
            let prev_byte_idx = self.buffer[..byte_idx]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.buffer.remove(prev_byte_idx);
            self.cursor -= 1;
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete(&mut self) {
        let byte_idx = self.byte_index();
        if byte_idx < self.buffer.len() {
            self.buffer.remove(byte_idx);
        }
    }

    /// Move cursor left
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn cursor_right(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn cursor_end(&mut self) {
        self.cursor = self.buffer.chars().count();
    }

    /// Clear the line (Ctrl+U)
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// The text typed so far, untrimmed
    #[must_use]
    pub fn value(&self) -> &str {
        &self.buffer
    }
}

/// Screen areas of the URL panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlPanelLayout {
    /// The whole panel including its border
    pub panel: Rect,
    /// The input line
    pub input: Rect,
    /// The Fetch button
    pub fetch_button: Rect,
}

impl UrlPanelLayout {
    const WIDTH: u16 = 64;
    const HEIGHT: u16 = 3;

    /// Place the panel in the middle of `area`
    #[must_use]
    pub fn compute(area: Rect) -> Self {
        let width = Self::WIDTH.min(area.width);
        let height = Self::HEIGHT.min(area.height);
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        let panel = Rect::new(x, y, width, height);

        let inner = Block::default().borders(Borders::ALL).inner(panel);
        let button_width = (FETCH_BUTTON_LABEL.len() as u16 + 4).min(inner.width);
        let fetch_button = Rect::new(
            inner.right().saturating_sub(button_width),
            inner.y,
            button_width,
            inner.height.min(1),
        );
        let input = Rect::new(
            inner.x,
            inner.y,
            inner.width.saturating_sub(button_width + 1),
            inner.height.min(1),
        );

        Self {
            panel,
            input,
            fetch_button,
        }
    }
}

/// URL panel overlay widget
pub struct UrlPanel<'a> {
    state: &'a UrlInputState,
    theme: &'a Theme,
}

impl<'a> UrlPanel<'a> {
    /// Create a new URL panel
    #[must_use]
    pub const fn new(state: &'a UrlInputState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Input line with the cursor drawn as a reversed cell
    fn input_line(&self) -> Line<'static> {
        if self.state.buffer.is_empty() {
            return Line::from(vec![
                Span::styled("▏", self.theme.cursor_style()),
                Span::styled(URL_PLACEHOLDER, self.theme.dimmed_style()),
            ]);
        }

        let byte_idx = self.state.byte_index();
        let (before, after) = self.state.buffer.split_at(byte_idx);
        Line::from(vec![
            Span::raw(before.to_string()),
            Span::styled("▏", self.theme.cursor_style()),
            Span::raw(after.to_string()),
        ])
    }
}

impl Widget for UrlPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = UrlPanelLayout::compute(area);

        Clear.render(layout.panel, buf);

        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.cursor_style())
            .title(format!(" {URL_BUTTON_LABEL} "))
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(" Enter: fetch  ESC: back ").centered())
            .render(layout.panel, buf);

        Paragraph::new(self.input_line()).render(layout.input, buf);
        Paragraph::new(Line::from(Span::styled(
            format!("[ {FETCH_BUTTON_LABEL} ]"),
            self.theme.cursor_style(),
        )))
        .render(layout.fetch_button, buf);
    }
}
