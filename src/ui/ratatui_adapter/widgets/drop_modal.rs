//! Drop modal widget
//!
//! Dims the screen behind it and shows the drop target: title, accepted
//! formats, a browse button and the "From URL" button. The border colour
//! follows the session's drag state.

use crate::session::{PromptView, SessionState, URL_BUTTON_LABEL};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

const BROWSE_BUTTON_LABEL: &str = "Browse…";

/// Screen areas of the drop modal, used for mouse hit testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalLayout {
    /// The whole modal including its border
    pub modal: Rect,
    /// The browse button
    pub browse_button: Rect,
    /// The "From URL" button
    pub url_button: Rect,
}

impl ModalLayout {
    const WIDTH: u16 = 56;
    const HEIGHT: u16 = 9;
    const BUTTON_ROW: u16 = 4;

    /// Place the modal in the middle of `area`
    #[must_use]
    pub fn compute(area: Rect) -> Self {
        let width = Self::WIDTH.min(area.width);
        let height = Self::HEIGHT.min(area.height);
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        let modal = Rect::new(x, y, width, height);

        let inner = Block::default().borders(Borders::ALL).inner(modal);
        let row = (inner.y + Self::BUTTON_ROW).min(inner.bottom().saturating_sub(1));
        let browse_width = button_text(BROWSE_BUTTON_LABEL).chars().count() as u16;
        let url_width = button_text(URL_BUTTON_LABEL).chars().count() as u16;
        let total = browse_width + 2 + url_width;
        let start = inner.x + inner.width.saturating_sub(total) / 2;

        Self {
            modal,
            browse_button: Rect::new(start, row, browse_width.min(inner.width), 1)
                .intersection(inner),
            url_button: Rect::new(start + browse_width + 2, row, url_width, 1).intersection(inner),
        }
    }
}

fn button_text(label: &str) -> String {
    format!("[ {label} ]")
}

/// Drop modal overlay widget
pub struct DropModal<'a> {
    view: &'a PromptView,
    theme: &'a Theme,
}

impl<'a> DropModal<'a> {
    /// Create a new drop modal
    #[must_use]
    pub const fn new(view: &'a PromptView, theme: &'a Theme) -> Self {
        Self { view, theme }
    }

    fn status_line(&self) -> Line<'static> {
        match self.view.state {
            SessionState::Reading => {
                Line::from(Span::styled("Reading…", self.theme.info_style())).centered()
            }
            SessionState::Open | SessionState::Settled => Line::from(Span::styled(
                "Paste a path or URL to drop it here",
                self.theme.dimmed_style(),
            ))
            .centered(),
        }
    }
}

impl Widget for DropModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.backdrop_style());

        let layout = ModalLayout::compute(area);
        Clear.render(layout.modal, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(self.theme.border_style(self.view.border));
        let inner = block.inner(layout.modal);
        block.render(layout.modal, buf);

        let lines = vec![
            Line::from(Span::styled(self.view.title, self.theme.title_style())),
            Line::from(Span::styled(
                self.view.subtitle.clone(),
                self.theme.dimmed_style(),
            )),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);

        Paragraph::new(Line::from(Span::styled(
            button_text(BROWSE_BUTTON_LABEL),
            self.theme.cursor_style(),
        )))
        .render(layout.browse_button, buf);
        Paragraph::new(Line::from(Span::styled(
            button_text(URL_BUTTON_LABEL),
            self.theme.cursor_style(),
        )))
        .render(layout.url_button, buf);

        if inner.height > 0 {
            let status = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
            Paragraph::new(self.status_line()).render(status, buf);
        }
    }
}
