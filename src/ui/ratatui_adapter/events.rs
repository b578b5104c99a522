//! Event handling for the ratatui TUI
//!
//! Turns terminal input into prompt events. Keys go to whichever overlay
//! has focus, mouse clicks are hit-tested against the drawn layout and
//! bracketed pastes stand in for drag and drop.

use super::state::{FrontendState, Mode};
use super::widgets::BrowserAction;
use crate::reader::ByteSource;
use crate::session::{DropPayload, PromptEvent};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;
use std::path::{Path, PathBuf};
use url::Url;

/// Translate one terminal event
///
/// Returns `None` for input that only changes frontend state (typing in
/// the URL box, browsing directories) or that means nothing here.
pub fn translate(state: &mut FrontendState, event: Event) -> Option<PromptEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => match state.mode {
            Mode::Modal => handle_modal_key(key),
            Mode::Browser => handle_browser_key(state, key),
            Mode::UrlInput => handle_url_key(state, key),
        },
        Event::Mouse(mouse) => match state.mode {
            Mode::Modal => handle_modal_mouse(state, mouse),
            Mode::Browser => handle_browser_mouse(state, mouse),
            Mode::UrlInput => handle_url_mouse(state, mouse),
        },
        Event::Paste(text) => handle_paste(state, &text),
        _ => None,
    }
}

fn is_cancel(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Handle keys while the drop modal has focus
fn handle_modal_key(key: KeyEvent) -> Option<PromptEvent> {
    if is_cancel(&key) {
        return Some(PromptEvent::Escape);
    }
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) | (KeyCode::Char('b' | 'o'), KeyModifiers::NONE) => {
            Some(PromptEvent::BrowseRequested)
        }
        (KeyCode::Char('u'), KeyModifiers::NONE) => Some(PromptEvent::UrlPanelRequested),
        _ => None,
    }
}

/// Handle keys while the file browser has focus
fn handle_browser_key(state: &mut FrontendState, key: KeyEvent) -> Option<PromptEvent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.close_browser();
        return Some(PromptEvent::Escape);
    }
    if key.code == KeyCode::Esc {
        state.close_browser();
        return Some(PromptEvent::SelectorDismissed);
    }

    let page = state.browser_page();
    let browser = state.browser.as_mut()?;
    let result = match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => browser.activate(),
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
            browser.cursor_up();
            Ok(BrowserAction::None)
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
            browser.cursor_down();
            Ok(BrowserAction::None)
        }
        (KeyCode::PageUp, _) => {
            browser.page_up(page);
            Ok(BrowserAction::None)
        }
        (KeyCode::PageDown, _) => {
            browser.page_down(page);
            Ok(BrowserAction::None)
        }
        (KeyCode::Backspace, _) => {
            if browser.query_backspace() {
                Ok(BrowserAction::None)
            } else {
                browser.go_up()
            }
        }
        (KeyCode::Left, _) => browser.go_up(),
        (KeyCode::Char('h'), KeyModifiers::CONTROL) => {
            browser.toggle_hidden().map(|()| BrowserAction::None)
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            browser.query_push(c);
            Ok(BrowserAction::None)
        }
        _ => Ok(BrowserAction::None),
    };

    match result {
        Ok(BrowserAction::Selected(path)) => {
            state.close_browser();
            Some(PromptEvent::FileSelected(ByteSource::file(path)))
        }
        Ok(BrowserAction::Navigated) => {
            state.error = None;
            None
        }
        Ok(BrowserAction::None) => None,
        Err(e) => {
            log::warn!("{e}");
            state.error = Some(e.to_string());
            None
        }
    }
}

/// Handle keys while the URL panel has focus
fn handle_url_key(state: &mut FrontendState, key: KeyEvent) -> Option<PromptEvent> {
    if is_cancel(&key) {
        return Some(PromptEvent::Escape);
    }

    let input = &mut state.url_input;
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => return Some(PromptEvent::UrlSubmitted(input.value().to_string())),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => input.clear(),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => input.insert_char(c),
        (KeyCode::Backspace, _) => input.backspace(),
        (KeyCode::Delete, _) => input.delete(),
        (KeyCode::Left, _) => input.cursor_left(),
        (KeyCode::Right, _) => input.cursor_right(),
        (KeyCode::Home, _) => input.cursor_home(),
        (KeyCode::End, _) => input.cursor_end(),
        _ => {}
    }
    None
}

fn is_left_click(mouse: &MouseEvent) -> bool {
    mouse.kind == MouseEventKind::Down(MouseButton::Left)
}

/// Handle the mouse over the drop modal
///
/// Hovering the drop zone plays the part of a drag entering it. A click
/// anywhere on the modal body other than the URL button opens the browser.
fn handle_modal_mouse(state: &mut FrontendState, mouse: MouseEvent) -> Option<PromptEvent> {
    if !state.shows_modal() {
        return None;
    }

    let layout = state.modal_layout();
    let position = Position::new(mouse.column, mouse.row);
    let inside = layout.modal.contains(position);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if layout.url_button.contains(position) {
                Some(PromptEvent::UrlPanelRequested)
            } else if inside {
                Some(PromptEvent::BrowseRequested)
            } else {
                Some(PromptEvent::BackdropClicked)
            }
        }
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            if inside && !state.hovering {
                state.hovering = true;
                Some(PromptEvent::DragEnter)
            } else if !inside && state.hovering {
                state.hovering = false;
                Some(PromptEvent::DragLeave)
            } else {
                None
            }
        }
        _ => None,
    }
}

fn handle_browser_mouse(state: &mut FrontendState, mouse: MouseEvent) -> Option<PromptEvent> {
    let browser = state.browser.as_mut()?;
    match mouse.kind {
        MouseEventKind::ScrollUp => browser.cursor_up(),
        MouseEventKind::ScrollDown => browser.cursor_down(),
        _ => {}
    }
    None
}

/// Only the input line and the Fetch button keep the panel open; a click on
/// the panel frame counts as a click past the input.
fn handle_url_mouse(state: &mut FrontendState, mouse: MouseEvent) -> Option<PromptEvent> {
    if !is_left_click(&mouse) {
        return None;
    }
    let layout = state.url_layout();
    let position = Position::new(mouse.column, mouse.row);
    if layout.fetch_button.contains(position) {
        Some(PromptEvent::UrlSubmitted(state.url_input.value().to_string()))
    } else if layout.input.contains(position) {
        None
    } else {
        Some(PromptEvent::UrlBackdropClicked)
    }
}

/// Pastes are typed into the URL box, and dropped everywhere else
fn handle_paste(state: &mut FrontendState, text: &str) -> Option<PromptEvent> {
    if state.mode == Mode::UrlInput {
        state.url_input.insert_str(text);
        return None;
    }
    state.hovering = false;
    let payload = classify_drop(text);
    if payload.is_none() {
        log::debug!("Ignoring paste that is neither a file nor a URL");
    }
    payload.map(PromptEvent::Drop)
}

/// Decide what a pasted string refers to
///
/// Terminals paste dropped files as their path, sometimes quoted, shell
/// escaped, or as a `file://` URL. Paths of existing files become file
/// drops; any other absolute URL with a host becomes a URL drop.
#[must_use]
pub fn classify_drop(text: &str) -> Option<DropPayload> {
    let line = text.lines().map(str::trim).find(|l| !l.is_empty())?;
    let unquoted = strip_quotes(line);

    if let Some(path) = local_path(unquoted) {
        return Some(DropPayload::File(ByteSource::file(path)));
    }

    let url = Url::parse(unquoted).ok()?;
    if url.scheme() == "file" || !url.has_host() {
        return None;
    }
    Some(DropPayload::Url(unquoted.to_string()))
}

fn strip_quotes(s: &str) -> &str {
    for quote in ['\'', '"'] {
        if let Some(inner) = s.strip_prefix(quote).and_then(|r| r.strip_suffix(quote)) {
            return inner;
        }
    }
    s
}

/// Resolve a pasted string to an existing file
fn local_path(s: &str) -> Option<PathBuf> {
    if s.starts_with("file:") {
        let path = Url::parse(s).ok()?.to_file_path().ok()?;
        return path.is_file().then_some(path);
    }

    let direct = Path::new(s);
    if direct.is_file() {
        return Some(direct.to_path_buf());
    }

    // Shell-escaped drops, e.g. `my\ file.png`
    let unescaped = unescape_shell(s);
    let path = PathBuf::from(unescaped);
    path.is_file().then_some(path)
}

fn unescape_shell(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}
