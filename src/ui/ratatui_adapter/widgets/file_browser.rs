//! File browser widget
//!
//! The terminal's stand-in for a native file selector. Lists the current
//! directory (directories first, files filtered by the accept filter) and
//! narrows the list with a fuzzy query as the user types.

use crate::accept::AcceptFilter;
use crate::ui::error::{Result, UiError};
use crate::ui::ratatui_adapter::theme::Theme;
use byte_unit::{Byte, UnitType};
use nucleo::{
    Config, Matcher,
    pattern::{CaseMatching, Normalization, Pattern},
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};
use std::fs;
use std::path::{Path, PathBuf};

/// Kind of a browser row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// The parent directory (`..`)
    Parent,
    /// A directory
    Directory,
    /// A file accepted by the filter
    File,
}

/// One row of the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserEntry {
    /// Display name
    pub name: String,
    /// Full path
    pub path: PathBuf,
    /// Row kind
    pub kind: EntryKind,
    /// File size in bytes (0 for directories)
    pub size: u64,
}

impl BrowserEntry {
    /// Human-readable size, empty for directories
    #[must_use]
    pub fn size_text(&self) -> String {
        match self.kind {
            EntryKind::File => {
                let adjusted = Byte::from_u64(self.size).get_appropriate_unit(UnitType::Binary);
                format!("{adjusted:.1}")
            }
            EntryKind::Parent | EntryKind::Directory => String::new(),
        }
    }
}

/// What the user picked with Enter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserAction {
    /// Nothing to report to the session
    None,
    /// The browser moved into another directory
    Navigated,
    /// A file was chosen
    Selected(PathBuf),
}

struct Candidate<'a> {
    index: usize,
    name: &'a str,
}

impl AsRef<str> for Candidate<'_> {
    fn as_ref(&self) -> &str {
        self.name
    }
}

/// State of the file browser
pub struct FileBrowserState {
    /// Directory being listed
    pub dir: PathBuf,
    /// Filter for files
    pub accept: AcceptFilter,
    /// Whether dotfiles are listed
    pub show_hidden: bool,
    /// Every entry of the directory that passes the filters
    pub entries: Vec<BrowserEntry>,
    /// Indices into `entries` matching the query, best match first
    pub filtered: Vec<usize>,
    /// Cursor position in `filtered`
    pub cursor: usize,
    /// Fuzzy query
    pub query: String,
    matcher: Matcher,
}

impl std::fmt::Debug for FileBrowserState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileBrowserState")
            .field("dir", &self.dir)
            .field("accept", &self.accept)
            .field("show_hidden", &self.show_hidden)
            .field("entries", &self.entries.len())
            .field("cursor", &self.cursor)
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

impl FileBrowserState {
    /// Open the browser on a directory
    ///
    /// # Errors
    ///
    /// Returns `UiError::Browse` if the directory cannot be listed.
    pub fn open(dir: impl Into<PathBuf>, accept: AcceptFilter, show_hidden: bool) -> Result<Self> {
        let mut state = Self {
            dir: dir.into(),
            accept,
            show_hidden,
            entries: Vec::new(),
            filtered: Vec::new(),
            cursor: 0,
            query: String::new(),
            matcher: Matcher::new(Config::DEFAULT.match_paths()),
        };
        state.reload()?;
        Ok(state)
    }

    /// Re-read the current directory and reset query and cursor
    ///
    /// # Errors
    ///
    /// Returns `UiError::Browse` if the directory cannot be listed.
    pub fn reload(&mut self) -> Result<()> {
        self.entries = list_dir(&self.dir, &self.accept, self.show_hidden)?;
        self.query.clear();
        self.cursor = 0;
        self.refilter();
        Ok(())
    }

    /// Entry under the cursor
    #[must_use]
    pub fn current(&self) -> Option<&BrowserEntry> {
        self.filtered
            .get(self.cursor)
            .and_then(|&i| self.entries.get(i))
    }

    /// Entries in display order
    pub fn visible(&self) -> impl Iterator<Item = &BrowserEntry> {
        self.filtered.iter().filter_map(|&i| self.entries.get(i))
    }

    /// Move cursor up
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor down
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.filtered.len() {
            self.cursor += 1;
        }
    }

    /// Move cursor up by a page
    pub fn page_up(&mut self, page: usize) {
        self.cursor = self.cursor.saturating_sub(page.max(1));
    }

    /// Move cursor down by a page
    pub fn page_down(&mut self, page: usize) {
        self.cursor = (self.cursor + page.max(1)).min(self.filtered.len().saturating_sub(1));
    }

    /// Add a character to the query
    pub fn query_push(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    /// Remove the last character of the query
    ///
    /// Returns `false` when the query was already empty.
    pub fn query_backspace(&mut self) -> bool {
        if self.query.pop().is_none() {
            return false;
        }
        self.refilter();
        true
    }

    /// Toggle listing of dotfiles
    ///
    /// # Errors
    ///
    /// Returns `UiError::Browse` if the directory cannot be listed.
    pub fn toggle_hidden(&mut self) -> Result<()> {
        self.show_hidden = !self.show_hidden;
        self.reload()
    }

    /// Move to the parent directory
    ///
    /// # Errors
    ///
    /// Returns `UiError::Browse` if the parent cannot be listed.
    pub fn go_up(&mut self) -> Result<BrowserAction> {
        let Some(parent) = self.dir.parent().map(Path::to_path_buf) else {
            return Ok(BrowserAction::None);
        };
        self.change_dir(parent)
    }

    /// Open the entry under the cursor
    ///
    /// Directories are entered, files are returned as the selection.
    ///
    /// # Errors
    ///
    /// Returns `UiError::Browse` if a directory cannot be listed. The
    /// browser stays in the previous directory.
    pub fn activate(&mut self) -> Result<BrowserAction> {
        let Some(entry) = self.current().cloned() else {
            return Ok(BrowserAction::None);
        };
        match entry.kind {
            EntryKind::Parent => self.go_up(),
            EntryKind::Directory => self.change_dir(entry.path),
            EntryKind::File => Ok(BrowserAction::Selected(entry.path)),
        }
    }

    fn change_dir(&mut self, dir: PathBuf) -> Result<BrowserAction> {
        let entries = list_dir(&dir, &self.accept, self.show_hidden)?;
        self.dir = dir;
        self.entries = entries;
        self.query.clear();
        self.cursor = 0;
        self.refilter();
        Ok(BrowserAction::Navigated)
    }

    fn refilter(&mut self) {
        if self.query.is_empty() {
            self.filtered = (0..self.entries.len()).collect();
        } else {
            let pattern = Pattern::parse(&self.query, CaseMatching::Smart, Normalization::Smart);
            let candidates = self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, e)| e.kind != EntryKind::Parent)
                .map(|(index, e)| Candidate {
                    index,
                    name: &e.name,
                });
            self.filtered = pattern
                .match_list(candidates, &mut self.matcher)
                .into_iter()
                .map(|(c, _)| c.index)
                .collect();
        }
        if self.cursor >= self.filtered.len() {
            self.cursor = self.filtered.len().saturating_sub(1);
        }
    }
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// List a directory: parent link, then directories, then accepted files
fn list_dir(dir: &Path, accept: &AcceptFilter, show_hidden: bool) -> Result<Vec<BrowserEntry>> {
    let browse_err = |source| UiError::Browse {
        path: dir.to_path_buf(),
        source,
    };

    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(browse_err)? {
        let Ok(entry) = entry else { continue };
        let name = entry.file_name().to_string_lossy().into_owned();
        if !show_hidden && is_hidden(&name) {
            continue;
        }
        let path = entry.path();
        // Follows symlinks so linked directories can be entered
        let Ok(metadata) = fs::metadata(&path) else {
            log::debug!("Skipping unreadable entry {}", path.display());
            continue;
        };
        if metadata.is_dir() {
            dirs.push(BrowserEntry {
                name: format!("{name}/"),
                path,
                kind: EntryKind::Directory,
                size: 0,
            });
        } else if accept.matches_path(&path) {
            files.push(BrowserEntry {
                name,
                path,
                kind: EntryKind::File,
                size: metadata.len(),
            });
        }
    }

    dirs.sort_by_key(|e| e.name.to_lowercase());
    files.sort_by_key(|e| e.name.to_lowercase());

    let parent = dir.parent().map(|p| BrowserEntry {
        name: "../".to_string(),
        path: p.to_path_buf(),
        kind: EntryKind::Parent,
        size: 0,
    });
    Ok(parent.into_iter().chain(dirs).chain(files).collect())
}

/// File browser widget
pub struct FileBrowser<'a> {
    state: &'a FileBrowserState,
    theme: &'a Theme,
}

impl<'a> FileBrowser<'a> {
    /// Create a new file browser widget
    #[must_use]
    pub const fn new(state: &'a FileBrowserState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Area the browser occupies inside `area`
    #[must_use]
    pub fn area(area: Rect) -> Rect {
        let width = area.width.saturating_sub(8).max(area.width.min(40));
        let height = area.height.saturating_sub(4).max(area.height.min(10));
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        Rect::new(x, y, width, height)
    }

    fn build_items(&self, width: u16) -> Vec<ListItem<'static>> {
        self.state
            .visible()
            .map(|entry| {
                let style = match entry.kind {
                    EntryKind::Parent | EntryKind::Directory => self.theme.directory_style(),
                    EntryKind::File => self.theme.path_style(),
                };
                let size = entry.size_text();
                let pad = (width as usize)
                    .saturating_sub(entry.name.chars().count() + size.chars().count() + 4);
                ListItem::new(Line::from(vec![
                    Span::styled(entry.name.clone(), style),
                    Span::raw(" ".repeat(pad)),
                    Span::styled(size, self.theme.dimmed_style()),
                ]))
            })
            .collect()
    }
}

impl Widget for FileBrowser<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let browser_area = Self::area(area);
        Clear.render(browser_area, buf);

        let title = format!(" {} ", self.state.dir.display());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.cursor_style())
            .title(title)
            .title_bottom(Line::from(format!(" {} ", self.state.accept.display_text())).right_aligned());
        let inner = block.inner(browser_area);
        block.render(browser_area, buf);

        let [query_area, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

        Paragraph::new(Line::from(vec![
            Span::styled("> ", self.theme.cursor_style()),
            Span::raw(self.state.query.clone()),
            Span::styled(
                format!("  {}/{}", self.state.filtered.len(), self.state.entries.len()),
                self.theme.dimmed_style(),
            ),
        ]))
        .render(query_area, buf);

        if self.state.filtered.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No matching files",
                self.theme.dimmed_style(),
            )))
            .render(list_area, buf);
            return;
        }

        let list = List::new(self.build_items(list_area.width))
            .highlight_style(self.theme.selected_style())
            .highlight_symbol("> ");
        let mut list_state = ListState::default().with_selected(Some(self.state.cursor));
        StatefulWidget::render(list, list_area, buf, &mut list_state);
    }
}
