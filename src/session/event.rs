//! Events a frontend feeds into a prompt session

use crate::reader::ByteSource;

/// What was dropped onto the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropPayload {
    /// A file
    File(ByteSource),
    /// A link rather than file bytes
    Url(String),
}

/// User and I/O events understood by a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    /// The modal body was activated; open the file selector
    BrowseRequested,
    /// A file was chosen in the file selector
    FileSelected(ByteSource),
    /// The file selector was closed without choosing anything
    SelectorDismissed,
    /// A drag entered the prompt
    DragEnter,
    /// A drag left the prompt without dropping
    DragLeave,
    /// Something was dropped on the prompt
    Drop(DropPayload),
    /// Click on the dimmed area around the modal
    BackdropClicked,
    /// Escape was pressed
    Escape,
    /// The "From URL" button was activated
    UrlPanelRequested,
    /// A URL was submitted from the URL panel
    UrlSubmitted(String),
    /// Click on the URL panel outside its input
    UrlBackdropClicked,
    /// A read or fetch finished with this content (empty on failure)
    ReadFinished(String),
}

impl PromptEvent {
    /// Short name for logging, without payloads
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BrowseRequested => "browse",
            Self::FileSelected(_) => "file-selected",
            Self::SelectorDismissed => "selector-dismissed",
            Self::DragEnter => "drag-enter",
            Self::DragLeave => "drag-leave",
            Self::Drop(DropPayload::File(_)) => "drop-file",
            Self::Drop(DropPayload::Url(_)) => "drop-url",
            Self::BackdropClicked => "backdrop-click",
            Self::Escape => "escape",
            Self::UrlPanelRequested => "url-panel",
            Self::UrlSubmitted(_) => "url-submit",
            Self::UrlBackdropClicked => "url-backdrop-click",
            Self::ReadFinished(_) => "read-finished",
        }
    }
}
