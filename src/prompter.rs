//! Acquisition entry points
//!
//! [`Prompter`] runs one [`PromptSession`] at a time against a frontend.
//! Session state lives on the calling thread; reads and fetches run on a
//! worker thread and report back over a channel, so the prompt keeps
//! reacting to Escape while a slow download is in progress.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crate::PromptError;
use crate::accept::AcceptFilter;
use crate::config::{ConfigError, SelectorMode};
use crate::fetch::Fetcher;
use crate::reader::{self, Encoding};
use crate::session::{Command, PromptEvent, PromptRequest, PromptSession};
use crate::ui::PromptFrontend;

/// How long a single event poll may block
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Drives file prompts for a host
///
/// `prompt_for_file` borrows the prompter mutably, so a prompter can only
/// ever show one prompt at a time.
pub struct Prompter<F: PromptFrontend> {
    frontend: F,
    fetcher: Arc<dyn Fetcher>,
    mode: SelectorMode,
    poll_interval: Duration,
}

impl<F: PromptFrontend> Prompter<F> {
    /// Create a prompter in modal mode
    pub fn new(frontend: F, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            frontend,
            fetcher,
            mode: SelectorMode::default(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Use a specific selector mode
    #[must_use]
    pub fn with_selector_mode(mut self, mode: SelectorMode) -> Self {
        self.mode = mode;
        self
    }

    /// Use a specific poll interval
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Change the selector mode from its string form
    ///
    /// Takes effect for the next prompt; a running prompt keeps the mode it
    /// started with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSelectorMode` for unknown modes and keeps
    /// the current one.
    pub fn set_selector_mode(&mut self, mode: &str) -> Result<(), ConfigError> {
        self.mode = mode.parse()?;
        Ok(())
    }

    /// Current selector mode
    #[must_use]
    pub const fn selector_mode(&self) -> SelectorMode {
        self.mode
    }

    /// The frontend
    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// The frontend, mutably
    pub fn frontend_mut(&mut self) -> &mut F {
        &mut self.frontend
    }

    /// Fetch a URL directly, without showing a prompt
    ///
    /// Returns an empty string on any failure.
    #[must_use]
    pub fn fetch_file(&self, accept: &str, encoding: Encoding, url: &str) -> String {
        self.fetcher
            .fetch_and_decode(url.trim(), &AcceptFilter::new(accept), encoding)
    }

    /// Ask the user for a file and return its contents
    ///
    /// Cancellation, unreadable files and failed downloads all give
    /// `Ok("")`. The UI is removed before this returns.
    ///
    /// # Errors
    ///
    /// Returns `PromptError::Session` when the prompt is misused, i.e. the
    /// URL panel is opened for a text prompt.
    pub fn prompt_for_file(&mut self, accept: &str, encoding: Encoding) -> Result<String, PromptError> {
        let mut session = PromptSession::new(PromptRequest::new(accept, encoding), self.mode);
        log::debug!(
            "Opening {encoding} prompt (accept: {}, mode: {})",
            session.request().accept.display_text(),
            self.mode
        );

        if let Err(e) = self.frontend.open(&session.view()) {
            log::error!("Failed to open file prompt: {e}");
            self.close_frontend();
            return Ok(String::new());
        }

        let (tx, rx) = mpsc::channel();
        let run = self.run_session(&mut session, &tx, &rx);

        if !session.is_settled() {
            // Misuse errors leave the session open; the UI still has to go
            self.close_frontend();
        }
        run?;

        Ok(session.take_result().unwrap_or_default())
    }

    fn run_session(
        &mut self,
        session: &mut PromptSession,
        tx: &Sender<String>,
        rx: &Receiver<String>,
    ) -> Result<(), PromptError> {
        let initial = session.start();
        self.execute(session, initial, tx);

        while !session.is_settled() {
            while let Ok(content) = rx.try_recv() {
                self.apply(session, PromptEvent::ReadFinished(content), tx)?;
            }
            if session.is_settled() {
                break;
            }

            match self.frontend.poll_event(self.poll_interval) {
                Ok(Some(event)) => self.apply(session, event, tx)?,
                Ok(None) => {}
                Err(e) => {
                    log::error!("File prompt frontend failed: {e}");
                    self.apply(session, PromptEvent::Escape, tx)?;
                }
            }
        }

        Ok(())
    }

    fn apply(
        &mut self,
        session: &mut PromptSession,
        event: PromptEvent,
        tx: &Sender<String>,
    ) -> Result<(), PromptError> {
        log::debug!("Prompt event: {}", event.name());
        let commands = session.handle(event)?;
        self.execute(session, commands, tx);

        if !session.is_settled()
            && let Err(e) = self.frontend.render(&session.view())
        {
            log::warn!("Failed to redraw file prompt: {e}");
        }
        Ok(())
    }

    fn execute(&mut self, session: &PromptSession, commands: Vec<Command>, tx: &Sender<String>) {
        let request = session.request();
        for command in commands {
            match command {
                Command::OpenSelector => {
                    if let Err(e) = self.frontend.open_selector(&request.accept) {
                        log::error!("Failed to open file selector: {e}");
                    }
                }
                Command::Read(source) => {
                    let encoding = request.encoding;
                    spawn_worker(tx, move || reader::decode(&source, encoding));
                }
                Command::Fetch(url) => {
                    let fetcher = Arc::clone(&self.fetcher);
                    let accept = request.accept.clone();
                    let encoding = request.encoding;
                    spawn_worker(tx, move || fetcher.fetch_and_decode(&url, &accept, encoding));
                }
                Command::Teardown => self.close_frontend(),
            }
        }
    }

    fn close_frontend(&mut self) {
        if let Err(e) = self.frontend.close() {
            log::warn!("Failed to close file prompt: {e}");
        }
    }
}

/// Run `job` on its own thread and report its result on `tx`
fn spawn_worker<J>(tx: &Sender<String>, job: J)
where
    J: FnOnce() -> String + Send + 'static,
{
    let completion = Completion { tx: Some(tx.clone()) };
    thread::spawn(move || completion.finish(job()));
}

/// Delivers a worker's result exactly once
///
/// A worker that unwinds before finishing reports an empty result, so the
/// session still settles.
struct Completion {
    tx: Option<Sender<String>>,
}

impl Completion {
    fn finish(mut self, content: String) {
        self.send(content);
    }

    fn send(&mut self, content: String) {
        if let Some(tx) = self.tx.take() {
            // The receiver is gone when the prompt was cancelled meanwhile
            let _ = tx.send(content);
        }
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        if self.tx.is_some() {
            log::error!("File prompt worker stopped without a result");
            self.send(String::new());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{FetchError, Result as FetchResult};
    use crate::reader::ByteSource;
    use crate::session::{DropPayload, SessionError};
    use crate::testing::{PNG_HEADER, TempFiles};
    use crate::ui::mock::MockFrontend;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fetcher serving fixed bodies by URL, counting requests
    #[derive(Default)]
    struct MapFetcher {
        routes: Vec<(String, Vec<u8>, String)>,
        calls: AtomicUsize,
    }

    impl MapFetcher {
        fn with_route(mut self, url: &str, body: &[u8], mime: &str) -> Self {
            self.routes.push((url.to_string(), body.to_vec(), mime.to_string()));
            self
        }
    }

    impl Fetcher for MapFetcher {
        fn fetch(&self, url: &str, _accept: &AcceptFilter) -> FetchResult<ByteSource> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.routes
                .iter()
                .find(|(u, _, _)| u == url)
                .map(|(_, body, mime)| ByteSource::blob(body.clone(), Some(mime.clone())))
                .ok_or_else(|| FetchError::Status {
                    url: url.to_string(),
                    status: 404,
                })
        }
    }

    fn prompter(events: Vec<PromptEvent>) -> Prompter<MockFrontend> {
        prompter_with(events, Arc::new(MapFetcher::default()))
    }

    fn prompter_with(events: Vec<PromptEvent>, fetcher: Arc<MapFetcher>) -> Prompter<MockFrontend> {
        Prompter::new(MockFrontend::new(events), fetcher)
            .with_poll_interval(Duration::from_millis(5))
    }

    #[test]
    fn test_escape_resolves_empty_and_detaches_listener() {
        let mut p = prompter(vec![PromptEvent::Escape]);
        assert_eq!(p.prompt_for_file("", Encoding::Text).unwrap(), "");
        assert_eq!(p.frontend().key_listeners, 0);
        assert_eq!((p.frontend().opened, p.frontend().closed), (1, 1));

        // A second session gets its own listener and its own Escape
        p.frontend_mut().push_events([PromptEvent::Escape]);
        assert_eq!(p.prompt_for_file("", Encoding::DataUrl).unwrap(), "");
        assert_eq!(p.frontend().key_listeners, 0);
        assert_eq!((p.frontend().opened, p.frontend().closed), (2, 2));
    }

    #[test]
    fn test_dropped_text_file() {
        let files = TempFiles::new();
        let path = files.write("hello.txt", b"hello");
        let mut p = prompter(vec![PromptEvent::Drop(DropPayload::File(ByteSource::file(&path)))]);

        assert_eq!(p.prompt_for_file(".txt", Encoding::Text).unwrap(), "hello");
        assert_eq!(p.frontend().closed, 1);
    }

    #[test]
    fn test_dropped_png_as_data_url() {
        let files = TempFiles::new();
        let path = files.write("pixel.png", PNG_HEADER);
        let mut p = prompter(vec![PromptEvent::Drop(DropPayload::File(ByteSource::file(&path)))]);

        let result = p.prompt_for_file("image/png", Encoding::DataUrl).unwrap();
        let payload = result.strip_prefix("data:image/png;base64,").unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), PNG_HEADER);
    }

    #[test]
    fn test_second_drop_is_not_read() {
        let files = TempFiles::new();
        let first = files.write("first.txt", b"first");
        let second = files.write("second.txt", b"second");
        let mut p = prompter(vec![
            PromptEvent::Drop(DropPayload::File(ByteSource::file(&first))),
            PromptEvent::Drop(DropPayload::File(ByteSource::file(&second))),
        ]);

        assert_eq!(p.prompt_for_file("", Encoding::Text).unwrap(), "first");
        assert_eq!(p.frontend().closed, 1);
    }

    #[test]
    fn test_unreadable_file_resolves_empty() {
        let mut p = prompter(vec![PromptEvent::FileSelected(ByteSource::file(
            "does/not/exist.txt",
        ))]);
        assert_eq!(p.prompt_for_file("", Encoding::Text).unwrap(), "");
    }

    #[test]
    fn test_url_flow_success() {
        let fetcher = Arc::new(
            MapFetcher::default().with_route("https://example.com/a.gif", b"GIF89a", "image/gif"),
        );
        let mut p = prompter_with(
            vec![
                PromptEvent::UrlPanelRequested,
                PromptEvent::UrlSubmitted(" https://example.com/a.gif ".into()),
            ],
            Arc::clone(&fetcher),
        );
        assert_eq!(
            p.prompt_for_file("image/*", Encoding::DataUrl).unwrap(),
            "data:image/gif;base64,R0lGODlh"
        );
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_url_flow_404_resolves_empty() {
        let mut p = prompter(vec![
            PromptEvent::UrlPanelRequested,
            PromptEvent::UrlSubmitted("https://example.com/missing.png".into()),
        ]);
        assert_eq!(p.prompt_for_file("", Encoding::DataUrl).unwrap(), "");
        assert_eq!(p.frontend().key_listeners, 0);
    }

    #[test]
    fn test_url_flow_in_text_mode_is_an_error() {
        let mut p = prompter(vec![PromptEvent::UrlPanelRequested]);
        let err = p.prompt_for_file("", Encoding::Text).unwrap_err();
        assert!(matches!(
            err,
            PromptError::Session(SessionError::UrlRequiresDataUrl(Encoding::Text))
        ));
        // The UI is still removed
        assert_eq!(p.frontend().closed, 1);
        assert_eq!(p.frontend().key_listeners, 0);
    }

    #[test]
    fn test_dropped_url_returned_verbatim() {
        let mut p = prompter(vec![PromptEvent::Drop(DropPayload::Url(
            "https://example.com/cat.png".into(),
        ))]);
        assert_eq!(
            p.prompt_for_file("", Encoding::DataUrl).unwrap(),
            "https://example.com/cat.png"
        );
        assert_eq!(p.frontend().key_listeners, 0);
    }

    #[test]
    fn test_events_after_settlement_are_not_consumed_as_results() {
        let mut p = prompter(vec![
            PromptEvent::Escape,
            PromptEvent::Drop(DropPayload::Url("https://example.com".into())),
        ]);
        assert_eq!(p.prompt_for_file("", Encoding::DataUrl).unwrap(), "");
        assert_eq!(p.frontend().closed, 1);
        assert_eq!(p.frontend().remaining(), 1);
    }

    #[test]
    fn test_auto_open_mode_opens_selector_with_filter() {
        let mut p = prompter(vec![PromptEvent::Escape]).with_selector_mode(SelectorMode::AutoOpenSelector);
        p.prompt_for_file("image/png", Encoding::DataUrl).unwrap();
        assert_eq!(p.frontend().selector_opens, vec![AcceptFilter::new("image/png")]);
    }

    #[test]
    fn test_selector_only_dismiss_cancels() {
        let mut p = prompter(vec![PromptEvent::SelectorDismissed]);
        p.set_selector_mode("only-selector").unwrap();
        assert_eq!(p.prompt_for_file("", Encoding::Text).unwrap(), "");
        assert_eq!(p.frontend().selector_opens.len(), 1);
        assert!(!p.frontend().views[0].show_modal);
    }

    #[test]
    fn test_set_selector_mode_rejects_unknown() {
        let mut p = prompter(Vec::new());
        assert!(p.set_selector_mode("nope").is_err());
        assert_eq!(p.selector_mode(), SelectorMode::Modal);
    }

    #[test]
    fn test_frontend_failure_resolves_empty() {
        // Empty script: the mock eventually reports an error
        let mut p = prompter(Vec::new()).with_poll_interval(Duration::ZERO);
        assert_eq!(p.prompt_for_file("", Encoding::Text).unwrap(), "");
        assert_eq!(p.frontend().closed, 1);
    }

    struct PanickingFetcher;

    impl Fetcher for PanickingFetcher {
        fn fetch(&self, _url: &str, _accept: &AcceptFilter) -> FetchResult<ByteSource> {
            panic!("client blew up");
        }
    }

    #[test]
    fn test_panicking_worker_still_settles() {
        let events = vec![
            PromptEvent::UrlPanelRequested,
            PromptEvent::UrlSubmitted("https://example.com/boom".into()),
        ];
        let mut p = Prompter::new(MockFrontend::new(events), Arc::new(PanickingFetcher))
            .with_poll_interval(Duration::from_millis(5));

        assert_eq!(p.prompt_for_file("", Encoding::DataUrl).unwrap(), "");
        assert!(!p.frontend().gave_up());
        assert_eq!(p.frontend().closed, 1);
    }

    #[test]
    fn test_open_failure_resolves_empty() {
        let mut p = prompter(vec![PromptEvent::Escape]);
        p.frontend_mut().fail_open = true;
        assert_eq!(p.prompt_for_file("", Encoding::Text).unwrap(), "");
        assert_eq!(p.frontend().opened, 0);
    }

    #[test]
    fn test_fetch_file_direct() {
        let fetcher = Arc::new(
            MapFetcher::default().with_route("https://example.com/t.txt", b"remote", "text/plain"),
        );
        let p = prompter_with(Vec::new(), Arc::clone(&fetcher));
        assert_eq!(p.fetch_file("", Encoding::Text, "https://example.com/t.txt"), "remote");
        assert_eq!(p.fetch_file("", Encoding::Text, "https://example.com/404"), "");
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
        assert_eq!(p.frontend().opened, 0);
    }
}
