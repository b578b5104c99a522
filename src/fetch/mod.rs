//! Remote fetcher
//!
//! Downloads a file over HTTP and hands the raw body to the content reader.
//! One request per call: no retries, no custom timeout, default redirect
//! handling. Like the reader, the public helpers never fail; errors are
//! logged and turned into an empty result.

mod error;

pub use error::{FetchError, Result};

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::accept::AcceptFilter;
use crate::reader::{self, ByteSource, Encoding, ReadOutcome};

/// Something that can turn a URL into bytes
///
/// The prompt runs fetches on a worker thread, hence `Send + Sync`.
pub trait Fetcher: Send + Sync {
    /// Retrieve the resource at `url`
    ///
    /// The accept filter is a hint for the server; the response is not
    /// checked against it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not 2xx.
    fn fetch(&self, url: &str, accept: &AcceptFilter) -> Result<ByteSource>;

    /// Fetch and decode, reporting success separately from the content
    fn fetch_outcome(&self, url: &str, accept: &AcceptFilter, encoding: Encoding) -> ReadOutcome {
        match self.fetch(url, accept) {
            Ok(source) => reader::read(&source, encoding),
            Err(e) => {
                log::error!("Failed to fetch file: {e}");
                ReadOutcome::failed()
            }
        }
    }

    /// Fetch and decode, returning an empty string on any failure
    fn fetch_and_decode(&self, url: &str, accept: &AcceptFilter, encoding: Encoding) -> String {
        self.fetch_outcome(url, accept, encoding).into_content()
    }
}

/// Blocking HTTP fetcher backed by `reqwest`
///
/// Must not be created or dropped inside an async runtime.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with a default client
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Client` if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("fileprompt/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// Create a fetcher around an existing client
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str, accept: &AcceptFilter) -> Result<ByteSource> {
        let mut request = self.client.get(url);
        if !accept.is_any() {
            request = request.header(ACCEPT, accept.as_str().trim());
        }

        let response = request.send().map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mime = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let bytes = response.bytes().map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;

        log::debug!("Fetched {} bytes from {url}", bytes.len());
        Ok(ByteSource::blob(bytes.to_vec(), mime))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fetcher that serves one canned body, or a fixed status
    struct StaticFetcher {
        body: Vec<u8>,
        mime: Option<String>,
        status: u16,
    }

    impl Fetcher for StaticFetcher {
        fn fetch(&self, url: &str, _accept: &AcceptFilter) -> Result<ByteSource> {
            if self.status == 200 {
                Ok(ByteSource::blob(self.body.clone(), self.mime.clone()))
            } else {
                Err(FetchError::Status {
                    url: url.to_string(),
                    status: self.status,
                })
            }
        }
    }

    #[test]
    fn test_fetch_and_decode_data_url() {
        let fetcher = StaticFetcher {
            body: b"GIF89a".to_vec(),
            mime: Some("image/gif".into()),
            status: 200,
        };
        let content =
            fetcher.fetch_and_decode("https://x/y.gif", &AcceptFilter::any(), Encoding::DataUrl);
        assert_eq!(content, "data:image/gif;base64,R0lGODlh");
    }

    #[test]
    fn test_fetch_and_decode_text() {
        let fetcher = StaticFetcher {
            body: "héllo".as_bytes().to_vec(),
            mime: None,
            status: 200,
        };
        let content =
            fetcher.fetch_and_decode("https://x/y.txt", &AcceptFilter::any(), Encoding::Text);
        assert_eq!(content, "héllo");
    }

    #[test]
    fn test_non_success_status_is_empty_failure() {
        let fetcher = StaticFetcher {
            body: b"not found page".to_vec(),
            mime: Some("text/html".into()),
            status: 404,
        };
        let outcome =
            fetcher.fetch_outcome("https://x/missing", &AcceptFilter::any(), Encoding::DataUrl);
        assert_eq!(outcome, ReadOutcome::failed());
    }
}
