//! Fetch command - download a URL without showing the prompt

use crate::{
    AcceptFilter, PromptError,
    fetch::Fetcher,
    reader::Encoding,
    ui::OutputWriter,
};

type Result<T> = std::result::Result<T, PromptError>;

/// Execute the fetch command
///
/// # Errors
/// Never fails at the moment; download failures are reported through
/// `output` and the return value.
pub fn execute(
    fetcher: &dyn Fetcher,
    url: &str,
    accept: &str,
    encoding: Encoding,
    output: &dyn OutputWriter,
) -> Result<bool> {
    let url = url.trim();
    let accept = AcceptFilter::new(accept);
    output.info(&format!("Fetching {url} as {encoding}"));

    let outcome = fetcher.fetch_outcome(url, &accept, encoding);
    if !outcome.ok {
        output.error(&format!("Failed to fetch {url}"));
        return Ok(false);
    }

    output.write(&outcome.content);
    Ok(true)
}
