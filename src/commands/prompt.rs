//! Prompt command - ask the user for a file and print its contents

use crate::{PromptError, Prompter, reader::Encoding, ui::OutputWriter, ui::PromptFrontend};

type Result<T> = std::result::Result<T, PromptError>;

/// Execute the prompt command
///
/// Prints the content on success. An empty result (cancelled, unreadable,
/// or failed download) is reported as a warning.
///
/// # Errors
/// Returns an error if the prompt is misused, e.g. the URL panel is opened
/// for a text prompt.
pub fn execute<F: PromptFrontend>(
    prompter: &mut Prompter<F>,
    accept: &str,
    encoding: Encoding,
    output: &dyn OutputWriter,
) -> Result<bool> {
    let content = prompter.prompt_for_file(accept, encoding)?;

    if content.is_empty() {
        output.warning("No file was provided");
        return Ok(false);
    }

    output.write(&content);
    Ok(true)
}
