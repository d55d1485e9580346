//! Stage 1: business context summarizer.

use std::io::ErrorKind;
use std::path::Path;

use leadgen_core::{CoreError, PipelineFiles};
use leadgen_llm::ChatClient;

use crate::error::StrategistError;
use crate::prompts::{summary_prompt, SUMMARY_SYSTEM_PROMPT};

/// Summarize the context document and persist the summary for stage 2.
///
/// Reads `files.context`, asks the model the three fixed questions, writes the
/// reply verbatim to `files.summary`, and returns it so the caller can print it.
///
/// # Errors
///
/// - [`StrategistError::InputMissing`] / [`StrategistError::InputEmpty`] if the
///   context file is absent or blank. No API call is made in that case.
/// - [`StrategistError::Llm`] if the completion fails.
/// - [`StrategistError::Core`] if the summary cannot be written.
pub async fn run_summarizer(
    client: &ChatClient,
    files: &PipelineFiles,
) -> Result<String, StrategistError> {
    let context = read_required_input(
        &files.context,
        "place the company description next to the pipeline files",
    )?;

    tracing::info!(
        path = %files.context.display(),
        chars = context.len(),
        model = client.model(),
        "sending context to the model for analysis"
    );

    let summary = client
        .complete_text(SUMMARY_SYSTEM_PROMPT, &summary_prompt(&context))
        .await?;

    leadgen_core::write_text(&files.summary, &summary)?;
    tracing::info!(path = %files.summary.display(), "business summary saved");

    Ok(summary)
}

/// Read a stage input file, mapping "not found" and blank content to
/// dedicated errors.
pub(crate) fn read_required_input(
    path: &Path,
    hint: &'static str,
) -> Result<String, StrategistError> {
    let content = match leadgen_core::read_text(path) {
        Ok(content) => content,
        Err(CoreError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
            return Err(StrategistError::InputMissing {
                path: path.display().to_string(),
                hint,
            });
        }
        Err(e) => return Err(e.into()),
    };

    if content.trim().is_empty() {
        return Err(StrategistError::InputEmpty {
            path: path.display().to_string(),
        });
    }

    Ok(content)
}
