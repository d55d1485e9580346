//! Stage 2: Ideal Customer Profile generator.

use leadgen_core::{IcpCollection, PipelineFiles};
use leadgen_llm::ChatClient;

use crate::error::StrategistError;
use crate::prompts::{icp_prompt, ICP_SYSTEM_PROMPT};
use crate::summarize::read_required_input;

/// Number of profiles the prompt asks for.
pub const EXPECTED_ICP_COUNT: usize = 5;

/// Generate ICPs from the stage 1 summary and persist them.
///
/// The model's JSON is validated against [`IcpCollection`]; a reply that does
/// not parse is fatal for the stage and nothing is written.
///
/// # Errors
///
/// - [`StrategistError::InputMissing`] / [`StrategistError::InputEmpty`] if the
///   summary file is absent or blank.
/// - [`StrategistError::Llm`] if the completion fails.
/// - [`StrategistError::Core`] with a schema error if the reply is not a valid
///   ICP collection, or an I/O error if the output cannot be written.
pub async fn run_icp_generator(
    client: &ChatClient,
    files: &PipelineFiles,
) -> Result<IcpCollection, StrategistError> {
    let summary = read_required_input(&files.summary, "run the summarize stage first")?;

    tracing::info!(model = client.model(), "requesting ICPs from the model");

    let raw = client
        .complete_json(ICP_SYSTEM_PROMPT, &icp_prompt(summary.trim()))
        .await?;
    let collection: IcpCollection = leadgen_core::parse_json("ICP model response", &raw)?;

    let count = collection.ideal_customer_profiles.len();
    if count != EXPECTED_ICP_COUNT {
        tracing::warn!(
            expected = EXPECTED_ICP_COUNT,
            got = count,
            "model returned an unexpected number of ICPs"
        );
    }

    leadgen_core::write_json(&files.icp_profiles, &collection)?;
    tracing::info!(
        path = %files.icp_profiles.display(),
        count,
        "ICP profiles saved"
    );

    Ok(collection)
}
