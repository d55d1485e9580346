use thiserror::Error;

#[derive(Debug, Error)]
pub enum StrategistError {
    #[error(transparent)]
    Core(#[from] leadgen_core::CoreError),

    #[error("language model call failed: {0}")]
    Llm(#[from] leadgen_llm::LlmError),

    /// The stage's input file does not exist.
    #[error("input file '{path}' was not found; {hint}")]
    InputMissing { path: String, hint: &'static str },

    #[error("input file '{path}' is empty")]
    InputEmpty { path: String },
}
