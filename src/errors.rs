// ABOUTME: Error types for the slide-composer library
// ABOUTME: Provides structured error handling for composition and code execution

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlideError {
    #[error("Slide validation error: {0}")]
    ValidationError(String),

    #[error("Slide {index} could not be composed: {source}")]
    SlideValidation {
        index: usize,
        #[source]
        source: Box<SlideError>,
    },

    #[error("No ```{language} code block found in section")]
    MissingCodeBlock { language: String },

    #[error("Executed code did not bind `{0}`")]
    MissingBinding(String),

    #[error("Code execution failed: {0}")]
    ExecutionError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

// Host executors report failures through anyhow
impl From<anyhow::Error> for SlideError {
    fn from(err: anyhow::Error) -> Self {
        SlideError::ExecutionError(format!("{:#}", err))
    }
}

pub type Result<T> = std::result::Result<T, SlideError>;
