use crate::file_processor::FileProcessorError;
use crate::lexical::LexerError;
use crate::logging::codes;

/// Pipeline processing errors
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("File processing failed: {0}")]
    FileProcessing(#[from] FileProcessorError),

    #[error("Lexical analysis failed: {0}")]
    LexicalAnalysis(#[from] LexerError),

    #[error("Writing report failed: {0}")]
    Output(#[from] std::io::Error),

    #[error("Report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PipelineError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            PipelineError::FileProcessing(e) => e.error_code(),
            PipelineError::LexicalAnalysis(e) => e.error_code(),
            PipelineError::Output(_) => codes::report::OUTPUT_WRITE_FAILED,
            PipelineError::Serialization(_) => codes::report::SERIALIZATION_FAILED,
        }
    }

    /// The read failure, when the source could not be obtained
    pub fn as_file_error(&self) -> Option<&FileProcessorError> {
        match self {
            PipelineError::FileProcessing(e) => Some(e),
            _ => None,
        }
    }
}

/// The single stderr line reported for a failed run
pub fn error_line(error: &PipelineError) -> String {
    match error.as_file_error() {
        Some(file_error) => format!("Error reading the file: {}", file_error),
        None => format!("Error [{}]: {}", error.error_code(), error),
    }
}
