// Internal modules
pub mod classification;
pub mod config;
pub mod file_processor;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod tokens;

// Re-export key types for library consumers
pub use classification::{ClassificationState, Classifier};
pub use pipeline::{PipelineError, PipelineResult};
pub use report::FinalReport;
pub use tokens::{Category, TokenStream};

// Re-export pipeline output for JSON consumers
pub use pipeline::output::PipelineOutput;
