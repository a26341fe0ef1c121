use crate::report::FinalReport;
use serde::{Deserialize, Serialize};

/// Machine-readable form of a completed run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOutput {
    /// Absent when classifying in-memory source
    pub source_path: Option<String>,
    pub lexeme_count: usize,
    pub classified_count: usize,
    pub dropped_count: usize,
    pub final_summary: FinalReport,
}

impl PipelineOutput {
    pub fn new(source_path: Option<String>, result: &super::PipelineResult) -> Self {
        Self {
            source_path,
            lexeme_count: result.lexeme_count,
            classified_count: result.classified_count,
            dropped_count: result.dropped_count,
            final_summary: result.report.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
