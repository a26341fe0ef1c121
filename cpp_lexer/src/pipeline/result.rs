use crate::file_processor::FileMetadata;
use crate::lexical::LexicalMetrics;
use crate::report::FinalReport;
use std::time::Duration;

/// Everything a completed run produced besides the text on the writer
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub report: FinalReport,
    /// Present when the source came from a file
    pub file_metadata: Option<FileMetadata>,
    pub lexical_metrics: LexicalMetrics,
    pub lexeme_count: usize,
    pub classified_count: usize,
    pub dropped_count: usize,
    pub processing_duration: Duration,
}

impl PipelineResult {
    pub fn log_success(&self, source: &str) {
        let secs = self.processing_duration.as_secs_f64();
        let lexemes_per_sec = if secs > 0.0 {
            self.lexeme_count as f64 / secs
        } else {
            0.0
        };

        crate::log_success!(
            crate::logging::codes::success::PIPELINE_COMPLETE,
            "Token classification pipeline succeeded",
            "source" => source,
            "lexemes" => self.lexeme_count,
            "classified" => self.classified_count,
            "dropped" => self.dropped_count,
            "duration_ms" => format!("{:.2}", secs * 1000.0),
            "lexemes_per_sec" => format!("{:.0}", lexemes_per_sec)
        );
    }
}
