mod error;
pub mod output;
mod result;
mod validation;

pub use error::{error_line, PipelineError};
pub use output::PipelineOutput;
pub use result::PipelineResult;
pub use validation::validate_pipeline;

use crate::classification::{self, Classifier};
use crate::config::runtime::{ReportFormat, ReportPreferences, RuntimeConfig};
use crate::file_processor::FileProcessor;
use crate::lexical;
use crate::logging::codes;
use crate::report::{FinalReport, Reporter};
use std::io::Write;
use std::time::Instant;

/// Read the configured source file and classify it (file -> lexical -> classification -> report)
pub fn process_file<W: Write>(
    config: &RuntimeConfig,
    out: W,
) -> Result<PipelineResult, PipelineError> {
    let start_time = Instant::now();
    let file_path = config.source.source_path.as_str();

    crate::log_info!("Starting token classification pipeline",
        "file" => file_path,
        "format" => config.report.format.as_str()
    );

    // Stage 1: File processing
    let file_result = FileProcessor::from_preferences(&config.source).process_file(file_path)?;

    // Stages 2-4
    let mut result = run_stages(&file_result.source, Some(file_path), &config.report, out)?;

    result.file_metadata = Some(file_result.metadata);
    result.processing_duration = start_time.elapsed();
    result.log_success(file_path);

    Ok(result)
}

/// Classify in-memory source text
pub fn process_source<W: Write>(
    source: &str,
    preferences: &ReportPreferences,
    out: W,
) -> Result<PipelineResult, PipelineError> {
    let result = run_stages(source, None, preferences, out)?;
    result.log_success("<memory>");
    Ok(result)
}

fn run_stages<W: Write>(
    source: &str,
    source_path: Option<&str>,
    preferences: &ReportPreferences,
    out: W,
) -> Result<PipelineResult, PipelineError> {
    let start_time = Instant::now();

    // Stage 2: Lexical analysis
    let mut analyzer = lexical::create_analyzer();
    let stream = analyzer.tokenize(source)?;
    let lexical_metrics = analyzer.metrics().clone();

    // Per-token text would corrupt a JSON document
    let sink_preferences = match preferences.format {
        ReportFormat::Text => preferences.clone(),
        ReportFormat::Json => ReportPreferences {
            format: ReportFormat::Json,
            ..ReportPreferences::quiet()
        },
    };
    let mut reporter = Reporter::new(out, sink_preferences);

    // Stage 3: Classification, streaming per-token output
    let classifier = Classifier::new()?;
    let state = classification::classify_stream(&classifier, &stream, |lexeme, category, tally| {
        reporter.on_classified(lexeme, category, tally)
    })?;

    let mut result = PipelineResult {
        report: FinalReport::from_state(&state),
        file_metadata: None,
        lexical_metrics,
        lexeme_count: stream.len(),
        classified_count: state.classified_count(),
        dropped_count: state.dropped_count(),
        processing_duration: start_time.elapsed(),
    };

    // Stage 4: Final summary
    match preferences.format {
        ReportFormat::Text => {
            reporter.write_final_text(&state)?;
        }
        ReportFormat::Json => {
            let document =
                PipelineOutput::new(source_path.map(str::to_string), &result).to_json()?;
            reporter.write_document(&document)?;
        }
    }

    crate::log_success!(
        codes::success::REPORT_COMPLETE,
        "Report written",
        "format" => preferences.format.as_str(),
        "lines" => reporter.lines_written()
    );

    result.processing_duration = start_time.elapsed();
    Ok(result)
}
