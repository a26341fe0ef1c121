/// Validate that the pipeline is properly configured
pub fn validate_pipeline() -> Result<(), String> {
    crate::log_debug!("Validating pipeline configuration");

    crate::logging::config::validate_config()?;
    crate::file_processor::validate_file_processor()?;
    crate::lexical::validate_tokenization()?;

    crate::log_success!(
        crate::logging::codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Pipeline validation succeeded",
        "stages_validated" => 4,
        "config" => crate::config::build_info::source_info()
    );

    Ok(())
}
