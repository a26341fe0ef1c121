//! File processor: reads the source snippet and maps read failures to
//! [`FileProcessorError`]

mod processor;

use crate::log_debug;
use crate::logging::codes;
pub use processor::{FileMetadata, FileProcessingResult, FileProcessor, FileProcessorError};

/// Startup check that every file processing code is registered
pub fn validate_file_processor() -> Result<(), String> {
    let error_codes = [
        codes::file_processing::FILE_NOT_FOUND,
        codes::file_processing::PERMISSION_DENIED,
        codes::file_processing::IO_ERROR,
        codes::file_processing::INVALID_PATH,
    ];

    for code in &error_codes {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "File processor error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    log_debug!("File processor validated", "codes" => error_codes.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_file_processor() {
        assert!(validate_file_processor().is_ok());
    }
}
