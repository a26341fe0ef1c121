//! Source acquisition: path validation, metadata, and a single full read

use crate::config::runtime::SourcePreferences;
use crate::logging::codes;
use crate::{log_debug, log_error, log_success, log_warning};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Every way the source text can be unavailable
#[derive(Debug, Clone, thiserror::Error)]
pub enum FileProcessorError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("I/O error reading file: {message}")]
    IoError { message: String },

    #[error("Invalid file path: {path}")]
    InvalidPath { path: String },
}

impl FileProcessorError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            FileProcessorError::FileNotFound { .. } => codes::file_processing::FILE_NOT_FOUND,
            FileProcessorError::PermissionDenied { .. } => {
                codes::file_processing::PERMISSION_DENIED
            }
            FileProcessorError::IoError { .. } => codes::file_processing::IO_ERROR,
            FileProcessorError::InvalidPath { .. } => codes::file_processing::INVALID_PATH,
        }
    }

    fn from_io(error: &std::io::Error, path: &Path, action: &str) -> Self {
        match error.kind() {
            ErrorKind::NotFound => FileProcessorError::FileNotFound {
                path: path.display().to_string(),
            },
            ErrorKind::PermissionDenied => FileProcessorError::PermissionDenied {
                path: path.display().to_string(),
            },
            _ => FileProcessorError::IoError {
                message: format!("{} '{}': {}", action, path.display(), error),
            },
        }
    }
}

/// File metadata collected during processing
#[derive(Debug, Clone)]
pub struct FileMetadata {
    /// Canonical file path
    pub path: PathBuf,
    pub size: u64,
    /// Lowercased extension, if any
    pub extension: Option<String>,
    pub line_count: usize,
}

impl FileMetadata {
    pub fn human_readable_size(&self) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
        let mut size = self.size as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", self.size, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }

    /// C and C++ source or header extensions
    pub fn is_cpp_source(&self) -> bool {
        matches!(
            self.extension.as_deref(),
            Some("cpp" | "cc" | "cxx" | "c" | "h" | "hpp" | "hh")
        )
    }
}

/// Source text plus what was learned while reading it
#[derive(Debug, Clone)]
pub struct FileProcessingResult {
    pub source: String,
    pub metadata: FileMetadata,
    pub processing_duration: Duration,
}

impl FileProcessingResult {
    pub fn char_count(&self) -> usize {
        self.source.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Characters per millisecond
    pub fn processing_rate(&self) -> f64 {
        let duration_ms = self.processing_duration.as_secs_f64() * 1000.0;
        if duration_ms > 0.0 {
            self.char_count() as f64 / duration_ms
        } else {
            0.0
        }
    }
}

/// Reads one source file in full. No size limit is applied.
pub struct FileProcessor {
    pub enable_performance_logging: bool,
}

impl FileProcessor {
    pub fn new() -> Self {
        Self {
            enable_performance_logging: true,
        }
    }

    pub fn from_preferences(prefs: &SourcePreferences) -> Self {
        Self {
            enable_performance_logging: prefs.enable_performance_logging,
        }
    }

    pub fn process_file(
        &self,
        file_path: &str,
    ) -> Result<FileProcessingResult, FileProcessorError> {
        let start_time = Instant::now();

        log_debug!("Starting file processing", "file" => file_path);

        let path = self.validate_path(file_path)?;
        let mut metadata = self.get_metadata(&path)?;
        let source = self.read_file(&path, file_path)?;

        metadata.line_count = source.lines().count();

        let result = FileProcessingResult {
            source,
            metadata,
            processing_duration: start_time.elapsed(),
        };

        self.log_processing_success(&result, file_path);

        Ok(result)
    }

    fn log_processing_success(&self, result: &FileProcessingResult, file_path: &str) {
        let duration_ms = format!("{:.2}", result.processing_duration.as_secs_f64() * 1000.0);

        if self.enable_performance_logging {
            log_success!(
                codes::success::FILE_PROCESSING_SUCCESS,
                "Source file read with performance metrics",
                "file" => file_path,
                "size_bytes" => result.metadata.size,
                "size_human" => result.metadata.human_readable_size(),
                "lines" => result.metadata.line_count,
                "chars" => result.char_count(),
                "duration_ms" => duration_ms,
                "chars_per_ms" => format!("{:.2}", result.processing_rate())
            );
        } else {
            log_success!(
                codes::success::FILE_PROCESSING_SUCCESS,
                "Source file read",
                "file" => file_path,
                "size_bytes" => result.metadata.size,
                "lines" => result.metadata.line_count
            );
        }

        if !result.metadata.is_cpp_source() {
            log_debug!("Source does not have a C++ extension",
                "file" => file_path,
                "extension" => result.metadata.extension.as_deref().unwrap_or("none")
            );
        }
    }

    fn validate_path(&self, file_path: &str) -> Result<PathBuf, FileProcessorError> {
        if file_path.trim().is_empty() {
            let error = FileProcessorError::InvalidPath {
                path: file_path.to_string(),
            };
            log_error!(error.error_code(), "Empty source path provided");
            return Err(error);
        }

        let path = Path::new(file_path);

        if !path.exists() {
            let error = FileProcessorError::FileNotFound {
                path: file_path.to_string(),
            };
            log_error!(error.error_code(), "Source file not found", "path" => file_path);
            return Err(error);
        }

        if !path.is_file() {
            let error = FileProcessorError::InvalidPath {
                path: file_path.to_string(),
            };
            log_error!(error.error_code(), "Source path is not a file", "path" => file_path);
            return Err(error);
        }

        match path.canonicalize() {
            Ok(canonical_path) => {
                log_debug!("Path validation successful",
                    "canonical_path" => canonical_path.display()
                );
                Ok(canonical_path)
            }
            Err(e) => {
                let error = FileProcessorError::from_io(&e, path, "Failed to resolve path");
                log_error!(error.error_code(), "Failed to canonicalize path",
                    "path" => file_path,
                    "io_error" => e
                );
                Err(error)
            }
        }
    }

    fn get_metadata(&self, path: &Path) -> Result<FileMetadata, FileProcessorError> {
        let metadata = fs::metadata(path).map_err(|e| {
            let error = FileProcessorError::from_io(&e, path, "Failed to read metadata for");
            log_error!(error.error_code(), "Failed to read file metadata",
                "path" => path.display(),
                "io_error" => e
            );
            error
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|s| s.to_lowercase());

        let file_metadata = FileMetadata {
            path: path.to_path_buf(),
            size: metadata.len(),
            extension,
            line_count: 0,
        };

        log_debug!("File metadata collected",
            "size_bytes" => file_metadata.size,
            "size_human" => file_metadata.human_readable_size(),
            "extension" => file_metadata.extension.as_deref().unwrap_or("none")
        );

        Ok(file_metadata)
    }

    /// Invalid UTF-8 sequences become U+FFFD instead of failing the read
    fn read_file(&self, path: &Path, file_path: &str) -> Result<String, FileProcessorError> {
        let bytes = fs::read(path).map_err(|e| {
            let error = FileProcessorError::from_io(&e, path, "Failed to read file");
            log_error!(error.error_code(), "Failed to read source file",
                "file" => file_path,
                "io_error" => e
            );
            error
        })?;

        match String::from_utf8(bytes) {
            Ok(source) => Ok(source),
            Err(e) => {
                let source = String::from_utf8_lossy(e.as_bytes()).into_owned();
                log_warning!("Source is not valid UTF-8, undecodable bytes replaced",
                    "file" => file_path,
                    "first_invalid_byte" => e.utf8_error().valid_up_to()
                );
                Ok(source)
            }
        }
    }
}

impl Default for FileProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_process_valid_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("main.cpp");
        let content = "int main() {\n\treturn 0;\n}\n";
        fs::write(&file_path, content).unwrap();

        let result = FileProcessor::new()
            .process_file(file_path.to_str().unwrap())
            .unwrap();

        assert_eq!(result.source, content);
        assert_eq!(result.metadata.line_count, 3);
        assert_eq!(result.metadata.size, content.len() as u64);
        assert!(result.metadata.is_cpp_source());
        assert_eq!(result.char_count(), content.chars().count());
        assert!(result.processing_rate() >= 0.0);
    }

    #[test]
    fn test_empty_file_is_not_an_error() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("empty.txt");
        fs::write(&file_path, "").unwrap();

        let result = FileProcessor::new()
            .process_file(file_path.to_str().unwrap())
            .unwrap();

        assert!(result.is_empty());
        assert_eq!(result.metadata.line_count, 0);
        assert!(!result.metadata.is_cpp_source());
    }

    #[test]
    fn test_file_not_found() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.cpp");

        let result = FileProcessor::new().process_file(missing.to_str().unwrap());

        assert_matches!(result, Err(FileProcessorError::FileNotFound { .. }));
    }

    #[test]
    fn test_directory_is_invalid_path() {
        let dir = tempdir().unwrap();

        let result = FileProcessor::new().process_file(dir.path().to_str().unwrap());

        assert_matches!(result, Err(FileProcessorError::InvalidPath { .. }));
    }

    #[test]
    fn test_empty_path() {
        let result = FileProcessor::new().process_file("");

        assert_matches!(result, Err(FileProcessorError::InvalidPath { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("latin1.cpp");
        fs::write(&file_path, b"int x; // caf\xe9\n").unwrap();

        let result = FileProcessor::new()
            .process_file(file_path.to_str().unwrap())
            .unwrap();

        assert_eq!(result.source, "int x; // caf\u{FFFD}\n");
        assert_eq!(result.metadata.size, 15);
        assert_eq!(result.metadata.line_count, 1);
    }

    #[test]
    fn test_error_methods() {
        let error = FileProcessorError::FileNotFound {
            path: "main.cpp".to_string(),
        };

        assert_eq!(error.error_code().as_str(), "E005");
        assert_eq!(codes::get_category(error.error_code().as_str()), "FileProcessing");
        assert_eq!(error.to_string(), "File not found: main.cpp");
    }

    #[test]
    fn test_io_error_mapping() {
        let path = Path::new("main.cpp");
        let denied = std::io::Error::new(ErrorKind::PermissionDenied, "denied");
        let other = std::io::Error::new(ErrorKind::Other, "disk on fire");

        assert_matches!(
            FileProcessorError::from_io(&denied, path, "Failed to read file"),
            FileProcessorError::PermissionDenied { .. }
        );
        assert_matches!(
            FileProcessorError::from_io(&other, path, "Failed to read file"),
            FileProcessorError::IoError { message } if message.contains("disk on fire")
        );
    }

    #[test]
    fn test_from_preferences() {
        let prefs = SourcePreferences {
            source_path: "main.cpp".to_string(),
            enable_performance_logging: false,
        };

        let processor = FileProcessor::from_preferences(&prefs);
        assert!(!processor.enable_performance_logging);
    }

    #[test]
    fn test_human_readable_size() {
        let metadata = FileMetadata {
            path: PathBuf::from("main.cpp"),
            size: 2048,
            extension: Some("cpp".to_string()),
            line_count: 0,
        };

        assert_eq!(metadata.human_readable_size(), "2.00 KB");
    }
}
