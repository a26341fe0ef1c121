//! Configuration module for the C++ token classifier
//! Automatically uses generated constants from TOML configuration

// Include generated constants from build.rs
// This file is generated at compile time from the TOML configuration
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

pub mod runtime;

/// Build information and configuration metadata
pub mod build_info {
    /// Returns the configuration profile used during build
    pub fn profile() -> &'static str {
        option_env!("CPP_LEXER_BUILD_PROFILE").unwrap_or("development")
    }

    /// Returns the configuration directory used during build
    pub fn config_dir() -> &'static str {
        option_env!("CPP_LEXER_CONFIG_DIR").unwrap_or("config")
    }

    /// Returns configuration source information
    pub fn source_info() -> String {
        format!("Generated from {}/{}.toml", config_dir(), profile())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_constants() {
        assert!(!compile_time::source::DEFAULT_SOURCE_PATH.is_empty());
        assert!(compile_time::logging::LOG_BUFFER_SIZE >= 100);
        assert!(compile_time::logging::DEFAULT_MIN_LOG_LEVEL <= 3);
    }

    #[test]
    fn test_source_info() {
        let info = build_info::source_info();
        assert!(info.starts_with("Generated from "));
        assert!(info.ends_with(".toml"));
    }
}
