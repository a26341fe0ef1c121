// build.rs - TOML-driven constant generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    source: SourceSettings,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct SourceSettings {
    default_path: String,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    log_buffer_size: usize,
    max_log_message_length: usize,
    default_min_log_level: u8,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=CPP_LEXER_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=CPP_LEXER_CONFIG_DIR");

    let profile =
        env::var("CPP_LEXER_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("CPP_LEXER_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Find workspace root (parent of cpp_lexer directory)
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_constraints(&config, &profile);
    generate_constants(&config, &profile);
}

fn validate_constraints(config: &CompileTimeConfig, profile: &str) {
    if config.source.default_path.trim().is_empty() {
        panic!("CONFIG: source.default_path must not be empty");
    }

    if config.logging.default_min_log_level > 3 {
        panic!("CONFIG: logging.default_min_log_level out of range (0-3)");
    }

    if config.logging.log_buffer_size < 100 || config.logging.log_buffer_size > 100_000 {
        panic!("CONFIG: logging.log_buffer_size must be within 100..=100000");
    }

    if profile == "production" && config.logging.default_min_log_level > 2 {
        panic!("PRODUCTION: debug logging cannot be the default in production");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod source {{
        pub const DEFAULT_SOURCE_PATH: &str = {:?};
    }}

    pub mod logging {{
        pub const LOG_BUFFER_SIZE: usize = {};
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
        pub const DEFAULT_MIN_LOG_LEVEL: u8 = {};
    }}
}}
"#,
        profile,
        config.source.default_path,
        config.logging.log_buffer_size,
        config.logging.max_log_message_length,
        config.logging.default_min_log_level,
    );

    fs::write(output_path, constants_code).unwrap();
}
