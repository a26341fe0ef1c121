//! Lexical analysis: source text to ordered lexemes

pub mod analyzer;

use crate::logging::codes;
use crate::tokens::TokenStream;

pub use analyzer::{lexemes, token_regex, LexerError, LexicalAnalyzer, LexicalMetrics};

/// Tokenize with a fresh analyzer
pub fn tokenize(source: &str) -> Result<TokenStream, LexerError> {
    LexicalAnalyzer::new().tokenize(source)
}

pub fn create_analyzer() -> LexicalAnalyzer {
    LexicalAnalyzer::new()
}

// ============================================================================
// MODULE VALIDATION
// ============================================================================

/// Startup check: error codes are registered and the token pattern compiles
pub fn validate_tokenization() -> Result<(), String> {
    let code = codes::lexical::INVALID_PATTERN;
    if codes::get_error_metadata(code.as_str()).is_none() {
        return Err(format!(
            "Lexical error code {} not found in metadata registry",
            code.as_str()
        ));
    }

    token_regex().map_err(|e| e.to_string())?;

    let sample = tokenize("#include <iostream>\n").map_err(|e| e.to_string())?;
    if sample.len() != 4 {
        return Err(format!(
            "Tokenizer self-check produced {} lexemes, expected 4",
            sample.len()
        ));
    }

    crate::classification::Classifier::new().map_err(|e| e.to_string())?;

    crate::log_debug!("Lexical analysis validated",
        "pattern" => analyzer::TOKEN_PATTERN
    );

    Ok(())
}
