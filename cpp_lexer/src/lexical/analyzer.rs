//! Single-pass regex tokenizer
//!
//! One alternation is scanned leftmost-first over the source. Alternatives are
//! tried in the order they appear in [`TOKEN_PATTERN`], so the angle-bracket
//! capture wins over the operator-character run at a `<`.

use crate::logging::codes;
use crate::tokens::{Lexeme, TokenStream};
use crate::{log_debug, log_error, log_success};
use regex::{Match, Regex};
use std::sync::OnceLock;

/// Alternatives in priority order:
/// 1. angle-bracket capture: `<`, anything up to the next `>`, then `>`
///    (`<iostream>`, but also `< b && c >`)
/// 2. identifier-shaped run
/// 3. run of operator characters
/// 4. digits with an optional fraction
/// 5. lone `.`
/// 6. tab
/// 7. newline
/// 8. any other single whitespace character
/// 9. single punctuation character
pub const TOKEN_PATTERN: &str = concat!(
    r"<[^>]+>",
    r"|[A-Za-z_][A-Za-z0-9_]*",
    r"|[-+*/%=&|^!<>:]+",
    r"|[0-9]+\.?[0-9]*",
    r"|\.",
    r"|\t",
    r"|\n",
    r"|\s",
    r#"|[{}();.'",\[\]#]"#,
);

pub const TAB_MNEMONIC: &str = "\\t";
pub const NEWLINE_MNEMONIC: &str = "\\n";

static TOKEN_REGEX: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

#[derive(Debug, Clone, thiserror::Error)]
pub enum LexerError {
    #[error("{name} pattern failed to compile: {message}")]
    InvalidPattern { name: &'static str, message: String },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::InvalidPattern { .. } => codes::lexical::INVALID_PATTERN,
        }
    }
}

/// Compile `pattern` into `cell` on first use; later calls reuse the outcome
pub(crate) fn cached_regex(
    cell: &'static OnceLock<Result<Regex, regex::Error>>,
    name: &'static str,
    pattern: &str,
) -> Result<&'static Regex, LexerError> {
    cell.get_or_init(|| Regex::new(pattern))
        .as_ref()
        .map_err(|e| LexerError::InvalidPattern {
            name,
            message: e.to_string(),
        })
}

/// Compiled token pattern, built on first use
pub fn token_regex() -> Result<&'static Regex, LexerError> {
    cached_regex(&TOKEN_REGEX, "Token", TOKEN_PATTERN)
}

fn normalize(matched: &str) -> Lexeme {
    match matched {
        "\t" => TAB_MNEMONIC.to_string(),
        "\n" => NEWLINE_MNEMONIC.to_string(),
        other => other.to_string(),
    }
}

/// Lazy lexeme iterator over `source`
pub fn lexemes<'s>(source: &'s str) -> Result<impl Iterator<Item = Lexeme> + 's, LexerError> {
    let regex = token_regex()?;
    Ok(regex.find_iter(source).map(|m| normalize(m.as_str())))
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LexicalMetrics {
    pub total_lexemes: usize,
    /// Spaces and other whitespace besides tab and newline
    pub whitespace_lexemes: usize,
    pub tab_mnemonics: usize,
    pub newline_mnemonics: usize,
    pub angle_captures: usize,
    /// Characters no alternative matched
    pub skipped_chars: usize,
}

impl LexicalMetrics {
    pub(crate) fn record_match(&mut self, matched: &Match<'_>) {
        self.total_lexemes += 1;

        let text = matched.as_str();
        match text {
            "\t" => self.tab_mnemonics += 1,
            "\n" => self.newline_mnemonics += 1,
            _ if text.chars().all(char::is_whitespace) => self.whitespace_lexemes += 1,
            _ if is_angle_capture(text) => self.angle_captures += 1,
            _ => {}
        }
    }

    pub(crate) fn record_gap(&mut self, gap: &str) {
        self.skipped_chars += gap.chars().count();
    }
}

fn is_angle_capture(text: &str) -> bool {
    text.len() > 2
        && text.starts_with('<')
        && text.ends_with('>')
        && !text[1..text.len() - 1].contains('>')
}

/// Tokenizer that keeps metrics from its most recent run
pub struct LexicalAnalyzer {
    metrics: LexicalMetrics,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self {
            metrics: LexicalMetrics::default(),
        }
    }

    /// Split `source` into an ordered lexeme stream
    pub fn tokenize(&mut self, source: &str) -> Result<TokenStream, LexerError> {
        self.metrics = LexicalMetrics::default();

        log_debug!("Starting lexical analysis",
            "char_count" => source.chars().count(),
            "byte_count" => source.len()
        );

        let regex = match token_regex() {
            Ok(regex) => regex,
            Err(error) => {
                log_error!(error.error_code(), "Token pattern unavailable",
                    "error" => &error
                );
                return Err(error);
            }
        };

        let mut lexemes = Vec::new();
        let mut last_end = 0;

        for matched in regex.find_iter(source) {
            if matched.start() > last_end {
                self.metrics.record_gap(&source[last_end..matched.start()]);
            }
            last_end = matched.end();

            self.metrics.record_match(&matched);
            lexemes.push(normalize(matched.as_str()));
        }

        if last_end < source.len() {
            self.metrics.record_gap(&source[last_end..]);
        }

        log_success!(
            codes::success::TOKENIZATION_COMPLETE,
            "Lexical analysis completed",
            "lexemes" => self.metrics.total_lexemes,
            "whitespace" => self.metrics.whitespace_lexemes,
            "tabs" => self.metrics.tab_mnemonics,
            "newlines" => self.metrics.newline_mnemonics,
            "angle_captures" => self.metrics.angle_captures,
            "skipped_chars" => self.metrics.skipped_chars
        );

        Ok(TokenStream::new(lexemes))
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
