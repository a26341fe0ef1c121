//! Priority-ordered lexeme classification
//!
//! Keyword, Operator and Symbol are table lookups; Identifier and Constant are
//! anchored shape patterns over the whole lexeme. The first rule that matches wins.

use crate::lexical::analyzer::cached_regex;
use crate::lexical::LexerError;
use crate::tokens::{is_keyword, is_operator, is_symbol, Category};
use regex::Regex;
use std::sync::OnceLock;

pub const IDENTIFIER_PATTERN: &str = r"^[a-zA-Z_][a-zA-Z0-9_]*$";
pub const CONSTANT_PATTERN: &str = r"^-?[0-9]*\.?[0-9]+([eE][-+]?[0-9]+)?$";

static IDENTIFIER_REGEX: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
static CONSTANT_REGEX: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

/// Holds the compiled shape patterns, so classifying a lexeme cannot fail
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    identifier: &'static Regex,
    constant: &'static Regex,
}

impl Classifier {
    pub fn new() -> Result<Self, LexerError> {
        Ok(Self {
            identifier: cached_regex(&IDENTIFIER_REGEX, "Identifier", IDENTIFIER_PATTERN)?,
            constant: cached_regex(&CONSTANT_REGEX, "Constant", CONSTANT_PATTERN)?,
        })
    }

    /// Category for `lexeme`, or `None` when it is dropped
    pub fn classify(&self, lexeme: &str) -> Option<Category> {
        if is_keyword(lexeme) {
            Some(Category::Keyword)
        } else if is_operator(lexeme) {
            Some(Category::Operator)
        } else if is_symbol(lexeme) {
            Some(Category::Symbol)
        } else if self.is_identifier_shape(lexeme) {
            Some(Category::Identifier)
        } else if self.is_constant_shape(lexeme) {
            Some(Category::Constant)
        } else {
            None
        }
    }

    pub fn is_identifier_shape(&self, lexeme: &str) -> bool {
        self.identifier.is_match(lexeme)
    }

    pub fn is_constant_shape(&self, lexeme: &str) -> bool {
        self.constant.is_match(lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::tables;

    fn classifier() -> Classifier {
        Classifier::new().unwrap()
    }

    fn classify(lexeme: &str) -> Option<Category> {
        classifier().classify(lexeme)
    }

    #[test]
    fn test_shape_patterns_compile() {
        assert!(Classifier::new().is_ok());
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(classify("int"), Some(Category::Keyword));
        assert_eq!(classify("cout"), Some(Category::Keyword));
        assert_eq!(classify("+="), Some(Category::Operator));
        assert_eq!(classify(";"), Some(Category::Symbol));
        assert_eq!(classify("main"), Some(Category::Identifier));
        assert_eq!(classify("3.14"), Some(Category::Constant));
    }

    #[test]
    fn test_percent_is_always_operator() {
        assert_eq!(classify("%"), Some(Category::Operator));
    }

    #[test]
    fn test_dropped_lexemes() {
        assert_eq!(classify(" "), None);
        assert_eq!(classify("<iostream>"), None);
        assert_eq!(classify("< b && c >"), None);
        assert_eq!(classify("5."), None);
        assert_eq!(classify("<<=-"), None);
        assert_eq!(classify("["), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_every_table_entry_classifies_to_its_table() {
        for keyword in tables::keywords() {
            assert_eq!(classify(keyword), Some(Category::Keyword), "{}", keyword);
        }
        for operator in tables::operators() {
            assert_eq!(classify(operator), Some(Category::Operator), "{}", operator);
        }
        for symbol in tables::symbols() {
            let expected = if tables::is_operator(symbol) {
                Category::Operator
            } else {
                Category::Symbol
            };
            assert_eq!(classify(symbol), Some(expected), "{}", symbol);
        }
    }

    #[test]
    fn test_classification_is_idempotent() {
        for lexeme in ["x", "42", "::", "\\n", " ", "<vector>"] {
            assert_eq!(classify(lexeme), classify(lexeme));
        }
    }

    #[test]
    fn test_identifier_shape() {
        let classifier = classifier();

        for accepted in ["x", "_x1", "camelCase", "__", "A9"] {
            assert!(classifier.is_identifier_shape(accepted), "{:?}", accepted);
        }
        for rejected in ["", "1x", "x-y", "é", "x y"] {
            assert!(!classifier.is_identifier_shape(rejected), "{:?}", rejected);
        }
    }

    #[test]
    fn test_constant_shape() {
        let classifier = classifier();

        for accepted in ["0", "42", "-7", "3.14", ".5", "-.5", "1e10", "1E-3", "2.5e+7"] {
            assert!(classifier.is_constant_shape(accepted), "{:?}", accepted);
        }
        for rejected in [
            "", "5.", "1e", "e5", "1.2.3", "--1", "-", ".", "1..2", "1e5e5", "12a", "+1",
        ] {
            assert!(!classifier.is_constant_shape(rejected), "{:?}", rejected);
        }
    }
}
