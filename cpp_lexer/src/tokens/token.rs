//! Lexeme and category types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw lexeme text as produced by the tokenizer, after tab/newline normalization
pub type Lexeme = String;

/// The five lexical categories a lexeme can be assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Keyword,
    Identifier,
    Operator,
    Symbol,
    Constant,
}

impl Category {
    /// Report order
    pub const ALL: [Category; 5] = [
        Category::Keyword,
        Category::Identifier,
        Category::Operator,
        Category::Symbol,
        Category::Constant,
    ];

    /// Label used in `<token> is <label>` trace lines
    pub const fn label(self) -> &'static str {
        match self {
            Category::Keyword => "a keyword",
            Category::Identifier => "an identifier",
            Category::Operator => "an operator",
            Category::Symbol => "a symbol",
            Category::Constant => "a constant",
        }
    }

    /// Heading used in summaries
    pub const fn plural_name(self) -> &'static str {
        match self {
            Category::Keyword => "Keywords",
            Category::Identifier => "Identifiers",
            Category::Operator => "Operators",
            Category::Symbol => "Symbols",
            Category::Constant => "Constants",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Category::Keyword => 0,
            Category::Identifier => 1,
            Category::Operator => 2,
            Category::Symbol => 3,
            Category::Constant => 4,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Keyword => "keyword",
            Category::Identifier => "identifier",
            Category::Operator => "operator",
            Category::Symbol => "symbol",
            Category::Constant => "constant",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Category::Keyword.label(), "a keyword");
        assert_eq!(Category::Identifier.label(), "an identifier");
        assert_eq!(Category::Operator.label(), "an operator");
        assert_eq!(Category::Symbol.label(), "a symbol");
        assert_eq!(Category::Constant.label(), "a constant");
    }

    #[test]
    fn test_index_matches_report_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_serde_uses_variant_names() {
        let json = serde_json::to_string(&Category::Constant).unwrap();
        assert_eq!(json, "\"Constant\"");
    }
}
