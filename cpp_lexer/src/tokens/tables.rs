//! Fixed reference tables for table-driven categories
//!
//! The slices are the source of truth; membership checks go through
//! `HashSet`s built on first use.

use std::collections::HashSet;
use std::sync::OnceLock;

/// C++ reserved words plus common library names treated as keywords
pub fn keywords() -> &'static [&'static str] {
    &[
        "asm",
        "else",
        "new",
        "this",
        "auto",
        "enum",
        "operator",
        "throw",
        "endl",
        "bool",
        "explicit",
        "private",
        "true",
        "break",
        "export",
        "protected",
        "try",
        "case",
        "extern",
        "public",
        "typedef",
        "catch",
        "false",
        "register",
        "typeid",
        "char",
        "float",
        "reinterpret_cast",
        "typename",
        "class",
        "for",
        "return",
        "union",
        "const",
        "friend",
        "short",
        "unsigned",
        "const_cast",
        "goto",
        "signed",
        "using",
        "continue",
        "if",
        "sizeof",
        "virtual",
        "default",
        "inline",
        "static",
        "void",
        "delete",
        "int",
        "static_cast",
        "string",
        "volatile",
        "do",
        "long",
        "struct",
        "wchar_t",
        "double",
        "mutable",
        "switch",
        "while",
        "dynamic_cast",
        "namespace",
        "template",
        // Library vocabulary
        "include",
        "iostream",
        "cout",
        "std",
    ]
}

pub fn operators() -> &'static [&'static str] {
    &[
        // Arithmetic
        "+", "-", "*", "/", "%",
        // Comparison
        "==", "!=", ">", "<", ">=", "<=",
        // Logical and bitwise
        "&&", "||", "!", "&", "|", "^", "~", "<<", ">>",
        // Assignment
        "=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<=", ">>=",
        // Scope, increment, decrement
        "::", "++", "--",
    ]
}

/// Punctuation plus the normalized tab and newline mnemonics.
/// `%` also appears in `operators()`, which is checked first.
pub fn symbols() -> &'static [&'static str] {
    &[
        "#", "{", "}", ";", ":", ".", ",", "'", "\"", "(", ")", "%", "\\t", "\\n",
    ]
}

static KEYWORD_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
static OPERATOR_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
static SYMBOL_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

pub fn is_keyword(lexeme: &str) -> bool {
    KEYWORD_SET
        .get_or_init(|| keywords().iter().copied().collect())
        .contains(lexeme)
}

pub fn is_operator(lexeme: &str) -> bool {
    OPERATOR_SET
        .get_or_init(|| operators().iter().copied().collect())
        .contains(lexeme)
}

pub fn is_symbol(lexeme: &str) -> bool {
    SYMBOL_SET
        .get_or_init(|| symbols().iter().copied().collect())
        .contains(lexeme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(keywords().len(), 69);
        assert_eq!(operators().len(), 34);
        assert_eq!(symbols().len(), 14);
    }

    #[test]
    fn test_tables_have_no_duplicates() {
        for table in [keywords(), operators(), symbols()] {
            let unique: HashSet<_> = table.iter().collect();
            assert_eq!(unique.len(), table.len());
        }
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        assert!(is_keyword("int"));
        assert!(!is_keyword("Int"));
        assert!(is_keyword("cout"));
        assert!(!is_keyword("main"));
    }

    #[test]
    fn test_mnemonics_are_two_characters() {
        assert!(is_symbol("\\t"));
        assert!(is_symbol("\\n"));
        assert!(!is_symbol("\t"));
        assert!(!is_symbol("\n"));
    }

    #[test]
    fn test_percent_is_in_both_tables() {
        assert!(is_operator("%"));
        assert!(is_symbol("%"));
    }
}
