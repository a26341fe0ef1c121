//! Ordered lexeme stream produced by the tokenizer

use super::token::Lexeme;

/// Eager, ordered sequence of lexemes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    lexemes: Vec<Lexeme>,
}

impl TokenStream {
    pub fn new(lexemes: Vec<Lexeme>) -> Self {
        Self { lexemes }
    }

    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }

    pub fn as_slice(&self) -> &[Lexeme] {
        &self.lexemes
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lexemes.iter().map(String::as_str)
    }

    /// Concatenate all lexemes, turning `\t`/`\n` mnemonics back into characters
    pub fn reconstruct(&self) -> String {
        self.lexemes
            .iter()
            .map(|lexeme| match lexeme.as_str() {
                "\\t" => "\t",
                "\\n" => "\n",
                other => other,
            })
            .collect()
    }
}

impl IntoIterator for TokenStream {
    type Item = Lexeme;
    type IntoIter = std::vec::IntoIter<Lexeme>;

    fn into_iter(self) -> Self::IntoIter {
        self.lexemes.into_iter()
    }
}

impl FromIterator<Lexeme> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Lexeme>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
