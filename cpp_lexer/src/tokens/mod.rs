//! Token vocabulary for the C++ snippet classifier
//!
//! - [`Category`]: the five lexical categories, with trace labels and summary headings
//! - [`TokenStream`]: the ordered lexeme sequence the tokenizer produces
//! - [`tables`]: the fixed keyword, operator and symbol tables
//!
//! Lexemes carry no position information. Tab and newline characters appear
//! in the stream as the two-character mnemonics `\t` and `\n`.

pub mod tables;
pub mod token;
pub mod token_stream;

pub use tables::{is_keyword, is_operator, is_symbol};
pub use token::{Category, Lexeme};
pub use token_stream::TokenStream;
