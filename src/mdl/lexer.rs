//! Lexer module for the model notation
//!
//! This module contains the tokenization logic: token definitions, the source
//! location index, and the tokenizer itself.
//!
//! Structure
//!
//!     Raw scanning is done by the logos lexer over the [Lexeme] categories. The
//!     [Tokenizer] wraps it, attaching line/column positions, skipping whitespace,
//!     and guaranteeing that the stream is closed by exactly one end-of-stream token,
//!     even after an unrecognized character.
//!
//!     The tokenizer is an ordinary iterator, so the parser can pull tokens lazily.
//!     [spawn_tokenizer] instead runs it on a background thread that pushes into a
//!     bounded queue: the producer blocks while the queue is full and the consumer
//!     blocks while it is empty.

pub mod location;
pub mod tokenizer;
pub mod tokens;

pub use location::SourceLocation;
pub use tokenizer::{spawn_tokenizer, Tokenizer};
pub use tokens::{Lexeme, Token, TokenKind};

/// Convenience function to tokenize a string and collect all tokens, the trailing
/// end-of-stream token included
pub fn tokenize(source: &str) -> Vec<Token> {
    Tokenizer::new(source).collect()
}
