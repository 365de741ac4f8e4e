//! Parser module for the model notation
//!
//! Structure
//!
//!     - [grammar]: the productions as data, plus the section note literals
//!     - [stream]: the token stream with LIFO pushback and checkpoints
//!     - [engine]: one recursive descent method per production
//!     - [error]: lexical and syntax errors with source excerpts
//!
//! Token supply
//!
//!     With `background` enabled (the default) the tokenizer runs on a scoped thread
//!     and hands tokens over through a bounded queue, so scanning and parsing overlap.
//!     Otherwise the engine pulls tokens from the tokenizer on demand on the calling
//!     thread. Both supplies yield the same tokens, so the resulting model is
//!     identical.
//!
//!     The token stream only holds tokens behind an open checkpoint, which never
//!     reaches further back than the start of the current definition, so memory
//!     stays bounded for large inputs.
//!
//!     The engine owns the receiving end of the queue and is dropped before the
//!     thread scope closes. If parsing stops early the producer therefore sees the
//!     hang-up on its next send and exits instead of blocking forever.

pub mod engine;
pub mod error;
pub mod grammar;
pub mod stream;

pub use engine::{Engine, Parsed};
pub use error::{ParseError, SyntaxError};

use crate::mdl::ast::Model;
use crate::mdl::config::TokenizerConfig;
use crate::mdl::lexer::{spawn_tokenizer, Tokenizer};
use std::thread;
use tracing::{debug, warn};

/// Turns one source text into a [Model].
///
/// The parser holds no state between calls; each [parse](Parser::parse) builds a
/// fresh [Engine].
pub struct Parser<'src> {
    source: &'src str,
    config: TokenizerConfig,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, config: TokenizerConfig) -> Self {
        Self { source, config }
    }

    pub fn parse(&self) -> Result<Model, ParseError> {
        debug!(
            bytes = self.source.len(),
            background = self.config.background,
            "parsing model"
        );
        let result = if self.config.background {
            self.parse_streamed()
        } else {
            self.parse_pulled()
        };
        match &result {
            Ok(model) => debug!(package = model.header().name(), "parsed model"),
            Err(error) => debug!(%error, "parse failed"),
        }
        result
    }

    fn parse_pulled(&self) -> Result<Model, ParseError> {
        Engine::new(self.source, Tokenizer::new(self.source)).model()
    }

    fn parse_streamed(&self) -> Result<Model, ParseError> {
        thread::scope(|scope| {
            match spawn_tokenizer(scope, self.source, self.config.queue_capacity) {
                Ok(queue) => {
                    let mut engine = Engine::new(self.source, queue.into_iter());
                    let result = engine.model();
                    drop(engine);
                    result
                }
                Err(error) => {
                    warn!(%error, "could not start tokenizer thread, tokenizing on the caller");
                    self.parse_pulled()
                }
            }
        })
    }
}

/// Parse `source` with the default tokenizer settings.
pub fn parse(source: &str) -> Result<Model, ParseError> {
    Parser::new(source, TokenizerConfig::default()).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "/* Notice */\n\n/* Header */\npackage example\n\n// Aspects\n\n/* Sortable */\ntype Sortable[V any] interface {\n\t// Methods\n\tSortValues(ranker RankingFunction[V])\n}\n";

    fn config(background: bool, queue_capacity: usize) -> TokenizerConfig {
        TokenizerConfig {
            background,
            queue_capacity,
        }
    }

    #[test]
    fn test_background_and_pulled_tokens_agree() {
        let pulled = Parser::new(SOURCE, config(false, 64)).parse().unwrap();
        let streamed = Parser::new(SOURCE, config(true, 1)).parse().unwrap();
        assert_eq!(pulled, streamed);
        assert_eq!(streamed.aspects()[0].methods()[0].name(), "SortValues");
    }

    #[test]
    fn test_background_parse_error_does_not_block() {
        // Fails on the first token while the producer still has input to send.
        let source = format!("package broken\n{}", SOURCE);
        let error = Parser::new(&source, config(true, 1)).parse().unwrap_err();
        assert_eq!(error.syntax().unwrap().expected(), "Notice");
    }
}
