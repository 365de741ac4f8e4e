//! Tokenizer: positioned tokens from source text
//!
//! The tokenizer yields every significant token in source order and always closes
//! the stream with exactly one [TokenKind::Eof] token. An unrecognized character is
//! yielded as a single [TokenKind::Error] token, after which scanning stops and the
//! end-of-stream token follows immediately, positioned just past that character.

use super::location::SourceLocation;
use super::tokens::{with_placeholders, Lexeme, Token, TokenKind};
use logos::Logos;
use std::io;
use std::ops::Range;
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::thread::{self, Scope};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Scanning,
    /// An error token was yielded; the end-of-stream token follows at this offset.
    Closing(usize),
    Closed,
}

/// Iterator over the tokens of one source text
pub struct Tokenizer<'src> {
    lexer: logos::Lexer<'src, Lexeme>,
    location: SourceLocation<'src>,
    phase: Phase,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            lexer: Lexeme::lexer(source),
            location: SourceLocation::new(source),
            phase: Phase::Scanning,
        }
    }

    fn token_at(&self, kind: TokenKind, span: Range<usize>, text: String) -> Token {
        let (line, column) = self.location.position(span.start);
        Token::new(line, column, kind, text)
    }

    fn end_of_stream(&mut self, end: usize) -> Token {
        self.phase = Phase::Closed;
        self.token_at(TokenKind::Eof, end..end, String::new())
    }

    /// Push every token into `sink`, blocking while the queue is full.
    ///
    /// Stops early, without error, when the receiving side hangs up.
    pub fn run(self, sink: SyncSender<Token>) {
        let mut produced = 0usize;
        for token in self {
            let last = token.is_eof();
            if sink.send(token).is_err() {
                debug!(produced, "token consumer hung up, stopping tokenizer");
                return;
            }
            produced += 1;
            if last {
                break;
            }
        }
        debug!(produced, "tokenizer finished");
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.phase {
            Phase::Closed => None,
            Phase::Closing(end) => Some(self.end_of_stream(end)),
            Phase::Scanning => match self.lexer.next() {
                Some(Ok(lexeme)) => {
                    let token = self.token_at(
                        lexeme.into(),
                        self.lexer.span(),
                        self.lexer.slice().to_string(),
                    );
                    trace!(%token, "scanned");
                    Some(token)
                }
                Some(Err(())) => {
                    // Report only the first offending character.
                    let start = self.lexer.span().start;
                    let ch = self.lexer.slice().chars().next().unwrap_or('\0');
                    let text = with_placeholders(&ch.to_string());
                    self.phase = Phase::Closing(start + ch.len_utf8());
                    debug!(character = %text, "unrecognized character, closing token stream");
                    Some(self.token_at(TokenKind::Error, start..start + ch.len_utf8(), text))
                }
                None => Some(self.end_of_stream(self.lexer.source().len())),
            },
        }
    }
}

/// Run a tokenizer for `source` on a thread of `scope`, feeding a queue bounded to
/// `capacity` tokens.
///
/// Dropping the returned receiver stops the producer at its next send, so the scope
/// can always be joined even when the consumer gives up early.
pub fn spawn_tokenizer<'scope, 'env, 'src>(
    scope: &'scope Scope<'scope, 'env>,
    source: &'src str,
    capacity: usize,
) -> io::Result<Receiver<Token>>
where
    'src: 'scope,
{
    let (sink, queue) = sync_channel(capacity.max(1));
    thread::Builder::new()
        .name("mdl-tokenizer".to_string())
        .spawn_scoped(scope, move || Tokenizer::new(source).run(sink))?;
    Ok(queue)
}
