//! Token stream with pushback for the recursive descent parser.

use crate::mdl::lexer::Token;
use std::collections::VecDeque;

/// A position in the stream that can be rewound to, until it is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    position: usize,
    depth: usize,
}

/// Token stream with LIFO pushback.
///
/// Tokens are pulled lazily from any token iterator (a [Tokenizer](crate::mdl::lexer::Tokenizer)
/// or the receiving end of a background tokenizer queue). A token handed out stays
/// retained while an open checkpoint precedes it, so a rule that fails part way
/// through can return exactly the tokens it consumed, in reverse order, and leave the
/// stream where it found it. Older tokens are dropped; only the most recent one is
/// always kept so that a single lookahead can be pushed back.
///
/// Checkpoints nest: committing or rewinding one also closes every checkpoint opened
/// after it.
///
/// Once the end-of-stream token has been seen it is replayed on every further read,
/// so speculative rules can look past the end freely.
pub struct TokenStream<'t> {
    source: Box<dyn Iterator<Item = Token> + 't>,
    pushed: Vec<Token>,
    consumed: VecDeque<Token>,
    discarded: usize,
    open: Vec<usize>,
    end: Option<Token>,
}

impl<'t> TokenStream<'t> {
    pub fn new(source: impl Iterator<Item = Token> + 't) -> Self {
        Self {
            source: Box::new(source),
            pushed: Vec::new(),
            consumed: VecDeque::new(),
            discarded: 0,
            open: Vec::new(),
            end: None,
        }
    }

    /// Take the next token; `None` only if the source stopped without ever producing
    /// an end-of-stream token.
    pub fn next(&mut self) -> Option<Token> {
        let token = match self.pushed.pop() {
            Some(token) => token,
            None => match self.source.next() {
                Some(token) => token,
                None => self.end.clone()?,
            },
        };
        if token.is_eof() {
            self.end = Some(token.clone());
        }
        self.consumed.push_back(token.clone());
        self.trim();
        Some(token)
    }

    /// Return the most recently taken token to the front of the stream.
    pub fn push_back(&mut self) {
        if let Some(token) = self.consumed.pop_back() {
            self.pushed.push(token);
        }
    }

    /// Open a checkpoint at the current position.
    pub fn checkpoint(&mut self) -> Checkpoint {
        let checkpoint = Checkpoint {
            position: self.position(),
            depth: self.open.len(),
        };
        self.open.push(checkpoint.position);
        checkpoint
    }

    /// Push back every token taken since `checkpoint`, newest first, and close it.
    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        while self.position() > checkpoint.position && !self.consumed.is_empty() {
            self.push_back();
        }
        self.open.truncate(checkpoint.depth);
    }

    /// Close `checkpoint`, keeping every token taken since.
    pub fn commit(&mut self, checkpoint: Checkpoint) {
        self.open.truncate(checkpoint.depth);
        self.trim();
    }

    /// Number of tokens consumed and not pushed back.
    pub fn position(&self) -> usize {
        self.discarded + self.consumed.len()
    }

    /// Number of consumed tokens still held for pushback.
    pub fn retained(&self) -> usize {
        self.consumed.len()
    }

    fn trim(&mut self) {
        let newest = self.position().saturating_sub(1);
        let keep_from = self.open.first().map_or(newest, |&oldest| oldest.min(newest));
        while self.discarded < keep_from {
            self.consumed.pop_front();
            self.discarded += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdl::lexer::Tokenizer;

    #[test]
    fn test_push_back_is_lifo() {
        let mut stream = TokenStream::new(Tokenizer::new("a b c"));
        let start = stream.checkpoint();
        assert_eq!(stream.next().unwrap().text(), "a");
        assert_eq!(stream.next().unwrap().text(), "b");
        assert_eq!(stream.position(), 2);

        stream.rewind(start);
        assert_eq!(stream.position(), 0);
        assert_eq!(stream.next().unwrap().text(), "a");
        assert_eq!(stream.next().unwrap().text(), "b");
        assert_eq!(stream.next().unwrap().text(), "c");
    }

    #[test]
    fn test_single_push_back() {
        let mut stream = TokenStream::new(Tokenizer::new("a b"));
        stream.next();
        stream.next();
        stream.push_back();
        assert_eq!(stream.position(), 1);
        assert_eq!(stream.next().unwrap().text(), "b");
        assert!(stream.next().unwrap().is_eof());
    }

    #[test]
    fn test_only_the_newest_token_is_kept_without_checkpoints() {
        let mut stream = TokenStream::new(Tokenizer::new("a b c d e"));
        for _ in 0..5 {
            stream.next();
        }
        assert_eq!(stream.position(), 5);
        assert_eq!(stream.retained(), 1);
        stream.push_back();
        assert_eq!(stream.next().unwrap().text(), "e");
    }

    #[test]
    fn test_open_checkpoint_holds_tokens_until_committed() {
        let mut stream = TokenStream::new(Tokenizer::new("a b c d e"));
        stream.next();
        let held = stream.checkpoint();
        stream.next();
        stream.next();
        stream.next();
        assert_eq!(stream.retained(), 3);

        stream.commit(held);
        assert_eq!(stream.retained(), 1);
        assert_eq!(stream.position(), 4);
        assert_eq!(stream.next().unwrap().text(), "e");
    }

    #[test]
    fn test_rewind_closes_nested_checkpoints() {
        let mut stream = TokenStream::new(Tokenizer::new("a b c d"));
        let outer = stream.checkpoint();
        stream.next();
        let _inner = stream.checkpoint();
        stream.next();
        stream.next();
        stream.rewind(outer);
        assert_eq!(stream.position(), 0);
        stream.next();
        stream.next();
        stream.next();
        assert_eq!(stream.retained(), 1);
    }

    #[test]
    fn test_eof_is_replayed() {
        let mut stream = TokenStream::new(Tokenizer::new(""));
        assert!(stream.next().unwrap().is_eof());
        assert!(stream.next().unwrap().is_eof());
        assert!(stream.next().unwrap().is_eof());
    }

    #[test]
    fn test_source_without_eof_closes() {
        let mut stream = TokenStream::new(std::iter::empty());
        assert_eq!(stream.next(), None);
    }
}
