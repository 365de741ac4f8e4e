//! Parse error types.
//!
//! Errors are rendered for direct display to a person: the offending token, a
//! three-line source excerpt with a caret, and the grammar fragments of every rule
//! that was active when parsing failed.

use super::grammar::production;
use crate::mdl::lexer::Token;
use std::fmt;
use thiserror::Error;

/// Error raised while turning source text into a [Model](crate::mdl::ast::Model)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No token category matches the character at this position.
    #[error("Unrecognized character `{text}` at line {line}, column {column}.\n\n{excerpt}")]
    Lexical {
        line: usize,
        column: usize,
        text: String,
        excerpt: String,
    },

    /// A required grammar rule did not match.
    #[error(transparent)]
    Syntax(Box<SyntaxError>),

    /// The token source stopped without its end-of-stream token.
    #[error("The token stream closed without an end-of-stream token.")]
    TokenStreamClosed,
}

impl ParseError {
    /// The syntax error details, if this is a syntax error.
    pub fn syntax(&self) -> Option<&SyntaxError> {
        match self {
            ParseError::Syntax(error) => Some(error),
            _ => None,
        }
    }
}

/// A required rule or token was not found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    token: Token,
    expected: String,
    rules: Vec<&'static str>,
    excerpt: String,
}

impl SyntaxError {
    pub fn new(
        token: Token,
        expected: impl Into<String>,
        rules: Vec<&'static str>,
        excerpt: String,
    ) -> Self {
        Self {
            token,
            expected: expected.into(),
            rules,
            excerpt,
        }
    }

    /// The token found where `expected` should have been.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// A rule name (`Abstraction`) or a quoted literal (`")"`).
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Active rules, outermost first.
    pub fn rules(&self) -> &[&'static str] {
        &self.rules
    }

    /// The active rules joined with arrows, ending with what was expected.
    pub fn rule_chain(&self) -> String {
        let mut chain = self.rules.join(" → ");
        if !chain.is_empty() {
            chain.push_str(" → ");
        }
        chain.push_str(&self.expected);
        chain
    }

    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "An unexpected token was received by the parser: `{}` at line {}, column {}.",
            self.token.display_text(),
            self.token.line(),
            self.token.column()
        )?;
        writeln!(f)?;
        write!(f, "{}", self.excerpt)?;
        writeln!(f)?;
        writeln!(f, "Was expecting {} while parsing:", self.expected)?;
        writeln!(f, "  {}", self.rule_chain())?;

        let fragments = std::iter::once(self.expected.as_str())
            .chain(self.rules.iter().rev().copied())
            .filter_map(|rule| production(rule).map(|fragment| (rule, fragment)));
        let mut first = true;
        for (rule, fragment) in fragments {
            if first {
                writeln!(f)?;
                first = false;
            }
            writeln!(f, "  {}: {}", rule, fragment)?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}
