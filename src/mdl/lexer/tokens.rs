//! Token definitions for the model notation
//!
//! [Lexeme] is what logos recognizes; [Token] is the positioned value handed to the
//! parser. Keywords share the delimiter category with punctuation, so the parser
//! matches both by their literal text.
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All lexeme categories logos can recognize
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Lexeme {
    // Block comments, possibly spanning lines
    #[token("/*", block_comment)]
    Comment,

    // Punctuation and keywords
    #[token("[")]
    #[token("]")]
    #[token("(")]
    #[token(")")]
    #[token("{")]
    #[token("}")]
    #[token("=")]
    #[token(".")]
    #[token(",")]
    #[token("chan")]
    #[token("const")]
    #[token("func")]
    #[token("import")]
    #[token("interface")]
    #[token("iota")]
    #[token("map")]
    #[token("package")]
    #[token("type")]
    Delimiter,

    #[regex(r"[a-zA-Z][a-zA-Z0-9]*_?")]
    Name,

    // Section notes such as `// Types`
    #[regex(r"//[^\n]*")]
    Note,

    // Quoted module paths
    #[regex(r#""[^"\n]*""#)]
    Text,
}

/// Extend a `/*` match through the closing `*/`; an unterminated comment is an error.
fn block_comment(lex: &mut logos::Lexer<Lexeme>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => false,
    }
}

/// The category of a [Token]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Comment,
    Delimiter,
    Name,
    Note,
    Text,
    Eof,
    Error,
}

impl From<Lexeme> for TokenKind {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Comment => TokenKind::Comment,
            Lexeme::Delimiter => TokenKind::Delimiter,
            Lexeme::Name => TokenKind::Name,
            Lexeme::Note => TokenKind::Note,
            Lexeme::Text => TokenKind::Text,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Comment => "Comment",
            TokenKind::Delimiter => "Delimiter",
            TokenKind::Name => "Name",
            TokenKind::Note => "Note",
            TokenKind::Text => "Text",
            TokenKind::Eof => "Eof",
            TokenKind::Error => "Error",
        };
        write!(f, "{}", name)
    }
}

/// A positioned token; `line` and `column` are 1-based, columns count characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    line: usize,
    column: usize,
    kind: TokenKind,
    text: String,
}

impl Token {
    pub fn new(line: usize, column: usize, kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            line,
            column,
            kind,
            text: text.into(),
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// True for the delimiter or keyword spelled `text`.
    pub fn is_delimiter(&self, text: &str) -> bool {
        self.kind == TokenKind::Delimiter && self.text == text
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// The token text made safe for one-line diagnostics.
    pub fn display_text(&self) -> String {
        match self.kind {
            TokenKind::Eof => "<EOF>".to_string(),
            _ => with_placeholders(&self.text),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} \"{}\"",
            self.line,
            self.column,
            self.kind,
            self.display_text()
        )
    }
}

/// Replace non-printable characters with symbolic placeholders
pub fn with_placeholders(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\0' => result.push_str("<NUL>"),
            '\t' => result.push_str("<TAB>"),
            '\n' => result.push_str("<EOL>"),
            '\r' => result.push_str("<CR>"),
            c if c.is_control() => result.push_str(&format!("<U+{:04X}>", c as u32)),
            c => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexemes(source: &str) -> Vec<Lexeme> {
        Lexeme::lexer(source).filter_map(|result| result.ok()).collect()
    }

    #[test]
    fn test_keywords_are_delimiters() {
        assert_eq!(
            lexemes("package type func interface const iota map chan import"),
            vec![Lexeme::Delimiter; 9]
        );
    }

    #[test]
    fn test_longest_match_beats_keywords() {
        let mut lexer = Lexeme::lexer("types typed mapping");
        assert_eq!(lexer.next(), Some(Ok(Lexeme::Name)));
        assert_eq!(lexer.slice(), "types");
        assert_eq!(lexer.next(), Some(Ok(Lexeme::Name)));
        assert_eq!(lexer.next(), Some(Ok(Lexeme::Name)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_trailing_underscore_names() {
        let mut lexer = Lexeme::lexer("type_ value2_");
        assert_eq!(lexer.next(), Some(Ok(Lexeme::Name)));
        assert_eq!(lexer.slice(), "type_");
        assert_eq!(lexer.next(), Some(Ok(Lexeme::Name)));
        assert_eq!(lexer.slice(), "value2_");
    }

    #[test]
    fn test_comments_and_notes() {
        let mut lexer = Lexeme::lexer("/*\nA ** comment.\n*/\n// Types\n");
        assert_eq!(lexer.next(), Some(Ok(Lexeme::Comment)));
        assert_eq!(lexer.slice(), "/*\nA ** comment.\n*/");
        assert_eq!(lexer.next(), Some(Ok(Lexeme::Note)));
        assert_eq!(lexer.slice(), "// Types");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_comment_edge_cases() {
        let mut lexer = Lexeme::lexer("/**/ /* a */x /*/ still open */");
        assert_eq!(lexer.next(), Some(Ok(Lexeme::Comment)));
        assert_eq!(lexer.slice(), "/**/");
        assert_eq!(lexer.next(), Some(Ok(Lexeme::Comment)));
        assert_eq!(lexer.slice(), "/* a */");
        assert_eq!(lexer.next(), Some(Ok(Lexeme::Name)));
        assert_eq!(lexer.next(), Some(Ok(Lexeme::Comment)));
        assert_eq!(lexer.slice(), "/*/ still open */");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_unterminated_comment_is_an_error() {
        let mut lexer = Lexeme::lexer("/* never closed");
        assert_eq!(lexer.next(), Some(Err(())));
    }

    #[test]
    fn test_quoted_paths() {
        let mut lexer = Lexeme::lexer(r#"abs "example.com/abstractions""#);
        assert_eq!(lexer.next(), Some(Ok(Lexeme::Name)));
        assert_eq!(lexer.next(), Some(Ok(Lexeme::Text)));
        assert_eq!(lexer.slice(), r#""example.com/abstractions""#);
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(lexemes("[]{}().,="), vec![Lexeme::Delimiter; 9]);
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(with_placeholders("a\tb\nc\r\0"), "a<TAB>b<EOL>c<CR><NUL>");
        assert_eq!(with_placeholders("\u{7}"), "<U+0007>");
        assert_eq!(with_placeholders("plain"), "plain");
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(3, 7, TokenKind::Name, "Rank");
        assert_eq!(token.to_string(), "3:7 Name \"Rank\"");
        let eof = Token::new(9, 1, TokenKind::Eof, "");
        assert_eq!(eof.display_text(), "<EOF>");
    }
}
