//! Source location utilities for converting byte offsets to line/column positions
//!
//! Used by the tokenizer to position tokens (multi-line comments included) and by
//! the parser to render source excerpts in diagnostics.

/// Provides fast conversion from byte offsets to 1-based line/column positions
pub struct SourceLocation<'src> {
    source: &'src str,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl<'src> SourceLocation<'src> {
    /// Create a new SourceLocation from source code
    pub fn new(source: &'src str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            source,
            line_starts,
        }
    }

    /// Convert a byte offset to a `(line, column)` pair, both 1-based; columns
    /// count characters, not bytes
    pub fn position(&self, byte_offset: usize) -> (usize, usize) {
        let byte_offset = byte_offset.min(self.source.len());
        let index = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);
        let start = self.line_starts[index];
        let column = self.source[start..byte_offset].chars().count() + 1;
        (index + 1, column)
    }

    /// Get the total number of lines in the source
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// The text of a 1-based line without its line terminator
    pub fn line_text(&self, line: usize) -> Option<&'src str> {
        let start = *self.line_starts.get(line.checked_sub(1)?)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.source.len());
        let text = &self.source[start..end];
        Some(text.trim_end_matches(['\n', '\r']))
    }

    /// Render the line at `line` plus one line of context on each side, with a
    /// caret under `column`
    ///
    /// ```text
    /// 0011:         value V,
    /// 0012:         other )
    ///                     ^
    /// 0013:     ) ListLike[V]
    /// ```
    pub fn excerpt(&self, line: usize, column: usize) -> String {
        let first = line.saturating_sub(1).max(1);
        let last = (line + 1).min(self.line_count());
        let mut result = String::new();

        for number in first..=last {
            let Some(text) = self.line_text(number) else {
                continue;
            };
            result.push_str(&format!("{:04}: {}\n", number, text));
            if number == line {
                // Keep tabs so the caret lines up with the rendered line.
                result.push_str("      ");
                for ch in text.chars().take(column.saturating_sub(1)) {
                    result.push(if ch == '\t' { '\t' } else { ' ' });
                }
                result.push_str("^\n");
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_single_line() {
        let loc = SourceLocation::new("Hello");
        assert_eq!(loc.position(0), (1, 1));
        assert_eq!(loc.position(4), (1, 5));
    }

    #[test]
    fn test_position_multiline() {
        let loc = SourceLocation::new("Hello\nworld\ntest");
        assert_eq!(loc.position(5), (1, 6));
        assert_eq!(loc.position(6), (2, 1));
        assert_eq!(loc.position(10), (2, 5));
        assert_eq!(loc.position(12), (3, 1));
    }

    #[test]
    fn test_position_counts_characters() {
        let loc = SourceLocation::new("Hello\nwörld");
        // 'ö' takes two bytes but is one column
        assert_eq!(loc.position(10), (2, 4));
    }

    #[test]
    fn test_line_text() {
        let loc = SourceLocation::new("first\r\nsecond\nthird");
        assert_eq!(loc.line_text(1), Some("first"));
        assert_eq!(loc.line_text(2), Some("second"));
        assert_eq!(loc.line_text(3), Some("third"));
        assert_eq!(loc.line_text(0), None);
        assert_eq!(loc.line_text(4), None);
    }

    #[test]
    fn test_excerpt_with_context() {
        let loc = SourceLocation::new("one\ntwo words\nthree\nfour");
        assert_eq!(
            loc.excerpt(2, 5),
            "0001: one\n0002: two words\n          ^\n0003: three\n"
        );
    }

    #[test]
    fn test_excerpt_at_edges() {
        let loc = SourceLocation::new("only\n");
        assert_eq!(loc.excerpt(1, 1), "0001: only\n      ^\n0002: \n");
    }

    #[test]
    fn test_excerpt_keeps_tabs() {
        let loc = SourceLocation::new("\tx y");
        assert_eq!(loc.excerpt(1, 4), "0001: \tx y\n      \t  ^\n");
    }
}
