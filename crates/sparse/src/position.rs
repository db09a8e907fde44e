use std::fmt;

/// A 1-based line/column position in the source, used for diagnostics.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Position after consuming `matched`.
    pub fn advance(self, matched: &str) -> Self {
        let mut next = self;
        let mut segments = matched.split('\n');
        // `split` always yields at least one segment.
        let mut last = segments.next().unwrap_or_default();
        for segment in segments {
            next.line += 1;
            next.column = 1;
            last = segment;
        }
        next.column += last.chars().count();
        next
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_at_one_one() {
        assert_eq!(Position::default(), Position::new(1, 1));
    }

    #[test]
    fn test_same_line() {
        assert_eq!(Position::default().advance("abc"), Position::new(1, 4));
    }

    #[test]
    fn test_empty_match_does_not_move() {
        assert_eq!(Position::new(3, 7).advance(""), Position::new(3, 7));
    }

    #[test]
    fn test_newline_resets_column() {
        assert_eq!(Position::new(1, 9).advance("\n"), Position::new(2, 1));
    }

    #[test]
    fn test_multiple_newlines_with_tail() {
        assert_eq!(Position::new(2, 5).advance("\n\n\n\t "), Position::new(5, 3));
    }

    #[test]
    fn test_text_before_newline_is_ignored() {
        assert_eq!(Position::new(1, 1).advance("abc\nde"), Position::new(2, 3));
    }

    #[test]
    fn test_columns_count_chars() {
        assert_eq!(Position::default().advance("héllo"), Position::new(1, 6));
    }

    #[test]
    fn test_line_never_decreases() {
        let mut pos = Position::default();
        for chunk in ["a", "\n", "bc", "\n\n", "", "d"] {
            let next = pos.advance(chunk);
            assert!(next.line >= pos.line);
            pos = next;
        }
        assert_eq!(pos, Position::new(4, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(4, 9).to_string(), "line 4, column 9");
    }
}
