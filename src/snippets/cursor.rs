//! Line cursor over raw file content
//!
//! The cursor is the single source of truth for the current line number: the
//! top-level directive scan and the nested body collector both consume from
//! the same instance, so body lines are never re-offered to the scan and
//! reported line numbers stay globally consistent.

/// Forward-only sequence of physical lines with a 1-based position.
///
/// Lines keep their trailing newline. The position only tracks produced
/// lines, so after exhaustion it still points at the last physical line
/// and an error detected at end of file is reported there.
#[derive(Debug)]
pub struct LineCursor {
    lines: Vec<String>,
    pos: usize,
}

impl LineCursor {
    pub fn new(content: &str) -> Self {
        Self {
            lines: content.split_inclusive('\n').map(String::from).collect(),
            pos: 0,
        }
    }

    /// Consume and return the next line, newline included.
    pub fn next_line(&mut self) -> Option<String> {
        let line = self.lines.get(self.pos)?.clone();
        self.pos += 1;
        Some(line)
    }

    /// 1-based index of the most recently produced line (0 before the first
    /// call).
    pub fn line_index(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_keep_their_newlines() {
        let mut cursor = LineCursor::new("a\nb\n");
        assert_eq!(cursor.next_line().as_deref(), Some("a\n"));
        assert_eq!(cursor.next_line().as_deref(), Some("b\n"));
        assert_eq!(cursor.next_line(), None);
    }

    #[test]
    fn last_line_without_newline_is_produced() {
        let mut cursor = LineCursor::new("a\nb");
        assert_eq!(cursor.next_line().as_deref(), Some("a\n"));
        assert_eq!(cursor.next_line().as_deref(), Some("b"));
        assert_eq!(cursor.next_line(), None);
    }

    #[test]
    fn index_is_one_based_and_stops_at_the_last_line() {
        let mut cursor = LineCursor::new("a\nb\n");
        assert_eq!(cursor.line_index(), 0);
        cursor.next_line();
        assert_eq!(cursor.line_index(), 1);
        cursor.next_line();
        assert_eq!(cursor.line_index(), 2);
        // Exhausted calls do not move the index off the last produced line.
        cursor.next_line();
        assert_eq!(cursor.line_index(), 2);
        cursor.next_line();
        assert_eq!(cursor.line_index(), 2);
    }

    #[test]
    fn empty_content_yields_nothing() {
        let mut cursor = LineCursor::new("");
        assert_eq!(cursor.next_line(), None);
    }
}
