//! Body collection for `snippet` and `global` blocks

use crate::snippets::cursor::LineCursor;

/// Accumulate lines verbatim until one equals `end_marker` after trailing
/// whitespace removal.
///
/// The newline appended just before the marker line is chomped, so the body
/// never ends with a stray blank line from the marker boundary. Returns
/// `None` when the cursor runs out before the marker; the caller reports
/// that at the cursor's current line index.
pub fn collect_body(cursor: &mut LineCursor, end_marker: &str) -> Option<String> {
    let mut content = String::new();
    while let Some(line) = cursor.next_line() {
        if line.trim_end() == end_marker {
            content.pop();
            return Some(content);
        }
        content.push_str(&line);
    }
    None
}
