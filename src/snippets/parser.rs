//! Directive dispatcher: the top-level scan over a snippet file
//!
//! The scan walks non-blank lines once, splits each into a leading keyword
//! and the remainder, and routes:
//!
//! - `snippet` / `global`: header parse plus body collection; a `global`
//!   body lands in the shared code table, a `snippet` yields a definition
//! - `extends`: yields the declared filetypes
//! - `clearsnippets`: yields the running priority and the listed filetypes
//! - `context`, `priority`, the four action keywords: mutate running state,
//!   yielding nothing on success
//! - comments (`#`) and blank lines: skipped silently
//! - anything else: yields an error event
//!
//! One malformed line never aborts the parse; the scan resumes at the next
//! line after yielding the error. The only exception is a missing end
//! marker, which necessarily consumes the rest of the file.

use crate::snippets::body::collect_body;
use crate::snippets::cursor::LineCursor;
use crate::snippets::directives;
use crate::snippets::events::{
    ActionKind, ActionMap, GlobalCodeTable, ParseEvent, SnippetDefinition, SourceLocation,
};
use crate::snippets::header::{parse_header, BlockKind};

/// Parse `content` as a snippet-definition file.
///
/// `filename` is an identifier attached to emitted locations and errors;
/// it does not have to exist on disk. The returned parser is a lazy,
/// finite, single-pass event sequence; re-parsing requires constructing a
/// fresh parser over the same content.
pub fn parse_snippets_file(content: &str, filename: &str) -> SnippetFileParser {
    SnippetFileParser::new(content, filename)
}

/// Iterator over the [`ParseEvent`]s of one snippet file.
#[derive(Debug)]
pub struct SnippetFileParser {
    filename: String,
    cursor: LineCursor,
    current_priority: i64,
    pending_actions: ActionMap,
    pending_context: Option<String>,
    globals: GlobalCodeTable,
}

impl SnippetFileParser {
    pub fn new(content: &str, filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            cursor: LineCursor::new(content),
            current_priority: 0,
            pending_actions: ActionMap::new(),
            pending_context: None,
            globals: GlobalCodeTable::new(),
        }
    }

    /// Process one non-blank line, returning the event it yields, if any.
    fn dispatch_line(&mut self, line: &str) -> Option<ParseEvent> {
        let (head, tail) = head_tail(line);
        let line_index = self.cursor.line_index();
        match head {
            "snippet" | "global" => self.handle_block(line),
            "extends" => Some(match directives::parse_extends(tail, line_index) {
                Ok(filetypes) => ParseEvent::Extends {
                    filetypes,
                    line: line_index,
                },
                Err((message, line)) => ParseEvent::Error { message, line },
            }),
            "clearsnippets" => Some(ParseEvent::ClearSnippets {
                priority: self.current_priority,
                filetypes: tail.split_whitespace().map(String::from).collect(),
            }),
            "context" => match directives::parse_context(tail, line_index) {
                Ok(expression) => {
                    self.pending_context = Some(expression);
                    None
                }
                Err((message, line)) => Some(ParseEvent::Error { message, line }),
            },
            "priority" => {
                match tail
                    .split_whitespace()
                    .next()
                    .and_then(|token| token.parse::<i64>().ok())
                {
                    Some(priority) => {
                        self.current_priority = priority;
                        None
                    }
                    None => Some(ParseEvent::Error {
                        message: format!("Invalid priority '{tail}'"),
                        line: line_index,
                    }),
                }
            }
            _ => {
                if let Some(kind) = ActionKind::from_keyword(head) {
                    match directives::parse_action(tail, line_index) {
                        Ok(code) => {
                            self.pending_actions.insert(kind, code);
                            None
                        }
                        Err((message, line)) => Some(ParseEvent::Error { message, line }),
                    }
                } else if head.starts_with('#') {
                    None
                } else {
                    Some(ParseEvent::Error {
                        message: format!("Invalid line '{}'", line.trim_end()),
                        line: line_index,
                    })
                }
            }
        }
    }

    /// Handle a `snippet`/`global` block from its opening line.
    ///
    /// Pending actions and context reset afterwards whether or not the
    /// block parsed, so they only ever apply to the block immediately
    /// following them.
    fn handle_block(&mut self, line: &str) -> Option<ParseEvent> {
        let event = self.parse_block(line);
        self.pending_actions.clear();
        self.pending_context = None;
        event
    }

    fn parse_block(&mut self, line: &str) -> Option<ParseEvent> {
        let start_line = self.cursor.line_index();
        let header = match parse_header(line, self.pending_context.as_deref()) {
            Ok(header) => header,
            // The body is left unconsumed: its lines fall back into the
            // top-level scan, as the format has always behaved.
            Err(message) => {
                return Some(ParseEvent::Error {
                    message,
                    line: start_line,
                })
            }
        };

        let end_marker = header.kind.end_marker();
        let body = match collect_body(&mut self.cursor, end_marker) {
            Some(body) => body,
            None => {
                return Some(ParseEvent::Error {
                    message: format!("Missing '{}' for '{}'", end_marker, header.trigger),
                    line: self.cursor.line_index(),
                })
            }
        };

        match header.kind {
            BlockKind::Global => {
                self.globals.append(&header.trigger, body);
                None
            }
            BlockKind::Snippet => {
                let context = self.pending_context.take().or(header.context);
                Some(ParseEvent::Snippet {
                    definition: SnippetDefinition {
                        priority: self.current_priority,
                        trigger: header.trigger,
                        body,
                        description: header.description,
                        options: header.options,
                        context,
                        actions: std::mem::take(&mut self.pending_actions),
                        globals: self.globals.clone(),
                        location: SourceLocation {
                            file: self.filename.clone(),
                            line: start_line,
                        },
                    },
                })
            }
        }
    }
}

impl Iterator for SnippetFileParser {
    type Item = ParseEvent;

    fn next(&mut self) -> Option<ParseEvent> {
        loop {
            let line = self.cursor.next_line()?;
            if line.trim().is_empty() {
                continue;
            }
            if let Some(event) = self.dispatch_line(&line) {
                return Some(event);
            }
        }
    }
}

/// Split a line into its first whitespace-delimited token and the trimmed
/// remainder.
fn head_tail(line: &str) -> (&str, &str) {
    let trimmed = line.trim();
    match trimmed.split_once(|c: char| c.is_whitespace()) {
        Some((head, tail)) => (head, tail.trim()),
        None => (trimmed, ""),
    }
}
