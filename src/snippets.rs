//! Main module for snippet-file parsing functionality

pub mod body;
pub mod cursor;
pub mod directives;
pub mod events;
pub mod files;
pub mod formats;
pub mod header;
pub mod parser;

// Re-export the event types and the parser entry point
pub use events::{
    ActionKind, ActionMap, GlobalCodeTable, ParseEvent, SnippetDefinition, SourceLocation,
};
pub use parser::{parse_snippets_file, SnippetFileParser};
