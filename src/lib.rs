//! # snipfile
//!
//! A parser for snippet-definition files, the small line-oriented format
//! used to author code-completion templates.
//!
//! Parsing turns raw file content into a stream of [`snippets::ParseEvent`]s:
//! snippet definitions, `extends` declarations, `clearsnippets` directives,
//! and parse errors. Malformed lines never abort a parse; they surface as
//! error events and scanning resumes on the next line.
//!
//! ```text
//! snippet req "require a module" b
//! const ${1:mod} = require('$1');
//! endsnippet
//! ```

pub mod snippets;

pub use snippets::{parse_snippets_file, ParseEvent, SnippetDefinition, SnippetFileParser};
