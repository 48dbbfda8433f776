//! Event and definition types produced by the parser
//!
//! All malformed content flows through the same channel as successful
//! results, as [`ParseEvent::Error`] values carrying a message and a
//! 1-based line number. Nothing here crosses the parser boundary as a
//! `Result`; only truly exceptional conditions (an unreadable file, say)
//! are the caller's concern.

use serde::{Serialize, Serializer};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Where a definition or error came from: file identifier plus 1-based line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub file: String,
    pub line: usize,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Table of global code blocks, keyed by scope marker (e.g. the language
/// tag of an embedded code block).
///
/// The table is created once per file parse and handed out *by reference*
/// to every definition emitted from that file. A definition emitted before
/// a later `global` block observes that later addition too; the table is
/// never snapshotted per snippet. This retroactive visibility is a
/// deliberate, load-bearing contract, not a bug.
#[derive(Debug, Clone, Default)]
pub struct GlobalCodeTable(Rc<RefCell<BTreeMap<String, Vec<String>>>>);

impl GlobalCodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a code block under `scope`. Later blocks for the same scope
    /// accumulate in insertion order, never replacing earlier ones.
    pub fn append(&self, scope: &str, code: String) {
        self.0
            .borrow_mut()
            .entry(scope.to_string())
            .or_default()
            .push(code);
    }

    /// The code blocks currently recorded under `scope`, in insertion order.
    pub fn get(&self, scope: &str) -> Vec<String> {
        self.0.borrow().get(scope).cloned().unwrap_or_default()
    }

    /// A point-in-time copy of the whole table.
    pub fn snapshot(&self) -> BTreeMap<String, Vec<String>> {
        self.0.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl PartialEq for GlobalCodeTable {
    fn eq(&self, other: &Self) -> bool {
        *self.0.borrow() == *other.0.borrow()
    }
}

impl Serialize for GlobalCodeTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Serializes whatever the table holds at serialization time, which
        // for an aliased table may be more than it held at emission time.
        self.0.borrow().serialize(serializer)
    }
}

/// One of the four lifecycle hooks a snippet block can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    PreExpand,
    PostExpand,
    PostJump,
    PostFinish,
}

impl ActionKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "pre_expand" => Some(Self::PreExpand),
            "post_expand" => Some(Self::PostExpand),
            "post_jump" => Some(Self::PostJump),
            "post_finish" => Some(Self::PostFinish),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PreExpand => "pre_expand",
            Self::PostExpand => "post_expand",
            Self::PostJump => "post_jump",
            Self::PostFinish => "post_finish",
        }
    }
}

/// Action code attached to a block, keyed by hook.
pub type ActionMap = BTreeMap<ActionKind, String>;

/// One parsed `snippet` block, ready for the consumer to persist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnippetDefinition {
    /// Running priority at the moment the block opened.
    pub priority: i64,
    /// Text the user types to invoke the snippet; a regular expression when
    /// options contain `r`.
    pub trigger: String,
    /// Raw block body, final trailing newline stripped.
    pub body: String,
    /// Description with its surrounding quotes, empty when absent.
    pub description: String,
    /// Single-letter flags, empty when absent.
    pub options: String,
    /// Guard expression restricting when the snippet is eligible.
    pub context: Option<String>,
    /// Lifecycle hook code captured at block-open time.
    pub actions: ActionMap,
    /// Shared handle to the file's global-code table.
    pub globals: GlobalCodeTable,
    pub location: SourceLocation,
}

/// One event in the stream produced by parsing a snippet file.
///
/// Exactly one event (or none, for pure state-mutating directives such as
/// `priority` and `context`) is produced per processed directive line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ParseEvent {
    /// A `snippet` block was parsed successfully.
    Snippet { definition: SnippetDefinition },
    /// An `extends` directive named additional filetypes to load.
    Extends { filetypes: Vec<String>, line: usize },
    /// A `clearsnippets` directive; an empty filetype list means "clear
    /// everything".
    ClearSnippets {
        priority: i64,
        filetypes: Vec<String>,
    },
    /// A malformed line. Scanning resumed on the next line.
    Error { message: String, line: usize },
}
