//! Output formats for parsed event streams
//!
//! A collected event stream can be rendered as JSON, YAML, or a compact
//! one-line-per-event summary for quick inspection.

use crate::snippets::events::ParseEvent;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Summary,
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, FormatError> {
        match s {
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            "summary" => Ok(Self::Summary),
            other => Err(FormatError::UnknownFormat(other.to_string())),
        }
    }
}

/// Errors that can occur while rendering an event stream.
#[derive(Debug)]
pub enum FormatError {
    UnknownFormat(String),
    Serialization(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat(name) => write!(f, "Unknown output format: '{name}'"),
            FormatError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Render `events` in the requested format.
pub fn serialize_events(events: &[ParseEvent], format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(events)
            .map_err(|e| FormatError::Serialization(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(events).map_err(|e| FormatError::Serialization(e.to_string()))
        }
        OutputFormat::Summary => Ok(summarize(events)),
    }
}

fn summarize(events: &[ParseEvent]) -> String {
    let mut out = String::new();
    for event in events {
        let rendered = match event {
            ParseEvent::Snippet { definition } => format!(
                "snippet '{}' priority={} options='{}' at {}",
                definition.trigger, definition.priority, definition.options, definition.location
            ),
            ParseEvent::Extends { filetypes, line } => {
                format!("extends {} (line {line})", filetypes.join(", "))
            }
            ParseEvent::ClearSnippets {
                priority,
                filetypes,
            } => format!("clearsnippets priority={priority} [{}]", filetypes.join(", ")),
            ParseEvent::Error { message, line } => format!("error: {message} (line {line})"),
        };
        out.push_str(&rendered);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snippets::parse_snippets_file;

    #[test]
    fn unknown_format_name_is_rejected() {
        let err = "toml".parse::<OutputFormat>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown output format: 'toml'");
    }

    #[test]
    fn format_names_parse() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!(
            "summary".parse::<OutputFormat>().unwrap(),
            OutputFormat::Summary
        );
    }

    #[test]
    fn summary_renders_one_line_per_event() {
        let source = "clearsnippets python ruby\nbogus\n";
        let events: Vec<_> = parse_snippets_file(source, "t.snippets").collect();
        let summary = serialize_events(&events, OutputFormat::Summary).unwrap();
        assert_eq!(
            summary,
            "clearsnippets priority=0 [python, ruby]\nerror: Invalid line 'bogus' (line 2)\n"
        );
    }

    #[test]
    fn json_stream_carries_the_event_tags() {
        let source = "snippet t\nbody\nendsnippet\nextends perl\n";
        let events: Vec<_> = parse_snippets_file(source, "t.snippets").collect();
        let json = serialize_events(&events, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["event"], "snippet");
        assert_eq!(value[0]["definition"]["trigger"], "t");
        assert_eq!(value[0]["definition"]["body"], "body");
        assert_eq!(value[1]["event"], "extends");
        assert_eq!(value[1]["filetypes"][0], "perl");
    }
}
