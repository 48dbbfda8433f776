//! Header parsing for `snippet` and `global` block openers
//!
//! A header line packs up to four optional fields after the keyword:
//!
//! ```text
//! snippet <trig-or-"multi word trig"> ["description"] ["opts"]
//! ```
//!
//! The fields are extracted in this specific order (important for
//! correctness), each step seeing the line with earlier matches stripped:
//! 1. Options: the last word, when more than two words remain, the last word
//!    carries no double quote and the second-to-last word ends with one
//! 2. Inline context expression: only when options contain `e` and no
//!    `context` directive is pending; the right-most interior double quote
//!    starts the expression (quotes stripped)
//! 3. Description: when more than one word remains and the line ends with a
//!    double quote, the right-most interior double quote starts the
//!    description (quotes kept; stripping them is the consumer's concern)
//! 4. Trigger: whatever is left; multiword or regex triggers must be wrapped
//!    in a matching pair of quote characters, which are removed
//!
//! The order is deliberately ad hoc and overlapping: a description that
//! itself resembles an options word can misparse, and correct behavior for
//! such inputs is undefined. Do not reorder the steps to "fix" those cases.

/// Which kind of block a header opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Snippet,
    Global,
}

impl BlockKind {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "snippet" => Some(Self::Snippet),
            "global" => Some(Self::Global),
            _ => None,
        }
    }

    /// The literal line that closes a block of this kind.
    pub fn end_marker(self) -> &'static str {
        match self {
            Self::Snippet => "endsnippet",
            Self::Global => "endglobal",
        }
    }
}

/// Parsed attributes of one `snippet`/`global` header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    pub kind: BlockKind,
    /// Trigger text, or the scope key for a `global` block.
    pub trigger: String,
    /// Single-letter flags, empty when absent.
    pub options: String,
    /// Description with its surrounding quotes, empty when absent.
    pub description: String,
    /// Inline context expression, quotes stripped.
    pub context: Option<String>,
}

/// Parse one block-opening line.
///
/// `pending_context` is the expression set by a preceding `context`
/// directive, if any; its presence suppresses inline context extraction.
/// Fails on an unknown opening keyword or an unbalanced multiword trigger.
pub fn parse_header(line: &str, pending_context: Option<&str>) -> Result<ParsedHeader, String> {
    let keyword = line.split_whitespace().next().unwrap_or_default();
    let kind = BlockKind::from_keyword(keyword)
        .ok_or_else(|| format!("Invalid snippet type: '{keyword}'"))?;

    let remain = line
        .trim_start()
        .strip_prefix(keyword)
        .unwrap_or_default()
        .trim();

    let (remain, options) = take_options(remain);
    let (remain, context) = take_inline_context(remain, &options, pending_context);
    let (remain, description) = take_description(remain);
    let trigger = take_trigger(remain, &options)?;

    Ok(ParsedHeader {
        kind,
        trigger,
        options,
        description,
        context,
    })
}

/// Step 1: peel the options word off the end of the remainder.
fn take_options(remain: &str) -> (&str, String) {
    let words: Vec<&str> = remain.split_whitespace().collect();
    if words.len() > 2 {
        let last = words[words.len() - 1];
        let second_to_last = words[words.len() - 2];
        if !last.contains('"') && second_to_last.ends_with('"') {
            let cut = remain.len() - last.len();
            return (remain[..cut].trim_end(), last.to_string());
        }
    }
    (remain, String::new())
}

/// Step 2: peel an inline context expression off the end of the remainder.
fn take_inline_context<'a>(
    remain: &'a str,
    options: &str,
    pending_context: Option<&str>,
) -> (&'a str, Option<String>) {
    if !options.contains('e') || pending_context.is_some() {
        return (remain, None);
    }
    match rightmost_interior_quote(remain) {
        Some(idx) => {
            let expression = remain[idx..].trim_matches('"').to_string();
            (&remain[..idx], Some(expression))
        }
        None => (remain, None),
    }
}

/// Step 3: peel a quoted description off the end of the remainder.
fn take_description(remain: &str) -> (&str, String) {
    let remain = remain.trim();
    if remain.split_whitespace().count() > 1 && remain.ends_with('"') {
        if let Some(idx) = rightmost_interior_quote(remain) {
            return (&remain[..idx], remain[idx..].to_string());
        }
    }
    (remain, String::new())
}

/// Step 4: the rest is the trigger; unwrap quoting when required.
fn take_trigger(remain: &str, options: &str) -> Result<String, String> {
    let trigger = remain.trim();
    let multiword = trigger.split_whitespace().count() > 1;
    if !multiword && !options.contains('r') {
        return Ok(trigger.to_string());
    }
    match (trigger.chars().next(), trigger.chars().next_back()) {
        (Some(first), Some(last)) if first == last => {
            let start = first.len_utf8();
            let end = trigger.len() - last.len_utf8();
            if start > end {
                // single-character trigger, nothing between the "quotes"
                Ok(String::new())
            } else {
                Ok(trigger[start..end].to_string())
            }
        }
        _ => Err(format!("Invalid multiword trigger: '{trigger}'")),
    }
}

/// Position of the right-most double quote in `s`, ignoring the final
/// character and rejecting a match at position 0.
fn rightmost_interior_quote(s: &str) -> Option<usize> {
    let last = s.chars().next_back()?;
    let idx = s[..s.len() - last.len_utf8()].rfind('"')?;
    (idx != 0).then_some(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_keyword_gives_an_empty_trigger() {
        let header = parse_header("snippet", None).unwrap();
        assert_eq!(header.kind, BlockKind::Snippet);
        assert_eq!(header.trigger, "");
        assert_eq!(header.options, "");
        assert_eq!(header.description, "");
        assert_eq!(header.context, None);
    }

    #[test]
    fn unknown_keyword_is_rejected() {
        let err = parse_header("snipet foo", None).unwrap_err();
        assert_eq!(err, "Invalid snippet type: 'snipet'");
    }

    #[test]
    fn single_word_quoted_trigger_keeps_its_quotes() {
        // Without a multiword or regex reason to unwrap, quotes are literal.
        let header = parse_header("snippet \"trig\"", None).unwrap();
        assert_eq!(header.trigger, "\"trig\"");
    }

    #[test]
    fn regex_trigger_unwraps_single_character_pair() {
        let header = parse_header("snippet \"x\" \"d\" r", None).unwrap();
        assert_eq!(header.options, "r");
        assert_eq!(header.trigger, "x");
    }

    #[test]
    fn empty_trigger_with_regex_option_is_an_error() {
        // No line can normally produce an empty candidate together with the
        // r flag, but the wrapping check must not panic if one does.
        let err = take_trigger("", "r").unwrap_err();
        assert_eq!(err, "Invalid multiword trigger: ''");
    }

    #[test]
    fn quoted_empty_trigger_unwraps_to_nothing() {
        let header = parse_header("snippet \"\" \"d\" r", None).unwrap();
        assert_eq!(header.options, "r");
        assert_eq!(header.description, "\"d\"");
        assert_eq!(header.trigger, "");
    }

    #[test]
    fn pending_context_suppresses_inline_extraction() {
        let header = parse_header("snippet t \"ctx\" e", Some("outer")).unwrap();
        assert_eq!(header.context, None);
        // With extraction suppressed, the right-most quoted segment is the
        // description instead.
        assert_eq!(header.description, "\"ctx\"");
        assert_eq!(header.trigger, "t");
    }

    #[test]
    fn inline_context_is_stripped_of_quotes() {
        let header = parse_header("snippet t \"desc\" \"ctx\" e", None).unwrap();
        assert_eq!(header.options, "e");
        assert_eq!(header.context.as_deref(), Some("ctx"));
        assert_eq!(header.description, "\"desc\"");
        assert_eq!(header.trigger, "t");
    }

    #[test]
    fn quote_at_position_zero_is_not_a_description_boundary() {
        // The interior-quote search rejects index 0, so this stays a
        // (quoted, multiword) trigger.
        let header = parse_header("snippet \"a b\"", None).unwrap();
        assert_eq!(header.trigger, "a b");
        assert_eq!(header.description, "");
    }
}
