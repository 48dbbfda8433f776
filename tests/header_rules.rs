//! Parameterized tests for header-field extraction
//!
//! The extraction steps overlap on purpose (options before inline context
//! before description before trigger); these cases pin the documented
//! order and its tie-breaks.

use rstest::rstest;
use snipfile::snippets::header::{parse_header, BlockKind};

#[rstest]
#[case::bare_trigger("snippet trig", "trig", "", "", None)]
#[case::description_no_options("snippet trig \"a description\"", "trig", "", "\"a description\"", None)]
#[case::description_and_options("snippet trig \"a description\" bi", "trig", "bi", "\"a description\"", None)]
#[case::multiword_quoted("snippet \"a b\"", "a b", "", "", None)]
#[case::multiword_quoted_with_description(
    "snippet \"a b\" \"words\" w",
    "a b",
    "w",
    "\"words\"",
    None
)]
#[case::regex_trigger("snippet \"\\w+\" \"desc\" r", "\\w+", "r", "\"desc\"", None)]
#[case::inline_context("snippet t \"desc\" \"has_cursor\" e", "t", "e", "\"desc\"", Some("has_cursor"))]
#[case::single_quoted_word_keeps_quotes("snippet \"trig\"", "\"trig\"", "", "", None)]
#[case::nonmatching_quote_pair_allowed_for_multiword(
    "snippet !a b!",
    "a b",
    "",
    "",
    None
)]
fn header_fields(
    #[case] line: &str,
    #[case] trigger: &str,
    #[case] options: &str,
    #[case] description: &str,
    #[case] context: Option<&str>,
) {
    let header = parse_header(line, None).unwrap();
    assert_eq!(header.kind, BlockKind::Snippet);
    assert_eq!(header.trigger, trigger);
    assert_eq!(header.options, options);
    assert_eq!(header.description, description);
    assert_eq!(header.context.as_deref(), context);
}

#[rstest]
#[case::two_unquoted_words("snippet a b", "Invalid multiword trigger: 'a b'")]
#[case::three_unquoted_words("snippet a b c", "Invalid multiword trigger: 'a b c'")]
#[case::mismatched_wrapping("snippet \"a b'", "Invalid multiword trigger: '\"a b''")]
fn header_errors(#[case] line: &str, #[case] message: &str) {
    assert_eq!(parse_header(line, None).unwrap_err(), message);
}

#[test]
fn global_header_uses_its_own_end_marker() {
    let header = parse_header("global !p", None).unwrap();
    assert_eq!(header.kind, BlockKind::Global);
    assert_eq!(header.trigger, "!p");
    assert_eq!(header.kind.end_marker(), "endglobal");
}

#[test]
fn options_need_more_than_two_words() {
    // Two words never split into trigger plus options; the whole tail is a
    // (here invalid) multiword trigger candidate.
    assert!(parse_header("snippet trig b", None).is_err());
}
