//! Sub-parsers for directive tails
//!
//! `extends`, `context` and the four action keywords each carry a small
//! grammar of their own after the keyword. Each handler takes the tail and
//! the line it came from and returns either the parsed value or a
//! `(message, line)` pair feeding the uniform error channel.

/// Error from a directive tail: message plus the line it came from.
pub type DirectiveError = (String, usize);

/// `extends <ft1>, <ft2>, ...` is a comma-separated filetype list.
pub fn parse_extends(tail: &str, line: usize) -> Result<Vec<String>, DirectiveError> {
    if tail.trim().is_empty() {
        return Err(("'extends' without file types".to_string(), line));
    }
    Ok(tail.split(',').map(|part| part.trim().to_string()).collect())
}

/// `context "<expr>"` requires the expression wrapped in double quotes.
pub fn parse_context(tail: &str, line: usize) -> Result<String, DirectiveError> {
    match unquote(tail) {
        Some(expression) => Ok(expression.to_string()),
        None => Err((format!("Invalid context value: '{}'", tail.trim()), line)),
    }
}

/// Action directives carry their code wrapped in double quotes.
pub fn parse_action(tail: &str, line: usize) -> Result<String, DirectiveError> {
    match unquote(tail) {
        Some(code) => Ok(code.to_string()),
        None => Err((format!("Invalid action value: '{}'", tail.trim()), line)),
    }
}

fn unquote(tail: &str) -> Option<&str> {
    let tail = tail.trim();
    if tail.len() >= 2 && tail.starts_with('"') && tail.ends_with('"') {
        Some(&tail[1..tail.len() - 1])
    } else {
        None
    }
}
