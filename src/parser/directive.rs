//! `key <- value` directive lines.

/// Separator between directive key and value.
pub const DIRECTIVE_SEPARATOR: &str = " <- ";

/// A parsed `key <- value` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    /// Directive key (a single token)
    pub key: &'a str,
    /// Directive value, trimmed
    pub value: &'a str,
}

/// Parse a directive line.
///
/// Returns `None` when the line has no separator or when the text before
/// the first separator contains whitespace. Such lines are ordinary
/// content. An empty key is still a directive.
pub fn parse_directive(line: &str) -> Option<Directive<'_>> {
    let (key, value) = line.split_once(DIRECTIVE_SEPARATOR)?;

    if key.chars().any(char::is_whitespace) {
        return None;
    }

    Some(Directive {
        key,
        value: value.trim(),
    })
}
