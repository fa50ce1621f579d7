//! Scalar quoting policy.

/// Rendering style for a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalarStyle {
    /// Emit the text as-is.
    #[default]
    Plain,

    /// Emit the text double-quoted, with escapes.
    DoubleQuoted,
}

/// Determine the best YAML style (plain or double-quoted) for a string.
///
/// Quoting triggers on anything a plain scalar would mangle or a YAML
/// parser would reinterpret: control characters other than tab, a
/// leading `:` or `-`, backslashes, double quotes, non-ASCII code
/// points, an empty string, or trailing whitespace.
pub fn determine_style(input: &str) -> ScalarStyle {
    let mut needs_quotes = false;
    let mut contains_newlines = false;

    for (idx, ch) in input.char_indices() {
        match ch {
            '\n' => contains_newlines = true,
            ':' | '-' if idx == 0 => needs_quotes = true,
            '\\' | '"' => needs_quotes = true,
            c if c < '\x20' && c != '\t' => needs_quotes = true,
            c if c > '\x7f' => needs_quotes = true,
            _ => {}
        }
    }

    if contains_newlines && !needs_quotes {
        // A literal block scalar would be the natural fit, but its
        // continuation lines cannot carry their own comment marker and
        // the aligner drops marker-less lines. Double-quoting keeps
        // every scalar on one line.
        return ScalarStyle::DoubleQuoted;
    }

    if needs_quotes
        || input.is_empty()
        || input.chars().last().is_some_and(char::is_whitespace)
    {
        return ScalarStyle::DoubleQuoted;
    }

    ScalarStyle::Plain
}
