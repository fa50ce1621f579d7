//! Right-aligns the trailing provenance comments across a document.
//!
//! This is the second half of the comment-smuggling scheme: the
//! renderer leaves an encoded token after the marker on every content
//! line, and this pass finds the widest line, decodes every token, and
//! rewrites the document so all comments start at one column.

use crate::comment::decode_comment;
use crate::error::Result;

/// The two-character sequence that begins a trailing comment.
pub(crate) const COMMENT_MARKER: &str = "# ";

/// Align every line's trailing comment to a shared column and decode
/// the tokens back to their origin strings.
///
/// The target column is the widest marker column plus an 8-space
/// gutter, nudged by `widest % 4` toward a 4-wide tab stop. The marker
/// column is measured on content with trailing padding spaces trimmed,
/// which makes the pass idempotent: re-aligning already-aligned text
/// (with the comments re-encoded) reproduces it byte for byte.
pub(crate) fn align_comments(raw: &str) -> Result<String> {
    let mut entries = Vec::new();
    let mut widest = 0;

    for line in raw.lines() {
        // Tokens cannot contain the marker character, so the rightmost
        // occurrence is always the comment boundary, even when the
        // value text itself contains `#`.
        let Some(found) = line.rfind(COMMENT_MARKER) else {
            // Every content line the builder produces carries a marker;
            // anything else is not content.
            continue;
        };

        let content = line[..found].trim_end_matches(' ');
        let token = &line[found + COMMENT_MARKER.len()..];
        widest = widest.max(content.len() + 1);
        entries.push((content, token));
    }

    let target = widest + 8 + (widest % 4);

    let mut out = String::new();
    for (content, token) in entries {
        let comment = decode_comment(token)?;

        out.push_str(content);
        for _ in content.len()..target {
            out.push(' ');
        }
        out.push_str(COMMENT_MARKER);
        out.push_str(&comment);
        out.push('\n');
    }

    Ok(out)
}
