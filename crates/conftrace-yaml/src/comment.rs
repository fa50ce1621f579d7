//! Reversible encoding of provenance strings into comment-safe tokens.
//!
//! Origin strings travel through the renderer inside ordinary line
//! comments. Encoding them to base64 keeps the comment marker character
//! and whitespace out of the token, so the aligner can find the
//! rightmost `# ` on a line and know it is the comment boundary even
//! when the value itself contains `#`.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::{Error, Result};

/// Sentinel recorded when a node has no tracked origin.
pub(crate) const UNKNOWN_ORIGIN: &str = "unknown";

/// Encode an origin string into a comment-safe token.
///
/// An empty origin becomes the literal [`UNKNOWN_ORIGIN`] sentinel
/// first, so every rendered line carries a non-empty comment.
pub(crate) fn encode_comment(s: &str) -> String {
    let s = if s.is_empty() { UNKNOWN_ORIGIN } else { s };
    STANDARD.encode(s)
}

/// The inverse of [`encode_comment`].
///
/// Cannot fail on tokens this crate produced, but a malformed token is
/// reported rather than dropped.
pub(crate) fn decode_comment(token: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(token)
        .map_err(|e| Error::CommentDecode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::CommentDecode(e.to_string()))
}
