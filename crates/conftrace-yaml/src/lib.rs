//! # conftrace-yaml
//!
//! YAML encoding for annotated configuration values.
//!
//! Two forms are supported: the simple form ([`Encoder::encode`])
//! renders a plain [`Yaml`] tree, and the detailed form
//! ([`Encoder::encode_extended`]) renders a [`MetaValue`] tree with the
//! provenance of every value as a trailing `file:line[col]` comment.
//! Not all decoders track every position; untracked values are labeled
//! `unknown`. A comment is present on every line so the output stays
//! friendly to simple cli text processors.
//!
//! ```text
//! candy: bar                      # file.yml:1[8]
//! cats:                           # file.yml:2[1]
//!     - madd                      # file.yml:3[7]
//!     - tabby                     # file.yml:4[7]
//! other:                          # file.yml:5[1]
//!     things:                     # file.yml:6[5]
//!         green:                  # file.yml:8[9]
//!             - grass             # unknown
//!             - ground            # file.yml:10[15]
//!         red: balloons           # file.yml:7[14]
//!     trending: now               # file.yml:12[15]
//! ```
//!
//! Internally the detailed form builds a node tree whose comments hold
//! base64-encoded origin strings, renders it, then realigns and decodes
//! the comments in a final pass over the text. The encoding keeps `#`
//! out of the tokens so the rightmost marker on a line is always the
//! comment boundary.

mod align;
mod build;
mod comment;
mod emit;
mod error;
mod node;
mod style;

pub use error::{Error, Result};
pub use style::{ScalarStyle, determine_style};

use conftrace_meta::{MetaNode, MetaValue};
use yaml_rust2::Yaml;

/// YAML document representing an empty configuration.
const NULL_DOCUMENT: &[u8] = b"null\n";

/// The YAML encoder.
///
/// Stateless; a single instance can serve any number of calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct Encoder;

impl Encoder {
    /// The file extensions this encoder registers for.
    pub fn extensions(&self) -> &'static [&'static str] {
        &["yaml", "yml"]
    }

    /// Encode the value provided into YAML and return the bytes.
    pub fn encode(&self, value: &Yaml) -> Result<Vec<u8>> {
        let tree = emit::plain_node(value)?;
        Ok(emit::emit(&tree).into_bytes())
    }

    /// Encode the annotated value provided into YAML with comments
    /// showing the origin of the configuration, and return the bytes.
    ///
    /// An empty top-level map is the canonical "nothing to encode" and
    /// short-circuits to a literal `null` document.
    pub fn encode_extended(&self, obj: &MetaValue) -> Result<Vec<u8>> {
        if let MetaNode::Map(entries) = &obj.node {
            if entries.is_empty() {
                return Ok(NULL_DOCUMENT.to_vec());
            }
        }

        let tree = build::build(obj)?;
        let raw = emit::emit(&tree);
        let aligned = align::align_comments(&raw)?;
        Ok(aligned.into_bytes())
    }
}
