//! The output node tree handed to the renderer.

use crate::style::ScalarStyle;

/// The shape of an output node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    Scalar,
    Sequence,
    Mapping,
}

/// A node in the tree the renderer serializes.
///
/// Mapping children alternate key-scalar and value nodes, in the order
/// they should be emitted. The tree is built fresh per encode call and
/// consumed immediately; nothing persists across calls.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct YamlNode {
    pub(crate) kind: NodeKind,

    /// Rendered scalar text, unescaped. Unused for containers.
    pub(crate) value: String,

    /// How the renderer should write `value`.
    pub(crate) style: ScalarStyle,

    /// Encoded provenance token for this node's line, if any.
    pub(crate) line_comment: Option<String>,

    /// Sequence items, or key/value alternation for mappings.
    pub(crate) children: Vec<YamlNode>,
}

impl YamlNode {
    pub(crate) fn scalar(value: impl Into<String>, style: ScalarStyle) -> Self {
        Self {
            kind: NodeKind::Scalar,
            value: value.into(),
            style,
            line_comment: None,
            children: Vec::new(),
        }
    }

    pub(crate) fn sequence(children: Vec<YamlNode>) -> Self {
        Self {
            kind: NodeKind::Sequence,
            value: String::new(),
            style: ScalarStyle::Plain,
            line_comment: None,
            children,
        }
    }

    pub(crate) fn mapping(children: Vec<YamlNode>) -> Self {
        debug_assert!(children.len() % 2 == 0, "mapping children must pair up");
        Self {
            kind: NodeKind::Mapping,
            value: String::new(),
            style: ScalarStyle::Plain,
            line_comment: None,
            children,
        }
    }

    pub(crate) fn with_comment(mut self, token: String) -> Self {
        self.line_comment = Some(token);
        self
    }
}
