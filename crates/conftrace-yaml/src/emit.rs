//! Block-style YAML rendering of the output node tree.
//!
//! No YAML emitter in the ecosystem supports per-node line comments,
//! so the rendering lives here. The one invariant that matters: a node
//! carrying a comment token contributes exactly one ` # token` suffix,
//! at the end of its line, with a single space before the marker. The
//! aligner depends on that shape.

use yaml_rust2::Yaml;

use crate::align::COMMENT_MARKER;
use crate::build::encode_scalar;
use crate::error::{Error, Result};
use crate::node::{NodeKind, YamlNode};
use crate::style::{ScalarStyle, determine_style};

const INDENT: &str = "    ";

/// Render a node tree as block-style YAML, one `\n`-terminated line at
/// a time.
pub(crate) fn emit(root: &YamlNode) -> String {
    let mut out = String::new();
    match root.kind {
        NodeKind::Scalar => {
            push_line(&mut out, 0, &scalar_text(root), root.line_comment.as_deref());
        }
        NodeKind::Sequence | NodeKind::Mapping if root.children.is_empty() => {
            push_line(&mut out, 0, empty_text(root.kind), root.line_comment.as_deref());
        }
        NodeKind::Sequence => emit_sequence(&mut out, 0, &root.children),
        // The root container gets no line of its own, so its comment is
        // never rendered.
        NodeKind::Mapping => emit_mapping(&mut out, 0, &root.children),
    }
    out
}

/// Build a comment-free node tree from a raw YAML value.
///
/// This is the plain-encode front half: same renderer, no provenance.
pub(crate) fn plain_node(value: &Yaml) -> Result<YamlNode> {
    match value {
        Yaml::String(s) => Ok(YamlNode::scalar(s.clone(), determine_style(s))),
        Yaml::Array(items) => {
            let mut children = Vec::with_capacity(items.len());
            for item in items {
                children.push(plain_node(item)?);
            }
            Ok(YamlNode::sequence(children))
        }
        Yaml::Hash(hash) => {
            let mut children = Vec::with_capacity(hash.len() * 2);
            for (key, value) in hash {
                let key_node = plain_node(key)?;
                if key_node.kind != NodeKind::Scalar {
                    return Err(Error::Encoding);
                }
                children.push(key_node);
                children.push(plain_node(value)?);
            }
            Ok(YamlNode::mapping(children))
        }
        other => encode_scalar(other),
    }
}

fn emit_sequence(out: &mut String, indent: usize, items: &[YamlNode]) {
    for item in items {
        match item.kind {
            NodeKind::Scalar => {
                let text = format!("- {}", scalar_text(item));
                push_line(out, indent, &text, item.line_comment.as_deref());
            }
            _ if item.children.is_empty() => {
                let text = format!("- {}", empty_text(item.kind));
                push_line(out, indent, &text, item.line_comment.as_deref());
            }
            NodeKind::Sequence => {
                push_line(out, indent, "-", item.line_comment.as_deref());
                emit_sequence(out, indent + 1, &item.children);
            }
            NodeKind::Mapping => {
                push_line(out, indent, "-", item.line_comment.as_deref());
                emit_mapping(out, indent + 1, &item.children);
            }
        }
    }
}

fn emit_mapping(out: &mut String, indent: usize, children: &[YamlNode]) {
    for pair in children.chunks_exact(2) {
        let (key, value) = (&pair[0], &pair[1]);
        let key_text = scalar_text(key);
        match value.kind {
            NodeKind::Scalar => {
                let text = format!("{key_text}: {}", scalar_text(value));
                push_line(out, indent, &text, key.line_comment.as_deref());
            }
            _ if value.children.is_empty() => {
                let text = format!("{key_text}: {}", empty_text(value.kind));
                push_line(out, indent, &text, key.line_comment.as_deref());
            }
            NodeKind::Sequence => {
                push_line(out, indent, &format!("{key_text}:"), key.line_comment.as_deref());
                emit_sequence(out, indent + 1, &value.children);
            }
            NodeKind::Mapping => {
                push_line(out, indent, &format!("{key_text}:"), key.line_comment.as_deref());
                emit_mapping(out, indent + 1, &value.children);
            }
        }
    }
}

fn push_line(out: &mut String, indent: usize, content: &str, comment: Option<&str>) {
    for _ in 0..indent {
        out.push_str(INDENT);
    }
    out.push_str(content);
    if let Some(token) = comment {
        out.push(' ');
        out.push_str(COMMENT_MARKER);
        out.push_str(token);
    }
    out.push('\n');
}

fn scalar_text(node: &YamlNode) -> String {
    match node.style {
        ScalarStyle::Plain => node.value.clone(),
        ScalarStyle::DoubleQuoted => quote_double(&node.value),
    }
}

fn empty_text(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Sequence => "[]",
        NodeKind::Mapping => "{}",
        NodeKind::Scalar => unreachable!("scalars are never empty containers"),
    }
}

/// Double-quote a scalar, escaping everything a single-line quoted
/// scalar cannot hold verbatim. Printable non-ASCII passes through as
/// UTF-8.
fn quote_double(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for ch in s.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            '\0' => quoted.push_str("\\0"),
            '\u{8}' => quoted.push_str("\\b"),
            '\u{c}' => quoted.push_str("\\f"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                quoted.push_str(&format!("\\x{:02X}", c as u32));
            }
            c if ('\u{80}'..='\u{9f}').contains(&c) => {
                quoted.push_str(&format!("\\u{:04X}", c as u32));
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::encode_comment;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quote_double() {
        assert_eq!(quote_double("ground\nout"), "\"ground\\nout\"");
        assert_eq!(quote_double("water\nballoons\""), "\"water\\nballoons\\\"\"");
        assert_eq!(quote_double("back\\slash"), "\"back\\\\slash\"");
        assert_eq!(quote_double("bell\u{7}"), "\"bell\\x07\"");
        assert_eq!(quote_double("caf\u{e9}"), "\"caf\u{e9}\"");
        assert_eq!(quote_double(""), "\"\"");
    }

    #[test]
    fn test_emit_scalar_line_has_one_marker() {
        let node = YamlNode::scalar("bar", ScalarStyle::Plain)
            .with_comment(encode_comment("file.yml:1[8]"));
        let text = emit(&node);
        assert_eq!(text.matches("# ").count(), 1);
        assert!(text.starts_with("bar # "));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_emit_mapping_pairs_key_with_scalar() {
        let children = vec![
            YamlNode::scalar("candy", ScalarStyle::Plain).with_comment(encode_comment("o")),
            YamlNode::scalar("bar", ScalarStyle::Plain).with_comment(encode_comment("o")),
        ];
        let text = emit(&YamlNode::mapping(children));
        assert!(text.starts_with("candy: bar # "));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_emit_nested_containers() {
        let inner = YamlNode::mapping(vec![
            YamlNode::scalar("red", ScalarStyle::Plain).with_comment(encode_comment("a")),
            YamlNode::scalar("balloons", ScalarStyle::Plain).with_comment(encode_comment("a")),
        ])
        .with_comment(encode_comment("b"));
        let seq = YamlNode::sequence(vec![inner]).with_comment(encode_comment("c"));
        let root = YamlNode::mapping(vec![
            YamlNode::scalar("things", ScalarStyle::Plain).with_comment(encode_comment("c")),
            seq,
        ]);

        let text = emit(&root);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("things: # "));
        assert!(lines[1].starts_with("    - # "));
        assert!(lines[2].starts_with("        red: balloons # "));
    }

    #[test]
    fn test_emit_empty_containers_inline() {
        let root = YamlNode::mapping(vec![
            YamlNode::scalar("a", ScalarStyle::Plain).with_comment(encode_comment("x")),
            YamlNode::sequence(Vec::new()).with_comment(encode_comment("x")),
            YamlNode::scalar("b", ScalarStyle::Plain).with_comment(encode_comment("y")),
            YamlNode::mapping(Vec::new()).with_comment(encode_comment("y")),
        ]);

        let text = emit(&root);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("a: [] # "));
        assert!(lines[1].starts_with("b: {} # "));
    }

    #[test]
    fn test_plain_node_has_no_comments() {
        let mut hash = yaml_rust2::yaml::Hash::new();
        hash.insert(Yaml::String("candy".into()), Yaml::String("bar".into()));
        let node = plain_node(&Yaml::Hash(hash)).unwrap();

        let text = emit(&node);
        assert_eq!(text, "candy: bar\n");
    }

    #[test]
    fn test_plain_node_rejects_container_keys() {
        let mut hash = yaml_rust2::yaml::Hash::new();
        hash.insert(Yaml::Array(vec![Yaml::Null]), Yaml::Null);
        assert_eq!(plain_node(&Yaml::Hash(hash)), Err(Error::Encoding));
    }
}
