//! Builds the output node tree from an annotated value.

use std::panic::{self, AssertUnwindSafe};

use conftrace_meta::{MetaNode, MetaValue};
use yaml_rust2::Yaml;

use crate::comment::encode_comment;
use crate::error::{Error, Result};
use crate::node::YamlNode;
use crate::style::{ScalarStyle, determine_style};

/// Recursively build the node tree for an annotated value.
///
/// Every node (and every mapping-key node) comes out carrying an
/// encoded comment token, which is what lets the aligner treat each
/// rendered line uniformly.
pub(crate) fn build(obj: &MetaValue) -> Result<YamlNode> {
    let token = encode_comment(&obj.origin_string());

    match &obj.node {
        MetaNode::Value(Yaml::String(s)) => {
            // Strings skip the scalar primitive: its quoting decisions
            // are made for YAML round-tripping, not for single-line
            // comment-bearing output.
            Ok(YamlNode::scalar(s.clone(), determine_style(s)).with_comment(token))
        }
        MetaNode::Value(payload) => {
            // The primitive produces a fresh node, so the comment has to
            // be attached after it runs, not before.
            Ok(encode_scalar(payload)?.with_comment(token))
        }
        MetaNode::Array(items) => {
            let mut children = Vec::with_capacity(items.len());
            for item in items {
                children.push(build(item)?);
            }
            Ok(YamlNode::sequence(children).with_comment(token))
        }
        MetaNode::Map(entries) => {
            // Sort the keys so the output order is predictable; the
            // source map has no iteration order of its own.
            let mut sorted: Vec<(&String, &MetaValue)> = entries.iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(b.0));

            let mut children = Vec::with_capacity(sorted.len() * 2);
            for (key, value) in sorted {
                // The rendered line pairs a key with its value, so the
                // key node carries the value's provenance.
                let key_node = YamlNode::scalar(key.clone(), determine_style(key))
                    .with_comment(encode_comment(&value.origin_string()));
                children.push(key_node);
                children.push(build(value)?);
            }
            Ok(YamlNode::mapping(children).with_comment(token))
        }
    }
}

/// Run the scalar encoding primitive inside a recovery boundary.
///
/// The primitive panics on payloads that violate its scalar contract;
/// both that and its ordinary error return surface as the single
/// [`Error::Encoding`], keeping `build` a total function.
pub(crate) fn encode_scalar(payload: &Yaml) -> Result<YamlNode> {
    panic::catch_unwind(AssertUnwindSafe(|| scalar_node(payload))).unwrap_or(Err(Error::Encoding))
}

/// The scalar encoding primitive.
///
/// Only ever called through [`encode_scalar`].
fn scalar_node(payload: &Yaml) -> Result<YamlNode> {
    let text = match payload {
        Yaml::Integer(i) => i.to_string(),
        Yaml::Real(r) => r.clone(),
        Yaml::Boolean(true) => "true".to_string(),
        Yaml::Boolean(false) => "false".to_string(),
        Yaml::Null => "null".to_string(),
        Yaml::Alias(_) | Yaml::BadValue => return Err(Error::Encoding),
        Yaml::String(_) | Yaml::Array(_) | Yaml::Hash(_) => {
            // Strings are styled by the caller; containers have no
            // scalar representation at all.
            panic!("non-scalar payload in scalar position: {payload:?}")
        }
    };
    Ok(YamlNode::scalar(text, ScalarStyle::Plain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::decode_comment;
    use crate::node::NodeKind;
    use conftrace_meta::Origin;
    use std::collections::HashMap;

    fn comment_of(node: &YamlNode) -> String {
        decode_comment(node.line_comment.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn test_scalar_carries_origin_token() {
        let obj = MetaValue::value(Yaml::Integer(42)).with_origin(Origin::new("a.yml", 3, 9));
        let node = build(&obj).unwrap();

        assert_eq!(node.kind, NodeKind::Scalar);
        assert_eq!(node.value, "42");
        assert_eq!(comment_of(&node), "a.yml:3[9]");
    }

    #[test]
    fn test_missing_origin_becomes_unknown() {
        let node = build(&MetaValue::value(Yaml::Null)).unwrap();
        assert_eq!(comment_of(&node), "unknown");
    }

    #[test]
    fn test_string_payload_is_styled() {
        let node = build(&MetaValue::value(Yaml::String("multi\nline".into()))).unwrap();
        assert_eq!(node.style, ScalarStyle::DoubleQuoted);
        assert_eq!(node.value, "multi\nline");
    }

    #[test]
    fn test_map_keys_sorted_and_carry_value_origin() {
        let obj = MetaValue::map(HashMap::from([
            (
                "zebra".to_string(),
                MetaValue::value(Yaml::Integer(1)).with_origin(Origin::new("z.yml", 1, 1)),
            ),
            (
                "apple".to_string(),
                MetaValue::value(Yaml::Integer(2)).with_origin(Origin::new("a.yml", 2, 2)),
            ),
        ]));

        let node = build(&obj).unwrap();
        assert_eq!(node.kind, NodeKind::Mapping);
        assert_eq!(node.children.len(), 4);

        assert_eq!(node.children[0].value, "apple");
        assert_eq!(comment_of(&node.children[0]), "a.yml:2[2]");
        assert_eq!(node.children[2].value, "zebra");
        assert_eq!(comment_of(&node.children[2]), "z.yml:1[1]");
    }

    #[test]
    fn test_unencodable_payload_fails() {
        let obj = MetaValue::array(vec![
            MetaValue::value(Yaml::String("fine".into())),
            MetaValue::value(Yaml::BadValue),
        ]);
        assert_eq!(build(&obj), Err(Error::Encoding));
    }

    #[test]
    fn test_primitive_panic_is_converted() {
        // A container payload inside a scalar node panics in the
        // primitive; the boundary turns it into the normal error.
        let obj = MetaValue::value(Yaml::Array(vec![Yaml::Null]));
        assert_eq!(build(&obj), Err(Error::Encoding));
    }
}
