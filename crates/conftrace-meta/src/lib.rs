//! Annotated configuration values with origin tracking.
//!
//! This crate provides [`MetaValue`], the tree the configuration system
//! hands to encoders: plain YAML data where every node remembers where it
//! was decoded from. Not all decoders track every position, so a node may
//! carry zero origins.
//!
//! # Example
//!
//! ```rust
//! use conftrace_meta::{MetaValue, Origin};
//! use yaml_rust2::Yaml;
//!
//! let value = MetaValue::value(Yaml::String("bar".into()))
//!     .with_origin(Origin::new("file.yml", 1, 8));
//! assert_eq!(value.origin_string(), "file.yml:1[8]");
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use yaml_rust2::Yaml;
use yaml_rust2::yaml::Hash;

/// Where a configuration value was decoded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    /// File the value came from.
    pub file: String,

    /// Line number (1-based).
    pub line: usize,

    /// Column number (1-based).
    pub col: usize,
}

impl Origin {
    /// Create a new Origin.
    pub fn new(file: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file: file.into(),
            line,
            col,
        }
    }
}

impl fmt::Display for Origin {
    /// Renders as `file:line[col]`, the form shown in encoder comments.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}[{}]", self.file, self.line, self.col)
    }
}

/// A configuration value annotated with its origins.
///
/// The tree mirrors the decoded document: scalars hold an owned
/// [`Yaml`] payload, arrays hold their elements in document order, and
/// maps hold uniquely-keyed children with no significant iteration
/// order. Encoders treat the tree as read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct MetaValue {
    /// Origins recorded for this value, most specific first. Empty when
    /// the decoder did not track the position.
    pub origins: Vec<Origin>,

    /// The value itself.
    pub node: MetaNode,
}

/// The shape of a [`MetaValue`].
#[derive(Debug, Clone, PartialEq)]
pub enum MetaNode {
    /// A scalar payload.
    Value(Yaml),

    /// An ordered sequence of values.
    Array(Vec<MetaValue>),

    /// A mapping with unique keys and unspecified iteration order.
    Map(HashMap<String, MetaValue>),
}

impl MetaValue {
    /// Create a scalar value with no origins.
    pub fn value(payload: Yaml) -> Self {
        Self {
            origins: Vec::new(),
            node: MetaNode::Value(payload),
        }
    }

    /// Create an array value with no origins.
    pub fn array(items: Vec<MetaValue>) -> Self {
        Self {
            origins: Vec::new(),
            node: MetaNode::Array(items),
        }
    }

    /// Create a map value with no origins.
    pub fn map(entries: HashMap<String, MetaValue>) -> Self {
        Self {
            origins: Vec::new(),
            node: MetaNode::Map(entries),
        }
    }

    /// Append an origin record.
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origins.push(origin);
        self
    }

    /// Check if this is a scalar value.
    pub fn is_value(&self) -> bool {
        matches!(self.node, MetaNode::Value(_))
    }

    /// Check if this is an array.
    pub fn is_array(&self) -> bool {
        matches!(self.node, MetaNode::Array(_))
    }

    /// Check if this is a map.
    pub fn is_map(&self) -> bool {
        matches!(self.node, MetaNode::Map(_))
    }

    /// The human-readable provenance label for this value: the first
    /// recorded origin, or the empty string when none was tracked.
    pub fn origin_string(&self) -> String {
        self.origins
            .first()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// Strip the annotations, producing a plain [`Yaml`] tree.
    ///
    /// Map keys are emitted in sorted order so the result is
    /// reproducible regardless of how the map was populated.
    pub fn to_raw(&self) -> Yaml {
        match &self.node {
            MetaNode::Value(payload) => payload.clone(),
            MetaNode::Array(items) => Yaml::Array(items.iter().map(MetaValue::to_raw).collect()),
            MetaNode::Map(entries) => {
                let mut keys: Vec<&String> = entries.keys().collect();
                keys.sort_unstable();

                let mut hash = Hash::new();
                for key in keys {
                    hash.insert(Yaml::String(key.clone()), entries[key].to_raw());
                }
                Yaml::Hash(hash)
            }
        }
    }
}
