//! Tagged tree model for batch configurations.
//!
//! A [`Value`] is a scalar leaf, a sequence, or a node mapping string keys to
//! further values. Traversals match on the variant exhaustively instead of
//! probing types at runtime. Cloning a tree rebuilds every container, so a
//! clone never shares substructure with its source.

mod serde_impl;

use std::collections::BTreeMap;
use std::fmt;

/// Mapping of keys to child values.
pub type Node = BTreeMap<String, Value>;

/// Scalar leaf of a configuration tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    /// Absent or null value.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Signed integer.
    Integer(i64),
    /// Floating point number.
    Float(f64),
    /// UTF-8 string.
    String(String),
}

impl Scalar {
    /// Numeric view of the scalar, if it is a number.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "labels render numbers with two fractional digits"
    )]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::Null | Self::Bool(_) | Self::String(_) => None,
        }
    }
}

/// Magnitude from which floats display in exponent form.
const EXPONENT_FROM: f64 = 1e16;

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) if x.is_finite() && x.abs() >= EXPONENT_FROM => write!(f, "{x:e}"),
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

/// Node of a configuration tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Leaf value.
    Scalar(Scalar),
    /// Ordered list of values. Lists are literal leaves unless they sit
    /// under an iteration marker.
    Sequence(Vec<Self>),
    /// Nested mapping.
    Node(Node),
}

impl Value {
    /// An empty node.
    #[must_use]
    pub const fn empty_node() -> Self {
        Self::Node(BTreeMap::new())
    }

    /// Returns the mapping when this value is a node.
    #[must_use]
    pub const fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            Self::Scalar(_) | Self::Sequence(_) => None,
        }
    }

    /// Mutable access to the mapping when this value is a node.
    pub fn as_node_mut(&mut self) -> Option<&mut Node> {
        match self {
            Self::Node(node) => Some(node),
            Self::Scalar(_) | Self::Sequence(_) => None,
        }
    }

    /// Returns the elements when this value is a sequence.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items),
            Self::Scalar(_) | Self::Node(_) => None,
        }
    }

    /// Returns the scalar when this value is a leaf scalar.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            Self::Sequence(_) | Self::Node(_) => None,
        }
    }

    /// Returns `true` for nodes.
    #[must_use]
    pub const fn is_node(&self) -> bool {
        matches!(self, Self::Node(_))
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::empty_node()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => scalar.fmt(f),
            Self::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt(f)?;
                }
                f.write_str("]")
            }
            Self::Node(node) => {
                f.write_str("{")?;
                for (i, (key, item)) in node.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {item}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Scalar(Scalar::Integer(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Scalar(Scalar::Integer(i64::from(value)))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Scalar(Scalar::Float(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Scalar(Scalar::String(value.to_owned()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Scalar(Scalar::String(value))
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Scalar(Scalar::Null),
            serde_json::Value::Bool(b) => b.into(),
            serde_json::Value::Number(n) => Self::Scalar(
                n.as_i64()
                    .map(Scalar::Integer)
                    .or_else(|| n.as_f64().map(Scalar::Float))
                    .unwrap_or(Scalar::Null),
            ),
            serde_json::Value::String(s) => s.into(),
            serde_json::Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Node(
                map.into_iter()
                    .map(|(key, item)| (key, Self::from(item)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Scalar(Scalar::Null) => Self::Null,
            Value::Scalar(Scalar::Bool(b)) => Self::Bool(b),
            Value::Scalar(Scalar::Integer(i)) => Self::from(i),
            // Non-finite floats have no JSON form and become null.
            Value::Scalar(Scalar::Float(f)) => {
                serde_json::Number::from_f64(f).map_or(Self::Null, Self::Number)
            }
            Value::Scalar(Scalar::String(s)) => Self::String(s),
            Value::Sequence(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Node(node) => Self::Object(
                node.into_iter()
                    .map(|(key, item)| (key, Self::from(item)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests;
