//! Node kinds as seen by the navigator.

use std::fmt;

use serde_json::Value;

/// The kind of a JSON node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl NodeKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => NodeKind::Null,
            Value::Bool(_) => NodeKind::Bool,
            Value::Number(_) => NodeKind::Number,
            Value::String(_) => NodeKind::String,
            Value::Array(_) => NodeKind::Array,
            Value::Object(_) => NodeKind::Object,
        }
    }

    pub fn is_container(self) -> bool {
        matches!(self, NodeKind::Array | NodeKind::Object)
    }

    pub fn is_scalar(self) -> bool {
        matches!(self, NodeKind::Bool | NodeKind::Number | NodeKind::String)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Null => "Null",
            NodeKind::Bool => "Bool",
            NodeKind::Number => "Number",
            NodeKind::String => "String",
            NodeKind::Array => "Array",
            NodeKind::Object => "Object",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of container a navigation may end on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Object,
    Array,
}

impl ContainerKind {
    /// A fresh, empty container of this kind.
    pub fn empty(self) -> Value {
        match self {
            ContainerKind::Object => Value::Object(serde_json::Map::new()),
            ContainerKind::Array => Value::Array(Vec::new()),
        }
    }

    pub fn matches(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (ContainerKind::Object, Value::Object(_)) | (ContainerKind::Array, Value::Array(_))
        )
    }
}

impl From<ContainerKind> for NodeKind {
    fn from(kind: ContainerKind) -> Self {
        match kind {
            ContainerKind::Object => NodeKind::Object,
            ContainerKind::Array => NodeKind::Array,
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&NodeKind::from(*self), f)
    }
}
