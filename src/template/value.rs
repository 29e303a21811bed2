//! Property values and their CloudFormation intrinsic encoding.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

/// A property value inside a resource definition.
///
/// Values are either plain strings or tokens that the provisioning engine
/// resolves at deploy time. Tokens are how one definition points at another:
/// the physical id of a gateway only exists once the stack is applied, so the
/// attachment refers to it with `Fn::GetAtt` instead of a literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// A literal string, emitted as-is
    Literal(String),
    /// `{"Ref": "<logical id>"}`
    Ref(String),
    /// `{"Fn::GetAtt": ["<logical id>", "<attribute>"]}`
    GetAtt {
        /// Logical id of the resource exposing the attribute
        logical_id: String,
        /// Attribute name, e.g. `InternetGatewayId`
        attribute: String,
    },
}

impl Value {
    /// Creates a literal value.
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// Creates a `Ref` token to a resource or parameter.
    pub fn reference(logical_id: impl Into<String>) -> Self {
        Self::Ref(logical_id.into())
    }

    /// Creates a `Fn::GetAtt` token.
    pub fn get_att(logical_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::GetAtt {
            logical_id: logical_id.into(),
            attribute: attribute.into(),
        }
    }

    /// Returns the logical id this value points at, if it is a token.
    ///
    /// Pseudo parameters (`AWS::Region`, `AWS::StackName`, ...) are not
    /// definitions in the scope and are reported as `None`.
    pub fn referenced_logical_id(&self) -> Option<&str> {
        match self {
            Value::Literal(_) => None,
            Value::Ref(id) if id.starts_with("AWS::") => None,
            Value::Ref(id) => Some(id),
            Value::GetAtt { logical_id, .. } => Some(logical_id),
        }
    }

    /// Returns the literal string, if this is not a token.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Value::Literal(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true if the value is resolved by the provisioning engine.
    pub fn is_token(&self) -> bool {
        !matches!(self, Value::Literal(_))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // YAML short-form notation
        match self {
            Value::Literal(s) => write!(f, "{}", s),
            Value::Ref(id) => write!(f, "!Ref {}", id),
            Value::GetAtt {
                logical_id,
                attribute,
            } => write!(f, "!GetAtt {}.{}", logical_id, attribute),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Literal(s) => serializer.serialize_str(s),
            Value::Ref(id) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Ref", id)?;
                map.end()
            }
            Value::GetAtt {
                logical_id,
                attribute,
            } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Fn::GetAtt", &[logical_id, attribute])?;
                map.end()
            }
        }
    }
}
