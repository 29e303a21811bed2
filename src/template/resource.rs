//! Resource and parameter definitions registered in a scope.

use super::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// CloudFormation resource types this crate knows how to define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// `AWS::EC2::InternetGateway`
    #[serde(rename = "AWS::EC2::InternetGateway")]
    InternetGateway,
    /// `AWS::EC2::VPCGatewayAttachment`
    #[serde(rename = "AWS::EC2::VPCGatewayAttachment")]
    VpcGatewayAttachment,
    /// `AWS::EC2::RouteTable`
    #[serde(rename = "AWS::EC2::RouteTable")]
    RouteTable,
    /// `AWS::EC2::SubnetRouteTableAssociation`
    #[serde(rename = "AWS::EC2::SubnetRouteTableAssociation")]
    SubnetRouteTableAssociation,
    /// `AWS::EC2::Route`
    #[serde(rename = "AWS::EC2::Route")]
    Route,
}

impl ResourceKind {
    /// Returns the CloudFormation type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            ResourceKind::InternetGateway => "AWS::EC2::InternetGateway",
            ResourceKind::VpcGatewayAttachment => "AWS::EC2::VPCGatewayAttachment",
            ResourceKind::RouteTable => "AWS::EC2::RouteTable",
            ResourceKind::SubnetRouteTableAssociation => "AWS::EC2::SubnetRouteTableAssociation",
            ResourceKind::Route => "AWS::EC2::Route",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A single resource definition.
///
/// Serializes to the body CloudFormation expects under `Resources.<id>`; the
/// logical id itself is the map key and is skipped here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceDefinition {
    #[serde(skip)]
    logical_id: String,
    #[serde(rename = "Type")]
    kind: ResourceKind,
    #[serde(rename = "Properties", skip_serializing_if = "IndexMap::is_empty")]
    properties: IndexMap<String, Value>,
}

impl ResourceDefinition {
    /// Creates a definition with no properties.
    pub fn new(logical_id: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            logical_id: logical_id.into(),
            kind,
            properties: IndexMap::new(),
        }
    }

    /// Sets a property, replacing any previous value under the same name.
    pub fn property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn logical_id(&self) -> &str {
        &self.logical_id
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Looks up a property by its CloudFormation name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Properties in insertion order.
    pub fn properties(&self) -> &IndexMap<String, Value> {
        &self.properties
    }

    /// Logical ids referenced by any property of this resource.
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.properties
            .values()
            .filter_map(Value::referenced_logical_id)
    }
}

/// A template parameter, supplied when the stack is deployed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// Parameter type, e.g. `AWS::EC2::VPC::Id`
    #[serde(rename = "Type")]
    pub kind: String,
    /// Human-readable description
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Default value
    #[serde(rename = "Default", skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl Parameter {
    /// Creates a parameter of the given type.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            description: None,
            default: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}
