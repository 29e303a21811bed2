//! Declarative network layouts.
//!
//! A layout describes the routing of one VPC and is turned into a
//! [`ProvisioningScope`] by [`Layout::to_scope`]. Layout files may be written in
//! YAML, JSON or TOML; the format is chosen from the file extension.
//!
//! ```yaml
//! name: network
//! description: Routing for the production VPC
//! network:
//!   vpc_id: vpc-0abc1234
//! internet_gateway:
//!   logical_id: InternetGateway
//! public_route_table:
//!   route_table_id: PublicRouteTable
//!   route_id: PublicRoute
//!   subnets:
//!     - id: subnet-0aaa
//!       availability_zone: 1
//! private_subnets:
//!   - id: subnet-0bbb
//!     availability_zone: 1
//!     route_table_id: PrivateRouteTable1
//!     route_id: PrivateRoute1
//!     egress:
//!       nat_gateway: nat-0ccc
//!   - id: subnet-0ddd
//!     availability_zone: 2
//!     route_table_id: PrivateRouteTable2
//!     route_id: PrivateRoute2
//!     egress: no_egress
//! ```

use crate::aws::{
    AvailabilityZoneSlot, GatewayAttacher, NatGatewayDescriptor, NetworkDescriptor,
    RouteTableConfigurator, RouteTarget, SubnetDescriptor,
};
use crate::error::{Error, ErrorContext, Result};
use crate::scope::ProvisioningScope;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// How the layout refers to its VPC
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkSpec {
    /// Existing VPC by physical id
    VpcId(String),
    /// VPC defined elsewhere in the template
    LogicalId(String),
    /// VPC chosen at deploy time through a template parameter
    Parameter(String),
}

/// Internet Gateway settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InternetGatewaySpec {
    /// Logical id of the gateway resource
    pub logical_id: String,
}

/// A subnet placed in an availability-zone slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubnetSpec {
    /// Subnet id
    pub id: String,
    /// 1-based availability-zone slot
    pub availability_zone: u8,
}

/// Route table shared by all public subnets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PublicRouteTableSpec {
    /// Logical id of the route table
    pub route_table_id: String,
    /// Logical id of the default route
    pub route_id: String,
    /// Subnets associated with the table
    pub subnets: Vec<SubnetSpec>,
}

/// Egress policy of a private subnet; there is no default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EgressSpec {
    /// Route through the given NAT gateway id
    NatGateway(String),
    /// Install a default route without a target
    NoEgress,
}

/// A private subnet with its own route table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrivateSubnetSpec {
    /// Subnet id
    pub id: String,
    /// 1-based availability-zone slot
    pub availability_zone: u8,
    /// Logical id of the route table
    pub route_table_id: String,
    /// Logical id of the default route
    pub route_id: String,
    /// Egress policy
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub egress: EgressSpec,
}

/// A complete network routing layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Layout {
    /// Scope name
    pub name: String,

    /// Template description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// VPC reference
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub network: NetworkSpec,

    /// Internet Gateway to create and attach
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internet_gateway: Option<InternetGatewaySpec>,

    /// Public route table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_route_table: Option<PublicRouteTableSpec>,

    /// Private subnets, one route table each
    #[serde(default)]
    pub private_subnets: Vec<PrivateSubnetSpec>,
}

/// Source format of a layout document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutFormat {
    Yaml,
    Json,
    Toml,
}

impl LayoutFormat {
    /// Picks the format from a file extension, defaulting to YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).unwrap_or("") {
            "json" => LayoutFormat::Json,
            "toml" => LayoutFormat::Toml,
            _ => LayoutFormat::Yaml,
        }
    }
}

fn slot(index: u8, subnet_id: &str) -> Result<AvailabilityZoneSlot> {
    AvailabilityZoneSlot::new(index).ok_or_else(|| {
        Error::Layout(format!(
            "subnet '{}' has availability_zone 0; slots are counted from 1",
            subnet_id
        ))
    })
}

impl SubnetSpec {
    fn descriptor(&self) -> Result<SubnetDescriptor> {
        Ok(SubnetDescriptor::new(
            self.id.as_str(),
            slot(self.availability_zone, &self.id)?,
        ))
    }
}

impl PrivateSubnetSpec {
    fn descriptor(&self) -> Result<SubnetDescriptor> {
        Ok(SubnetDescriptor::new(
            self.id.as_str(),
            slot(self.availability_zone, &self.id)?,
        ))
    }

    fn route_target(&self) -> RouteTarget {
        match &self.egress {
            EgressSpec::NatGateway(id) => {
                RouteTarget::NatGateway(NatGatewayDescriptor::new(id.as_str()))
            }
            EgressSpec::NoEgress => RouteTarget::NoEgress,
        }
    }
}

impl Layout {
    /// Loads a layout from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout {}", path.display()))?;
        Self::parse(&content, LayoutFormat::from_path(path))
            .map_err(|e| Error::layout_parse(path, e.to_string()))
    }

    /// Parses a layout from a string.
    pub fn parse(content: &str, format: LayoutFormat) -> Result<Self> {
        let layout: Layout = match format {
            LayoutFormat::Yaml => serde_yaml::from_str(content)?,
            LayoutFormat::Json => serde_json::from_str(content)?,
            LayoutFormat::Toml => toml::from_str(content)?,
        };
        Ok(layout)
    }

    /// Checks constraints serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if let Some(public) = &self.public_route_table {
            if self.internet_gateway.is_none() {
                return Err(Error::Layout(format!(
                    "public route table '{}' requires an internet_gateway",
                    public.route_table_id
                )));
            }
            if public.subnets.is_empty() {
                return Err(Error::Layout(format!(
                    "public route table '{}' has no subnets",
                    public.route_table_id
                )));
            }
            for subnet in &public.subnets {
                slot(subnet.availability_zone, &subnet.id)?;
            }
        }

        for subnet in &self.private_subnets {
            slot(subnet.availability_zone, &subnet.id)?;
        }

        Ok(())
    }

    /// Builds a fresh scope from this layout.
    pub fn to_scope(&self) -> Result<ProvisioningScope> {
        let mut scope = ProvisioningScope::new(&self.name);
        if let Some(description) = &self.description {
            scope = scope.with_description(description);
        }
        self.apply(&mut scope)?;
        Ok(scope)
    }

    /// Registers every definition of this layout in `scope`.
    pub fn apply(&self, scope: &mut ProvisioningScope) -> Result<()> {
        self.validate()?;

        let network = match &self.network {
            NetworkSpec::VpcId(id) => NetworkDescriptor::imported(id),
            NetworkSpec::LogicalId(id) => NetworkDescriptor::from_logical_id(id),
            NetworkSpec::Parameter(id) => NetworkDescriptor::from_parameter(scope, id),
        };

        let gateway_id = self.internet_gateway.as_ref().map(|igw| {
            debug!(gateway = %igw.logical_id, "Attaching internet gateway");
            GatewayAttacher::new(&network).attach(scope, &igw.logical_id)
        });

        if let (Some(public), Some(gateway_id)) = (&self.public_route_table, gateway_id) {
            let configurator = RouteTableConfigurator::public(
                &network,
                &public.route_table_id,
                &public.route_id,
                gateway_id,
            );
            let mut subnets = public.subnets.iter();
            if let Some(first) = subnets.next() {
                configurator.configure(scope, &first.descriptor()?);
            }
            for subnet in subnets {
                configurator.associate(scope, &subnet.descriptor()?);
            }
        }

        for subnet in &self.private_subnets {
            RouteTableConfigurator::private(
                &network,
                &subnet.route_table_id,
                &subnet.route_id,
                subnet.route_target(),
            )
            .configure(scope, &subnet.descriptor()?);
        }

        info!(
            layout = %self.name,
            resources = scope.resources().len(),
            "Applied layout"
        );
        Ok(())
    }
}
