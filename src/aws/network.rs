//! Descriptors for networks, subnets and NAT gateways supplied by the caller.
//!
//! None of these register anything on their own (except
//! [`NetworkDescriptor::from_parameter`]); they only carry the identifier
//! tokens the gateway and route table components wire together.

use crate::scope::ProvisioningScope;
use crate::template::{Parameter, Value};
use std::fmt;
use std::num::NonZeroU8;

/// CloudFormation parameter type for a VPC id.
pub const VPC_ID_PARAMETER_TYPE: &str = "AWS::EC2::VPC::Id";

/// Opaque handle to a virtual network (VPC).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkDescriptor {
    id: Value,
}

impl NetworkDescriptor {
    /// A VPC that already exists, addressed by its physical id.
    pub fn imported(vpc_id: impl Into<String>) -> Self {
        Self {
            id: Value::literal(vpc_id),
        }
    }

    /// A VPC defined elsewhere in the same template.
    pub fn from_logical_id(logical_id: impl Into<String>) -> Self {
        Self {
            id: Value::reference(logical_id),
        }
    }

    /// A VPC chosen at deploy time through a template parameter.
    ///
    /// Registers the parameter in `scope`.
    pub fn from_parameter(scope: &mut ProvisioningScope, parameter_id: impl Into<String>) -> Self {
        let parameter_id = parameter_id.into();
        scope.add_parameter(
            parameter_id.clone(),
            Parameter::new(VPC_ID_PARAMETER_TYPE).with_description("VPC the routing is attached to"),
        );
        Self {
            id: Value::reference(parameter_id),
        }
    }

    /// The network identifier token.
    pub fn id(&self) -> &Value {
        &self.id
    }
}

/// Position of a subnet's availability zone, counted from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AvailabilityZoneSlot(NonZeroU8);

impl AvailabilityZoneSlot {
    pub const FIRST: Self = Self(NonZeroU8::MIN);
    pub const SECOND: Self = Self(NonZeroU8::MIN.saturating_add(1));

    /// Creates a slot from a 1-based index; `0` is rejected.
    pub fn new(index: u8) -> Option<Self> {
        NonZeroU8::new(index).map(Self)
    }

    /// The 1-based index.
    pub fn index(&self) -> u8 {
        self.0.get()
    }
}

impl fmt::Display for AvailabilityZoneSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A subnet and the availability-zone slot it lives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetDescriptor {
    id: Value,
    availability_zone_slot: AvailabilityZoneSlot,
}

impl SubnetDescriptor {
    pub fn new(id: impl Into<Value>, availability_zone_slot: AvailabilityZoneSlot) -> Self {
        Self {
            id: id.into(),
            availability_zone_slot,
        }
    }

    pub fn id(&self) -> &Value {
        &self.id
    }

    pub fn availability_zone_slot(&self) -> AvailabilityZoneSlot {
        self.availability_zone_slot
    }
}

/// A NAT gateway providing outbound-only egress for private subnets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NatGatewayDescriptor {
    id: Value,
}

impl NatGatewayDescriptor {
    pub fn new(id: impl Into<Value>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &Value {
        &self.id
    }
}
