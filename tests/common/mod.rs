//! Shared test utilities and fixtures for the vpc-forge test suite.
//!
//! Include this module in your integration tests:
//!
//! ```rust,ignore
//! mod common;
//! use common::*;
//! ```

#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;
use vpc_forge::prelude::*;

// ============================================================================
// Descriptors
// ============================================================================

pub fn imported_vpc() -> NetworkDescriptor {
    NetworkDescriptor::imported("vpc-0abc1234")
}

pub fn subnet(id: &str, slot: AvailabilityZoneSlot) -> SubnetDescriptor {
    SubnetDescriptor::new(id, slot)
}

pub fn nat(id: &str) -> NatGatewayDescriptor {
    NatGatewayDescriptor::new(id)
}

/// Resource logical ids in registration order.
pub fn logical_ids(scope: &ProvisioningScope) -> Vec<String> {
    scope
        .resources()
        .iter()
        .map(|r| r.logical_id().to_string())
        .collect()
}

/// Resource kinds and properties in registration order, without logical ids.
pub fn shape(scope: &ProvisioningScope) -> Vec<(ResourceKind, Vec<String>)> {
    scope
        .resources()
        .iter()
        .map(|r| (r.kind(), r.properties().keys().cloned().collect()))
        .collect()
}

// ============================================================================
// Layout fixtures
// ============================================================================

pub const TWO_AZ_LAYOUT: &str = r#"
name: network
description: Two availability zones
network:
  vpc_id: vpc-0abc1234
internet_gateway:
  logical_id: InternetGateway
public_route_table:
  route_table_id: PublicRouteTable
  route_id: PublicRoute
  subnets:
    - id: subnet-pub1
      availability_zone: 1
    - id: subnet-pub2
      availability_zone: 2
private_subnets:
  - id: subnet-priv1
    availability_zone: 1
    route_table_id: PrivateRouteTable1
    route_id: PrivateRoute1
    egress:
      nat_gateway: nat-0abc
  - id: subnet-priv2
    availability_zone: 2
    route_table_id: PrivateRouteTable2
    route_id: PrivateRoute2
    egress:
      nat_gateway: nat-0def
"#;

pub const NO_EGRESS_LAYOUT: &str = r#"
name: isolated
network:
  vpc_id: vpc-0abc1234
private_subnets:
  - id: subnet-priv1
    availability_zone: 1
    route_table_id: IsolatedRouteTable
    route_id: IsolatedRoute
    egress: no_egress
"#;

/// Two private subnets in the same slot collide on the association id.
pub const COLLIDING_LAYOUT: &str = r#"
name: colliding
network:
  vpc_id: vpc-0abc1234
private_subnets:
  - id: subnet-a
    availability_zone: 1
    route_table_id: RouteTableA
    route_id: RouteA
    egress:
      nat_gateway: nat-0abc
  - id: subnet-b
    availability_zone: 1
    route_table_id: RouteTableB
    route_id: RouteB
    egress:
      nat_gateway: nat-0abc
"#;

/// Writes `content` to a temporary file with the given extension.
pub fn layout_file(content: &str, extension: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{}", extension))
        .tempfile()
        .unwrap();
    write!(file, "{}", content).unwrap();
    file
}
