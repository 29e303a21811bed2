//! Route tables, subnet associations and default routes.
//!
//! A configurator defines one route table, associates it with a subnet and
//! installs the table's single default route (`0.0.0.0/0`). Where that route
//! leads is an explicit [`RouteTarget`]:
//!
//! | Target | Next-hop property |
//! |--------|-------------------|
//! | `NatGateway` | `NatGatewayId` |
//! | `InternetGateway` | `GatewayId` |
//! | `NoEgress` | none; the route is unreachable and a warning is recorded |
//!
//! Association logical ids are derived from the subnet's tier and its
//! availability-zone slot: `PrivateSubnet1RouteTableAssociation`,
//! `PublicSubnet2RouteTableAssociation`, and so on for any slot.

use super::network::{NatGatewayDescriptor, NetworkDescriptor, SubnetDescriptor};
use crate::scope::ProvisioningScope;
use crate::template::{ResourceDefinition, ResourceKind, Value};
use std::fmt;
use tracing::{debug, warn};

/// Destination of the default route.
pub const DEFAULT_ROUTE_CIDR: &str = "0.0.0.0/0";

/// Whether a subnet is reachable from the internet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubnetTier {
    Private,
    Public,
}

impl SubnetTier {
    fn prefix(&self) -> &'static str {
        match self {
            SubnetTier::Private => "PrivateSubnet",
            SubnetTier::Public => "PublicSubnet",
        }
    }
}

impl fmt::Display for SubnetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubnetTier::Private => write!(f, "private"),
            SubnetTier::Public => write!(f, "public"),
        }
    }
}

/// Next hop of a route table's default route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// Outbound-only egress through a NAT gateway
    NatGateway(NatGatewayDescriptor),
    /// Bidirectional access through an attached Internet Gateway
    InternetGateway(Value),
    /// Deliberately no egress: the default route has no target
    NoEgress,
}

impl RouteTarget {
    /// Property name and value carrying the next hop, if there is one.
    pub fn next_hop(&self) -> Option<(&'static str, &Value)> {
        match self {
            RouteTarget::NatGateway(nat) => Some(("NatGatewayId", nat.id())),
            RouteTarget::InternetGateway(gateway_id) => Some(("GatewayId", gateway_id)),
            RouteTarget::NoEgress => None,
        }
    }

    pub fn is_no_egress(&self) -> bool {
        matches!(self, RouteTarget::NoEgress)
    }
}

impl From<NatGatewayDescriptor> for RouteTarget {
    fn from(nat: NatGatewayDescriptor) -> Self {
        RouteTarget::NatGateway(nat)
    }
}

impl From<Option<NatGatewayDescriptor>> for RouteTarget {
    fn from(nat: Option<NatGatewayDescriptor>) -> Self {
        nat.map_or(RouteTarget::NoEgress, RouteTarget::NatGateway)
    }
}

/// Logical id of the association between a route table and a subnet.
pub fn association_logical_id(tier: SubnetTier, subnet: &SubnetDescriptor) -> String {
    format!(
        "{}{}RouteTableAssociation",
        tier.prefix(),
        subnet.availability_zone_slot().index()
    )
}

/// Defines a route table, its subnet association and its default route.
#[derive(Debug, Clone)]
pub struct RouteTableConfigurator {
    network: NetworkDescriptor,
    tier: SubnetTier,
    route_table_id: String,
    route_id: String,
    target: RouteTarget,
}

impl RouteTableConfigurator {
    /// Route table for a private subnet.
    ///
    /// Passing `Option<NatGatewayDescriptor>` maps `None` to
    /// [`RouteTarget::NoEgress`].
    pub fn private(
        network: &NetworkDescriptor,
        route_table_id: impl Into<String>,
        route_id: impl Into<String>,
        target: impl Into<RouteTarget>,
    ) -> Self {
        Self {
            network: network.clone(),
            tier: SubnetTier::Private,
            route_table_id: route_table_id.into(),
            route_id: route_id.into(),
            target: target.into(),
        }
    }

    /// Route table for public subnets, routed through `gateway_id`.
    pub fn public(
        network: &NetworkDescriptor,
        route_table_id: impl Into<String>,
        route_id: impl Into<String>,
        gateway_id: Value,
    ) -> Self {
        Self {
            network: network.clone(),
            tier: SubnetTier::Public,
            route_table_id: route_table_id.into(),
            route_id: route_id.into(),
            target: RouteTarget::InternetGateway(gateway_id),
        }
    }

    pub fn route_table_id(&self) -> &str {
        &self.route_table_id
    }

    pub fn route_id(&self) -> &str {
        &self.route_id
    }

    pub fn tier(&self) -> SubnetTier {
        self.tier
    }

    pub fn target(&self) -> &RouteTarget {
        &self.target
    }

    /// Defines the route table, associates it with `subnet` and installs the
    /// default route, in that order.
    pub fn configure(&self, scope: &mut ProvisioningScope, subnet: &SubnetDescriptor) {
        self.create_route_table(scope);
        self.associate(scope, subnet);
        self.install_default_route(scope);
    }

    /// Associates the route table with another subnet.
    pub fn associate(&self, scope: &mut ProvisioningScope, subnet: &SubnetDescriptor) {
        let association_id = association_logical_id(self.tier, subnet);
        debug!(
            route_table = %self.route_table_id,
            association = %association_id,
            slot = %subnet.availability_zone_slot(),
            "Associating route table with subnet"
        );
        scope.add_resource(
            ResourceDefinition::new(association_id, ResourceKind::SubnetRouteTableAssociation)
                .property("SubnetId", subnet.id().clone())
                .property("RouteTableId", self.route_table_ref()),
        );
    }

    fn create_route_table(&self, scope: &mut ProvisioningScope) {
        scope.add_resource(
            ResourceDefinition::new(&self.route_table_id, ResourceKind::RouteTable)
                .property("VpcId", self.network.id().clone()),
        );
    }

    fn install_default_route(&self, scope: &mut ProvisioningScope) {
        let mut route = ResourceDefinition::new(&self.route_id, ResourceKind::Route)
            .property("RouteTableId", self.route_table_ref())
            .property("DestinationCidrBlock", DEFAULT_ROUTE_CIDR);

        match self.target.next_hop() {
            Some((property, next_hop)) => {
                route = route.property(property, next_hop.clone());
            }
            None => {
                warn!(
                    route = %self.route_id,
                    route_table = %self.route_table_id,
                    "Default route has no next hop"
                );
                scope.warn(
                    &self.route_id,
                    format!(
                        "default route of '{}' has no next hop; traffic to {} is dropped",
                        self.route_table_id, DEFAULT_ROUTE_CIDR
                    ),
                );
            }
        }

        scope.add_resource(route);
    }

    fn route_table_ref(&self) -> Value {
        Value::reference(&self.route_table_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aws::network::AvailabilityZoneSlot;

    fn network() -> NetworkDescriptor {
        NetworkDescriptor::imported("vpc-0abc")
    }

    fn subnet(slot: AvailabilityZoneSlot) -> SubnetDescriptor {
        SubnetDescriptor::new("subnet-0abc", slot)
    }

    #[test]
    fn test_association_ids_for_first_two_slots() {
        assert_eq!(
            association_logical_id(SubnetTier::Private, &subnet(AvailabilityZoneSlot::FIRST)),
            "PrivateSubnet1RouteTableAssociation"
        );
        assert_eq!(
            association_logical_id(SubnetTier::Private, &subnet(AvailabilityZoneSlot::SECOND)),
            "PrivateSubnet2RouteTableAssociation"
        );
    }

    #[test]
    fn test_association_ids_beyond_two_slots() {
        let third = AvailabilityZoneSlot::new(3).unwrap();
        assert_eq!(
            association_logical_id(SubnetTier::Private, &subnet(third)),
            "PrivateSubnet3RouteTableAssociation"
        );
        assert_eq!(
            association_logical_id(SubnetTier::Public, &subnet(third)),
            "PublicSubnet3RouteTableAssociation"
        );
    }

    #[test]
    fn test_configure_order_and_properties() {
        let mut scope = ProvisioningScope::new("net");
        let nat = NatGatewayDescriptor::new("nat-0abc");
        let configurator =
            RouteTableConfigurator::private(&network(), "PrivateRouteTable1", "PrivateRoute1", nat);

        configurator.configure(&mut scope, &subnet(AvailabilityZoneSlot::FIRST));

        let ids: Vec<_> = scope.resources().iter().map(|r| r.logical_id()).collect();
        assert_eq!(
            ids,
            vec![
                "PrivateRouteTable1",
                "PrivateSubnet1RouteTableAssociation",
                "PrivateRoute1"
            ]
        );

        let route = scope.resource("PrivateRoute1").unwrap();
        assert_eq!(
            route.get("RouteTableId"),
            Some(&Value::reference("PrivateRouteTable1"))
        );
        assert_eq!(route.get("DestinationCidrBlock"), Some(&Value::literal("0.0.0.0/0")));
        assert_eq!(route.get("NatGatewayId"), Some(&Value::literal("nat-0abc")));
        assert!(scope.diagnostics().is_empty());
    }

    #[test]
    fn test_missing_nat_gateway_means_no_egress() {
        let target: RouteTarget = None::<NatGatewayDescriptor>.into();
        assert!(target.is_no_egress());
        assert_eq!(target.next_hop(), None);
    }

    #[test]
    fn test_no_egress_route_has_no_target_and_warns() {
        let mut scope = ProvisioningScope::new("net");
        RouteTableConfigurator::private(&network(), "Table", "Route", RouteTarget::NoEgress)
            .configure(&mut scope, &subnet(AvailabilityZoneSlot::SECOND));

        let route = scope.resource("Route").unwrap();
        assert_eq!(route.get("NatGatewayId"), None);
        assert_eq!(route.get("GatewayId"), None);
        assert_eq!(route.properties().len(), 2);

        let warnings: Vec<_> = scope.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].logical_id, "Route");
    }

    #[test]
    fn test_public_table_routes_through_gateway() {
        let mut scope = ProvisioningScope::new("net");
        let gateway_id = Value::get_att("Igw", "InternetGatewayId");
        let configurator =
            RouteTableConfigurator::public(&network(), "PublicRouteTable", "PublicRoute", gateway_id.clone());

        configurator.configure(&mut scope, &subnet(AvailabilityZoneSlot::FIRST));
        configurator.associate(&mut scope, &subnet(AvailabilityZoneSlot::SECOND));

        assert_eq!(scope.resources().len(), 4);
        assert!(scope.resource("PublicSubnet2RouteTableAssociation").is_some());
        assert_eq!(
            scope.resource("PublicRoute").unwrap().get("GatewayId"),
            Some(&gateway_id)
        );
    }
}
