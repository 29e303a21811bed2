//! Integration tests for route table configuration
//!
//! These tests cover:
//! - Association naming by availability-zone slot
//! - Default route targets (NAT gateway, internet gateway, no egress)
//! - Independence of configurator instances

mod common;

use common::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use vpc_forge::aws::route_table::{association_logical_id, DEFAULT_ROUTE_CIDR};
use vpc_forge::prelude::*;

// ============================================================================
// Association naming
// ============================================================================

#[test]
fn test_first_slot_association_name() {
    let mut scope = ProvisioningScope::new("net");
    RouteTableConfigurator::private(&imported_vpc(), "Table", "Route", nat("nat-1"))
        .configure(&mut scope, &subnet("subnet-1", AvailabilityZoneSlot::FIRST));

    assert!(scope
        .resource("PrivateSubnet1RouteTableAssociation")
        .is_some());
}

#[test]
fn test_second_slot_association_name() {
    let mut scope = ProvisioningScope::new("net");
    RouteTableConfigurator::private(&imported_vpc(), "Table", "Route", nat("nat-1"))
        .configure(&mut scope, &subnet("subnet-2", AvailabilityZoneSlot::SECOND));

    let association = scope
        .resource("PrivateSubnet2RouteTableAssociation")
        .unwrap();
    assert_eq!(association.kind(), ResourceKind::SubnetRouteTableAssociation);
    assert_eq!(association.get("SubnetId"), Some(&Value::literal("subnet-2")));
    assert_eq!(association.get("RouteTableId"), Some(&Value::reference("Table")));
}

proptest! {
    /// Every slot maps to an interpolated, CloudFormation-valid logical id.
    #[test]
    fn association_name_follows_slot(index in 1u8..=u8::MAX) {
        let slot = AvailabilityZoneSlot::new(index).unwrap();
        let id = association_logical_id(SubnetTier::Private, &subnet("subnet-x", slot));

        prop_assert_eq!(&id, &format!("PrivateSubnet{}RouteTableAssociation", index));
        prop_assert!(vpc_forge::scope::is_valid_logical_id(&id));
    }

    /// The association is chosen only by the slot, not by the subnet id.
    #[test]
    fn association_name_ignores_subnet_id(id in "subnet-[0-9a-f]{8,17}") {
        let name = association_logical_id(
            SubnetTier::Private,
            &subnet(&id, AvailabilityZoneSlot::FIRST),
        );
        prop_assert_eq!(name, "PrivateSubnet1RouteTableAssociation");
    }
}

// ============================================================================
// Default route targets
// ============================================================================

#[test]
fn test_nat_gateway_becomes_next_hop() {
    let mut scope = ProvisioningScope::new("net");
    RouteTableConfigurator::private(&imported_vpc(), "Table", "Route", Some(nat("nat-0abc")))
        .configure(&mut scope, &subnet("subnet-1", AvailabilityZoneSlot::FIRST));

    let route = scope.resource("Route").unwrap();
    assert_eq!(route.kind(), ResourceKind::Route);
    assert_eq!(route.get("NatGatewayId"), Some(&Value::literal("nat-0abc")));
    assert_eq!(
        route.get("DestinationCidrBlock"),
        Some(&Value::literal(DEFAULT_ROUTE_CIDR))
    );
    assert_eq!(scope.warnings().count(), 0);
}

#[test]
fn test_absent_nat_gateway_installs_route_without_next_hop() {
    let mut scope = ProvisioningScope::new("net");
    RouteTableConfigurator::private(&imported_vpc(), "Table", "Route", None::<NatGatewayDescriptor>)
        .configure(&mut scope, &subnet("subnet-1", AvailabilityZoneSlot::FIRST));

    // Exactly one default route, and it leads nowhere
    let routes: Vec<_> = scope
        .resources()
        .iter()
        .filter(|r| r.kind() == ResourceKind::Route)
        .collect();
    assert_eq!(routes.len(), 1);

    let route = routes[0];
    assert_eq!(
        route.get("DestinationCidrBlock"),
        Some(&Value::literal("0.0.0.0/0"))
    );
    for next_hop in ["NatGatewayId", "GatewayId"] {
        assert_eq!(route.get(next_hop), None, "{next_hop} must be unset");
    }

    let warning = scope.warnings().next().unwrap();
    assert_eq!(warning.logical_id, "Route");
    assert!(warning.message.contains("no next hop"));
}

#[test]
fn test_no_egress_fails_strict_synthesis() {
    let mut scope = ProvisioningScope::new("net");
    RouteTableConfigurator::private(&imported_vpc(), "Table", "Route", RouteTarget::NoEgress)
        .configure(&mut scope, &subnet("subnet-1", AvailabilityZoneSlot::FIRST));

    assert!(scope.synthesize(&SynthesisOptions::default()).is_ok());
    assert!(matches!(
        scope.synthesize(&SynthesisOptions::strict()),
        Err(Error::StrictDiagnostics { count: 1, .. })
    ));
}

#[test]
fn test_public_table_shares_one_route_across_subnets() {
    let mut scope = ProvisioningScope::new("net");
    let vpc = imported_vpc();
    let igw = GatewayAttacher::new(&vpc).attach(&mut scope, "Igw");

    let public = RouteTableConfigurator::public(&vpc, "PublicTable", "PublicRoute", igw.clone());
    public.configure(&mut scope, &subnet("subnet-a", AvailabilityZoneSlot::FIRST));
    public.associate(&mut scope, &subnet("subnet-b", AvailabilityZoneSlot::SECOND));

    assert_eq!(
        logical_ids(&scope),
        vec![
            "Igw",
            "Igwattachment",
            "PublicTable",
            "PublicSubnet1RouteTableAssociation",
            "PublicRoute",
            "PublicSubnet2RouteTableAssociation",
        ]
    );
    assert_eq!(scope.resource("PublicRoute").unwrap().get("GatewayId"), Some(&igw));
    assert!(scope.synthesize(&SynthesisOptions::strict()).is_ok());
}

#[test]
fn test_configurator_exposes_its_identifiers() {
    let private =
        RouteTableConfigurator::private(&imported_vpc(), "Table", "Route", nat("nat-0abc"));
    assert_eq!(private.route_table_id(), "Table");
    assert_eq!(private.route_id(), "Route");
    assert_eq!(private.tier(), SubnetTier::Private);
    assert_eq!(private.target(), &RouteTarget::NatGateway(nat("nat-0abc")));

    let gateway = Value::get_att("Igw", "InternetGatewayId");
    let public =
        RouteTableConfigurator::public(&imported_vpc(), "PublicTable", "PublicRoute", gateway.clone());
    assert_eq!(public.tier(), SubnetTier::Public);
    assert_eq!(public.target(), &RouteTarget::InternetGateway(gateway));
    assert!(!public.target().is_no_egress());
}

// ============================================================================
// Instance independence
// ============================================================================

#[test]
fn test_independent_configurators_produce_identical_shapes() {
    let subnet = subnet("subnet-1", AvailabilityZoneSlot::FIRST);

    let mut first = ProvisioningScope::new("first");
    RouteTableConfigurator::private(&imported_vpc(), "TableA", "RouteA", nat("nat-1"))
        .configure(&mut first, &subnet);

    let mut second = ProvisioningScope::new("second");
    RouteTableConfigurator::private(&imported_vpc(), "TableB", "RouteB", nat("nat-1"))
        .configure(&mut second, &subnet);

    assert_eq!(shape(&first), shape(&second));
    assert_ne!(logical_ids(&first), logical_ids(&second));
    assert_eq!(first.resources().len(), 3);
    assert_eq!(second.resources().len(), 3);
}

#[test]
fn test_configuring_one_scope_leaves_another_untouched() {
    let configurator =
        RouteTableConfigurator::private(&imported_vpc(), "Table", "Route", nat("nat-1"));
    let subnet = subnet("subnet-1", AvailabilityZoneSlot::FIRST);

    let mut first = ProvisioningScope::new("first");
    let second = ProvisioningScope::new("second");
    configurator.configure(&mut first, &subnet);

    assert_eq!(first.resources().len(), 3);
    assert!(second.resources().is_empty());
}
