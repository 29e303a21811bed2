//! AWS networking components.
//!
//! ## Available Components
//!
//! - [`GatewayAttacher`](igw::GatewayAttacher): Internet Gateway plus its VPC attachment
//! - [`RouteTableConfigurator`](route_table::RouteTableConfigurator): route table,
//!   subnet association and default route
//!
//! Components never talk to AWS. They register definitions in a
//! [`ProvisioningScope`](crate::scope::ProvisioningScope), which is synthesized
//! into a CloudFormation template and deployed by the provisioning engine.

pub mod igw;
pub mod network;
pub mod route_table;

pub use igw::GatewayAttacher;
pub use network::{AvailabilityZoneSlot, NatGatewayDescriptor, NetworkDescriptor, SubnetDescriptor};
pub use route_table::{RouteTableConfigurator, RouteTarget, SubnetTier};
