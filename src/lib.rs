//! # vpc-forge - Declarative AWS VPC routing
//!
//! vpc-forge wires the routing of an AWS VPC: Internet Gateways and their
//! attachments, route tables, subnet associations and default routes. Nothing
//! here calls AWS. Components register resource definitions in a
//! [`ProvisioningScope`](scope::ProvisioningScope), the scope is synthesized
//! into a CloudFormation template, and the provisioning engine applies it.
//!
//! ## Core Concepts
//!
//! - **Scope**: ordered registry of resource definitions for one template
//! - **Descriptors**: caller-supplied handles to the VPC, subnets and NAT gateways
//! - **Components**: [`GatewayAttacher`](aws::GatewayAttacher) and
//!   [`RouteTableConfigurator`](aws::RouteTableConfigurator)
//! - **Synthesis**: validation of the scope and rendering to JSON or YAML
//! - **Layouts**: declarative documents driving the components from a file
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────┐     ┌────────────────────────────────────────┐
//! │  Layout (YAML,   │────▶│  GatewayAttacher / RouteTableConfigurator│
//! │  JSON, TOML)     │     └────────────────────────────────────────┘
//! └──────────────────┘                        │ add_resource
//!                                             ▼
//!                          ┌────────────────────────────────────────┐
//!                          │           ProvisioningScope             │
//!                          └────────────────────────────────────────┘
//!                                             │ synthesize
//!                                             ▼
//!                          ┌────────────────────────────────────────┐
//!                          │     CloudFormation Template (JSON/YAML) │
//!                          └────────────────────────────────────────┘
//! ```
//!
//! ## Quick Example
//!
//! ```rust
//! use vpc_forge::prelude::*;
//!
//! let mut scope = ProvisioningScope::new("network");
//! let vpc = NetworkDescriptor::imported("vpc-0abc1234");
//!
//! let igw = GatewayAttacher::new(&vpc).attach(&mut scope, "InternetGateway");
//!
//! RouteTableConfigurator::public(&vpc, "PublicRouteTable", "PublicRoute", igw)
//!     .configure(&mut scope, &SubnetDescriptor::new("subnet-0aaa", AvailabilityZoneSlot::FIRST));
//!
//! RouteTableConfigurator::private(
//!     &vpc,
//!     "PrivateRouteTable1",
//!     "PrivateRoute1",
//!     NatGatewayDescriptor::new("nat-0bbb"),
//! )
//! .configure(&mut scope, &SubnetDescriptor::new("subnet-0ccc", AvailabilityZoneSlot::FIRST));
//!
//! let template = scope.synthesize(&SynthesisOptions::default())?;
//! assert_eq!(template.resources().len(), 8);
//! # Ok::<(), vpc_forge::error::Error>(())
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export commonly used items in prelude
pub mod prelude {
    //! Convenient re-exports of commonly used types.

    pub use crate::aws::{
        AvailabilityZoneSlot, GatewayAttacher, NatGatewayDescriptor, NetworkDescriptor,
        RouteTableConfigurator, RouteTarget, SubnetDescriptor, SubnetTier,
    };
    pub use crate::error::{Error, Result};
    pub use crate::layout::Layout;
    pub use crate::scope::{Diagnostic, ProvisioningScope, Severity, SynthesisOptions};
    pub use crate::template::{
        ResourceDefinition, ResourceKind, Template, TemplateFormat, Value,
    };
}

// ============================================================================
// Error Handling
// ============================================================================

/// Error types and result aliases.
pub mod error;

// ============================================================================
// Resource Model
// ============================================================================

/// CloudFormation template model: values, resources, parameters.
pub mod template;

/// Provisioning scope and synthesis.
pub mod scope;

// ============================================================================
// Components
// ============================================================================

/// Internet Gateway and route table components.
pub mod aws;

/// Declarative layouts driving the components.
pub mod layout;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration management for vpc-forge behavior.
///
/// Handles loading and merging configuration from multiple sources:
/// environment variables, config files, and command-line arguments.
pub mod config;

/// Version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
