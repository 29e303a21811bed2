//! Init command
//!
//! Writes a sample layout to get started with.

use super::{CommandContext, Runnable};
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Sample layout: two availability zones, one NAT gateway.
pub const SAMPLE_LAYOUT: &str = r#"# vpc-forge layout
name: network
description: Routing for a two-AZ VPC

network:
  vpc_id: vpc-0123456789abcdef0

internet_gateway:
  logical_id: InternetGateway

public_route_table:
  route_table_id: PublicRouteTable
  route_id: PublicRoute
  subnets:
    - id: subnet-0aaaaaaaaaaaaaaa1
      availability_zone: 1
    - id: subnet-0aaaaaaaaaaaaaaa2
      availability_zone: 2

private_subnets:
  - id: subnet-0bbbbbbbbbbbbbbb1
    availability_zone: 1
    route_table_id: PrivateRouteTable1
    route_id: PrivateRoute1
    egress:
      nat_gateway: nat-0cccccccccccccccc
  - id: subnet-0bbbbbbbbbbbbbbb2
    availability_zone: 2
    route_table_id: PrivateRouteTable2
    route_id: PrivateRoute2
    egress:
      nat_gateway: nat-0cccccccccccccccc
"#;

/// Arguments for the init command
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// File to create
    #[arg(default_value = "vpc-forge.yml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self, ctx: &mut CommandContext) -> Result<i32> {
        if self.path.exists() && !self.force {
            bail!(
                "{} already exists; use --force to overwrite",
                self.path.display()
            );
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(&self.path, SAMPLE_LAYOUT)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        ctx.output
            .success(&format!("Created: {}", self.path.display()));

        Ok(0)
    }
}

impl Runnable for InitArgs {
    fn run(&self, ctx: &mut CommandContext) -> Result<i32> {
        self.execute(ctx)
    }
}
