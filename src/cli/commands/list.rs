//! List command
//!
//! Prints the resources a layout registers, in registration order.

use super::{CommandContext, Runnable};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Arguments for the list command
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Path to the layout file
    pub layout: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, ctx: &mut CommandContext) -> Result<i32> {
        let path = ctx.layout_path(self.layout.as_ref())?;
        let scope = ctx.load_scope(&path)?;

        if self.json {
            let resources: Vec<_> = scope
                .resources()
                .iter()
                .map(|resource| {
                    serde_json::json!({
                        "logical_id": resource.logical_id(),
                        "type": resource.kind().type_name(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&resources)?);
            return Ok(0);
        }

        ctx.output.banner(&format!("RESOURCES [{}]", scope.name()));
        for resource in scope.resources() {
            ctx.output.resource(resource);
        }

        Ok(0)
    }
}

impl Runnable for ListArgs {
    fn run(&self, ctx: &mut CommandContext) -> Result<i32> {
        self.execute(ctx)
    }
}
