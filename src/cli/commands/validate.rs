//! Validate command
//!
//! Synthesizes a layout without writing anything and reports the outcome.

use super::{CommandContext, Runnable};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    /// Path to the layout file
    pub layout: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self, ctx: &mut CommandContext) -> Result<i32> {
        let path = ctx.layout_path(self.layout.as_ref())?;

        let template = match ctx.synthesize(&path) {
            Ok(template) => template,
            Err(e) => {
                ctx.output.error(&e.to_string());
                if e.is_synthesis_error() {
                    ctx.output
                        .info("The layout parsed, but its resources do not form a valid template");
                }
                return Ok(e.exit_code());
            }
        };

        for diagnostic in template.diagnostics() {
            ctx.output.diagnostic(diagnostic);
        }

        ctx.output.success(&format!(
            "{} is valid: {} resource(s), {} diagnostic(s)",
            path.display(),
            template.resources().len(),
            template.diagnostics().len()
        ));

        Ok(0)
    }
}

impl Runnable for ValidateArgs {
    fn run(&self, ctx: &mut CommandContext) -> Result<i32> {
        self.execute(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_parsing() {
        let args = ValidateArgs::try_parse_from(["validate", "layout.yml"]).unwrap();
        assert_eq!(args.layout, Some(PathBuf::from("layout.yml")));
    }
}
