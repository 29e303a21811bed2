//! Synth command
//!
//! Synthesizes a layout and writes the CloudFormation template to stdout or a file.

use super::{CommandContext, Runnable};
use crate::cli::FormatArg;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use vpc_forge::template::TemplateFormat;

/// Arguments for the synth command
#[derive(Parser, Debug, Clone)]
pub struct SynthArgs {
    /// Path to the layout file
    pub layout: Option<PathBuf>,

    /// Write the template to this file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Template format
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<FormatArg>,
}

impl SynthArgs {
    /// Execute the synth command
    pub fn execute(&self, ctx: &mut CommandContext) -> Result<i32> {
        let path = ctx.layout_path(self.layout.as_ref())?;
        let template = ctx.synthesize(&path)?;

        for diagnostic in template.diagnostics() {
            ctx.output.diagnostic(diagnostic);
        }

        let format = self
            .format
            .map_or(ctx.config.defaults.format, TemplateFormat::from);
        let rendered = template.render(format)?;

        match &self.output {
            Some(output) => {
                std::fs::write(output, &rendered)
                    .with_context(|| format!("Failed to write template: {}", output.display()))?;
                ctx.output.success(&format!(
                    "Wrote {} resource(s) to {}",
                    template.resources().len(),
                    output.display()
                ));
            }
            None => println!("{}", rendered.trim_end()),
        }

        Ok(0)
    }
}

impl Runnable for SynthArgs {
    fn run(&self, ctx: &mut CommandContext) -> Result<i32> {
        self.execute(ctx)
    }
}
