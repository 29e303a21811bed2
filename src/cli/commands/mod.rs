//! Subcommands module for vpc-forge CLI
//!
//! This module contains all the subcommand implementations.

pub mod init;
pub mod list;
pub mod synth;
pub mod validate;

use crate::cli::output::OutputFormatter;
use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use vpc_forge::config::Config;
use vpc_forge::layout::Layout;
use vpc_forge::scope::{ProvisioningScope, SynthesisOptions};
use vpc_forge::template::Template;

/// Common context shared between commands
pub struct CommandContext {
    /// Configuration
    pub config: Config,
    /// Output formatter
    pub output: OutputFormatter,
    /// Verbosity level
    pub verbosity: u8,
    /// Fail synthesis on warnings
    pub strict: bool,
}

impl CommandContext {
    /// Create a new command context from CLI arguments
    pub fn new(cli: &crate::cli::Cli, config: Config) -> Self {
        let use_color = !cli.no_color && config.colors.enabled;
        let output = OutputFormatter::new(use_color, cli.verbosity());

        Self {
            strict: cli.strict || config.synthesis.strict,
            config,
            output,
            verbosity: cli.verbosity(),
        }
    }

    /// Get the effective layout path
    pub fn layout_path(&self, explicit: Option<&PathBuf>) -> Result<PathBuf> {
        explicit
            .or(self.config.defaults.layout.as_ref())
            .cloned()
            .ok_or_else(|| anyhow!("No layout given and no default layout configured"))
    }

    /// Synthesis options from configuration and CLI flags
    pub fn synthesis_options(&self) -> SynthesisOptions {
        SynthesisOptions {
            strict: self.strict,
            ..self.config.synthesis_options()
        }
    }

    /// Load a layout and build its scope
    pub fn load_scope(&self, path: &Path) -> vpc_forge::error::Result<ProvisioningScope> {
        self.output
            .debug(&format!("Loading layout from {}", path.display()));

        let mut scope = Layout::from_file(path)?.to_scope()?;
        if scope.description().is_none() {
            if let Some(description) = &self.config.defaults.description {
                scope = scope.with_description(description);
            }
        }
        Ok(scope)
    }

    /// Load a layout and synthesize it
    pub fn synthesize(&self, path: &Path) -> vpc_forge::error::Result<Template> {
        self.load_scope(path)?
            .synthesize(&self.synthesis_options())
    }
}

/// Trait for runnable commands
pub trait Runnable {
    /// Execute the command
    fn run(&self, ctx: &mut CommandContext) -> Result<i32>;
}
