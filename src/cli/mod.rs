//! CLI module for vpc-forge
//!
//! This module provides the command-line interface for vpc-forge,
//! including argument parsing, configuration loading, and subcommand handling.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use vpc_forge::template::TemplateFormat;

/// vpc-forge - Declarative AWS VPC routing
///
/// Synthesizes internet gateways, route tables and subnet associations
/// into CloudFormation templates.
#[derive(Parser, Debug, Clone)]
#[command(name = "vpc-forge")]
#[command(author = "vpc-forge Contributors")]
#[command(version)]
#[command(about = "Declarative AWS VPC routing synthesized into CloudFormation", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true, env = "VPC_FORGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Fail when synthesis produces warnings
    #[arg(long, global = true)]
    pub strict: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Template format for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

impl From<FormatArg> for TemplateFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => TemplateFormat::Json,
            FormatArg::Yaml => TemplateFormat::Yaml,
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Synthesize a layout into a CloudFormation template
    Synth(commands::synth::SynthArgs),

    /// Check that a layout synthesizes cleanly
    Validate(commands::validate::ValidateArgs),

    /// List the resources a layout defines
    List(commands::list::ListArgs),

    /// Write a sample layout file
    Init(commands::init::InitArgs),
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Get the effective verbosity level (0-3)
    pub fn verbosity(&self) -> u8 {
        self.verbose.min(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synth_parsing() {
        let cli = Cli::try_parse_from([
            "vpc-forge", "synth", "layout.yml", "--format", "yaml", "-o", "out.yml",
        ])
        .unwrap();
        match cli.command {
            Commands::Synth(args) => {
                assert_eq!(args.layout, Some(PathBuf::from("layout.yml")));
                assert_eq!(args.format, Some(FormatArg::Yaml));
                assert_eq!(args.output, Some(PathBuf::from("out.yml")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["vpc-forge", "validate", "layout.yml", "-vv", "--strict"])
            .unwrap();
        assert_eq!(cli.verbosity(), 2);
        assert!(cli.strict);
    }

    #[test]
    fn test_verbosity_is_capped() {
        let cli = Cli::try_parse_from(["vpc-forge", "-vvvvv", "list", "layout.yml"]).unwrap();
        assert_eq!(cli.verbosity(), 3);
    }

    #[test]
    fn test_format_conversion() {
        assert_eq!(TemplateFormat::from(FormatArg::Json), TemplateFormat::Json);
        assert_eq!(TemplateFormat::from(FormatArg::Yaml), TemplateFormat::Yaml);
    }
}
