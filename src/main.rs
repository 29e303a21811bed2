//! vpc-forge - Declarative AWS VPC routing
//!
//! Synthesizes internet gateways, route tables and subnet associations into
//! CloudFormation templates.
//!
//! This is the main entry point for the vpc-forge CLI.

mod cli;

use anyhow::Result;
use cli::commands::{CommandContext, Runnable};
use cli::{Cli, Commands};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vpc_forge::config::Config;

/// Application version information
const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

fn main() {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {}", e);
        Config::default()
    });

    // Initialize logging based on verbosity
    init_logging(cli.verbosity(), &config);

    // Display version if verbose
    if cli.verbosity() >= 2 {
        eprintln!("vpc-forge v{} by {}", VERSION, AUTHORS);
    }

    let mut ctx = CommandContext::new(&cli, config);

    let exit_code = match run(&cli, &mut ctx) {
        Ok(code) => code,
        Err(e) => {
            ctx.output.error(&format!("{:#}", e));
            e.downcast_ref::<vpc_forge::error::Error>()
                .map_or(1, vpc_forge::error::Error::exit_code)
        }
    };

    std::process::exit(exit_code);
}

/// Dispatch to the selected subcommand
fn run(cli: &Cli, ctx: &mut CommandContext) -> Result<i32> {
    match &cli.command {
        Commands::Synth(args) => args.run(ctx),
        Commands::Validate(args) => args.run(ctx),
        Commands::List(args) => args.run(ctx),
        Commands::Init(args) => args.run(ctx),
    }
}

/// Initialize logging based on verbosity level
///
/// Logs go to stderr; stdout is reserved for templates.
fn init_logging(verbosity: u8, config: &Config) {
    let filter = match verbosity {
        0 => config.logging.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if config.json_logs() {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(verbosity >= 3)
                    .with_writer(std::io::stderr),
            )
            .with(env_filter)
            .init();
    }
}
