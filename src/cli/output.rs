//! Output formatting module for vpc-forge
//!
//! Human-facing messages go to stderr so that a template written to stdout can
//! be piped straight into other tools.

use colored::Colorize;
use vpc_forge::scope::{Diagnostic, Severity};
use vpc_forge::template::ResourceDefinition;

/// Output formatter for different output modes
pub struct OutputFormatter {
    /// Use colored output
    use_color: bool,
    /// Verbosity level
    verbosity: u8,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(use_color: bool, verbosity: u8) -> Self {
        // Respect NO_COLOR environment variable
        let use_color = use_color && std::env::var("NO_COLOR").is_err();

        Self {
            use_color,
            verbosity,
        }
    }

    /// Print a banner/header
    pub fn banner(&self, title: &str) {
        let line = "=".repeat(title.len() + 4);
        if self.use_color {
            eprintln!("\n{}", line.bright_blue());
            eprintln!("{}", format!("  {}  ", title).bright_blue().bold());
            eprintln!("{}\n", line.bright_blue());
        } else {
            eprintln!("\n{}", line);
            eprintln!("  {}  ", title);
            eprintln!("{}\n", line);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "INFO".blue().bold(), message);
        } else {
            eprintln!("INFO {}", message);
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "OK".green().bold(), message);
        } else {
            eprintln!("OK {}", message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "WARNING".yellow().bold(), message);
        } else {
            eprintln!("WARNING {}", message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "ERROR".red().bold(), message);
        } else {
            eprintln!("ERROR {}", message);
        }
    }

    /// Print a debug message (only shown with -vv)
    pub fn debug(&self, message: &str) {
        if self.verbosity < 2 {
            return;
        }
        if self.use_color {
            eprintln!("{} {}", "DEBUG".bright_black(), message.bright_black());
        } else {
            eprintln!("DEBUG {}", message);
        }
    }

    /// Print a diagnostic collected during synthesis
    pub fn diagnostic(&self, diagnostic: &Diagnostic) {
        let message = format!("[{}] {}", diagnostic.logical_id, diagnostic.message);
        match diagnostic.severity {
            Severity::Warning => self.warning(&message),
            Severity::Info => self.info(&message),
        }
    }

    /// Print one resource line, with its properties when verbose
    pub fn resource(&self, resource: &ResourceDefinition) {
        if self.use_color {
            println!(
                "{:<45} {}",
                resource.logical_id().bright_white().bold(),
                resource.kind().to_string().cyan()
            );
        } else {
            println!("{:<45} {}", resource.logical_id(), resource.kind());
        }

        if self.verbosity < 1 {
            return;
        }

        for (name, value) in resource.properties() {
            if self.use_color {
                println!("    {}: {}", name.bright_black(), value);
            } else {
                println!("    {}: {}", name, value);
            }
        }
    }
}
