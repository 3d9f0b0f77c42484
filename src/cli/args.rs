//! Command line argument parsing for the ticket-triage CLI using clap.

use std::path::PathBuf;

use clap::Parser;

/// Default location of the ticket dataset.
pub const DEFAULT_DATA_FILE: &str = "IT Support Ticket Data.csv";

/// ticket-triage - routes IT support tickets to the responsible department
#[derive(Parser, Debug, Clone)]
#[command(name = "ticket-triage")]
#[command(about = "Routes free-text IT support tickets to a responsible department")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TriageArgs {
    /// Path to the ticket dataset (CSV with Body and Department columns)
    #[arg(short, long, value_name = "DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl TriageArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}
