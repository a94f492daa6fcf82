use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "steward")]
#[command(author = "Alberto Cavalcante")]
#[command(version)]
#[command(about = "Apply desired host state - jobs, packages, log rotation", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Apply a desired-state spec to this host
    Apply(ApplyArgs),

    /// Show what a desired-state spec would apply
    Inspect(InspectArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser)]
pub struct ApplyArgs {
    /// Path to the desired-state spec (.json or .toml)
    #[arg(short, long)]
    pub spec: PathBuf,

    /// Path to the settings file (defaults to ~/.config/steward/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the desired-state spec (.json or .toml)
    #[arg(short, long)]
    pub spec: PathBuf,
}
