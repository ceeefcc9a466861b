//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Naming-standard validator and bulk identifier renamer for job scheduling definitions
#[derive(Parser, Debug)]
#[command(name = "jobnorm")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate naming standards in a definition document
    Check {
        /// Definition document (XML)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Rewrite environment and center codes across a definition document
    Rename {
        /// Definition document (XML)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// New environment code (single letter)
        #[arg(short, long)]
        environment: String,

        /// New center code (one or two digits)
        #[arg(short, long)]
        center: String,

        /// New datacenter name (default from config)
        #[arg(long)]
        datacenter: Option<String>,

        /// Output file (default: input stem + configured suffix)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Show version and build information
    Info,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init,

    /// Show config path
    Path,
}
