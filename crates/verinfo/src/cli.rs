use std::path::PathBuf;

use clap::{Parser, Subcommand};
use verinfo_report::BinaryKind;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about = "Report version and build information", long_about = None)]
pub struct Cli {
    /// Settings file to use instead of the one in the config directory
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the build-info document as JSON
    BuildInfo {
        #[arg(long)]
        pretty: bool,
    },
    /// Print "<name> v<version>"
    Version {
        #[arg(long)]
        binary: Option<String>,
    },
    /// Print the start-up banner of a binary (mongo, mongos or mongod)
    Banner {
        #[arg(value_parser = parse_binary_kind)]
        binary: BinaryKind,
    },
    /// Exit 0 when the version is in the same major.minor series, 1 otherwise
    Check {
        #[arg(value_name = "VERSION")]
        peer_version: String,
    },
    /// Log the build info and target OS
    Log,
}

fn parse_binary_kind(name: &str) -> Result<BinaryKind, String> {
    BinaryKind::from_name(name).ok_or_else(|| format!("unknown binary: {name}"))
}
