//! Command-line interface definition.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use wpt::domain::tenant::ResolutionPolicy;

#[derive(Debug, Parser)]
#[command(name = "wpt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect tenant scopes, brands and navigation for Waypoint paths")]
pub struct Cli {
    /// Configuration file (same format as the server's)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log resolution decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a pathname to its tenant scope and brand
    Resolve {
        path: String,
        /// Rewrite a link target within the resolved scope (repeatable)
        #[arg(short, long = "link", value_name = "TARGET")]
        links: Vec<String>,
        /// Override the configured resolution policy
        #[arg(long, value_enum)]
        policy: Option<Policy>,
    },
    /// Render the navigation bar for a pathname
    Nav {
        path: String,
        /// Render as a signed-in visitor
        #[arg(long)]
        signed_in: bool,
        /// Query string of the current page
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Show the login and cookie pages a pathname links to
    Login { path: String },
    /// List configured tenant routes
    Tenants,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Policy {
    Strict,
    TwoLetter,
}

impl From<Policy> for ResolutionPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Strict => Self::Strict,
            Policy::TwoLetter => Self::TwoLetter,
        }
    }
}
