//! Command-line interface definition.
//!
//! The tool is a single interactive flow; there are no subcommands. All
//! flags are the global ones in [`GlobalArgs`].

pub mod global;

pub use global::GlobalArgs;

use clap::Parser;

/// Interactive scaffolding tool for onchain agent projects.
#[derive(Debug, Parser)]
#[command(
    name = "create-onchain-agent",
    author,
    version,
    about = "Create a new onchain agent project",
    long_about = "Interactively scaffold a new onchain agent project: pick a \
name, a network, and a wallet provider, and get a ready-to-run project \
directory generated from the official templates."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,
}
