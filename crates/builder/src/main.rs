//! # GraalVM distribution builder
//!
//! Command surface for assembling a GraalVM distribution out of
//! independently built components.
//!
//! ## Usage
//!
//! ```bash
//! builder javadoc              # Build unified API docs, promote landing page
//! builder components list      # List registered components
//! builder components files     # Show the files each component bundles
//! builder doctor               # Check host tools before a build
//! ```
//!
//! Components are declared as JSON manifests under `<suite>/components/`
//! and registered during the configuration phase; any configuration
//! error aborts the run.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "builder", about = "GraalVM distribution builder")]
struct Cli {
    /// Suite root directory.
    #[arg(long, global = true, default_value = ".")]
    suite_dir: PathBuf,

    #[command(subcommand)]
    command: commands::Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        commands::Commands::Javadoc { args } => commands::javadoc::run(&cli.suite_dir, &args),
        commands::Commands::Components { cmd } => {
            let registry = commands::configure(&cli.suite_dir)?;
            match cmd {
                commands::ComponentsCmd::List => commands::components::list(&registry),
                commands::ComponentsCmd::Files => commands::components::files(&registry),
            }
        }
        commands::Commands::Doctor => commands::doctor::run(&cli.suite_dir),
    }
}
