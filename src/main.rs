//! Toolslim - LLVM toolchain reducer.
//!
//! Takes a freshly unpacked Clang/LLVM distribution and cuts it down to
//! the minimal subset needed to invoke it as a compiler:
//! - prune headers, docs, internal executables and non-retained binaries
//! - repair symlinks left dangling by the pruning
//! - strip debug/symbol info from the survivors
//! - emit Bazel manifests and pack a reproducible .tar.xz

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use toolslim::commands;
use toolslim::config::Config;

#[derive(Parser)]
#[command(name = "toolslim")]
#[command(about = "Reduce an unpacked LLVM toolchain for hermetic builds")]
#[command(
    after_help = "QUICK START:\n  toolslim reduce ./19.1.9   Prune, strip and archive a toolchain\n  toolslim show strip-tool   Check strip tool discovery"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce a toolchain tree (prune, strip, manifest, archive)
    Reduce {
        /// Path to the unpacked toolchain root
        root: PathBuf,

        /// Mutate the tree and write manifests but skip the archive
        #[arg(long)]
        skip_archive: bool,
    },

    /// Show information
    Show {
        #[command(subcommand)]
        what: ShowTarget,
    },
}

#[derive(Subcommand)]
enum ShowTarget {
    /// Show current configuration
    Config,
    /// Show which strip tool would be used
    StripTool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load();

    match cli.command {
        Commands::Reduce { root, skip_archive } => {
            commands::cmd_reduce(&root, skip_archive, &config)?;
        }

        Commands::Show { what } => {
            let target = match what {
                ShowTarget::Config => commands::show::ShowTarget::Config,
                ShowTarget::StripTool => commands::show::ShowTarget::StripTool,
            };
            commands::cmd_show(target, &config)?;
        }
    }

    Ok(())
}
