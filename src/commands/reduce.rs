//! The end-to-end reduction pipeline.
//!
//! Order matters: the strip tool is located before anything is deleted,
//! so an unresolvable tool aborts the run with the tree untouched.
//! After that there is no rollback; a failure mid-pipeline leaves the
//! tree in an indeterminate state and the run starts over from a fresh
//! unpack.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::layout::ToolchainLayout;
use crate::{archive, manifest, prune, report, strip, striptool};

pub fn cmd_reduce(root: &Path, skip_archive: bool, config: &Config) -> Result<()> {
    let layout = ToolchainLayout::new(root)?;

    let strip_tool = striptool::locate(config)?;
    println!("Strip tool: {}", strip_tool.display());

    println!("Pruning {}...", layout.root.display());
    let retained = prune::prune(&layout)?;

    println!("Stripping {} retained binaries...", retained.len());
    strip::strip_all(&strip_tool, &retained)?;

    println!("Writing build manifests...");
    manifest::write_manifests(&layout)?;

    let summary = report::summarize(&layout)?;
    report::print_summary(&layout, &summary);

    if skip_archive {
        println!("Archive step skipped.");
        return Ok(());
    }

    let output_dir = config
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    println!("Creating archive...");
    let tarball = archive::archive(&layout, &output_dir)?;
    println!("Archive created: {}", tarball.display());

    Ok(())
}
