//! Reproducible archive creation.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::layout::ToolchainLayout;
use crate::process::Cmd;

/// Pack the pruned tree into `<output_dir>/<name>.tar.xz`.
///
/// Any pre-existing archive at the target path is removed first, so a
/// rerun overwrites cleanly. Paths inside the archive are rooted at the
/// tree's contents directly; extracting reproduces the pruned tree
/// without a wrapping directory.
pub fn archive(layout: &ToolchainLayout, output_dir: &Path) -> Result<PathBuf> {
    let tarball = output_dir.join(format!("{}.tar.xz", layout.name));

    if tarball.exists() {
        fs::remove_file(&tarball)
            .with_context(|| format!("Failed to remove stale {}", tarball.display()))?;
    }

    // Use the tar command for better compatibility and performance.
    Cmd::new("tar")
        .arg("-cJf")
        .arg_path(&tarball)
        .arg("-C")
        .arg_path(&layout.root)
        .arg(".")
        .error_msg(format!("Failed to create {}", tarball.display()))
        .run()?;

    let metadata = fs::metadata(&tarball)
        .with_context(|| format!("Failed to stat {}", tarball.display()))?;
    println!("  Archive size: {}", human_size(metadata.len()));

    Ok(tarball)
}

/// Format a byte count with 1024-based units and one decimal place.
pub fn human_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"];

    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{size:.1} {unit}");
        }
        size /= 1024.0;
    }
    // Past YiB there is nothing left to escalate to.
    format!("{size:.1} YiB")
}
