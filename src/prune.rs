//! Tree pruning.
//!
//! Cuts an unpacked toolchain down to what is needed to invoke it as a
//! compiler. Headers and docs only matter when linking against the
//! toolchain as a library; libexec holds driver implementation details;
//! most of lib/ is covered selectively through the reserved `clang`
//! support directory and the manifest's glob patterns.
//!
//! Any filesystem error aborts the run. A partially pruned tree is a
//! failed run and needs a fresh unpack.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::layout::{ToolchainLayout, COMPILER_SUPPORT_DIR};
use crate::policy;

/// Prune the toolchain tree in place.
///
/// Returns the surviving non-symlink binaries, in scan order, for the
/// strip step. After this returns, every entry left in bin/ is either a
/// regular file passing the retention policy or a symlink whose target
/// exists.
pub fn prune(layout: &ToolchainLayout) -> Result<Vec<PathBuf>> {
    // Whole subtrees that never survive. lib64 is platform-specific and
    // may legitimately be absent.
    remove_dir_if_present(&layout.include_dir())?;
    remove_dir_if_present(&layout.libexec_dir())?;
    remove_dir_if_present(&layout.share_dir())?;
    remove_dir_if_present(&layout.lib64_dir())?;

    prune_binaries(&layout.bin_dir())?;
    let retained = repair_symlinks(&layout.bin_dir())?;
    prune_libraries(&layout.lib_dir())?;

    Ok(retained)
}

/// Delete regular bin/ entries failing the retention policy.
///
/// Symlinks are deferred: deleting their targets here is what leaves
/// them dangling, and [`repair_symlinks`] sweeps those up afterwards.
fn prune_binaries(bin_dir: &Path) -> Result<()> {
    for entry in fs::read_dir(bin_dir)
        .with_context(|| format!("Failed to read {}", bin_dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_symlink() {
            continue;
        }

        let name = entry.file_name();
        if !policy::keep(&name.to_string_lossy()) {
            println!("  Removing {}", path.display());
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
    }

    Ok(())
}

/// Remove bin/ entries whose resolution target no longer exists and
/// collect the surviving regular files.
fn repair_symlinks(bin_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut retained = Vec::new();

    for entry in fs::read_dir(bin_dir)
        .with_context(|| format!("Failed to read {}", bin_dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        // exists() follows symlinks, so a dangling link reports false
        // even though the link entry itself is still on disk.
        if !path.exists() {
            println!("  Removing dangling link {}", path.display());
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
            continue;
        }

        if !path.is_symlink() {
            retained.push(path);
        }
    }

    Ok(retained)
}

/// Reduce lib/ to the reserved compiler-support directory.
fn prune_libraries(lib_dir: &Path) -> Result<()> {
    if !lib_dir.is_dir() {
        return Ok(());
    }

    for entry in fs::read_dir(lib_dir)
        .with_context(|| format!("Failed to read {}", lib_dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if entry.file_name() == COMPILER_SUPPORT_DIR {
            continue;
        }

        println!("  Removing {}", path.display());
        if path.is_dir() && !path.is_symlink() {
            fs::remove_dir_all(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        } else {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
    }

    Ok(())
}

fn remove_dir_if_present(dir: &Path) -> Result<()> {
    if dir.exists() {
        println!("  Removing {}", dir.display());
        fs::remove_dir_all(dir)
            .with_context(|| format!("Failed to remove {}", dir.display()))?;
    }
    Ok(())
}
