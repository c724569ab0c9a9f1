//! Well-known paths inside an unpacked toolchain distribution.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Top-level lib/ entry reserved for compiler-internal runtime and
/// support libraries. Everything else under lib/ is pruned.
pub const COMPILER_SUPPORT_DIR: &str = "clang";

/// One unpacked toolchain distribution on disk.
///
/// The tree is mutated in place by the pruner and stripper, then read
/// by the manifest writer and archiver. The root itself is never
/// deleted here.
#[derive(Debug, Clone)]
pub struct ToolchainLayout {
    /// Absolute path to the unpacked distribution.
    pub root: PathBuf,
    /// Logical name derived from the root's final path segment,
    /// e.g. `19.1.9`. Names the archive and the Bazel module.
    pub name: String,
}

impl ToolchainLayout {
    pub fn new(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            bail!("Toolchain root not found: {}", root.display());
        }

        let name = match root.file_name() {
            Some(n) => n.to_string_lossy().into_owned(),
            None => bail!(
                "Cannot derive a toolchain name from {}",
                root.display()
            ),
        };

        Ok(Self {
            root: root.to_path_buf(),
            name,
        })
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root.join("bin")
    }

    pub fn lib_dir(&self) -> PathBuf {
        self.root.join("lib")
    }

    pub fn include_dir(&self) -> PathBuf {
        self.root.join("include")
    }

    pub fn libexec_dir(&self) -> PathBuf {
        self.root.join("libexec")
    }

    pub fn share_dir(&self) -> PathBuf {
        self.root.join("share")
    }

    /// Present in some Linux vendor tarballs, absent on macOS.
    pub fn lib64_dir(&self) -> PathBuf {
        self.root.join("lib64")
    }
}
