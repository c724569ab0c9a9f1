//! Strip tool discovery.
//!
//! Stripping is mandatory before packaging, so the pipeline locates
//! `llvm-strip` up front and aborts before touching the tree if no
//! candidate resolves. The search is an ordered chain of independent
//! probes; the first hit wins.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::process::Cmd;

/// Name of the symbol-stripping utility.
pub const STRIP_TOOL: &str = "llvm-strip";

/// Locate the strip tool.
///
/// Probe order:
/// 1. Explicit override from configuration (TOOLSLIM_STRIP).
/// 2. `llvm-strip` on PATH.
/// 3. `llvm-config --bindir`, then look in that directory.
/// 4. `brew --prefix llvm`, then look under `<prefix>/bin` (macOS).
///
/// A failing `llvm-config` invocation is fatal; a failing `brew`
/// invocation is treated as "candidate unavailable" and the chain
/// continues.
pub fn locate(config: &Config) -> Result<PathBuf> {
    let probes: &[fn(&Config) -> Result<Option<PathBuf>>] = &[
        probe_config_override,
        probe_path,
        probe_llvm_config,
        probe_homebrew,
    ];

    for probe in probes {
        if let Some(path) = probe(config)? {
            return Ok(path);
        }
    }

    bail!(
        "Tool not found: '{}' is not on PATH and neither llvm-config nor \
         Homebrew could locate it. Install LLVM or set TOOLSLIM_STRIP.",
        STRIP_TOOL
    )
}

fn probe_config_override(config: &Config) -> Result<Option<PathBuf>> {
    match &config.strip_tool {
        Some(path) if path.is_file() => Ok(Some(path.clone())),
        Some(path) => bail!(
            "TOOLSLIM_STRIP points to a missing file: {}",
            path.display()
        ),
        None => Ok(None),
    }
}

fn probe_path(_config: &Config) -> Result<Option<PathBuf>> {
    Ok(which::which(STRIP_TOOL).ok())
}

fn probe_llvm_config(_config: &Config) -> Result<Option<PathBuf>> {
    if which::which("llvm-config").is_err() {
        return Ok(None);
    }

    let result = Cmd::new("llvm-config")
        .arg("--bindir")
        .error_msg("llvm-config --bindir failed")
        .run()?;

    Ok(find_in_dir(Path::new(result.stdout_trimmed())))
}

fn probe_homebrew(_config: &Config) -> Result<Option<PathBuf>> {
    if which::which("brew").is_err() {
        return Ok(None);
    }

    // brew exits non-zero when the llvm formula is not installed; that
    // just means this candidate is unavailable.
    let result = Cmd::new("brew")
        .arg("--prefix")
        .arg("llvm")
        .allow_fail()
        .run()?;

    if !result.success() {
        return Ok(None);
    }

    let prefix = PathBuf::from(result.stdout_trimmed());
    Ok(find_in_dir(&prefix.join("bin")))
}

fn find_in_dir(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(STRIP_TOOL);
    candidate.is_file().then_some(candidate)
}
