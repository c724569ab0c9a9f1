//! Symbol stripping for retained binaries.

use anyhow::Result;
use std::path::Path;

use crate::process::Cmd;

/// Strip symbol-table and debug information from one binary, in place.
///
/// A nonzero exit from the strip tool is fatal; no partially stripped
/// toolchain gets archived.
pub fn strip_binary(tool: &Path, binary: &Path) -> Result<()> {
    Cmd::new(tool.to_string_lossy())
        .arg("-s")
        .arg_path(binary)
        .error_msg(format!("Failed to strip {}", binary.display()))
        .run()?;

    Ok(())
}

/// Strip every binary in the list.
pub fn strip_all(tool: &Path, binaries: &[std::path::PathBuf]) -> Result<()> {
    for binary in binaries {
        println!("  Stripping {}", binary.display());
        strip_binary(tool, binary)?;
    }
    Ok(())
}
