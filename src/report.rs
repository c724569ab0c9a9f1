//! Post-prune reduction summary.

use anyhow::Result;
use walkdir::WalkDir;

use crate::archive::human_size;
use crate::layout::ToolchainLayout;

/// Count of surviving files and their total size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeSummary {
    pub files: u64,
    pub bytes: u64,
}

/// Walk the pruned tree and total up what survived.
///
/// Symlinks count as files but contribute no size; their targets are
/// counted where they live.
pub fn summarize(layout: &ToolchainLayout) -> Result<TreeSummary> {
    let mut summary = TreeSummary { files: 0, bytes: 0 };

    for entry in WalkDir::new(&layout.root) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        summary.files += 1;
        if entry.file_type().is_file() {
            summary.bytes += entry.metadata()?.len();
        }
    }

    Ok(summary)
}

pub fn print_summary(layout: &ToolchainLayout, summary: &TreeSummary) {
    println!(
        "Reduced {}: {} files, {}",
        layout.name,
        summary.files,
        human_size(summary.bytes)
    );
}
