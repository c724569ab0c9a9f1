//! Binary retention policy.
//!
//! Decides which entries in the toolchain's bin/ directory survive
//! pruning. The decision is a pure function of the binary's name: no
//! filesystem access, no hidden state, so two entries with the same
//! name always get the same answer.

/// Toolchain binaries kept by exact name match.
///
/// The compiler driver plus the fixed set of auxiliary tools a hermetic
/// build needs: formatter, static analyzer, linker, archiver, assembler,
/// coverage, split-DWARF packager, symbol lister, objcopy/objdump and
/// the profile-data tool.
const KEEP_EXACT: &[&str] = &[
    "clang",
    "clang-format",
    "clang-tidy",
    "lld",
    "llvm-ar",
    "llvm-as",
    "llvm-cov",
    "llvm-dwp",
    "llvm-nm",
    "llvm-objcopy",
    "llvm-objdump",
    "llvm-profdata",
];

/// What follows `clang-` in a driver-prefixed binary name.
#[derive(Debug, PartialEq, Eq)]
enum DriverSuffix {
    /// A version-suffixed driver entry point, e.g. `clang-19`.
    Numeric(u32),
    /// A named auxiliary tool invoked via the same prefix, e.g.
    /// `clang-format`. Not kept by the prefix rule (the allow-list
    /// decides for these).
    Named,
}

fn classify_suffix(suffix: &str) -> DriverSuffix {
    match suffix.parse::<u32>() {
        Ok(n) => DriverSuffix::Numeric(n),
        Err(_) => DriverSuffix::Named,
    }
}

/// Returns true if a binary with this name should survive pruning.
pub fn keep(name: &str) -> bool {
    if KEEP_EXACT.contains(&name) {
        return true;
    }

    // Versioned driver binaries: clang-19, clang-20, ...
    if let Some(suffix) = name.strip_prefix("clang-") {
        return matches!(classify_suffix(suffix), DriverSuffix::Numeric(_));
    }

    false
}
