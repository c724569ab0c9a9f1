//! Build manifest emission.
//!
//! Writes the BUILD.bazel and MODULE.bazel files a downstream build
//! orchestrator consumes. The content is a static contract describing
//! the intended retained layout: groups reference glob patterns, so
//! they stay valid whether or not any given file exists on a given
//! platform (not every platform produces every library extension).

use anyhow::{Context, Result};
use std::fs;

use crate::layout::ToolchainLayout;

const BUILD_FILE: &str = r#"package(default_visibility = ["//visibility:public"])

filegroup(
    name = "clang",
    srcs = ["bin/clang"],
)

filegroup(
    name = "lld",
    srcs = ["bin/lld"],
)

filegroup(
    name = "ar",
    srcs = ["bin/llvm-ar"],
)

filegroup(
    name = "as",
    srcs = ["bin/llvm-as"],
)

filegroup(
    name = "nm",
    srcs = ["bin/llvm-nm"],
)

filegroup(
    name = "objcopy",
    srcs = ["bin/llvm-objcopy"],
)

filegroup(
    name = "objdump",
    srcs = ["bin/llvm-objdump"],
)

filegroup(
    name = "profdata",
    srcs = ["bin/llvm-profdata"],
)

filegroup(
    name = "dwp",
    srcs = ["bin/llvm-dwp"],
)

filegroup(
    name = "clang-tidy",
    srcs = ["bin/clang-tidy"],
)

filegroup(
    name = "binaries",
    srcs = glob(["bin/*"]),
)

filegroup(
    name = "includes",
    srcs = glob(["lib/clang/**/include/**"]),
)

filegroup(
    name = "libraries",
    srcs = glob(
        [
            "lib/**/*.a",
            "lib/**/*.o",
            "lib/**/*.so",
            "lib/**/*.dylib",
            "lib/**/*.syms",
        ],
        allow_empty = True,
    ),
)
"#;

/// Write BUILD.bazel and MODULE.bazel into the toolchain root.
pub fn write_manifests(layout: &ToolchainLayout) -> Result<()> {
    let build_path = layout.root.join("BUILD.bazel");
    fs::write(&build_path, BUILD_FILE)
        .with_context(|| format!("Failed to write {}", build_path.display()))?;

    let module_path = layout.root.join("MODULE.bazel");
    fs::write(&module_path, module_file(&layout.name))
        .with_context(|| format!("Failed to write {}", module_path.display()))?;

    Ok(())
}

fn module_file(name: &str) -> String {
    format!("module(name = \"{name}\")\n")
}
