//! Shared test utilities for toolslim tests.
#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use toolslim::layout::ToolchainLayout;

/// Test environment with a mock unpacked toolchain tree.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Mock toolchain root (named like a version, e.g. "19.1.9")
    pub root: PathBuf,
}

impl TestEnv {
    /// Create a mock toolchain with the directories a real unpacked
    /// distribution has: bin/, lib/clang/, include/, libexec/, share/.
    pub fn new() -> Self {
        Self::with_name("19.1.9")
    }

    pub fn with_name(name: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().join(name);

        for dir in ["bin", "lib/clang/19/include", "include", "libexec", "share/man"] {
            fs::create_dir_all(root.join(dir)).expect("Failed to create mock dir");
        }
        fs::write(root.join("include/header.h"), "// header\n").unwrap();
        fs::write(root.join("libexec/driver-helper"), "helper").unwrap();
        fs::write(root.join("share/man/clang.1"), "man page").unwrap();
        fs::write(
            root.join("lib/clang/19/include/stddef.h"),
            "// builtin header\n",
        )
        .unwrap();

        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn layout(&self) -> ToolchainLayout {
        ToolchainLayout::new(&self.root).expect("Failed to build layout")
    }

    /// Drop a mock executable into bin/.
    pub fn add_binary(&self, name: &str) -> PathBuf {
        let path = self.root.join("bin").join(name);
        create_mock_binary(&path);
        path
    }

    /// Create a relative symlink inside bin/.
    pub fn add_bin_symlink(&self, name: &str, target: &str) -> PathBuf {
        let path = self.root.join("bin").join(name);
        std::os::unix::fs::symlink(target, &path).expect("Failed to create symlink");
        path
    }

    /// Drop a loose file or directory into lib/.
    pub fn add_lib_entry(&self, name: &str, dir: bool) -> PathBuf {
        let path = self.root.join("lib").join(name);
        if dir {
            fs::create_dir_all(&path).unwrap();
            fs::write(path.join("placeholder"), "x").unwrap();
        } else {
            fs::write(&path, "lib content").unwrap();
        }
        path
    }

    /// Names of the entries currently in bin/, sorted.
    pub fn bin_entries(&self) -> Vec<String> {
        list_names(&self.root.join("bin"))
    }

    /// Names of the top-level entries currently in lib/, sorted.
    pub fn lib_entries(&self) -> Vec<String> {
        list_names(&self.root.join("lib"))
    }
}

/// Create an executable file with a tiny payload.
pub fn create_mock_binary(path: &Path) {
    fs::write(path, "#!/bin/sh\nexit 0\n").expect("Failed to write mock binary");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("Failed to chmod mock binary");
}

/// Create a fake strip tool that succeeds.
pub fn fake_strip_tool(dir: &Path) -> PathBuf {
    let path = dir.join("llvm-strip");
    create_mock_binary(&path);
    path
}

/// Create a fake strip tool that always fails.
pub fn failing_strip_tool(dir: &Path) -> PathBuf {
    let path = dir.join("llvm-strip");
    fs::write(&path, "#!/bin/sh\necho 'cannot strip' >&2\nexit 1\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn list_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read dir")
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

pub fn assert_exists(path: &Path) {
    assert!(
        path.symlink_metadata().is_ok(),
        "expected {} to exist",
        path.display()
    );
}

pub fn assert_gone(path: &Path) {
    assert!(
        path.symlink_metadata().is_err(),
        "expected {} to be gone",
        path.display()
    );
}
