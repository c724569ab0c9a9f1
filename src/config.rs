//! Configuration management for toolslim.
//!
//! Reads configuration from a .env file and environment variables.
//! Environment variables take precedence over the .env file.

use std::collections::HashMap;
use std::path::PathBuf;

/// Toolslim configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Explicit path to the strip tool (skips discovery when set).
    pub strip_tool: Option<PathBuf>,
    /// Directory the final archive is written to (default: cwd).
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from .env file and environment.
    ///
    /// `dotenvy` merges the .env file into the process environment
    /// without overriding variables that are already set, so the
    /// environment wins.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let env_vars: HashMap<String, String> = std::env::vars().collect();

        Self {
            strip_tool: env_vars.get("TOOLSLIM_STRIP").map(PathBuf::from),
            output_dir: env_vars.get("TOOLSLIM_OUTPUT_DIR").map(PathBuf::from),
        }
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        match &self.strip_tool {
            Some(p) => println!("  TOOLSLIM_STRIP: {}", p.display()),
            None => println!("  TOOLSLIM_STRIP: (unset, strip tool will be discovered)"),
        }
        match &self.output_dir {
            Some(p) => println!("  TOOLSLIM_OUTPUT_DIR: {}", p.display()),
            None => println!("  TOOLSLIM_OUTPUT_DIR: (unset, archive written to cwd)"),
        }
    }
}
