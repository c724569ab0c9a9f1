//! Toolslim library exports for testing.
//!
//! This module exposes internal components for integration testing.

pub mod archive;
pub mod commands;
pub mod config;
pub mod layout;
pub mod manifest;
pub mod policy;
pub mod process;
pub mod prune;
pub mod report;
pub mod strip;
pub mod striptool;
