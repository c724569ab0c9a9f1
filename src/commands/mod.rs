//! CLI command handlers.
//!
//! - `reduce` - Run the full reduction pipeline on a toolchain root
//! - `show` - Display configuration and tool discovery results

pub mod reduce;
pub mod show;

pub use reduce::cmd_reduce;
pub use show::cmd_show;
