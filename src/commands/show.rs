//! Display information.

use anyhow::Result;

use crate::config::Config;
use crate::striptool;

pub enum ShowTarget {
    /// Current configuration.
    Config,
    /// Where the strip tool would be found.
    StripTool,
}

pub fn cmd_show(target: ShowTarget, config: &Config) -> Result<()> {
    match target {
        ShowTarget::Config => {
            config.print();
        }
        ShowTarget::StripTool => {
            let path = striptool::locate(config)?;
            println!("{}", path.display());
        }
    }
    Ok(())
}
