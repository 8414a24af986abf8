use std::path::PathBuf;

use alfred_manifest::AlfredToml;
use clap::Args;
use eyre::Result;

use super::{UnwrapOrExit, print};
use crate::ops;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to alfred.toml
    #[arg(short, long, default_value = "alfred.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let alfred_toml = AlfredToml::open(&self.config).unwrap_or_exit();
        let report = ops::check(alfred_toml.manifest(), &self.config)?;
        print(&report);

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
