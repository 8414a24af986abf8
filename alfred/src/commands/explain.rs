use std::path::PathBuf;

use alfred_manifest::AlfredToml;
use clap::Args;
use eyre::Result;

use super::{UnwrapOrExit, print};
use crate::ops;

#[derive(Args)]
pub struct ExplainCommand {
    /// Path to alfred.toml
    #[arg(short, long, default_value = "alfred.toml")]
    pub config: PathBuf,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let alfred_toml = AlfredToml::open(&self.config).unwrap_or_exit();
        print(&ops::explain(alfred_toml.manifest(), &self.config));
        Ok(())
    }
}
