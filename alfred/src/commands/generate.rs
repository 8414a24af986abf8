use std::path::PathBuf;

use alfred_manifest::{AlfredToml, ConstructionStrategy};
use clap::Args;
use eyre::Result;

use super::{UnwrapOrExit, print};
use crate::ops::{self, GenerateOptions};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to alfred.toml
    #[arg(short, long, default_value = "alfred.toml")]
    pub config: PathBuf,

    /// Source root the package directories are created under
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// How factories instantiate the target (direct, checked-dynamic)
    #[arg(long)]
    pub strategy: Option<ConstructionStrategy>,

    /// Skip failing candidates instead of aborting the round
    #[arg(long)]
    pub keep_going: bool,

    /// Write per-phase candidate snapshots (JSON) to this directory
    #[arg(long, value_name = "DIR")]
    pub snapshot_dir: Option<PathBuf>,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let alfred_toml = AlfredToml::open(&self.config).unwrap_or_exit();

        let report = ops::generate(
            alfred_toml.manifest(),
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
                strategy: self.strategy,
                keep_going: self.keep_going,
                snapshot_dir: self.snapshot_dir.as_deref(),
            },
        )?;
        print(&report);

        if report.failed() {
            std::process::exit(1);
        }
        Ok(())
    }
}
