//! Pipeline snapshot plugin for debugging.
//!
//! Captures each candidate's state after every phase so the derivation of
//! a generated provider can be inspected step by step.

use std::{
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use alfred_core::{File, FileRules};
use eyre::Result;
use serde::Serialize;

use super::{Candidate, GenerationError, Plugin};

/// A candidate's state right after a phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    pub phase: String,
    pub candidate: Candidate,
    /// Rejection message when the phase failed the candidate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<String>,
}

impl PhaseSnapshot {
    /// File name used when the snapshot is written to disk.
    pub fn file_name(&self) -> String {
        let suffix = if self.rejection.is_some() { ".rejected" } else { "" };
        format!(
            "{}.{}{}.json",
            self.candidate.qualified_name(),
            self.phase,
            suffix
        )
    }
}

/// A plugin that captures candidate state after each phase.
///
/// # Example
///
/// ```ignore
/// let snapshots = SnapshotPlugin::with_output_dir(".alfred/debug");
/// let ctx = Pipeline::new().plugin(snapshots).run(manifest)?;
/// ```
pub struct SnapshotPlugin {
    snapshots: Mutex<Vec<PhaseSnapshot>>,
    /// When set, each snapshot is written as soon as it is captured.
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    pub fn new() -> Self {
        Self {
            snapshots: Mutex::new(Vec::new()),
            output_dir: None,
        }
    }

    /// Create a snapshot plugin that writes to a directory.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: Mutex::new(Vec::new()),
            output_dir: Some(output_dir.into()),
        }
    }

    /// Get all collected snapshots.
    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.snapshots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Write all collected snapshots to `dir`.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        for snapshot in self.snapshots() {
            write_snapshot(dir.as_ref(), &snapshot)?;
        }
        Ok(())
    }
}

fn write_snapshot(dir: &Path, snapshot: &PhaseSnapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    File::new(dir.join(snapshot.file_name()), json)
        .with_rules(FileRules::always_overwrite())
        .write()?;
    Ok(())
}

impl Default for SnapshotPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, candidate: &Candidate) -> Result<()> {
        self.capture(PhaseSnapshot {
            phase: phase.to_string(),
            candidate: candidate.clone(),
            rejection: None,
        })
    }

    fn on_rejected(
        &self,
        phase: &str,
        candidate: &Candidate,
        error: &GenerationError,
    ) -> Result<()> {
        self.capture(PhaseSnapshot {
            phase: phase.to_string(),
            candidate: candidate.clone(),
            rejection: Some(error.to_string()),
        })
    }
}

impl SnapshotPlugin {
    fn capture(&self, snapshot: PhaseSnapshot) -> Result<()> {
        if let Some(dir) = &self.output_dir {
            write_snapshot(dir, &snapshot)?;
        }

        self.snapshots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot);
        Ok(())
    }
}
