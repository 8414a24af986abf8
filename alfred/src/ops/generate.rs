//! Generate operation: one round from manifest to Java files.

use std::path::Path;

use alfred_codegen::pipeline::{Diagnostic, GenerationError, Pipeline, SnapshotPlugin};
use alfred_codegen_java::{JavaGenerator, LanguageCodegen};
use alfred_manifest::{ConstructionStrategy, FailurePolicy, Manifest};
use eyre::{Context, Result};
use tracing::{info, warn};

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};

/// Command-line overrides and output settings for a round.
pub struct GenerateOptions<'a> {
    pub output_dir: &'a Path,
    /// Render without writing.
    pub dry_run: bool,
    /// Overrides `[generator] strategy`.
    pub strategy: Option<ConstructionStrategy>,
    /// Forces the `skip-candidate` failure policy.
    pub keep_going: bool,
    pub snapshot_dir: Option<&'a Path>,
}

/// Run a round and emit providers for the accepted candidates.
///
/// Emission is all-or-nothing under `abort-round`: any rejection leaves the
/// output directory untouched.
pub fn generate(manifest: &Manifest, opts: GenerateOptions<'_>) -> Result<GenerateReport> {
    let mut manifest = manifest.clone();
    if let Some(strategy) = opts.strategy {
        manifest.generator.strategy = strategy;
    }
    if opts.keep_going {
        manifest.generator.on_error = FailurePolicy::SkipCandidate;
    }

    let mut pipeline = Pipeline::new();
    if let Some(dir) = opts.snapshot_dir {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(dir));
    }
    let ctx = pipeline.run(manifest).wrap_err("Pipeline failed")?;

    let mut diagnostics = ctx.diagnostics.clone();
    let mut accepted = ctx.units.len();
    let mut rejected = ctx.rejected;
    let generator = JavaGenerator::from_context(&ctx);

    let result = if !ctx.can_emit() {
        warn!(rejected, "round aborted, nothing emitted");
        GenerationResult::Failed
    } else if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        match generator.generate(opts.output_dir) {
            Ok(generated) => {
                for error in &generated.failures {
                    diagnostics.push(Diagnostic::rejection("emit", error));
                }
                rejected += generated.failures.len();
                accepted = generated.total();
                info!(
                    written = generated.written.len(),
                    unchanged = generated.unchanged.len(),
                    failed = generated.failures.len(),
                    "round finished"
                );
                GenerationResult::Written(WrittenResult {
                    output_dir: opts.output_dir.to_path_buf(),
                    written: generated.written,
                    unchanged: generated.unchanged,
                })
            }
            Err(report) => {
                let Some(error) = report.downcast_ref::<GenerationError>() else {
                    return Err(report.wrap_err("Failed to generate code"));
                };
                diagnostics.push(Diagnostic::rejection("emit", error));
                accepted = accepted.saturating_sub(1);
                rejected += 1;
                GenerationResult::Failed
            }
        }
    };

    Ok(GenerateReport {
        diagnostics,
        strategy: generator.strategy().to_string(),
        accepted,
        rejected,
        result,
        snapshot_dir: opts.snapshot_dir.map(Path::to_path_buf),
    })
}
