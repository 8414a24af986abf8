//! Check operation: run the pipeline, emit nothing.

use std::path::Path;

use alfred_codegen::pipeline::Pipeline;
use alfred_ir::{GenerationUnit, Nullability};
use alfred_manifest::{HostConfig, Manifest};
use eyre::{Context, Result};

use crate::reports::{CandidateInfo, CheckReport};

/// Validate every candidate and describe the constructors that would be used.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    let ctx = Pipeline::new()
        .run(manifest.clone())
        .wrap_err("Validation failed")?;

    let candidates = ctx
        .units
        .iter()
        .map(|unit| CandidateInfo {
            class: unit.descriptor.qualified_name(),
            provider: unit.accessor_class().canonical_name(),
            signature: signature(unit, &ctx.manifest.host),
        })
        .collect();

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        diagnostics: ctx.diagnostics,
        candidates,
        rejected: ctx.rejected,
        aborted: ctx.aborted,
    })
}

/// Java-style signature of the selected constructor.
fn signature(unit: &GenerationUnit, host: &HostConfig) -> String {
    let params: Vec<String> = unit
        .parameters
        .iter()
        .map(|p| {
            let annotation = match p.nullability {
                Nullability::NonNull => format!("@{} ", host.non_null.simple_name()),
                Nullability::Nullable => format!("@{} ", host.nullable.simple_name()),
                Nullability::Unspecified => String::new(),
            };
            format!("{}{} {}", annotation, p.ty, p.name)
        })
        .collect();

    format!("{}({})", unit.descriptor.simple_name(), params.join(", "))
}
