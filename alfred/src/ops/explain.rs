//! Explain operation: describe the pipeline and configuration.

use std::path::Path;

use alfred_codegen::pipeline::{Pipeline, phases::ValidatePhase};
use alfred_manifest::Manifest;

use crate::reports::{ExplainReport, HostInfo, StageInfo};

/// Describe what a round over this manifest would do, without running it.
pub fn explain(manifest: &Manifest, config_path: &Path) -> ExplainReport {
    let phases = Pipeline::new()
        .phase_info()
        .into_iter()
        .map(|p| StageInfo {
            name: p.name.to_string(),
            description: p.description.to_string(),
        })
        .collect();

    let rules = ValidatePhase::new()
        .rule_info()
        .into_iter()
        .map(|r| StageInfo {
            name: r.name.to_string(),
            description: r.description.to_string(),
        })
        .collect();

    let host = &manifest.host;
    let generator = &manifest.generator;

    ExplainReport {
        config_path: config_path.to_path_buf(),
        class_count: manifest.classes.len(),
        candidate_count: manifest.candidates().count(),
        phases,
        rules,
        host: HostInfo {
            base: host.base.canonical_name(),
            factory: host.factory.canonical_name(),
            store: host.store.canonical_name(),
            non_null: host.non_null.canonical_name(),
            nullable: host.nullable.canonical_name(),
            scopes: host
                .scopes
                .iter()
                .map(|s| format!("{} {}", s.ty.canonical_name(), s.param))
                .collect(),
        },
        marker: generator.marker.clone(),
        designation_marker: generator.designation_marker.clone(),
        strategy: generator.strategy.to_string(),
        on_error: generator.on_error.to_string(),
        naming: format!(
            "<Name>{}.<Name>{}",
            generator.provider_suffix, generator.factory_suffix
        ),
        accessor_method: generator.accessor_method.clone(),
    }
}
