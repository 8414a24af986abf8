//! Explain command report.

use std::path::PathBuf;

use super::output::{Output, Report};

/// What a round would do with a manifest, without running it.
#[derive(Debug)]
pub struct ExplainReport {
    pub config_path: PathBuf,
    /// Declared classes, candidates included.
    pub class_count: usize,
    pub candidate_count: usize,
    pub phases: Vec<StageInfo>,
    pub rules: Vec<StageInfo>,
    pub host: HostInfo,
    pub marker: String,
    pub designation_marker: String,
    pub strategy: String,
    pub on_error: String,
    /// Naming of generated artifacts, e.g. `<Name>Provider.<Name>Factory`.
    pub naming: String,
    pub accessor_method: String,
}

/// Name and description of a phase or rule.
#[derive(Debug)]
pub struct StageInfo {
    pub name: String,
    pub description: String,
}

/// Host runtime types, fully qualified.
#[derive(Debug)]
pub struct HostInfo {
    pub base: String,
    pub factory: String,
    pub store: String,
    pub non_null: String,
    pub nullable: String,
    /// `type param` pairs, one per accessor overload.
    pub scopes: Vec<String>,
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("Alfred Pipeline Explanation");
        out.newline();

        out.key_value("Input", &self.config_path.display().to_string());
        out.key_value_indented("Classes", &self.class_count.to_string());
        out.key_value_indented("Candidates", &self.candidate_count.to_string());
        out.key_value_indented("Marker", &format!("@{}", self.marker));
        out.key_value_indented("Designation", &format!("@{}", self.designation_marker));
        out.newline();

        out.section("Pipeline Phases");
        for (i, phase) in self.phases.iter().enumerate() {
            out.numbered_item(i + 1, &format!("{} - {}", phase.name, phase.description));
        }
        out.newline();

        out.section("Validation Rules");
        for rule in &self.rules {
            out.list_item(&format!("{}: {}", rule.name, rule.description));
        }
        out.newline();

        out.section("Host");
        out.key_value_indented("Base", &self.host.base);
        out.key_value_indented("Factory", &self.host.factory);
        out.key_value_indented("Store", &self.host.store);
        out.key_value_indented("NonNull", &self.host.non_null);
        out.key_value_indented("Nullable", &self.host.nullable);
        for scope in &self.host.scopes {
            out.key_value_indented("Scope", scope);
        }
        out.newline();

        out.section("Generation");
        out.key_value_indented("Strategy", &self.strategy);
        out.key_value_indented("On error", &self.on_error);
        out.key_value_indented("Naming", &self.naming);
        out.key_value_indented("Accessor", &format!("static {}(scope)", self.accessor_method));
    }
}
