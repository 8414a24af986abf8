//! Generate command report.

use std::path::PathBuf;

use alfred_codegen::pipeline::Diagnostic;

use super::{
    output::{Output, Report},
    plural, render_diagnostics,
};

/// Outcome of one generation round.
#[derive(Debug)]
pub struct GenerateReport {
    pub diagnostics: Vec<Diagnostic>,
    pub strategy: String,
    /// Candidates that made it through every phase.
    pub accepted: usize,
    pub rejected: usize,
    pub result: GenerationResult,
    /// Where per-phase snapshots went, if requested.
    pub snapshot_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub enum GenerationResult {
    Written(WrittenResult),
    Preview(Vec<PreviewFile>),
    /// Emission did not happen or did not finish; see the diagnostics.
    Failed,
}

#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    pub written: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl GenerateReport {
    /// Any error fails the round, even when survivors were emitted.
    pub fn failed(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(dir) = &self.snapshot_dir {
            out.key_value("Pipeline snapshots written to", &dir.display().to_string());
            out.newline();
        }

        render_diagnostics(out, &self.diagnostics);
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
            GenerationResult::Failed => {
                out.preformatted(&format!(
                    "Round failed: {} rejected",
                    plural(self.rejected, "candidate")
                ));
            }
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Output", &written.output_dir.display().to_string());
        out.key_value("Strategy", &self.strategy);
        out.newline();

        if !written.written.is_empty() {
            out.section("Written");
            for path in &written.written {
                out.added_item(&relative(path, &written.output_dir));
            }
            out.newline();
        }

        if !written.unchanged.is_empty() {
            out.section("Unchanged");
            for path in &written.unchanged {
                out.unchanged_item(&relative(path, &written.output_dir));
            }
            out.newline();
        }

        let mut summary = format!("{} generated", plural(self.accepted, "provider"));
        if self.rejected > 0 {
            summary.push_str(&format!(", {} skipped", plural(self.rejected, "candidate")));
        }
        out.preformatted(&summary);
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} would be generated ({})",
            plural(files.len(), "file"),
            self.strategy
        ));
    }
}

fn relative(path: &std::path::Path, base: &std::path::Path) -> String {
    path.strip_prefix(base).unwrap_or(path).display().to_string()
}
