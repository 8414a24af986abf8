//! Check command report.

use std::path::PathBuf;

use alfred_codegen::pipeline::Diagnostic;

use super::{
    output::{Output, Report},
    plural, render_diagnostics,
};

/// Result of running the pipeline without emitting anything.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
    /// Accepted candidates, in discovery order.
    pub candidates: Vec<CandidateInfo>,
    pub rejected: usize,
    /// Round ended at the first error.
    pub aborted: bool,
}

/// An accepted candidate and the constructor the factory will call.
#[derive(Debug)]
pub struct CandidateInfo {
    pub class: String,
    pub provider: String,
    /// Selected constructor, e.g. `Foo(@NonNull com.example.Repo repo, int size)`.
    pub signature: String,
}

impl CheckReport {
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(out, &self.diagnostics);
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.success(&format!("{} is valid", self.config_path.display()));
            out.newline();
        }

        if !self.candidates.is_empty() {
            out.section(&format!("Candidates ({})", self.candidates.len()));
            for candidate in &self.candidates {
                out.list_item(&format!("{} -> {}", candidate.class, candidate.provider));
                out.preformatted(&format!("      {}", candidate.signature));
            }
            out.newline();
        }

        let mut summary = format!(
            "{} accepted, {} rejected",
            plural(self.candidates.len(), "candidate"),
            self.rejected
        );
        if self.aborted {
            summary.push_str(" (round aborted)");
        }
        out.preformatted(&summary);
    }
}
