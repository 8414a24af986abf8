//! Report data structures for commands.
//!
//! Operations collect data into reports; commands render them to an
//! [`Output`].

mod check;
mod explain;
mod generate;
mod output;

use alfred_codegen::pipeline::{Diagnostic, Severity};
pub use check::{CandidateInfo, CheckReport};
pub use explain::{ExplainReport, HostInfo, StageInfo};
pub use generate::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};
#[cfg(test)]
pub use output::BufferOutput;
use output::Output;
pub use output::{Report, TerminalOutput};

/// Render pipeline diagnostics in the order they were raised.
fn render_diagnostics(out: &mut dyn Output, diagnostics: &[Diagnostic]) {
    for diag in diagnostics {
        match diag.severity {
            Severity::Error => out.error(&diag.message),
            Severity::Warning => out.warning(&diag.message),
        }
        if let Some(location) = &diag.location {
            out.note(location);
        }
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}
