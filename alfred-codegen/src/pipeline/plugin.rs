//! Hooks into the per-candidate phase loop.

use eyre::Result;

use super::{Candidate, GenerationError};

/// Observer of candidates as they move through the phases.
///
/// Hooks run for every candidate and phase; returning an error stops the
/// round with that error instead of a diagnostic.
///
/// ```ignore
/// struct Trace;
///
/// impl Plugin for Trace {
///     fn name(&self) -> &'static str { "trace" }
///
///     fn on_rejected(&self, phase: &str, candidate: &Candidate, error: &GenerationError) -> Result<()> {
///         eprintln!("{} rejected in {}: {}", candidate.qualified_name(), phase, error.code());
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, candidate: &Candidate) -> Result<()> {
        Ok(())
    }

    /// The phase accepted the candidate; `candidate` includes its output.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, candidate: &Candidate) -> Result<()> {
        Ok(())
    }

    /// The phase rejected the candidate. No later phase runs on it.
    #[allow(unused_variables)]
    fn on_rejected(&self, phase: &str, candidate: &Candidate, error: &GenerationError) -> Result<()> {
        Ok(())
    }
}
