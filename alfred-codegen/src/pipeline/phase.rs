//! Pipeline phase trait.

use super::{Candidate, Environment, GenerationError};

/// Information about a pipeline phase.
#[derive(Debug, Clone)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A phase run once per candidate.
///
/// Phases are executed in order by the pipeline. Each phase reads the
/// candidate's descriptor and what earlier phases derived, and either adds
/// its own contribution or rejects the candidate.
///
/// Built-in phases:
/// - `ValidatePhase` - structural preconditions
/// - `ExtractPhase` - constructor selection and parameter metadata
/// - `ResolvePhase` - output package and generated names
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and plugin hooks).
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Run this phase on one candidate.
    ///
    /// # Errors
    ///
    /// Returns the reason the candidate is rejected.
    fn run(&self, candidate: &mut Candidate, env: &Environment<'_>) -> Result<(), GenerationError>;

    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
