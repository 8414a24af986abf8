//! Compilation context for one build round.

use std::cell::RefCell;

use alfred_ir::GenerationUnit;
use alfred_manifest::{FailurePolicy, GeneratorConfig, HostConfig, Manifest};

use super::{
    diagnostic::{Diagnostic, Severity},
    error::GenerationError,
    hierarchy::TypeHierarchy,
};

/// Read-only view of the round that phases run against.
pub struct Environment<'a> {
    pub generator: &'a GeneratorConfig,
    pub host: &'a HostConfig,
    pub hierarchy: &'a dyn TypeHierarchy,
    pub manifest: &'a Manifest,
    /// Units accepted earlier in the round.
    pub accepted: &'a [GenerationUnit],
    warnings: &'a RefCell<Vec<Diagnostic>>,
}

impl Environment<'_> {
    /// Record a warning about `class`. Warnings never reject a candidate.
    pub fn warn(&self, phase: &str, class: impl Into<String>, message: impl Into<String>) {
        self.warnings
            .borrow_mut()
            .push(Diagnostic::warning(phase, message).at(class));
    }
}

/// State of one round: the manifest, accepted units and diagnostics.
#[derive(Debug)]
pub struct CompilationContext {
    pub manifest: Manifest,
    /// Candidates that passed every phase, in declaration order.
    pub units: Vec<GenerationUnit>,
    pub diagnostics: Vec<Diagnostic>,
    /// Number of candidates rejected this round.
    pub rejected: usize,
    /// Set when the round stopped early under [`FailurePolicy::AbortRound`].
    pub aborted: bool,
    /// Warnings raised through [`Environment::warn`], not yet in `diagnostics`.
    pending: RefCell<Vec<Diagnostic>>,
}

impl CompilationContext {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            units: Vec::new(),
            diagnostics: Vec::new(),
            rejected: 0,
            aborted: false,
            pending: RefCell::default(),
        }
    }

    /// Borrow the round as an [`Environment`] for phases.
    pub fn environment(&self) -> Environment<'_> {
        Environment {
            generator: &self.manifest.generator,
            host: &self.manifest.host,
            hierarchy: &self.manifest,
            manifest: &self.manifest,
            accepted: &self.units,
            warnings: &self.pending,
        }
    }

    /// Move warnings raised by phases into `diagnostics`.
    pub fn flush_warnings(&mut self) {
        self.diagnostics.append(self.pending.get_mut());
    }

    pub fn policy(&self) -> FailurePolicy {
        self.manifest.generator.on_error
    }

    /// Record a rejected candidate as exactly one error diagnostic.
    pub fn reject(&mut self, phase: &str, error: &GenerationError) {
        self.rejected += 1;
        self.diagnostics.push(Diagnostic::rejection(phase, error));
    }

    /// Whether the accepted units may be emitted.
    ///
    /// Under `abort-round` any error blocks emission; under `skip-candidate`
    /// the survivors are still emitted.
    pub fn can_emit(&self) -> bool {
        match self.policy() {
            FailurePolicy::AbortRound => !self.has_errors(),
            FailurePolicy::SkipCandidate => true,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }
}
