//! Pipeline orchestrator.

use alfred_ir::GenerationUnit;
use alfred_manifest::{FailurePolicy, Manifest};
use eyre::{Result, eyre};
use tracing::{debug, info};

use super::{
    Candidate, CompilationContext, GenerationError, Phase, PhaseInfo, Plugin,
    phases::{DISCOVER, ExtractPhase, ResolvePhase, ValidatePhase, discover},
};

/// A candidate rejected by a phase.
struct Rejection {
    phase: &'static str,
    error: GenerationError,
}

/// The compilation pipeline orchestrator.
///
/// Runs discovery once, then every candidate through the built-in phases
/// (validate, extract, resolve) followed by any user phases, calling plugin
/// hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(SnapshotPlugin::with_output_dir(".alfred/debug"));
///
/// let ctx = pipeline.run(manifest)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with the built-in phases.
    pub fn new() -> Self {
        Self {
            phases: vec![
                Box::new(ValidatePhase::new()),
                Box::new(ExtractPhase),
                Box::new(ResolvePhase),
            ],
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Describe every phase in execution order, discovery included.
    pub fn phase_info(&self) -> Vec<PhaseInfo> {
        std::iter::once(DISCOVER)
            .chain(self.phases.iter().map(|p| p.info()))
            .collect()
    }

    /// Run one round over a manifest.
    ///
    /// Candidates are processed sequentially in declaration order. A
    /// rejected candidate produces exactly one error diagnostic; under
    /// [`FailurePolicy::AbortRound`] the round stops there.
    ///
    /// # Errors
    ///
    /// Returns an error if a plugin fails. Rejections are not errors; they
    /// are recorded in the returned context.
    pub fn run(&self, manifest: Manifest) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(manifest);
        let discovered = discover(&ctx.manifest);
        debug!(count = discovered.len(), "discovery finished");

        for item in discovered {
            let outcome = match item {
                Ok(candidate) => self.analyze(candidate, &ctx)?,
                Err(error) => Err(Rejection {
                    phase: DISCOVER.name,
                    error,
                }),
            };
            ctx.flush_warnings();

            match outcome {
                Ok(unit) => {
                    info!(class = %unit.descriptor.qualified_name(), "candidate accepted");
                    ctx.units.push(unit);
                }
                Err(Rejection { phase, error }) => {
                    debug!(class = error.class(), phase, code = error.code(), "candidate rejected");
                    ctx.reject(phase, &error);
                    if ctx.policy() == FailurePolicy::AbortRound {
                        ctx.aborted = true;
                        break;
                    }
                }
            }
        }

        Ok(ctx)
    }

    /// Run every phase on one candidate.
    ///
    /// The outer `Result` carries plugin failures, the inner one the verdict.
    fn analyze(
        &self,
        mut candidate: Candidate,
        ctx: &CompilationContext,
    ) -> Result<std::result::Result<GenerationUnit, Rejection>> {
        let env = ctx.environment();

        for phase in &self.phases {
            let phase_name = phase.name();
            debug!(class = %candidate.descriptor.name, phase = phase_name, "running phase");

            for plugin in &self.plugins {
                plugin.on_before_phase(phase_name, &candidate)?;
            }

            if let Err(error) = phase.run(&mut candidate, &env) {
                for plugin in &self.plugins {
                    plugin.on_rejected(phase_name, &candidate, &error)?;
                }
                return Ok(Err(Rejection {
                    phase: phase_name,
                    error,
                }));
            }

            for plugin in &self.plugins {
                plugin.on_after_phase(phase_name, &candidate)?;
            }
        }

        let class = candidate.qualified_name();
        let unit = candidate
            .into_unit()
            .ok_or_else(|| eyre!("phases did not finish candidate '{}'", class))?;
        Ok(Ok(unit))
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::pipeline::Environment;

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl CountingPlugin {
        fn new() -> (Self, Arc<AtomicUsize>, Arc<AtomicUsize>) {
            let before = Arc::new(AtomicUsize::new(0));
            let after = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    before_count: before.clone(),
                    after_count: after.clone(),
                },
                before,
                after,
            )
        }
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _candidate: &Candidate) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _candidate: &Candidate) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn parse_manifest(content: &str) -> Manifest {
        content.parse().expect("Failed to parse test manifest")
    }

    const TWO_VALID: &str = r#"
        [[class]]
        package = "com.example"
        name = "Feed"
        modifiers = ["public"]
        extends = "android.arch.lifecycle.ViewModel"
        annotations = ["GeneratedProvider"]

        [[class.constructor]]
        params = [{ name = "repo", type = "com.example.Repo", annotations = ["NonNull"] }]

        [[class]]
        package = "com.example"
        name = "Settings"
        modifiers = ["public"]
        extends = "android.arch.lifecycle.ViewModel"
        annotations = ["GeneratedProvider"]
    "#;

    const ONE_BAD_BETWEEN_GOOD: &str = r#"
        [[class]]
        package = "com.example"
        name = "Good"
        modifiers = ["public"]
        extends = "android.arch.lifecycle.ViewModel"
        annotations = ["GeneratedProvider"]

        [[class]]
        package = "com.example"
        name = "Hidden"
        extends = "android.arch.lifecycle.ViewModel"
        annotations = ["GeneratedProvider"]

        [[class]]
        package = "com.example"
        name = "AlsoGood"
        modifiers = ["public"]
        extends = "android.arch.lifecycle.ViewModel"
        annotations = ["GeneratedProvider"]
    "#;

    #[test]
    fn test_pipeline_accepts_valid_candidates() {
        let ctx = Pipeline::new()
            .run(parse_manifest(TWO_VALID))
            .expect("pipeline should succeed");

        assert!(!ctx.has_errors());
        assert!(ctx.can_emit());
        assert_eq!(ctx.units.len(), 2);
        assert_eq!(ctx.units[0].names.accessor, "FeedProvider");
        assert_eq!(ctx.units[0].parameters.len(), 1);
        assert_eq!(ctx.units[1].names.accessor, "SettingsProvider");
        assert!(ctx.units[1].parameters.is_empty());
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let (plugin, before_count, after_count) = CountingPlugin::new();

        let pipeline = Pipeline::new().plugin(plugin);
        let _ = pipeline
            .run(parse_manifest(TWO_VALID))
            .expect("pipeline should succeed");

        // 2 candidates x 3 built-in phases
        assert_eq!(before_count.load(Ordering::SeqCst), 6);
        assert_eq!(after_count.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn test_abort_round_stops_at_first_error() {
        let ctx = Pipeline::new()
            .run(parse_manifest(ONE_BAD_BETWEEN_GOOD))
            .expect("pipeline should succeed");

        assert!(ctx.aborted);
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.units.len(), 1);
        assert!(!ctx.can_emit());

        let diag = ctx.errors().next().unwrap();
        assert_eq!(diag.phase, "validate");
        assert_eq!(diag.location.as_deref(), Some("com.example.Hidden"));
    }

    #[test]
    fn test_skip_candidate_keeps_going() {
        let mut manifest = parse_manifest(ONE_BAD_BETWEEN_GOOD);
        manifest.generator.on_error = FailurePolicy::SkipCandidate;

        let ctx = Pipeline::new().run(manifest).expect("pipeline should succeed");

        assert!(!ctx.aborted);
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.rejected, 1);
        assert!(ctx.can_emit());
        let accepted: Vec<&str> = ctx.units.iter().map(|u| u.names.accessor.as_str()).collect();
        assert_eq!(accepted, vec!["GoodProvider", "AlsoGoodProvider"]);
    }

    #[test]
    fn test_not_a_class_reported_by_discovery() {
        let ctx = Pipeline::new()
            .run(parse_manifest(
                r#"
                [[class]]
                package = "com.example"
                name = "Mode"
                kind = "enum"
                annotations = ["GeneratedProvider"]
            "#,
            ))
            .expect("pipeline should succeed");

        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.errors().next().unwrap().phase, "discover");
    }

    #[test]
    fn test_collision_between_candidates() {
        let mut manifest = parse_manifest(
            r#"
            [[class]]
            package = "com.example"
            name = "Feed"
            modifiers = ["public"]
            extends = "android.arch.lifecycle.ViewModel"
            annotations = ["GeneratedProvider"]

            [[class]]
            package = "com.example"
            name = "Outer.Feed"
            modifiers = ["public", "static"]
            extends = "android.arch.lifecycle.ViewModel"
            annotations = ["GeneratedProvider"]
        "#,
        );
        manifest.generator.on_error = FailurePolicy::SkipCandidate;

        let ctx = Pipeline::new().run(manifest).expect("pipeline should succeed");

        assert_eq!(ctx.units.len(), 1);
        let diag = ctx.errors().next().unwrap();
        assert_eq!(diag.phase, "resolve");
        assert_eq!(diag.location.as_deref(), Some("com.example.Outer.Feed"));
    }

    #[test]
    fn test_user_phase_runs_last() {
        struct RejectAll;
        impl Phase for RejectAll {
            fn name(&self) -> &'static str {
                "reject-all"
            }
            fn description(&self) -> &'static str {
                "Rejects every candidate"
            }
            fn run(
                &self,
                candidate: &mut Candidate,
                _env: &Environment<'_>,
            ) -> std::result::Result<(), GenerationError> {
                // Earlier phases have already filled everything in
                assert!(candidate.names.is_some());
                Err(GenerationError::NotPublic {
                    class: candidate.qualified_name(),
                })
            }
        }

        let pipeline = Pipeline::new().phase(RejectAll);
        let names: Vec<&str> = pipeline.phase_info().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["discover", "validate", "extract", "resolve", "reject-all"]);

        let ctx = pipeline
            .run(parse_manifest(TWO_VALID))
            .expect("pipeline should succeed");
        assert!(ctx.units.is_empty());
        assert_eq!(ctx.errors().next().unwrap().phase, "reject-all");
    }

    #[test]
    fn test_rejection_hook_sees_failing_phase() {
        type Seen = Arc<std::sync::Mutex<Vec<(String, &'static str)>>>;

        struct Recorder(Seen);
        impl Plugin for Recorder {
            fn name(&self) -> &'static str {
                "recorder"
            }
            fn on_rejected(
                &self,
                phase: &str,
                _candidate: &Candidate,
                error: &GenerationError,
            ) -> Result<()> {
                self.0.lock().unwrap().push((phase.to_string(), error.code()));
                Ok(())
            }
        }

        let seen = Seen::default();
        let ctx = Pipeline::new()
            .plugin(Recorder(seen.clone()))
            .run(parse_manifest(ONE_BAD_BETWEEN_GOOD))
            .expect("pipeline should succeed");

        assert_eq!(ctx.error_count(), 1);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![("validate".to_string(), "not-public")]
        );
        assert_eq!(ctx.errors().next().unwrap().code, Some("not-public"));
    }

    #[test]
    fn test_cyclic_superclass_warns_before_rejection() {
        let ctx = Pipeline::new()
            .run(parse_manifest(
                r#"
                [[class]]
                package = "com.example"
                name = "A"
                extends = "com.example.B"

                [[class]]
                package = "com.example"
                name = "B"
                extends = "com.example.A"

                [[class]]
                package = "com.example"
                name = "Loop"
                modifiers = ["public"]
                extends = "com.example.A"
                annotations = ["GeneratedProvider"]
            "#,
            ))
            .expect("pipeline should succeed");

        assert_eq!(ctx.diagnostics.len(), 2);
        let warning = &ctx.diagnostics[0];
        assert!(warning.severity.is_warning());
        assert_eq!(warning.location.as_deref(), Some("com.example.Loop"));
        assert!(warning.message.contains("cyclic at 'com.example.A'"));
        assert_eq!(ctx.diagnostics[1].code, Some("missing-required-base"));
        assert_eq!(ctx.error_count(), 1);
    }
}
