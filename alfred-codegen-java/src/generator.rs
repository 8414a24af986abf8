use std::path::Path;

use alfred_codegen::{
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::{CompilationContext, GenerationError},
};
use alfred_core::{GeneratedFile, WriteResult};
use alfred_ir::{ClassName, GenerationUnit};
use alfred_manifest::{ConstructionStrategy, FailurePolicy, GeneratorConfig, HostConfig};
use eyre::Result;
use tracing::{debug, info, warn};

use crate::{emit::Emitter, files::ProviderJava};

/// Java code generator producing one provider file per generation unit.
pub struct JavaGenerator<'a> {
    units: &'a [GenerationUnit],
    emitter: Emitter<'a>,
    policy: FailurePolicy,
    /// Classes the build knows about, for same-package name resolution.
    known: Vec<ClassName>,
}

impl LanguageCodegen for JavaGenerator<'_> {
    fn language(&self) -> &'static str {
        "java"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .map(|(_, file)| PreviewFile {
                path: file.relative_path().display().to_string(),
                content: file.render(),
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_files(output_dir)
    }
}

impl<'a> JavaGenerator<'a> {
    pub fn new(
        units: &'a [GenerationUnit],
        host: &'a HostConfig,
        generator: &'a GeneratorConfig,
    ) -> Self {
        Self {
            units,
            emitter: Emitter::new(host, generator),
            policy: generator.on_error,
            known: Vec::new(),
        }
    }

    /// Register classes that live alongside the generated providers.
    pub fn with_known_classes(mut self, classes: impl IntoIterator<Item = ClassName>) -> Self {
        self.known.extend(classes);
        self
    }

    /// Generator over the accepted units of a finished round.
    pub fn from_context(ctx: &'a CompilationContext) -> Self {
        let declared = ctx.manifest.classes.iter().map(|decl| decl.class_name());
        let generated = ctx.units.iter().map(|unit| unit.accessor_class());
        Self::new(&ctx.units, &ctx.manifest.host, &ctx.manifest.generator)
            .with_known_classes(declared.chain(generated))
    }

    /// Override the construction strategy from the manifest.
    pub fn with_strategy(mut self, strategy: ConstructionStrategy) -> Self {
        self.emitter = self.emitter.with_strategy(strategy);
        self
    }

    pub fn strategy(&self) -> ConstructionStrategy {
        self.emitter.strategy()
    }

    fn files(&self) -> impl Iterator<Item = (&'a GenerationUnit, ProviderJava)> + '_ {
        self.units
            .iter()
            .map(|unit| {
                let file = self.emitter.file(unit).with_siblings(self.siblings(&unit.package));
                (unit, ProviderJava::new(file))
            })
    }

    /// Top-level simple names of the known classes in `package`.
    fn siblings(&self, package: &str) -> Vec<String> {
        self.known
            .iter()
            .filter(|class| class.package == package)
            .map(|class| class.top_level().simple_name().to_string())
            .collect()
    }

    /// Write every file. A write failure ends the run under `abort-round`;
    /// under `skip-candidate` it is recorded and the remaining files are
    /// still written.
    fn generate_files(&self, output_dir: &Path) -> Result<GenerateResult> {
        // Render everything before touching the disk.
        let files: Vec<_> = self.files().collect();
        let mut result = GenerateResult::default();

        for (unit, file) in files {
            let path = file.path(output_dir);
            let outcome = match file.write(output_dir) {
                Ok(outcome) => outcome,
                Err(e) => {
                    let error = GenerationError::PersistenceFailure {
                        class: unit.descriptor.qualified_name(),
                        path: path.clone(),
                        reason: e.to_string(),
                    };
                    if self.policy == FailurePolicy::AbortRound {
                        return Err(error.into());
                    }
                    warn!(path = %path.display(), class = %unit.descriptor.name, "skipping unwritable provider");
                    result.failures.push(error);
                    continue;
                }
            };

            match outcome {
                WriteResult::Written => {
                    info!(path = %path.display(), class = %unit.descriptor.name, "wrote provider");
                    result.written.push(path);
                }
                WriteResult::Unchanged => {
                    debug!(path = %path.display(), "provider unchanged");
                    result.unchanged.push(path);
                }
            }
        }

        Ok(result)
    }
}
