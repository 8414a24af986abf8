//! Resolve phase - output package and generated class names.

use alfred_ir::{ClassName, GeneratedNames};
use tracing::debug;

use crate::pipeline::{Candidate, Environment, GenerationError, Phase};

/// Phase that fills [`Candidate::package`] and [`Candidate::names`].
///
/// Generated classes live in the candidate's package. A generated accessor
/// name that is already taken, by another candidate of the round or by a
/// declared class, is reported as [`GenerationError::NameCollision`].
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Resolve the output package and generated class names"
    }

    fn run(&self, candidate: &mut Candidate, env: &Environment<'_>) -> Result<(), GenerationError> {
        let descriptor = &candidate.descriptor;
        let class = descriptor.qualified_name();

        let package = descriptor
            .package
            .clone()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| GenerationError::NoPackageName {
                class: class.clone(),
            })?;

        let simple = descriptor.simple_name();
        let names = GeneratedNames {
            factory: format!("{}{}", simple, env.generator.factory_suffix),
            accessor: format!("{}{}", simple, env.generator.provider_suffix),
        };

        let generated = ClassName::new(package.clone(), names.accessor.clone());
        if let Some(other) = env
            .accepted
            .iter()
            .find(|unit| unit.accessor_class() == generated)
        {
            return Err(GenerationError::NameCollision {
                class,
                generated: generated.canonical_name(),
                other: format!(
                    "the provider generated for '{}'",
                    other.descriptor.qualified_name()
                ),
            });
        }
        if env.manifest.find_class(&generated).is_some() {
            return Err(GenerationError::NameCollision {
                class,
                generated: generated.canonical_name(),
                other: "a declared class of the same name".to_string(),
            });
        }

        debug!(class = %class, accessor = %generated, "resolved names");
        candidate.package = Some(package);
        candidate.names = Some(names);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alfred_manifest::Manifest;

    use super::*;
    use crate::pipeline::{CompilationContext, phases::discover};

    fn resolve(src: &str) -> Result<Candidate, GenerationError> {
        let manifest: Manifest = src.parse().expect("Failed to parse test manifest");
        let ctx = CompilationContext::new(manifest);
        let mut candidate = discover(&ctx.manifest).remove(0).unwrap();
        ResolvePhase.run(&mut candidate, &ctx.environment())?;
        Ok(candidate)
    }

    #[test]
    fn test_names_use_suffixes() {
        let candidate = resolve(
            r#"
            [[class]]
            package = "com.example.feed"
            name = "FeedViewModel"
            annotations = ["GeneratedProvider"]
        "#,
        )
        .unwrap();

        assert_eq!(candidate.package.as_deref(), Some("com.example.feed"));
        let names = candidate.names.unwrap();
        assert_eq!(names.factory, "FeedViewModelFactory");
        assert_eq!(names.accessor, "FeedViewModelProvider");
    }

    #[test]
    fn test_custom_suffixes() {
        let candidate = resolve(
            r#"
            [generator]
            factory_suffix = "Maker"
            provider_suffix = "Access"

            [[class]]
            package = "com.example"
            name = "Feed"
            annotations = ["GeneratedProvider"]
        "#,
        )
        .unwrap();

        let names = candidate.names.unwrap();
        assert_eq!(names.factory, "FeedMaker");
        assert_eq!(names.accessor, "FeedAccess");
    }

    #[test]
    fn test_nested_class_uses_innermost_name() {
        let candidate = resolve(
            r#"
            [[class]]
            package = "com.example"
            name = "Screen.State"
            annotations = ["GeneratedProvider"]
        "#,
        )
        .unwrap();
        assert_eq!(candidate.names.unwrap().accessor, "StateProvider");
    }

    #[test]
    fn test_unnamed_package_rejected() {
        let result = resolve(
            r#"
            [[class]]
            name = "Loose"
            annotations = ["GeneratedProvider"]
        "#,
        );
        assert!(matches!(result, Err(GenerationError::NoPackageName { .. })));
    }

    #[test]
    fn test_collision_with_declared_class() {
        let result = resolve(
            r#"
            [[class]]
            package = "com.example"
            name = "Feed"
            annotations = ["GeneratedProvider"]

            [[class]]
            package = "com.example"
            name = "FeedProvider"
        "#,
        );
        assert!(matches!(result, Err(GenerationError::NameCollision { .. })));
    }
}
