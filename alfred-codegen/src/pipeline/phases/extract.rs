//! Extract phase - select the canonical constructor and describe its parameters.

use alfred_core::simple_name;
use alfred_ir::{ClassDescriptor, ConstructorCandidate, ConstructorParameter, Nullability};
use alfred_manifest::HostConfig;
use tracing::debug;

use crate::pipeline::{Candidate, Environment, GenerationError, Phase};

/// Phase that fills [`Candidate::parameters`].
pub struct ExtractPhase;

impl Phase for ExtractPhase {
    fn name(&self) -> &'static str {
        "extract"
    }

    fn description(&self) -> &'static str {
        "Select the designated constructor and extract its parameters"
    }

    fn run(&self, candidate: &mut Candidate, env: &Environment<'_>) -> Result<(), GenerationError> {
        let descriptor = &candidate.descriptor;
        let parameters = match select_constructor(descriptor, &env.generator.designation_marker)? {
            Some(ctor) => ctor
                .params
                .iter()
                .map(|p| {
                    ConstructorParameter::new(
                        p.ty.clone(),
                        p.name.clone(),
                        resolve_nullability(&p.markers, env.host),
                    )
                })
                .collect(),
            None => Vec::new(),
        };

        debug!(
            class = %descriptor.name,
            params = parameters.len(),
            "extracted constructor"
        );
        candidate.parameters = Some(parameters);
        Ok(())
    }
}

/// Pick the constructor to forward to.
///
/// The first declared constructor is selected by default; a later
/// designated constructor replaces it, unless the selected one is already
/// designated, which is an error. `None` when the class declares no
/// constructors (the implicit no-arg constructor).
pub fn select_constructor<'a>(
    descriptor: &'a ClassDescriptor,
    designation_marker: &str,
) -> Result<Option<&'a ConstructorCandidate>, GenerationError> {
    let mut constructors = descriptor.constructors.iter();
    let Some(mut selected) = constructors.next() else {
        return Ok(None);
    };

    for ctor in constructors {
        if !ctor.is_designated() {
            continue;
        }
        if selected.is_designated() {
            return Err(GenerationError::DuplicateDesignation {
                class: descriptor.qualified_name(),
                marker: simple_name(designation_marker).to_string(),
            });
        }
        selected = ctor;
    }

    Ok(Some(selected))
}

/// Map parameter markers to a nullability.
///
/// Markers are compared by simple name, case-insensitively, against the
/// host's non-null and nullable annotations; the first match wins.
pub fn resolve_nullability(markers: &[String], host: &HostConfig) -> Nullability {
    let non_null = host.non_null.simple_name();
    let nullable = host.nullable.simple_name();

    markers
        .iter()
        .find_map(|marker| {
            let name = simple_name(marker);
            if name.eq_ignore_ascii_case(non_null) {
                Some(Nullability::NonNull)
            } else if name.eq_ignore_ascii_case(nullable) {
                Some(Nullability::Nullable)
            } else {
                None
            }
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use alfred_manifest::Manifest;

    use super::*;
    use crate::pipeline::{CompilationContext, phases::discover};

    fn extract(src: &str) -> Result<Vec<ConstructorParameter>, GenerationError> {
        let manifest: Manifest = src.parse().expect("Failed to parse test manifest");
        let ctx = CompilationContext::new(manifest);
        let mut candidate = discover(&ctx.manifest).remove(0).unwrap();
        ExtractPhase.run(&mut candidate, &ctx.environment())?;
        Ok(candidate.parameters.unwrap())
    }

    fn names(params: &[ConstructorParameter]) -> Vec<&str> {
        params.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_no_constructors_yields_empty_list() {
        let params = extract(
            r#"
            [[class]]
            package = "com.example"
            name = "Empty"
            annotations = ["GeneratedProvider"]
        "#,
        )
        .unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_single_constructor_without_designation() {
        let params = extract(
            r#"
            [[class]]
            package = "com.example"
            name = "Feed"
            annotations = ["GeneratedProvider"]

            [[class.constructor]]
            params = [
                { name = "repo", type = "com.example.Repo" },
                { name = "limit", type = "int" },
            ]
        "#,
        )
        .unwrap();
        assert_eq!(names(&params), vec!["repo", "limit"]);
    }

    #[test]
    fn test_later_designated_constructor_wins() {
        let params = extract(
            r#"
            [[class]]
            package = "com.example"
            name = "Feed"
            annotations = ["GeneratedProvider"]

            [[class.constructor]]
            params = [{ name = "a", type = "int" }]

            [[class.constructor]]
            annotations = ["Main"]
            params = [{ name = "b", type = "long" }, { name = "c", type = "long" }]

            [[class.constructor]]
            params = [{ name = "d", type = "int" }]
        "#,
        )
        .unwrap();
        assert_eq!(names(&params), vec!["b", "c"]);
    }

    #[test]
    fn test_first_constructor_designated() {
        let params = extract(
            r#"
            [[class]]
            package = "com.example"
            name = "Feed"
            annotations = ["GeneratedProvider"]

            [[class.constructor]]
            annotations = ["Main"]
            params = [{ name = "a", type = "int" }]

            [[class.constructor]]
            params = [{ name = "b", type = "int" }]
        "#,
        )
        .unwrap();
        assert_eq!(names(&params), vec!["a"]);
    }

    #[test]
    fn test_two_designated_constructors_fail() {
        let result = extract(
            r#"
            [[class]]
            package = "com.example"
            name = "Feed"
            annotations = ["GeneratedProvider"]

            [[class.constructor]]
            params = [{ name = "a", type = "int" }]

            [[class.constructor]]
            annotations = ["Main"]
            params = [{ name = "b", type = "int" }]

            [[class.constructor]]
            annotations = ["Main"]
            params = [{ name = "c", type = "int" }]
        "#,
        );
        let Err(GenerationError::DuplicateDesignation { class, marker }) = result else {
            panic!("expected DuplicateDesignation, got {:?}", result);
        };
        assert_eq!(class, "com.example.Feed");
        assert_eq!(marker, "Main");
    }

    #[test]
    fn test_designated_first_and_later_fail() {
        let result = extract(
            r#"
            [[class]]
            package = "com.example"
            name = "Feed"
            annotations = ["GeneratedProvider"]

            [[class.constructor]]
            annotations = ["Main"]

            [[class.constructor]]
            annotations = ["Main"]
            params = [{ name = "c", type = "int" }]
        "#,
        );
        assert!(matches!(
            result,
            Err(GenerationError::DuplicateDesignation { .. })
        ));
    }

    #[test]
    fn test_nullability_markers() {
        let params = extract(
            r#"
            [[class]]
            package = "com.example"
            name = "Feed"
            annotations = ["GeneratedProvider"]

            [[class.constructor]]
            params = [
                { name = "a", type = "java.lang.String", annotations = ["NonNull"] },
                { name = "b", type = "java.lang.String", annotations = ["androidx.annotation.Nullable"] },
                { name = "c", type = "java.lang.String", annotations = ["Deprecated"] },
                { name = "d", type = "java.lang.String", annotations = ["nonnull", "Nullable"] },
            ]
        "#,
        )
        .unwrap();

        let nullability: Vec<Nullability> = params.iter().map(|p| p.nullability).collect();
        assert_eq!(
            nullability,
            vec![
                Nullability::NonNull,
                Nullability::Nullable,
                Nullability::Unspecified,
                Nullability::NonNull,
            ]
        );
    }

    #[test]
    fn test_parameter_types_are_kept_unerased() {
        let params = extract(
            r#"
            [[class]]
            package = "com.example"
            name = "Feed"
            annotations = ["GeneratedProvider"]

            [[class.constructor]]
            params = [{ name = "items", type = "java.util.List<com.example.Item>" }]
        "#,
        )
        .unwrap();
        assert!(params[0].ty.is_parameterized());
    }
}
