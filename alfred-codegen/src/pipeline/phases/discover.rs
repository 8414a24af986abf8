//! Discovery: marked declarations become candidates.

use alfred_manifest::{ClassKind, Manifest};
use tracing::debug;

use crate::pipeline::{Candidate, GenerationError, PhaseInfo};

/// Discovery runs once per round, before the per-candidate phases.
pub const DISCOVER: PhaseInfo = PhaseInfo {
    name: "discover",
    description: "Collect declarations carrying the generation marker",
};

/// Collect every declaration carrying the marker, in declaration order.
///
/// A marked declaration that is not a class is reported as
/// [`GenerationError::NotAClass`] in its place in the sequence.
pub fn discover(manifest: &Manifest) -> Vec<Result<Candidate, GenerationError>> {
    let generator = &manifest.generator;

    manifest
        .candidates()
        .map(|decl| {
            debug!(class = %decl.qualified_name(), kind = decl.kind.as_str(), "discovered");
            if decl.kind != ClassKind::Class {
                return Err(GenerationError::NotAClass {
                    class: decl.qualified_name(),
                    kind: decl.kind.as_str(),
                    marker: generator.marker.clone(),
                });
            }
            Ok(Candidate::new(decl.descriptor(generator)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovers_marked_classes_in_order() {
        let manifest: Manifest = r#"
            [[class]]
            package = "com.example"
            name = "Second"
            annotations = ["GeneratedProvider"]

            [[class]]
            package = "com.example"
            name = "Unmarked"

            [[class]]
            package = "com.example"
            name = "First"
            annotations = ["com.hadisatrio.alfred.GeneratedProvider"]
        "#
        .parse()
        .unwrap();

        let names: Vec<String> = discover(&manifest)
            .into_iter()
            .map(|c| c.unwrap().qualified_name())
            .collect();
        assert_eq!(names, vec!["com.example.Second", "com.example.First"]);
    }

    #[test]
    fn test_marked_interface_is_not_a_class() {
        let manifest: Manifest = r#"
            [[class]]
            package = "com.example"
            name = "Contract"
            kind = "interface"
            annotations = ["GeneratedProvider"]
        "#
        .parse()
        .unwrap();

        let discovered = discover(&manifest);
        assert_eq!(discovered.len(), 1);
        let err = discovered[0].as_ref().unwrap_err();
        assert!(matches!(err, GenerationError::NotAClass { kind: "interface", .. }));
    }

    #[test]
    fn test_custom_marker() {
        let manifest: Manifest = r#"
            [generator]
            marker = "AutoFactory"

            [[class]]
            name = "Old"
            annotations = ["GeneratedProvider"]

            [[class]]
            name = "New"
            annotations = ["AutoFactory"]
        "#
        .parse()
        .unwrap();

        let discovered = discover(&manifest);
        assert_eq!(discovered.len(), 1);
        assert_eq!(discovered[0].as_ref().unwrap().qualified_name(), "New");
    }
}
