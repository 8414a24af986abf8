//! Per-candidate state carried through the phases.

use alfred_ir::{ClassDescriptor, ConstructorParameter, GeneratedNames, GenerationUnit};
use serde::Serialize;

/// A discovered candidate and everything the phases have derived for it.
///
/// Phases fill the optional fields in order; once all are set the candidate
/// becomes a [`GenerationUnit`].
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub descriptor: ClassDescriptor,
    /// Set by the extract phase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ConstructorParameter>>,
    /// Set by the resolve phase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<GeneratedNames>,
}

impl Candidate {
    pub fn new(descriptor: ClassDescriptor) -> Self {
        Self {
            descriptor,
            parameters: None,
            package: None,
            names: None,
        }
    }

    pub fn qualified_name(&self) -> String {
        self.descriptor.qualified_name()
    }

    /// Finish the candidate, if every phase has contributed its part.
    pub fn into_unit(self) -> Option<GenerationUnit> {
        Some(GenerationUnit {
            parameters: self.parameters?,
            package: self.package?,
            names: self.names?,
            descriptor: self.descriptor,
        })
    }
}
