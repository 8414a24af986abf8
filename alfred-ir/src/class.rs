//! Class-level descriptors.

use serde::Serialize;

use crate::{ClassName, ConstructorCandidate, ConstructorParameter, TypeRef};

/// Declared visibility of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    Public,
    Protected,
    PackagePrivate,
    Private,
}

/// Snapshot of a candidate class taken at discovery time.
#[derive(Debug, Clone, Serialize)]
pub struct ClassDescriptor {
    /// Class identity (package plus nested names).
    pub name: ClassName,
    /// Declaring package, `None` for the unnamed package.
    pub package: Option<String>,
    pub visibility: Visibility,
    pub is_abstract: bool,
    /// Direct superclass; the rest of the chain is resolved on demand.
    pub superclass: Option<TypeRef>,
    /// Constructors declared directly on the class, in declaration order.
    pub constructors: Vec<ConstructorCandidate>,
}

impl ClassDescriptor {
    pub fn simple_name(&self) -> &str {
        self.name.simple_name()
    }

    pub fn qualified_name(&self) -> String {
        self.name.canonical_name()
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// Names of the two artifacts generated for a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedNames {
    /// Factory class, nested inside the accessor.
    pub factory: String,
    /// Public accessor class.
    pub accessor: String,
}

/// A candidate that passed every pipeline phase and is ready for emission.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationUnit {
    pub descriptor: ClassDescriptor,
    /// Parameters of the selected constructor, in declaration order.
    pub parameters: Vec<ConstructorParameter>,
    /// Output package (always non-empty).
    pub package: String,
    pub names: GeneratedNames,
}

impl GenerationUnit {
    /// Class name of the generated accessor.
    pub fn accessor_class(&self) -> ClassName {
        ClassName::new(self.package.clone(), self.names.accessor.clone())
    }

    /// Class name of the generated factory (nested in the accessor).
    pub fn factory_class(&self) -> ClassName {
        self.accessor_class().nested(self.names.factory.clone())
    }
}
