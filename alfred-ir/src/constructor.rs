//! Constructor descriptors.

use serde::Serialize;

use crate::TypeRef;

/// Whether a constructor carries the designation marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Designation {
    /// Marked as the canonical constructor.
    Designated,
    /// No marker; only selected implicitly.
    Implicit,
}

/// A parameter as declared in source, before nullability is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclaredParameter {
    pub ty: TypeRef,
    pub name: String,
    /// Marker names attached to the parameter, in declaration order.
    pub markers: Vec<String>,
}

/// A constructor declared directly on a candidate class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstructorCandidate {
    pub params: Vec<DeclaredParameter>,
    pub designation: Designation,
}

impl ConstructorCandidate {
    pub fn is_designated(&self) -> bool {
        self.designation == Designation::Designated
    }
}

/// Nullability marker resolved for a constructor parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Nullability {
    NonNull,
    Nullable,
    #[default]
    Unspecified,
}

/// A parameter of the selected constructor.
///
/// Order is significant: it defines the factory constructor signature and
/// the forwarding order at every call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstructorParameter {
    pub ty: TypeRef,
    pub name: String,
    pub nullability: Nullability,
}

impl ConstructorParameter {
    pub fn new(ty: TypeRef, name: impl Into<String>, nullability: Nullability) -> Self {
        Self {
            ty,
            name: name.into(),
            nullability,
        }
    }
}
