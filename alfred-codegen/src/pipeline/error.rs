//! Per-candidate generation errors.

use std::path::PathBuf;

use thiserror::Error;

/// Why a candidate was rejected or could not be persisted.
///
/// Every variant names the class it concerns, so a single diagnostic is
/// enough to locate the problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("only classes can be annotated with @{marker}; '{class}' is declared as {kind}")]
    NotAClass {
        class: String,
        kind: &'static str,
        marker: String,
    },

    #[error("'{class}' must be public to have a provider generated")]
    NotPublic { class: String },

    #[error("'{class}' is abstract and cannot be instantiated by a factory")]
    IsAbstract { class: String },

    #[error("'{class}' must extend {base}")]
    MissingRequiredBase { class: String, base: String },

    #[error("'{class}' has more than one constructor annotated with @{marker}")]
    DuplicateDesignation { class: String, marker: String },

    #[error("'{class}' is in the unnamed package; generated providers need a package")]
    NoPackageName { class: String },

    #[error("generated class {generated} for '{class}' collides with {other}")]
    NameCollision {
        class: String,
        generated: String,
        other: String,
    },

    #[error("failed to write {path} for '{class}': {reason}", path = .path.display())]
    PersistenceFailure {
        class: String,
        path: PathBuf,
        reason: String,
    },
}

impl GenerationError {
    /// Qualified name of the class the error concerns.
    pub fn class(&self) -> &str {
        match self {
            Self::NotAClass { class, .. }
            | Self::NotPublic { class }
            | Self::IsAbstract { class }
            | Self::MissingRequiredBase { class, .. }
            | Self::DuplicateDesignation { class, .. }
            | Self::NoPackageName { class }
            | Self::NameCollision { class, .. }
            | Self::PersistenceFailure { class, .. } => class,
        }
    }

    /// Short rule identifier, stable across releases.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotAClass { .. } => "not-a-class",
            Self::NotPublic { .. } => "not-public",
            Self::IsAbstract { .. } => "is-abstract",
            Self::MissingRequiredBase { .. } => "missing-required-base",
            Self::DuplicateDesignation { .. } => "duplicate-designation",
            Self::NoPackageName { .. } => "no-package-name",
            Self::NameCollision { .. } => "name-collision",
            Self::PersistenceFailure { .. } => "persistence-failure",
        }
    }
}
