//! `[generator]` section: markers, naming and failure behaviour.

use std::{fmt, str::FromStr};

use alfred_core::simple_name;
use serde::{Deserialize, Serialize};

/// How the generated factory instantiates the target class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstructionStrategy {
    /// `new Target(fields...)`, checked entirely at generation time.
    #[default]
    Direct,
    /// Reflective construction guarded by an assignability check.
    CheckedDynamic,
}

impl ConstructionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::CheckedDynamic => "checked-dynamic",
        }
    }
}

impl fmt::Display for ConstructionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConstructionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "direct" => Ok(Self::Direct),
            "checked-dynamic" | "dynamic" => Ok(Self::CheckedDynamic),
            _ => Err(format!(
                "unknown strategy '{}', expected 'direct' or 'checked-dynamic'",
                s
            )),
        }
    }
}

/// What a failing candidate does to the rest of the round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Stop at the first error; nothing is written.
    #[default]
    AbortRound,
    /// Report the failing candidate and keep going with the others.
    SkipCandidate,
}

impl FailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AbortRound => "abort-round",
            Self::SkipCandidate => "skip-candidate",
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generator settings from `[generator]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Annotation that marks a class as a candidate.
    pub marker: String,
    /// Annotation that designates the canonical constructor.
    pub designation_marker: String,
    pub strategy: ConstructionStrategy,
    pub on_error: FailurePolicy,
    pub factory_suffix: String,
    pub provider_suffix: String,
    /// Name of the static accessor methods.
    pub accessor_method: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            marker: "GeneratedProvider".to_string(),
            designation_marker: "Main".to_string(),
            strategy: ConstructionStrategy::default(),
            on_error: FailurePolicy::default(),
            factory_suffix: "Factory".to_string(),
            provider_suffix: "Provider".to_string(),
            accessor_method: "get".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Whether an annotation is the candidate marker.
    ///
    /// Annotations are compared by simple name, so `GeneratedProvider` and
    /// `com.example.GeneratedProvider` both match.
    pub fn is_marker(&self, annotation: &str) -> bool {
        simple_name(annotation) == simple_name(&self.marker)
    }

    /// Whether an annotation designates the canonical constructor.
    pub fn is_designation(&self, annotation: &str) -> bool {
        simple_name(annotation) == simple_name(&self.designation_marker)
    }
}
