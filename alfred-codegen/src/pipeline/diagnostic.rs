//! Messages a round reports back to the caller.

use serde::Serialize;

use super::GenerationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The candidate was rejected or its provider could not be written.
    Error,
    /// Worth a look, but does not affect acceptance.
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message, attributed to the phase that raised it.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub phase: String,
    /// Stable identifier of the failed rule, e.g. `not-public`.
    pub code: Option<&'static str>,
    pub message: String,
    /// Qualified name of the class concerned.
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn error(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, phase, message)
    }

    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, phase, message)
    }


    /// The single error diagnostic for a rejected candidate.
    pub fn rejection(phase: impl Into<String>, error: &GenerationError) -> Self {
        Self {
            code: Some(error.code()),
            ..Self::error(phase, error.to_string()).at(error.class())
        }
    }

    fn new(severity: Severity, phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            phase: phase.into(),
            code: None,
            message: message.into(),
            location: None,
        }
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// `error[not-public]: ...`, falling back to the phase when there is no code.
impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.code {
            Some(code) => code,
            None => &self.phase,
        };
        write!(f, "{}[{}]: {}", self.severity, tag, self.message)
    }
}
