//! Validate phase - structural preconditions, first failure wins.

mod rules;

use alfred_ir::ClassDescriptor;
pub use rules::{BaseTypeRule, ConcreteRule, PublicRule};

use crate::pipeline::{Candidate, Environment, GenerationError, Phase};

/// Name and description of a rule, for `alfred explain`.
#[derive(Debug, Clone)]
pub struct RuleInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A single structural precondition on a candidate class.
pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Check the descriptor, returning the rejection reason on failure.
    fn check(
        &self,
        descriptor: &ClassDescriptor,
        env: &Environment<'_>,
    ) -> Result<(), GenerationError>;

    fn info(&self) -> RuleInfo {
        RuleInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}

/// Phase that runs the structural rules in order.
pub struct ValidatePhase {
    rules: Vec<Box<dyn Rule>>,
}

impl ValidatePhase {
    /// Create a validate phase with the default rules: public, concrete,
    /// extends the host base type.
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(PublicRule),
                Box::new(ConcreteRule),
                Box::new(BaseTypeRule),
            ],
        }
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn rule_info(&self) -> Vec<RuleInfo> {
        self.rules.iter().map(|r| r.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check structural preconditions (public, concrete, extends the host base)"
    }

    fn run(&self, candidate: &mut Candidate, env: &Environment<'_>) -> Result<(), GenerationError> {
        for rule in &self.rules {
            rule.check(&candidate.descriptor, env)?;
        }
        Ok(())
    }
}
