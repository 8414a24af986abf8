//! Built-in structural rules.

use alfred_ir::ClassDescriptor;
use tracing::warn;

use super::Rule;
use crate::pipeline::{
    Ancestry, Environment, GenerationError, MAX_HIERARCHY_DEPTH, walk_superclasses,
};

/// The candidate must be public.
pub struct PublicRule;

impl Rule for PublicRule {
    fn name(&self) -> &'static str {
        "public"
    }

    fn description(&self) -> &'static str {
        "Candidate classes must be public"
    }

    fn check(
        &self,
        descriptor: &ClassDescriptor,
        _env: &Environment<'_>,
    ) -> Result<(), GenerationError> {
        if descriptor.is_public() {
            Ok(())
        } else {
            Err(GenerationError::NotPublic {
                class: descriptor.qualified_name(),
            })
        }
    }
}

/// The candidate must not be abstract.
pub struct ConcreteRule;

impl Rule for ConcreteRule {
    fn name(&self) -> &'static str {
        "concrete"
    }

    fn description(&self) -> &'static str {
        "Candidate classes must not be abstract"
    }

    fn check(
        &self,
        descriptor: &ClassDescriptor,
        _env: &Environment<'_>,
    ) -> Result<(), GenerationError> {
        if descriptor.is_abstract {
            Err(GenerationError::IsAbstract {
                class: descriptor.qualified_name(),
            })
        } else {
            Ok(())
        }
    }
}

/// The superclass chain must reach the host base type.
pub struct BaseTypeRule;

impl Rule for BaseTypeRule {
    fn name(&self) -> &'static str {
        "base-type"
    }

    fn description(&self) -> &'static str {
        "Candidate classes must extend the host base type"
    }

    fn check(
        &self,
        descriptor: &ClassDescriptor,
        env: &Environment<'_>,
    ) -> Result<(), GenerationError> {
        let base = &env.host.base;
        let ancestry = walk_superclasses(
            &descriptor.name,
            descriptor.superclass.as_ref(),
            base,
            env.hierarchy,
        );

        match ancestry {
            Ancestry::Reaches => return Ok(()),
            Ancestry::Ends => {}
            Ancestry::Cycle(at) => {
                warn!(class = %descriptor.name, at = %at, "superclass chain contains a cycle");
                env.warn(
                    "validate",
                    descriptor.qualified_name(),
                    format!("superclass chain is cyclic at '{}'", at.canonical_name()),
                );
            }
            Ancestry::TooDeep => {
                warn!(
                    class = %descriptor.name,
                    limit = MAX_HIERARCHY_DEPTH,
                    "superclass chain exceeds the depth limit"
                );
                env.warn(
                    "validate",
                    descriptor.qualified_name(),
                    format!(
                        "superclass chain is longer than {} classes",
                        MAX_HIERARCHY_DEPTH
                    ),
                );
            }
        }

        Err(GenerationError::MissingRequiredBase {
            class: descriptor.qualified_name(),
            base: base.canonical_name(),
        })
    }
}
