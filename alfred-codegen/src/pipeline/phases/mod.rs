//! Built-in pipeline phases.
//!
//! - [`discover`] - collects marked declarations (runs once per round)
//! - [`ValidatePhase`] - structural preconditions
//! - [`ExtractPhase`] - constructor selection and parameter metadata
//! - [`ResolvePhase`] - output package and generated names

mod discover;
mod extract;
mod resolve;
mod validate;

pub use discover::{DISCOVER, discover};
pub use extract::{ExtractPhase, resolve_nullability, select_constructor};
pub use resolve::ResolvePhase;
pub use validate::{BaseTypeRule, ConcreteRule, PublicRule, Rule, RuleInfo, ValidatePhase};
