//! Candidate pipeline.
//!
//! One round runs discovery over the manifest, then each discovered
//! candidate through the phases in order:
//!
//! ```text
//! discover → validate → extract → resolve → GenerationUnit
//! ```
//!
//! - Explicit phase boundaries with plugin hooks before/after each phase
//! - One error diagnostic per rejected candidate
//! - Round-wide failure policy (abort the round or skip the candidate)
//!
//! # Example
//!
//! ```ignore
//! use alfred_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(manifest)?;
//! if ctx.can_emit() {
//!     let generator = JavaGenerator::from_context(&ctx);
//!     generator.generate(out)?;
//! }
//! ```

mod candidate;
mod context;
mod diagnostic;
mod error;
mod hierarchy;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use candidate::Candidate;
pub use context::{CompilationContext, Environment};
pub use diagnostic::{Diagnostic, Severity};
pub use error::GenerationError;
pub use hierarchy::{Ancestry, MAX_HIERARCHY_DEPTH, TypeHierarchy, walk_superclasses};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
