//! Intermediate representation types for the Alfred provider generator.
//!
//! These types are the snapshot the pipeline takes of each candidate class.
//!
//! # Architecture
//!
//! ```text
//! alfred.toml (TOML) → alfred-manifest (parsing) → alfred-ir (descriptors) → codegen
//! ```
//!
//! The IR is target-agnostic apart from [`TypeRef`], which models Java type
//! syntax because that is what the declarations describe.

mod class;
mod constructor;
mod types;

pub use class::{ClassDescriptor, GeneratedNames, GenerationUnit, Visibility};
pub use constructor::{
    ConstructorCandidate, ConstructorParameter, DeclaredParameter, Designation, Nullability,
};
pub use types::{ClassName, Primitive, TypeParseError, TypeRef, Wildcard};
