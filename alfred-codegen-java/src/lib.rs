//! Java code generator for the Alfred provider generator.
//!
//! Turns each [`GenerationUnit`](alfred_ir::GenerationUnit) into a single
//! `<Name>Provider.java` file: a public accessor class with one static
//! `get` overload per host scope, and a nested factory implementing the
//! host's factory interface.

mod generator;
mod java_file;
mod scope;

pub mod ast;
pub mod emit;
pub mod files;

pub use alfred_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use emit::{Artifacts, Emitter};
pub use generator::JavaGenerator;
pub use java_file::JavaFile;
pub use scope::NameScope;
