//! Line-oriented text building for generated sources.
//!
//! Language crates lower their AST to [`CodeFragment`]s and feed them to a
//! [`CodeBuilder`], which owns indentation. [`Indent`] fixes both the unit
//! and how far wrapped statements are pushed in.

mod code_builder;
mod fragment;
mod indent;

pub use code_builder::CodeBuilder;
pub use fragment::CodeFragment;
pub use indent::Indent;
