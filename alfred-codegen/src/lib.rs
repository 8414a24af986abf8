//! Pipeline and shared code generation utilities for the Alfred provider generator.
//!
//! This crate provides the language-agnostic half of the generator; the
//! Java emitter lives in `alfred-codegen-java`.
//!
//! # Module Organization
//!
//! - [`pipeline`] - Discovery, validation, extraction and naming of candidates
//! - [`builder`] - Indented text output (CodeBuilder, CodeFragment, Indent)
//! - [`generation`] - Output helpers (ImportCollector)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, PreviewFile)

pub mod builder;
pub mod generation;
pub mod language;
pub mod pipeline;
