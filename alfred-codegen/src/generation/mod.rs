//! Output helpers shared by language generators.

mod imports;

pub use imports::ImportCollector;
