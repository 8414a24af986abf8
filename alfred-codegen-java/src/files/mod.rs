//! Generated file definitions.

mod provider_java;

pub use provider_java::ProviderJava;
