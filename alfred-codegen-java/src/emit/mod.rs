//! Factory and accessor synthesis.
//!
//! Both artifacts are built as [`TypeSpec`] trees from a [`GenerationUnit`];
//! the factory is nested inside the accessor so one file holds both.

mod accessor;
mod factory;

use alfred_ir::{ClassName, ConstructorParameter, GenerationUnit, Nullability};
use alfred_manifest::{ConstructionStrategy, GeneratorConfig, HostConfig};

pub use accessor::accessor;
pub use factory::factory;

use crate::{JavaFile, ast::{Param, TypeSpec}};

/// Name of the `create` parameter carrying the requested class.
pub(crate) const MODEL_CLASS: &str = "modelClass";

pub(crate) fn java_lang(name: &str) -> ClassName {
    ClassName::new("java.lang", name)
}

/// The parameter with its nullability annotation reattached.
pub(crate) fn annotated_param(param: &ConstructorParameter, host: &HostConfig) -> Param {
    let spec = Param::new(param.ty.clone(), &param.name);
    match param.nullability {
        Nullability::NonNull => spec.annotated(host.non_null.clone()),
        Nullability::Nullable => spec.annotated(host.nullable.clone()),
        Nullability::Unspecified => spec,
    }
}

/// The two artifacts generated for one unit.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub factory: TypeSpec,
    pub accessor: TypeSpec,
}

impl Artifacts {
    /// Nest the factory in the accessor and wrap both in a file.
    pub fn into_file(self, package: impl Into<String>) -> JavaFile {
        JavaFile::new(package, self.accessor.nested(self.factory))
    }
}

/// Builds factory/accessor pairs against one host configuration.
#[derive(Debug, Clone)]
pub struct Emitter<'a> {
    host: &'a HostConfig,
    strategy: ConstructionStrategy,
    accessor_method: &'a str,
}

impl<'a> Emitter<'a> {
    pub fn new(host: &'a HostConfig, generator: &'a GeneratorConfig) -> Self {
        Self {
            host,
            strategy: generator.strategy,
            accessor_method: &generator.accessor_method,
        }
    }

    /// Override the construction strategy.
    pub fn with_strategy(mut self, strategy: ConstructionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> ConstructionStrategy {
        self.strategy
    }

    pub fn emit(&self, unit: &GenerationUnit) -> Artifacts {
        Artifacts {
            factory: factory(unit, self.host, self.strategy),
            accessor: accessor(unit, self.host, self.accessor_method),
        }
    }

    /// The complete source file for a unit.
    pub fn file(&self, unit: &GenerationUnit) -> JavaFile {
        self.emit(unit).into_file(unit.package.clone())
    }
}
