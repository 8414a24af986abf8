//! Type-information provider used to walk superclass chains.

use std::collections::{HashMap, HashSet};

use alfred_ir::{ClassName, TypeRef};
use alfred_manifest::Manifest;

/// Upper bound on the number of superclasses followed from a candidate.
pub const MAX_HIERARCHY_DEPTH: usize = 64;

/// Answers "what does this class extend?" for classes the build knows about.
pub trait TypeHierarchy {
    /// Direct superclass of `class`, or `None` when the class declares no
    /// superclass or is not known.
    fn superclass(&self, class: &ClassName) -> Option<TypeRef>;
}

impl TypeHierarchy for Manifest {
    fn superclass(&self, class: &ClassName) -> Option<TypeRef> {
        self.find_class(class).and_then(|decl| decl.extends.clone())
    }
}

impl TypeHierarchy for HashMap<ClassName, TypeRef> {
    fn superclass(&self, class: &ClassName) -> Option<TypeRef> {
        self.get(class).cloned()
    }
}

/// How a superclass walk ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ancestry {
    /// The chain reaches the requested base type.
    Reaches,
    /// The chain ended (no superclass, `java.lang.Object`, or an unknown type).
    Ends,
    /// A class was visited twice.
    Cycle(ClassName),
    /// The chain is longer than [`MAX_HIERARCHY_DEPTH`].
    TooDeep,
}

/// Walk the chain starting at `start`'s direct superclass and report whether
/// it reaches `base`. Types are compared on erased qualified names.
pub fn walk_superclasses(
    start: &ClassName,
    superclass: Option<&TypeRef>,
    base: &ClassName,
    hierarchy: &dyn TypeHierarchy,
) -> Ancestry {
    let target = base.canonical_name();
    let mut visited = HashSet::from([start.canonical_name()]);
    let mut current = superclass.cloned();

    for _ in 0..MAX_HIERARCHY_DEPTH {
        let Some(class) = current.as_ref().and_then(|ty| ty.erasure().raw_class().cloned()) else {
            return Ancestry::Ends;
        };

        let name = class.canonical_name();
        if name == target {
            return Ancestry::Reaches;
        }
        if name == "java.lang.Object" {
            return Ancestry::Ends;
        }
        if !visited.insert(name) {
            return Ancestry::Cycle(class);
        }

        current = hierarchy.superclass(&class);
    }

    Ancestry::TooDeep
}
