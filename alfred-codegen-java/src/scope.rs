//! Name resolution for a single Java source file.
//!
//! Every class a file mentions is written either by its simple (or nested
//! relative) name, or fully qualified when the simple name is already taken.
//! Classes in `java.lang` and in the file's own package are visible without
//! an import. A class of the file's own package hides a `java.lang` class
//! with the same simple name.

use std::collections::{HashMap, HashSet};

use alfred_codegen::generation::ImportCollector;
use alfred_ir::{ClassName, TypeRef, Wildcard};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Claim {
    /// A type declared in the file itself.
    Declared(ClassName),
    /// A top-level class visible by simple name (imported or implicit).
    Visible(ClassName),
    /// A type variable.
    Variable,
}

/// Decides how each referenced class is spelled in one file.
#[derive(Debug, Clone)]
pub struct NameScope {
    package: String,
    claims: HashMap<String, Claim>,
    /// Simple names of other classes in `package`.
    siblings: HashSet<String>,
    imports: ImportCollector,
}

impl NameScope {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            claims: HashMap::new(),
            siblings: HashSet::new(),
            imports: ImportCollector::new(),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Register a type declared in the file.
    ///
    /// Declarations take precedence over any referenced class, so they must
    /// be registered before [`reference`](Self::reference) is called.
    pub fn declare(&mut self, class: &ClassName) {
        self.claims
            .insert(class.simple_name().to_string(), Claim::Declared(class.clone()));
    }

    /// Register a class of the file's package by simple name, whether or
    /// not the file refers to it.
    pub fn sibling(&mut self, simple_name: &str) {
        self.siblings.insert(simple_name.to_string());
    }

    /// Register a type variable name.
    pub fn declare_variable(&mut self, name: &str) {
        self.claims.insert(name.to_string(), Claim::Variable);
    }

    /// Record a reference to `class`, importing it when its simple name is free.
    ///
    /// The first class to claim a simple name wins; later classes with the
    /// same simple name are written fully qualified.
    pub fn reference(&mut self, class: &ClassName) {
        if self.is_declared(class) {
            return;
        }

        let top = class.top_level();
        let key = top.simple_name().to_string();
        if self.claims.contains_key(&key) {
            return;
        }
        if top.is_java_lang() && self.siblings.contains(&key) {
            return;
        }

        if !top.package.is_empty() && top.package != self.package && !top.is_java_lang() {
            self.imports.add(&top.package, &key);
        }
        self.claims.insert(key, Claim::Visible(top));
    }

    /// Source spelling of a class.
    pub fn name(&self, class: &ClassName) -> String {
        if self.is_declared(class) {
            return class.simple_name().to_string();
        }

        let top = class.top_level();
        match self.claims.get(top.simple_name()) {
            Some(Claim::Visible(visible)) | Some(Claim::Declared(visible)) if *visible == top => {
                class.relative_name()
            }
            _ => class.canonical_name(),
        }
    }

    /// Source spelling of a type.
    pub fn type_name(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(p) => p.keyword().to_string(),
            TypeRef::Class(class) => self.name(class),
            TypeRef::Parameterized { raw, args } => {
                let args: Vec<String> = args.iter().map(|arg| self.type_name(arg)).collect();
                format!("{}<{}>", self.name(raw), args.join(", "))
            }
            TypeRef::Array(component) => format!("{}[]", self.type_name(component)),
            TypeRef::Variable(name) => name.clone(),
            TypeRef::Wildcard(Wildcard::Unbounded) => "?".to_string(),
            TypeRef::Wildcard(Wildcard::Extends(bound)) => {
                format!("? extends {}", self.type_name(bound))
            }
            TypeRef::Wildcard(Wildcard::Super(bound)) => {
                format!("? super {}", self.type_name(bound))
            }
        }
    }

    /// Imports required by the references recorded so far, sorted.
    pub fn imports(&self) -> ImportCollector {
        let mut imports = self.imports.clone();
        imports.sort();
        imports
    }

    fn is_declared(&self, class: &ClassName) -> bool {
        matches!(
            self.claims.get(class.simple_name()),
            Some(Claim::Declared(declared)) if declared == class
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> NameScope {
        let mut scope = NameScope::new("com.example.feed");
        let accessor = ClassName::new("com.example.feed", "FeedViewModelProvider");
        scope.declare(&accessor);
        scope.declare(&accessor.nested("FeedViewModelFactory"));
        scope.declare_variable("T");
        scope
    }

    #[test]
    fn test_imports_other_packages() {
        let mut scope = scope();
        let list = ClassName::new("java.util", "List");
        scope.reference(&list);

        assert_eq!(scope.name(&list), "List");
        let imports: Vec<String> = scope.imports().qualified().collect();
        assert_eq!(imports, ["java.util.List"]);
    }

    #[test]
    fn test_java_lang_and_same_package_not_imported() {
        let mut scope = scope();
        let string = ClassName::new("java.lang", "String");
        let repo = ClassName::new("com.example.feed", "FeedRepository");
        scope.reference(&string);
        scope.reference(&repo);

        assert_eq!(scope.name(&string), "String");
        assert_eq!(scope.name(&repo), "FeedRepository");
        assert!(scope.imports().is_empty());
    }

    #[test]
    fn test_nested_class_imports_outer() {
        let mut scope = scope();
        let factory = ClassName::new("android.arch.lifecycle", "ViewModelProvider").nested("Factory");
        scope.reference(&factory);

        assert_eq!(scope.name(&factory), "ViewModelProvider.Factory");
        let imports: Vec<String> = scope.imports().qualified().collect();
        assert_eq!(imports, ["android.arch.lifecycle.ViewModelProvider"]);
    }

    #[test]
    fn test_conflicting_simple_names_are_qualified() {
        let mut scope = scope();
        let first = ClassName::new("com.example.a", "Item");
        let second = ClassName::new("com.example.b", "Item");
        scope.reference(&first);
        scope.reference(&second);

        assert_eq!(scope.name(&first), "Item");
        assert_eq!(scope.name(&second), "com.example.b.Item");
        let imports: Vec<String> = scope.imports().qualified().collect();
        assert_eq!(imports, ["com.example.a.Item"]);
    }

    #[test]
    fn test_declared_names_shadow_references() {
        let mut scope = scope();
        let foreign = ClassName::new("com.other", "FeedViewModelFactory");
        let variable = ClassName::new("com.other", "T");
        scope.reference(&foreign);
        scope.reference(&variable);

        assert_eq!(scope.name(&foreign), "com.other.FeedViewModelFactory");
        assert_eq!(scope.name(&variable), "com.other.T");
        assert!(scope.imports().is_empty());
    }

    #[test]
    fn test_sibling_hides_java_lang() {
        let mut scope = scope();
        scope.sibling("Override");
        let java_override = ClassName::new("java.lang", "Override");
        let string = ClassName::new("java.lang", "String");
        scope.reference(&java_override);
        scope.reference(&string);

        assert_eq!(scope.name(&java_override), "java.lang.Override");
        assert_eq!(scope.name(&string), "String");

        // The sibling itself still resolves by simple name
        let local = ClassName::new("com.example.feed", "Override");
        scope.reference(&local);
        assert_eq!(scope.name(&local), "Override");
        assert!(scope.imports().is_empty());
    }

    #[test]
    fn test_type_name() {
        let mut scope = scope();
        let ty: TypeRef = "java.util.Map<java.lang.String, java.util.List<? extends com.example.feed.Item>>[]"
            .parse()
            .unwrap();
        let mut classes = Vec::new();
        ty.referenced_classes(&mut classes);
        for class in classes {
            scope.reference(class);
        }

        assert_eq!(
            scope.type_name(&ty),
            "Map<String, List<? extends Item>>[]"
        );
    }
}
