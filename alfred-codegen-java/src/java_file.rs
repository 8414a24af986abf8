//! JavaFile abstraction for structured Java file generation.

use alfred_codegen::builder::CodeBuilder;

use crate::{NameScope, ast::TypeSpec};

/// A Java compilation unit holding one top-level class.
///
/// Imports are not declared by hand: they are derived from the classes the
/// type references, after the type's own names have been reserved.
///
/// # Example
///
/// ```
/// use alfred_codegen_java::{JavaFile, ast::{Modifier, TypeSpec}};
/// use alfred_ir::ClassName;
///
/// let spec = TypeSpec::class(ClassName::new("com.example", "Empty"))
///     .modifiers([Modifier::Public]);
/// let code = JavaFile::new("com.example", spec).render();
///
/// assert_eq!(code, "package com.example;\n\npublic class Empty {\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct JavaFile {
    package: String,
    spec: TypeSpec,
    siblings: Vec<String>,
}

impl JavaFile {
    pub fn new(package: impl Into<String>, spec: TypeSpec) -> Self {
        Self {
            package: package.into(),
            spec,
            siblings: Vec::new(),
        }
    }

    /// Simple names of other classes in the file's package.
    pub fn with_siblings<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.siblings.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn spec(&self) -> &TypeSpec {
        &self.spec
    }

    /// Resolve every class the file mentions.
    pub fn scope(&self) -> NameScope {
        let mut scope = NameScope::new(self.package.clone());
        self.spec.declare(&mut scope);
        for name in &self.siblings {
            scope.sibling(name);
        }

        let mut classes = Vec::new();
        self.spec.collect(&mut classes);
        for class in classes {
            scope.reference(class);
        }
        scope
    }

    /// Render the file with Java indentation (2 spaces).
    pub fn render(&self) -> String {
        let scope = self.scope();
        let imports = scope.imports();

        let builder = CodeBuilder::java()
            .when(!self.package.is_empty(), |b| {
                b.line(&format!("package {};", self.package)).blank()
            })
            .when(!imports.is_empty(), |b| {
                b.each(imports.qualified(), |b, import| {
                    b.line(&format!("import {};", import))
                })
                .blank()
            });

        self.spec.render(builder, &scope).build()
    }

    /// Render the file with a header comment on the first line.
    pub fn render_with_header(&self, header: &str) -> String {
        format!("{}\n{}", header, self.render())
    }
}

#[cfg(test)]
mod tests {
    use alfred_ir::{ClassName, TypeRef};

    use super::*;
    use crate::ast::{Field, Modifier};

    #[test]
    fn test_imports_are_sorted_and_filtered() {
        let spec = TypeSpec::class(ClassName::new("com.example", "Holder"))
            .field(Field::new(TypeRef::class("java.util", "Map"), "map"))
            .field(Field::new(TypeRef::class("android.os", "Bundle"), "bundle"))
            .field(Field::new(TypeRef::class("java.lang", "String"), "name"))
            .field(Field::new(TypeRef::class("com.example", "Item"), "item"))
            .field(Field::new(TypeRef::class("java.util", "List"), "list"));

        let code = JavaFile::new("com.example", spec).render();
        assert_eq!(
            code,
            "package com.example;

import android.os.Bundle;
import java.util.List;
import java.util.Map;

class Holder {
  Map map;

  Bundle bundle;

  String name;

  Item item;

  List list;
}
"
        );
    }

    #[test]
    fn test_same_package_class_qualifies_java_lang() {
        let spec = TypeSpec::class(ClassName::new("com.example", "Holder"))
            .field(Field::new(TypeRef::class("java.lang", "String"), "name"));

        let code = JavaFile::new("com.example", spec.clone()).render();
        assert!(code.contains("  String name;\n"));

        let code = JavaFile::new("com.example", spec)
            .with_siblings(["String"])
            .render();
        assert!(code.contains("  java.lang.String name;\n"));
    }

    #[test]
    fn test_header() {
        let spec = TypeSpec::class(ClassName::new("com.example", "Empty"))
            .modifiers([Modifier::Public, Modifier::Final]);
        let code = JavaFile::new("com.example", spec).render_with_header("// header");
        assert!(code.starts_with("// header\npackage com.example;\n\npublic final class Empty {\n"));
    }
}
