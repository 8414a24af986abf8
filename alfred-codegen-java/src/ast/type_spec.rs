//! Class declarations.

use alfred_codegen::builder::CodeBuilder;
use alfred_ir::{ClassName, TypeRef};

use super::{Field, Method, Modifier, members::modifier_prefix};
use crate::NameScope;

/// Builder for a Java class, possibly with nested classes.
///
/// Members render in declaration-kind order: fields, constructors, methods,
/// then nested types, separated by blank lines.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    name: ClassName,
    modifiers: Vec<Modifier>,
    implements: Vec<TypeRef>,
    fields: Vec<Field>,
    methods: Vec<Method>,
    types: Vec<TypeSpec>,
}

impl TypeSpec {
    pub fn class(name: ClassName) -> Self {
        Self {
            name,
            modifiers: Vec::new(),
            implements: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            types: Vec::new(),
        }
    }

    pub fn modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn implements(mut self, ty: TypeRef) -> Self {
        self.implements.push(ty);
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Add a method or constructor.
    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn nested(mut self, spec: TypeSpec) -> Self {
        self.types.push(spec);
        self
    }

    pub fn name(&self) -> &ClassName {
        &self.name
    }

    /// Register this class, its nested classes and their method type
    /// variables as declared names.
    pub fn declare(&self, scope: &mut NameScope) {
        scope.declare(&self.name);
        for method in &self.methods {
            for var in method.type_vars() {
                scope.declare_variable(&var.name);
            }
        }
        self.types.iter().for_each(|t| t.declare(scope));
    }

    /// Collect referenced classes in source order.
    pub fn collect<'a>(&'a self, out: &mut Vec<&'a ClassName>) {
        for ty in &self.implements {
            ty.referenced_classes(out);
        }
        self.fields.iter().for_each(|f| f.collect(out));
        self.constructors().for_each(|m| m.collect(out));
        self.plain_methods().for_each(|m| m.collect(out));
        self.types.iter().for_each(|t| t.collect(out));
    }

    fn constructors(&self) -> impl Iterator<Item = &Method> {
        self.methods.iter().filter(|m| m.is_constructor())
    }

    fn plain_methods(&self) -> impl Iterator<Item = &Method> {
        self.methods.iter().filter(|m| !m.is_constructor())
    }

    pub fn render(&self, builder: CodeBuilder, scope: &NameScope) -> CodeBuilder {
        let implements = if self.implements.is_empty() {
            String::new()
        } else {
            let types: Vec<String> = self.implements.iter().map(|t| scope.type_name(t)).collect();
            format!(" implements {}", types.join(", "))
        };

        let header = format!(
            "{}class {}{} {{",
            modifier_prefix(&self.modifiers),
            self.name.simple_name(),
            implements
        );

        let mut builder = builder.line(&header).indent();
        let mut first = true;
        let mut separate = |b: CodeBuilder| {
            if std::mem::replace(&mut first, false) {
                b
            } else {
                b.blank()
            }
        };

        for field in &self.fields {
            builder = field.render(separate(builder), scope);
        }
        for method in self.constructors().chain(self.plain_methods()) {
            builder = method.render(separate(builder), scope);
        }
        for spec in &self.types {
            builder = spec.render(separate(builder), scope);
        }

        builder.dedent().line("}")
    }
}
