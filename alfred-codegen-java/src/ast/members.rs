//! Fields, parameters and methods.

use alfred_codegen::builder::{CodeBuilder, CodeFragment};
use alfred_ir::{ClassName, TypeRef};

use super::{Statement, stmt::body_fragments};
use crate::NameScope;

/// A Java modifier keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Final,
    Abstract,
}

impl Modifier {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Static => "static",
            Self::Final => "final",
            Self::Abstract => "abstract",
        }
    }
}

/// Modifiers followed by a trailing space, or nothing.
pub(crate) fn modifier_prefix(modifiers: &[Modifier]) -> String {
    modifiers
        .iter()
        .map(|m| format!("{} ", m.keyword()))
        .collect()
}

/// A method or constructor parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub annotations: Vec<ClassName>,
    pub ty: TypeRef,
    pub name: String,
}

impl Param {
    pub fn new(ty: TypeRef, name: impl Into<String>) -> Self {
        Self {
            annotations: Vec::new(),
            ty,
            name: name.into(),
        }
    }

    pub fn annotated(mut self, annotation: ClassName) -> Self {
        self.annotations.push(annotation);
        self
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a ClassName>) {
        out.extend(&self.annotations);
        self.ty.referenced_classes(out);
    }

    fn render(&self, scope: &NameScope) -> String {
        let annotations: String = self
            .annotations
            .iter()
            .map(|a| format!("@{} ", scope.name(a)))
            .collect();
        format!("{}{} {}", annotations, scope.type_name(&self.ty), self.name)
    }
}

/// A field declaration without initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub modifiers: Vec<Modifier>,
    pub ty: TypeRef,
    pub name: String,
}

impl Field {
    pub fn new(ty: TypeRef, name: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            ty,
            name: name.into(),
        }
    }

    pub fn modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub(crate) fn collect<'a>(&'a self, out: &mut Vec<&'a ClassName>) {
        self.ty.referenced_classes(out);
    }

    pub fn render(&self, builder: CodeBuilder, scope: &NameScope) -> CodeBuilder {
        builder.line(&format!(
            "{}{} {};",
            modifier_prefix(&self.modifiers),
            scope.type_name(&self.ty),
            self.name
        ))
    }
}

/// A method type variable, e.g. `T extends Base`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeVar {
    pub name: String,
    pub bound: Option<TypeRef>,
}

impl TypeVar {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bound: None,
        }
    }

    pub fn bounded(name: impl Into<String>, bound: TypeRef) -> Self {
        Self {
            name: name.into(),
            bound: Some(bound),
        }
    }

    /// The variable as a type.
    pub fn as_type(&self) -> TypeRef {
        TypeRef::Variable(self.name.clone())
    }

    fn render(&self, scope: &NameScope) -> String {
        match &self.bound {
            Some(bound) => format!("{} extends {}", self.name, scope.type_name(bound)),
            None => self.name.clone(),
        }
    }
}

/// A method, or a constructor when it has no return type.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    name: String,
    annotations: Vec<ClassName>,
    modifiers: Vec<Modifier>,
    type_vars: Vec<TypeVar>,
    returns: Option<TypeRef>,
    params: Vec<Param>,
    body: Vec<Statement>,
    is_constructor: bool,
}

impl Method {
    /// A `void` method.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            modifiers: Vec::new(),
            type_vars: Vec::new(),
            returns: None,
            params: Vec::new(),
            body: Vec::new(),
            is_constructor: false,
        }
    }

    /// A constructor for the class with the given simple name.
    pub fn constructor(class: impl Into<String>) -> Self {
        Self {
            is_constructor: true,
            ..Self::new(class)
        }
    }

    pub fn annotation(mut self, annotation: ClassName) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn type_var(mut self, var: TypeVar) -> Self {
        self.type_vars.push(var);
        self
    }

    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.returns = Some(ty);
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn statement(mut self, statement: Statement) -> Self {
        self.body.push(statement);
        self
    }

    pub fn statements(mut self, statements: impl IntoIterator<Item = Statement>) -> Self {
        self.body.extend(statements);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_constructor(&self) -> bool {
        self.is_constructor
    }

    pub fn type_vars(&self) -> &[TypeVar] {
        &self.type_vars
    }

    pub(crate) fn collect<'a>(&'a self, out: &mut Vec<&'a ClassName>) {
        out.extend(&self.annotations);
        for var in &self.type_vars {
            if let Some(bound) = &var.bound {
                bound.referenced_classes(out);
            }
        }
        if let Some(returns) = &self.returns {
            returns.referenced_classes(out);
        }
        self.params.iter().for_each(|p| p.collect(out));
        self.body.iter().for_each(|s| s.collect(out));
    }

    pub fn render(&self, builder: CodeBuilder, scope: &NameScope) -> CodeBuilder {
        let builder = self
            .annotations
            .iter()
            .fold(builder, |b, a| b.line(&format!("@{}", scope.name(a))));

        let type_vars = if self.type_vars.is_empty() {
            String::new()
        } else {
            let vars: Vec<String> = self.type_vars.iter().map(|v| v.render(scope)).collect();
            format!("<{}> ", vars.join(", "))
        };

        let returns = match (&self.returns, self.is_constructor) {
            (_, true) => String::new(),
            (Some(ty), false) => format!("{} ", scope.type_name(ty)),
            (None, false) => "void ".to_string(),
        };

        let params: Vec<String> = self.params.iter().map(|p| p.render(scope)).collect();
        let signature = format!(
            "{}{}{}{}({}) {{",
            modifier_prefix(&self.modifiers),
            type_vars,
            returns,
            self.name,
            params.join(", ")
        );

        builder.fragments([CodeFragment::block(
            signature,
            body_fragments(&self.body, scope),
            Some("}"),
        )])
    }
}
