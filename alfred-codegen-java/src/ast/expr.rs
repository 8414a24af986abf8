//! Java expressions.

use alfred_ir::{ClassName, TypeRef};

use crate::NameScope;

/// A Java expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A local variable, parameter or unqualified field name.
    Name(String),
    /// `this`
    This,
    /// `target.name`
    Field { target: Box<Expr>, name: String },
    /// A class used as a static call target.
    Type(ClassName),
    /// `new Class(args)`
    New { class: ClassName, args: Vec<Expr> },
    /// `(Type) expr`
    Cast { ty: TypeRef, expr: Box<Expr> },
    /// `target.method(args)`, or `method(args)` without a target.
    Call {
        target: Option<Box<Expr>>,
        method: String,
        args: Vec<Expr>,
    },
    /// A call chain written one call per line.
    Chain(MethodChain),
    /// `Type.class`
    ClassLiteral(TypeRef),
    /// A string literal.
    Str(String),
    /// `left + right`
    Concat(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// `this.<name>`
    pub fn this_field(name: impl Into<String>) -> Self {
        Self::Field {
            target: Box::new(Self::This),
            name: name.into(),
        }
    }

    pub fn new_instance(class: ClassName, args: Vec<Expr>) -> Self {
        Self::New { class, args }
    }

    pub fn cast(ty: TypeRef, expr: Expr) -> Self {
        Self::Cast {
            ty,
            expr: Box::new(expr),
        }
    }

    /// `self.method(args)`
    pub fn call(self, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::Call {
            target: Some(Box::new(self)),
            method: method.into(),
            args,
        }
    }

    pub fn class_literal(ty: TypeRef) -> Self {
        Self::ClassLiteral(ty)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    pub fn concat(self, right: Expr) -> Self {
        Self::Concat(Box::new(self), Box::new(right))
    }

    /// Collect every class referenced by the expression, in source order.
    pub fn collect<'a>(&'a self, out: &mut Vec<&'a ClassName>) {
        match self {
            Self::Name(_) | Self::This | Self::Str(_) => {}
            Self::Field { target, .. } => target.collect(out),
            Self::Type(class) => out.push(class),
            Self::New { class, args } => {
                out.push(class);
                args.iter().for_each(|arg| arg.collect(out));
            }
            Self::Cast { ty, expr } => {
                ty.referenced_classes(out);
                expr.collect(out);
            }
            Self::Call { target, args, .. } => {
                if let Some(target) = target {
                    target.collect(out);
                }
                args.iter().for_each(|arg| arg.collect(out));
            }
            Self::Chain(chain) => chain.collect(out),
            Self::ClassLiteral(ty) => ty.referenced_classes(out),
            Self::Concat(left, right) => {
                left.collect(out);
                right.collect(out);
            }
        }
    }

    /// Render the expression. Only [`Expr::Chain`] produces more than one line.
    pub fn render(&self, scope: &NameScope) -> String {
        match self {
            Self::Name(name) => name.clone(),
            Self::This => "this".to_string(),
            Self::Field { target, name } => format!("{}.{}", target.render(scope), name),
            Self::Type(class) => scope.name(class),
            Self::New { class, args } => {
                format!("new {}({})", scope.name(class), render_args(args, scope))
            }
            Self::Cast { ty, expr } => {
                format!("({}) {}", scope.type_name(ty), expr.render(scope))
            }
            Self::Call {
                target,
                method,
                args,
            } => match target {
                Some(target) => format!(
                    "{}.{}({})",
                    target.render(scope),
                    method,
                    render_args(args, scope)
                ),
                None => format!("{}({})", method, render_args(args, scope)),
            },
            Self::Chain(chain) => chain.render(scope),
            Self::ClassLiteral(ty) => format!("{}.class", scope.type_name(ty)),
            Self::Str(value) => quote(value),
            Self::Concat(left, right) => {
                format!("{} + {}", left.render(scope), right.render(scope))
            }
        }
    }
}

pub(crate) fn render_args(args: &[Expr], scope: &NameScope) -> String {
    args.iter()
        .map(|arg| arg.render(scope))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Java string literal with escapes.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[derive(Debug, Clone, PartialEq)]
struct ChainCall {
    method: String,
    args: Vec<Expr>,
}

/// Builder for fluent call chains like `Store.of(scope, factory).get(Target.class)`.
///
/// A multi-call chain renders with each call on its own line; statement
/// rendering indents the continuation lines.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodChain {
    base: Box<Expr>,
    calls: Vec<ChainCall>,
}

impl MethodChain {
    pub fn new(base: Expr) -> Self {
        Self {
            base: Box::new(base),
            calls: Vec::new(),
        }
    }

    /// Add a call with the given arguments.
    pub fn call(mut self, method: impl Into<String>, args: Vec<Expr>) -> Self {
        self.calls.push(ChainCall {
            method: method.into(),
            args,
        });
        self
    }

    pub fn has_calls(&self) -> bool {
        !self.calls.is_empty()
    }

    pub fn into_expr(self) -> Expr {
        Expr::Chain(self)
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a ClassName>) {
        self.base.collect(out);
        for call in &self.calls {
            call.args.iter().for_each(|arg| arg.collect(out));
        }
    }

    /// Render on a single line.
    pub fn render_inline(&self, scope: &NameScope) -> String {
        let mut result = self.base.render(scope);
        for call in &self.calls {
            result.push_str(&format!(".{}({})", call.method, render_args(&call.args, scope)));
        }
        result
    }

    /// Render with each call on a new line.
    pub fn render(&self, scope: &NameScope) -> String {
        let mut result = self.base.render(scope);
        for call in &self.calls {
            result.push_str(&format!("\n.{}({})", call.method, render_args(&call.args, scope)));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(expr: &Expr) -> String {
        let mut scope = NameScope::new("com.example");
        let mut classes = Vec::new();
        expr.collect(&mut classes);
        for class in classes {
            scope.reference(class);
        }
        expr.render(&scope)
    }

    #[test]
    fn test_cast_new_instance() {
        let expr = Expr::cast(
            TypeRef::Variable("T".into()),
            Expr::new_instance(
                ClassName::new("com.example", "Widget"),
                vec![Expr::name("repo"), Expr::name("size")],
            ),
        );
        assert_eq!(render(&expr), "(T) new Widget(repo, size)");
    }

    #[test]
    fn test_unreferenced_class_is_qualified() {
        let expr = Expr::new_instance(ClassName::new("com.example", "Widget"), vec![]);
        assert_eq!(
            expr.render(&NameScope::new("com.example")),
            "new com.example.Widget()"
        );
    }

    #[test]
    fn test_string_escapes() {
        let expr = Expr::string("say \"hi\"\n").concat(Expr::name("who"));
        assert_eq!(render(&expr), r#""say \"hi\"\n" + who"#);
    }

    #[test]
    fn test_call_and_field() {
        let expr = Expr::name("modelClass").call(
            "isAssignableFrom",
            vec![Expr::class_literal(TypeRef::class("com.example", "Widget"))],
        );
        assert_eq!(render(&expr), "modelClass.isAssignableFrom(Widget.class)");
        assert_eq!(render(&Expr::this_field("repo")), "this.repo");
    }

    #[test]
    fn test_method_chain() {
        let store = ClassName::new("com.example", "Store");
        let chain = MethodChain::new(Expr::Type(store.clone()))
            .call("of", vec![Expr::name("activity")])
            .call("get", vec![]);

        let mut scope = NameScope::new("com.example");
        scope.reference(&store);

        assert!(chain.has_calls());
        assert_eq!(chain.render_inline(&scope), "Store.of(activity).get()");
        assert_eq!(chain.render(&scope), "Store\n.of(activity)\n.get()");
    }

    #[test]
    fn test_collect_in_source_order() {
        let expr = Expr::Type(ClassName::new("a", "First"))
            .call("of", vec![Expr::new_instance(ClassName::new("b", "Second"), vec![])]);
        let mut classes = Vec::new();
        expr.collect(&mut classes);
        let names: Vec<String> = classes.iter().map(|c| c.canonical_name()).collect();
        assert_eq!(names, ["a.First", "b.Second"]);
    }
}
