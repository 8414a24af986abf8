//! Java statements.

use alfred_codegen::builder::CodeFragment;
use alfred_ir::ClassName;

use super::Expr;
use crate::NameScope;

/// A statement inside a method or constructor body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `target = value;`
    Assign { target: Expr, value: Expr },
    /// `return value;`
    Return(Expr),
    /// `throw value;`
    Throw(Expr),
    /// `if (condition) { ... }`
    If {
        condition: Expr,
        then: Vec<Statement>,
    },
    /// `try { ... } catch (A | B binding) { ... }`
    TryCatch {
        body: Vec<Statement>,
        catches: Vec<ClassName>,
        binding: String,
        handler: Vec<Statement>,
    },
}

impl Statement {
    pub fn assign(target: Expr, value: Expr) -> Self {
        Self::Assign { target, value }
    }

    pub fn ret(value: Expr) -> Self {
        Self::Return(value)
    }

    pub fn throw(value: Expr) -> Self {
        Self::Throw(value)
    }

    pub fn if_then(condition: Expr, then: Vec<Statement>) -> Self {
        Self::If { condition, then }
    }

    pub fn try_catch(
        body: Vec<Statement>,
        catches: Vec<ClassName>,
        binding: impl Into<String>,
        handler: Vec<Statement>,
    ) -> Self {
        Self::TryCatch {
            body,
            catches,
            binding: binding.into(),
            handler,
        }
    }

    pub fn collect<'a>(&'a self, out: &mut Vec<&'a ClassName>) {
        match self {
            Self::Assign { target, value } => {
                target.collect(out);
                value.collect(out);
            }
            Self::Return(value) | Self::Throw(value) => value.collect(out),
            Self::If { condition, then } => {
                condition.collect(out);
                then.iter().for_each(|s| s.collect(out));
            }
            Self::TryCatch {
                body,
                catches,
                handler,
                ..
            } => {
                body.iter().for_each(|s| s.collect(out));
                out.extend(catches);
                handler.iter().for_each(|s| s.collect(out));
            }
        }
    }

    pub fn to_fragments(&self, scope: &NameScope) -> Vec<CodeFragment> {
        match self {
            Self::Assign { target, value } => simple(
                &format!("{} = {}", target.render(scope), value.render(scope)),
            ),
            Self::Return(value) => simple(&format!("return {}", value.render(scope))),
            Self::Throw(value) => simple(&format!("throw {}", value.render(scope))),
            Self::If { condition, then } => vec![CodeFragment::block(
                format!("if ({}) {{", condition.render(scope)),
                body_fragments(then, scope),
                Some("}"),
            )],
            Self::TryCatch {
                body,
                catches,
                binding,
                handler,
            } => {
                let types: Vec<String> = catches.iter().map(|c| scope.name(c)).collect();
                vec![
                    CodeFragment::block("try {", body_fragments(body, scope), None),
                    CodeFragment::block(
                        format!("}} catch ({} {}) {{", types.join(" | "), binding),
                        body_fragments(handler, scope),
                        Some("}"),
                    ),
                ]
            }
        }
    }
}

/// Fragments for a statement list.
pub fn body_fragments(statements: &[Statement], scope: &NameScope) -> Vec<CodeFragment> {
    statements
        .iter()
        .flat_map(|s| s.to_fragments(scope))
        .collect()
}

/// A single statement; wrapped expressions keep their line breaks.
fn simple(code: &str) -> Vec<CodeFragment> {
    vec![CodeFragment::wrapped(&format!("{};", code))]
}

#[cfg(test)]
mod tests {
    use alfred_codegen::builder::CodeBuilder;
    use alfred_ir::TypeRef;

    use super::*;
    use crate::ast::MethodChain;

    fn render(statements: &[Statement]) -> String {
        let mut scope = NameScope::new("com.example");
        let mut classes = Vec::new();
        statements.iter().for_each(|s| s.collect(&mut classes));
        for class in classes {
            scope.reference(class);
        }

        CodeBuilder::java()
            .fragments(body_fragments(statements, &scope))
            .build()
    }

    #[test]
    fn test_assign() {
        let code = render(&[Statement::assign(
            Expr::this_field("repo"),
            Expr::name("repo"),
        )]);
        assert_eq!(code, "this.repo = repo;\n");
    }

    #[test]
    fn test_chain_continuation_is_indented() {
        let chain = MethodChain::new(Expr::Type(ClassName::new("com.example", "Store")))
            .call("of", vec![Expr::name("scope")])
            .call("get", vec![]);
        let code = render(&[Statement::ret(chain.into_expr())]);
        assert_eq!(code, "return Store\n    .of(scope)\n    .get();\n");
    }

    #[test]
    fn test_if_and_throw() {
        let code = render(&[Statement::if_then(
            Expr::name("ready"),
            vec![Statement::throw(Expr::new_instance(
                ClassName::new("java.lang", "IllegalStateException"),
                vec![],
            ))],
        )]);
        assert_eq!(
            code,
            "if (ready) {\n  throw new IllegalStateException();\n}\n"
        );
    }

    #[test]
    fn test_try_multi_catch() {
        let code = render(&[Statement::try_catch(
            vec![Statement::ret(Expr::cast(
                TypeRef::Variable("T".into()),
                Expr::name("value"),
            ))],
            vec![
                ClassName::new("java.lang", "NoSuchMethodException"),
                ClassName::new("java.lang", "IllegalAccessException"),
            ],
            "e",
            vec![Statement::throw(Expr::name("e"))],
        )]);
        assert_eq!(
            code,
            "try {\n  return (T) value;\n} catch (NoSuchMethodException | IllegalAccessException e) {\n  throw e;\n}\n"
        );
    }
}
