//! Accessor class synthesis.

use alfred_ir::{GenerationUnit, TypeRef};
use alfred_manifest::{HostConfig, ScopeConfig};

use super::annotated_param;
use crate::ast::{Expr, Method, MethodChain, Modifier, Param, Statement, TypeSpec};

/// Build the `public final` accessor class, without its nested factory.
pub fn accessor(unit: &GenerationUnit, host: &HostConfig, method: &str) -> TypeSpec {
    host.scopes.iter().fold(
        TypeSpec::class(unit.accessor_class()).modifiers([Modifier::Public, Modifier::Final]),
        |spec, scope| spec.method(scoped_get(unit, host, scope, method)),
    )
}

/// One `get` overload binding the instance to `scope`.
fn scoped_get(unit: &GenerationUnit, host: &HostConfig, scope: &ScopeConfig, method: &str) -> Method {
    let target = unit.descriptor.name.clone();
    let forwarded = unit.parameters.iter().map(|p| Expr::name(&p.name)).collect();

    let chain = MethodChain::new(Expr::Type(host.store.clone()))
        .call(
            "of",
            vec![
                Expr::name(&scope.param),
                Expr::new_instance(unit.factory_class(), forwarded),
            ],
        )
        .call("get", vec![Expr::class_literal(TypeRef::Class(target.clone()))]);

    Method::new(method)
        .annotation(host.non_null.clone())
        .modifiers([Modifier::Public, Modifier::Static])
        .returns(TypeRef::Class(target))
        .param(
            Param::new(TypeRef::Class(scope.ty.clone()), &scope.param)
                .annotated(host.non_null.clone()),
        )
        .params(unit.parameters.iter().map(|p| annotated_param(p, host)))
        .statement(Statement::ret(chain.into_expr()))
}
