//! Factory class synthesis.

use alfred_ir::{ClassName, ConstructorParameter, GenerationUnit, TypeRef};
use alfred_manifest::{ConstructionStrategy, HostConfig};

use super::{MODEL_CLASS, annotated_param, java_lang};
use crate::ast::{Expr, Field, Method, Modifier, Param, Statement, TypeSpec, TypeVar};

/// Exceptions `Constructor.newInstance` and `Class.getConstructor` can throw.
fn reflection_exceptions() -> Vec<ClassName> {
    vec![
        java_lang("NoSuchMethodException"),
        java_lang("IllegalAccessException"),
        java_lang("InstantiationException"),
        ClassName::new("java.lang.reflect", "InvocationTargetException"),
    ]
}

/// Build the `private static final` factory nested in the accessor.
pub fn factory(unit: &GenerationUnit, host: &HostConfig, strategy: ConstructionStrategy) -> TypeSpec {
    let fields = unit.parameters.iter().map(|p| {
        Field::new(p.ty.erasure(), &p.name).modifiers([Modifier::Private, Modifier::Final])
    });

    TypeSpec::class(unit.factory_class())
        .modifiers([Modifier::Private, Modifier::Static, Modifier::Final])
        .implements(TypeRef::Class(host.factory.clone()))
        .fields(fields)
        .method(constructor(unit, host))
        .method(create(unit, host, strategy))
}

fn constructor(unit: &GenerationUnit, host: &HostConfig) -> Method {
    Method::constructor(&unit.names.factory)
        .params(unit.parameters.iter().map(|p| annotated_param(p, host)))
        .statements(unit.parameters.iter().map(|p| {
            Statement::assign(Expr::this_field(&p.name), Expr::name(&p.name))
        }))
}

fn create(unit: &GenerationUnit, host: &HostConfig, strategy: ConstructionStrategy) -> Method {
    let var = TypeVar::bounded("T", TypeRef::Class(host.base.clone()));
    let model_class = TypeRef::Parameterized {
        raw: java_lang("Class"),
        args: vec![var.as_type()],
    };

    let body = match strategy {
        ConstructionStrategy::Direct => direct_body(unit, &var),
        ConstructionStrategy::CheckedDynamic => checked_dynamic_body(unit),
    };

    Method::new("create")
        .annotation(host.non_null.clone())
        .annotation(java_lang("Override"))
        .modifiers([Modifier::Public])
        .returns(var.as_type())
        .param(Param::new(model_class, MODEL_CLASS).annotated(host.non_null.clone()))
        .type_var(var)
        .statements(body)
}

/// Field reads inside `create`, qualified where a field shadows the parameter.
fn field_args(parameters: &[ConstructorParameter]) -> Vec<Expr> {
    parameters
        .iter()
        .map(|p| {
            if p.name == MODEL_CLASS {
                Expr::this_field(&p.name)
            } else {
                Expr::name(&p.name)
            }
        })
        .collect()
}

fn direct_body(unit: &GenerationUnit, var: &TypeVar) -> Vec<Statement> {
    let target = unit.descriptor.name.clone();
    vec![Statement::ret(Expr::cast(
        var.as_type(),
        Expr::new_instance(target, field_args(&unit.parameters)),
    ))]
}

fn checked_dynamic_body(unit: &GenerationUnit) -> Vec<Statement> {
    let target = TypeRef::Class(unit.descriptor.name.clone());
    let message = format!("Cannot create an instance of {}", unit.descriptor.qualified_name());
    let runtime_exception = java_lang("RuntimeException");

    let signature = unit
        .parameters
        .iter()
        .map(|p| Expr::class_literal(p.ty.erasure()))
        .collect();
    let instantiate = Expr::name(MODEL_CLASS)
        .call("getConstructor", signature)
        .call("newInstance", field_args(&unit.parameters));

    let attempt = Statement::try_catch(
        vec![Statement::ret(instantiate)],
        reflection_exceptions(),
        "e",
        vec![Statement::throw(Expr::new_instance(
            runtime_exception.clone(),
            vec![Expr::string(&message), Expr::name("e")],
        ))],
    );

    vec![
        Statement::if_then(
            Expr::name(MODEL_CLASS).call("isAssignableFrom", vec![Expr::class_literal(target)]),
            vec![attempt],
        ),
        Statement::throw(Expr::new_instance(
            runtime_exception,
            vec![Expr::string(format!("{} from ", message)).concat(Expr::name(MODEL_CLASS))],
        )),
    ]
}
