//! Java AST builders for classes, members, statements and expressions.
//!
//! Nodes hold structured [`ClassName`](alfred_ir::ClassName) and
//! [`TypeRef`](alfred_ir::TypeRef) values rather than text; a
//! [`NameScope`](crate::NameScope) decides how each class is spelled when
//! the node is rendered.

mod expr;
mod members;
mod stmt;
mod type_spec;

pub use expr::{Expr, MethodChain};
pub use members::{Field, Method, Modifier, Param, TypeVar};
pub use stmt::{Statement, body_fragments};
pub use type_spec::TypeSpec;
