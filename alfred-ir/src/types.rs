//! Java type references.
//!
//! A [`TypeRef`] is parsed from the source notation used in declarations,
//! e.g. `java.util.Map<java.lang.String, java.util.List<com.example.Item>>`
//! or `int[]`. Package and class segments are split with the best-guess
//! rule: leading segments starting with a lowercase letter form the package,
//! the first capitalized segment starts the (possibly nested) class names.

use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

/// Error produced when a type string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid type '{input}': {reason}")]
pub struct TypeParseError {
    pub input: String,
    pub reason: String,
}

impl TypeParseError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// A Java primitive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    Void,
}

impl Primitive {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Char => "char",
            Self::Float => "float",
            Self::Double => "double",
            Self::Void => "void",
        }
    }

    pub fn from_keyword(s: &str) -> Option<Self> {
        Some(match s {
            "boolean" => Self::Boolean,
            "byte" => Self::Byte,
            "short" => Self::Short,
            "int" => Self::Int,
            "long" => Self::Long,
            "char" => Self::Char,
            "float" => Self::Float,
            "double" => Self::Double,
            "void" => Self::Void,
            _ => return None,
        })
    }
}

/// A fully-qualified class name, possibly nested.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ClassName {
    /// Package, empty for the unnamed package.
    pub package: String,
    /// Simple names from the outermost class inward.
    pub names: Vec<String>,
}

impl ClassName {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            names: vec![name.into()],
        }
    }

    /// Build a class name from a package and a dotted nested path ("Outer.Inner").
    pub fn nested_path(package: impl Into<String>, path: &str) -> Self {
        Self {
            package: package.into(),
            names: path.split('.').map(str::to_string).collect(),
        }
    }

    /// Split a dotted name into package and class segments.
    pub fn best_guess(s: &str) -> Result<Self, TypeParseError> {
        let segments: Vec<&str> = s.split('.').collect();
        if segments.iter().any(|seg| !is_identifier(seg)) {
            return Err(TypeParseError::new(s, "expected a dotted class name"));
        }

        let first_class = segments
            .iter()
            .position(|seg| seg.starts_with(|c: char| c.is_ascii_uppercase()))
            .unwrap_or(segments.len() - 1);

        Ok(Self {
            package: segments[..first_class].join("."),
            names: segments[first_class..]
                .iter()
                .map(|seg| seg.to_string())
                .collect(),
        })
    }

    /// The innermost simple name.
    pub fn simple_name(&self) -> &str {
        self.names.last().map(String::as_str).unwrap_or_default()
    }

    /// The outermost enclosing class (the one a Java import refers to).
    pub fn top_level(&self) -> ClassName {
        Self {
            package: self.package.clone(),
            names: self.names.iter().take(1).cloned().collect(),
        }
    }

    /// A class nested inside this one.
    pub fn nested(&self, name: impl Into<String>) -> ClassName {
        let mut names = self.names.clone();
        names.push(name.into());
        Self {
            package: self.package.clone(),
            names,
        }
    }

    /// Nested path without the package ("Outer.Inner").
    pub fn relative_name(&self) -> String {
        self.names.join(".")
    }

    /// Fully-qualified name in source form ("a.b.Outer.Inner").
    pub fn canonical_name(&self) -> String {
        if self.package.is_empty() {
            self.relative_name()
        } else {
            format!("{}.{}", self.package, self.relative_name())
        }
    }

    pub fn is_java_lang(&self) -> bool {
        self.package == "java.lang"
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}

/// A wildcard type argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Wildcard {
    /// `?`
    Unbounded,
    /// `? extends T`
    Extends(Box<TypeRef>),
    /// `? super T`
    Super(Box<TypeRef>),
}

/// A Java type reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum TypeRef {
    Primitive(Primitive),
    Class(ClassName),
    Parameterized { raw: ClassName, args: Vec<TypeRef> },
    Array(Box<TypeRef>),
    /// A type variable such as `T`. Never produced by the parser.
    Variable(String),
    Wildcard(Wildcard),
}

impl TypeRef {
    pub fn class(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Class(ClassName::new(package, name))
    }

    /// Drop type arguments, keeping the base type.
    ///
    /// Arrays erase their component type; type variables and wildcards erase
    /// to `java.lang.Object` (no bounds are tracked).
    pub fn erasure(&self) -> TypeRef {
        match self {
            Self::Primitive(_) | Self::Class(_) => self.clone(),
            Self::Parameterized { raw, .. } => Self::Class(raw.clone()),
            Self::Array(component) => Self::Array(Box::new(component.erasure())),
            Self::Variable(_) | Self::Wildcard(_) => Self::class("java.lang", "Object"),
        }
    }

    pub fn is_parameterized(&self) -> bool {
        matches!(self, Self::Parameterized { .. })
    }

    /// The class this type names, ignoring type arguments.
    pub fn raw_class(&self) -> Option<&ClassName> {
        match self {
            Self::Class(name) | Self::Parameterized { raw: name, .. } => Some(name),
            _ => None,
        }
    }

    /// Collect every class referenced by this type, in source order.
    pub fn referenced_classes<'a>(&'a self, out: &mut Vec<&'a ClassName>) {
        match self {
            Self::Primitive(_) | Self::Variable(_) => {}
            Self::Class(name) => out.push(name),
            Self::Parameterized { raw, args } => {
                out.push(raw);
                for arg in args {
                    arg.referenced_classes(out);
                }
            }
            Self::Array(component) => component.referenced_classes(out),
            Self::Wildcard(Wildcard::Unbounded) => {}
            Self::Wildcard(Wildcard::Extends(bound) | Wildcard::Super(bound)) => {
                bound.referenced_classes(out)
            }
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.keyword()),
            Self::Class(name) => write!(f, "{}", name),
            Self::Parameterized { raw, args } => {
                write!(f, "{}<", raw)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(">")
            }
            Self::Array(component) => write!(f, "{}[]", component),
            Self::Variable(name) => f.write_str(name),
            Self::Wildcard(Wildcard::Unbounded) => f.write_str("?"),
            Self::Wildcard(Wildcard::Extends(bound)) => write!(f, "? extends {}", bound),
            Self::Wildcard(Wildcard::Super(bound)) => write!(f, "? super {}", bound),
        }
    }
}

impl FromStr for TypeRef {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser::new(s);
        let ty = parser.parse_type(false)?;
        parser.skip_ws();
        if !parser.at_end() {
            return Err(parser.error("unexpected trailing characters"));
        }
        Ok(ty)
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Recursive-descent parser over Java type syntax.
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn error(&self, reason: &str) -> TypeParseError {
        TypeParseError::new(self.input, format!("{} at offset {}", reason, self.pos))
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn skip_ws(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }

    fn eat(&mut self, token: &str) -> bool {
        self.skip_ws();
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn identifier(&mut self) -> Option<&'a str> {
        self.skip_ws();
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|(_, c)| !(c.is_alphanumeric() || *c == '_' || *c == '$'))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        if len == 0 || rest.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }
        self.pos += len;
        Some(&rest[..len])
    }

    fn dotted_name(&mut self) -> Result<&'a str, TypeParseError> {
        self.skip_ws();
        let start = self.pos;
        self.identifier()
            .ok_or_else(|| self.error("expected a type name"))?;
        while self.rest().starts_with('.') && !self.rest().starts_with("...") {
            self.pos += 1;
            self.identifier()
                .ok_or_else(|| self.error("expected an identifier after '.'"))?;
        }
        Ok(&self.input[start..self.pos])
    }

    fn parse_type(&mut self, allow_wildcard: bool) -> Result<TypeRef, TypeParseError> {
        if self.eat("?") {
            if !allow_wildcard {
                return Err(self.error("wildcards are only allowed as type arguments"));
            }
            let wildcard = if self.keyword("extends") {
                Wildcard::Extends(Box::new(self.parse_type(false)?))
            } else if self.keyword("super") {
                Wildcard::Super(Box::new(self.parse_type(false)?))
            } else {
                Wildcard::Unbounded
            };
            return Ok(TypeRef::Wildcard(wildcard));
        }

        let name = self.dotted_name()?;
        let mut ty = match Primitive::from_keyword(name) {
            Some(primitive) => TypeRef::Primitive(primitive),
            None => {
                let raw = ClassName::best_guess(name)?;
                if self.eat("<") {
                    let mut args = vec![self.parse_type(true)?];
                    while self.eat(",") {
                        args.push(self.parse_type(true)?);
                    }
                    if !self.eat(">") {
                        return Err(self.error("expected '>'"));
                    }
                    TypeRef::Parameterized { raw, args }
                } else {
                    TypeRef::Class(raw)
                }
            }
        };

        loop {
            if self.eat("[") {
                if !self.eat("]") {
                    return Err(self.error("expected ']'"));
                }
                ty = TypeRef::Array(Box::new(ty));
            } else if self.eat("...") {
                ty = TypeRef::Array(Box::new(ty));
                break;
            } else {
                break;
            }
        }

        if ty == TypeRef::Primitive(Primitive::Void) {
            return Err(self.error("'void' is not a parameter type"));
        }
        Ok(ty)
    }

    fn keyword(&mut self, kw: &str) -> bool {
        let save = self.pos;
        match self.identifier() {
            Some(ident) if ident == kw => true,
            _ => {
                self.pos = save;
                false
            }
        }
    }
}
