//! `[[class]]` declarations and their lowering to descriptors.

use alfred_ir::{
    ClassDescriptor, ClassName, ConstructorCandidate, DeclaredParameter, Designation, TypeRef,
    Visibility,
};
use serde::{Deserialize, Deserializer, de::Error as _};

use crate::GeneratorConfig;

/// What kind of type a declaration describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Enum,
    Annotation,
    Record,
}

impl ClassKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Annotation => "annotation",
            Self::Record => "record",
        }
    }
}

/// Class-level modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Final,
    Static,
}

/// A type declaration from the manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassDecl {
    /// Declaring package; empty for the unnamed package.
    #[serde(default)]
    pub package: String,
    /// Simple name, or a dotted path for nested classes ("Outer.Inner").
    pub name: String,
    #[serde(default)]
    pub kind: ClassKind,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    /// Direct superclass, fully qualified.
    #[serde(default, deserialize_with = "deserialize_optional_type")]
    pub extends: Option<TypeRef>,
    #[serde(default)]
    pub annotations: Vec<String>,
    /// Constructors in declaration order.
    #[serde(default, rename = "constructor")]
    pub constructors: Vec<ConstructorDecl>,
}

/// A constructor declaration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstructorDecl {
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub params: Vec<ParamDecl>,
}

/// A constructor parameter declaration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamDecl {
    pub name: String,
    #[serde(rename = "type", deserialize_with = "deserialize_type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub annotations: Vec<String>,
}

impl ClassDecl {
    pub fn class_name(&self) -> ClassName {
        ClassName::nested_path(self.package.clone(), &self.name)
    }

    pub fn qualified_name(&self) -> String {
        alfred_core::qualify(&self.package, &self.name)
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    pub fn visibility(&self) -> Visibility {
        if self.has_modifier(Modifier::Public) {
            Visibility::Public
        } else if self.has_modifier(Modifier::Protected) {
            Visibility::Protected
        } else if self.has_modifier(Modifier::Private) {
            Visibility::Private
        } else {
            Visibility::PackagePrivate
        }
    }

    /// Whether the declaration carries the candidate marker.
    pub fn is_marked(&self, generator: &GeneratorConfig) -> bool {
        self.annotations.iter().any(|a| generator.is_marker(a))
    }

    /// Snapshot this declaration as a [`ClassDescriptor`].
    pub fn descriptor(&self, generator: &GeneratorConfig) -> ClassDescriptor {
        ClassDescriptor {
            name: self.class_name(),
            package: (!self.package.is_empty()).then(|| self.package.clone()),
            visibility: self.visibility(),
            is_abstract: self.has_modifier(Modifier::Abstract),
            superclass: self.extends.clone(),
            constructors: self
                .constructors
                .iter()
                .map(|ctor| ctor.candidate(generator))
                .collect(),
        }
    }
}

impl ConstructorDecl {
    fn candidate(&self, generator: &GeneratorConfig) -> ConstructorCandidate {
        let designation = if self.annotations.iter().any(|a| generator.is_designation(a)) {
            Designation::Designated
        } else {
            Designation::Implicit
        };

        ConstructorCandidate {
            params: self
                .params
                .iter()
                .map(|p| DeclaredParameter {
                    ty: p.ty.clone(),
                    name: p.name.clone(),
                    markers: p.annotations.clone(),
                })
                .collect(),
            designation,
        }
    }
}

fn deserialize_type<'de, D>(deserializer: D) -> Result<TypeRef, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(D::Error::custom)
}

fn deserialize_optional_type<'de, D>(deserializer: D) -> Result<Option<TypeRef>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_type(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> ClassDecl {
        toml::from_str(content).expect("Failed to parse test class")
    }

    #[test]
    fn test_minimal_declaration() {
        let decl = parse(r#"name = "Widget""#);
        assert_eq!(decl.kind, ClassKind::Class);
        assert_eq!(decl.visibility(), Visibility::PackagePrivate);
        assert!(decl.extends.is_none());

        let descriptor = decl.descriptor(&GeneratorConfig::default());
        assert!(descriptor.package.is_none());
        assert!(descriptor.constructors.is_empty());
    }

    #[test]
    fn test_descriptor_lowering() {
        let decl = parse(
            r#"
            package = "com.example.feed"
            name = "FeedViewModel"
            modifiers = ["public"]
            extends = "android.arch.lifecycle.ViewModel"
            annotations = ["GeneratedProvider"]

            [[constructor]]
            params = [{ name = "repo", type = "com.example.feed.FeedRepository" }]

            [[constructor]]
            annotations = ["Main"]
            params = [
                { name = "repo", type = "com.example.feed.FeedRepository", annotations = ["NonNull"] },
                { name = "pageSize", type = "int" },
            ]
        "#,
        );

        let generator = GeneratorConfig::default();
        assert!(decl.is_marked(&generator));

        let descriptor = decl.descriptor(&generator);
        assert_eq!(descriptor.qualified_name(), "com.example.feed.FeedViewModel");
        assert_eq!(descriptor.package.as_deref(), Some("com.example.feed"));
        assert!(descriptor.is_public());
        assert!(!descriptor.is_abstract);
        assert_eq!(descriptor.constructors.len(), 2);
        assert_eq!(descriptor.constructors[0].designation, Designation::Implicit);
        assert_eq!(descriptor.constructors[1].designation, Designation::Designated);
        assert_eq!(descriptor.constructors[1].params[0].markers, vec!["NonNull"]);
        assert_eq!(descriptor.constructors[1].params[1].name, "pageSize");
    }

    #[test]
    fn test_nested_class_name() {
        let decl = parse(
            r#"
            package = "com.example"
            name = "Screen.State"
        "#,
        );
        let name = decl.class_name();
        assert_eq!(name.names, vec!["Screen", "State"]);
        assert_eq!(name.simple_name(), "State");
        assert_eq!(decl.qualified_name(), "com.example.Screen.State");
    }

    #[test]
    fn test_invalid_type_is_rejected() {
        let result: Result<ClassDecl, _> = toml::from_str(
            r#"
            name = "Widget"
            extends = "java.util.List<"
        "#,
        );
        assert!(result.is_err());
    }
}
