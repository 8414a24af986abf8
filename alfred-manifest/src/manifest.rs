//! Root manifest type, parsing and post-parse validation.

use std::{collections::HashSet, path::Path, str::FromStr};

use alfred_ir::ClassName;
use serde::Deserialize;

use crate::{
    ClassDecl, Error, GeneratorConfig, HostConfig, Result,
    error::SourceContext,
    validate::{ParseContext, find_value_spans},
};

/// Root manifest for alfred.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub host: HostConfig,

    /// Every declared type, candidates and plain superclasses alike.
    #[serde(default, rename = "class")]
    pub classes: Vec<ClassDecl>,
}

impl Manifest {
    /// Declarations carrying the candidate marker, in declaration order.
    pub fn candidates(&self) -> impl Iterator<Item = &ClassDecl> {
        self.classes
            .iter()
            .filter(|decl| decl.is_marked(&self.generator))
    }

    /// Look up a declaration by class name.
    pub fn find_class(&self, name: &ClassName) -> Option<&ClassDecl> {
        self.classes
            .iter()
            .find(|decl| decl.package == name.package && decl.name == name.relative_name())
    }

    /// Parse an alfred.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "alfred.toml")
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let qualified: Vec<String> = manifest.classes.iter().map(|c| c.qualified_name()).collect();
    let ctx = ParseContext::new(src, filename);

    validate_generator(&manifest.generator, &ctx.push("generator"))?;
    validate_host(&manifest.host, &ctx.push("host"))?;

    let mut seen: HashSet<&str> = HashSet::new();
    for (decl, name) in manifest.classes.iter().zip(&qualified) {
        if !decl.package.is_empty() {
            ctx.validate_dotted(&decl.package, "package")?;
        }
        ctx.validate_dotted(&decl.name, "class")?;

        if !seen.insert(name.as_str()) {
            let spans = find_value_spans(src, &decl.name);
            return Err(match spans.as_slice() {
                [first, second, ..] => {
                    ctx.source_context()
                        .duplicate_error(name.as_str(), "class", *first, *second)
                }
                _ => ctx.error_at(&decl.name, format!("duplicate class '{}'", name)),
            });
        }

        let class_ctx = ctx.push(name);
        validate_class(decl, &class_ctx, manifest)?;
    }

    Ok(())
}

fn validate_generator(generator: &GeneratorConfig, ctx: &ParseContext<'_>) -> Result<()> {
    ctx.validate_dotted(&generator.marker, "marker")?;
    ctx.validate_dotted(&generator.designation_marker, "designation marker")?;
    ctx.validate_name(&generator.factory_suffix, "suffix")?;
    ctx.validate_name(&generator.provider_suffix, "suffix")?;
    ctx.validate_name(&generator.accessor_method, "accessor method")?;

    if generator.factory_suffix == generator.provider_suffix {
        return Err(ctx.error_at(
            &generator.factory_suffix,
            "factory_suffix and provider_suffix must differ",
        ));
    }
    Ok(())
}

fn validate_host(host: &HostConfig, ctx: &ParseContext<'_>) -> Result<()> {
    let [first, second] = host.scopes.as_slice() else {
        return Err(ctx.source_context().validation_error(
            format!(
                "expected exactly two scopes in [host], found {}",
                host.scopes.len()
            ),
            None,
        ));
    };

    for scope in [first, second] {
        ctx.validate_name(&scope.param, "scope parameter")?;
    }
    if first.ty == second.ty {
        return Err(ctx.error_at(
            &second.ty.canonical_name(),
            "the two scopes must be distinct types",
        ));
    }
    if first.param == second.param {
        return Err(ctx.error_at(
            &second.param,
            "the two scopes must use distinct parameter names",
        ));
    }
    Ok(())
}

fn validate_class(decl: &ClassDecl, ctx: &ParseContext<'_>, manifest: &Manifest) -> Result<()> {
    for annotation in &decl.annotations {
        ctx.validate_dotted(annotation, "annotation")?;
    }

    let marked = decl.is_marked(&manifest.generator);
    for ctor in &decl.constructors {
        let mut params: HashSet<&str> = HashSet::new();
        for param in &ctor.params {
            ctx.validate_name(&param.name, "parameter")?;
            for annotation in &param.annotations {
                ctx.validate_dotted(annotation, "annotation")?;
            }

            if !params.insert(param.name.as_str()) {
                return Err(ctx.error_at(
                    &param.name,
                    format!("duplicate parameter '{}' in {}", param.name, ctx.path_string()),
                ));
            }

            // Accessors take the scope first, followed by the constructor parameters
            if marked && manifest.host.scopes.iter().any(|s| s.param == param.name) {
                return Err(ctx.error_at(
                    &param.name,
                    format!(
                        "parameter '{}' in {} clashes with the accessor's scope parameter",
                        param.name,
                        ctx.path_string()
                    ),
                ));
            }

            // `Store.of(...)` in the accessor body would resolve to the parameter
            let store = manifest.host.store.top_level();
            if marked && param.name == store.simple_name() {
                return Err(ctx.error_at(
                    &param.name,
                    format!(
                        "parameter '{}' in {} hides the host store class '{}'",
                        param.name,
                        ctx.path_string(),
                        manifest.host.store.canonical_name()
                    ),
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"
        [[class]]
        package = "com.example.feed"
        name = "FeedViewModel"
        modifiers = ["public"]
        extends = "android.arch.lifecycle.ViewModel"
        annotations = ["GeneratedProvider"]

        [[class.constructor]]
        params = [{ name = "repo", type = "com.example.feed.FeedRepository" }]

        [[class]]
        package = "com.example.feed"
        name = "FeedRepository"
        modifiers = ["public"]
    "#;

    #[test]
    fn test_parse_with_defaults() {
        let manifest: Manifest = FEED.parse().unwrap();
        assert_eq!(manifest.classes.len(), 2);
        assert_eq!(manifest.generator.marker, "GeneratedProvider");
        assert_eq!(manifest.host.scopes.len(), 2);
        assert_eq!(manifest.classes[0].constructors.len(), 1);
    }

    #[test]
    fn test_candidates_in_declaration_order() {
        let manifest: Manifest = FEED.parse().unwrap();
        let names: Vec<String> = manifest.candidates().map(|c| c.qualified_name()).collect();
        assert_eq!(names, vec!["com.example.feed.FeedViewModel"]);
    }

    #[test]
    fn test_find_class() {
        let manifest: Manifest = FEED.parse().unwrap();
        let name = ClassName::new("com.example.feed", "FeedRepository");
        assert!(manifest.find_class(&name).is_some());
        assert!(manifest.find_class(&ClassName::new("com.example", "FeedRepository")).is_none());
    }

    #[test]
    fn test_empty_manifest_is_valid() {
        let manifest: Manifest = "".parse().unwrap();
        assert!(manifest.classes.is_empty());
    }

    #[test]
    fn test_rejects_duplicate_class() {
        let src = r#"
            [[class]]
            package = "com.example"
            name = "Widget"

            [[class]]
            package = "com.example"
            name = "Widget"
        "#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Duplicate { .. }));
    }

    #[test]
    fn test_rejects_keyword_parameter() {
        let src = r#"
            [[class]]
            package = "com.example"
            name = "Widget"

            [[class.constructor]]
            params = [{ name = "new", type = "int" }]
        "#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }

    #[test]
    fn test_rejects_duplicate_parameter() {
        let src = r#"
            [[class]]
            name = "Widget"

            [[class.constructor]]
            params = [{ name = "a", type = "int" }, { name = "a", type = "long" }]
        "#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(err.to_string().contains("duplicate parameter 'a'"));
    }

    #[test]
    fn test_rejects_scope_parameter_clash() {
        let src = r#"
            [[class]]
            package = "com.example"
            name = "Widget"
            annotations = ["GeneratedProvider"]

            [[class.constructor]]
            params = [{ name = "activity", type = "java.lang.String" }]
        "#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(err.to_string().contains("scope parameter"));
    }

    #[test]
    fn test_rejects_parameter_hiding_store() {
        let src = r#"
            [[class]]
            package = "com.example"
            name = "Widget"
            annotations = ["GeneratedProvider"]

            [[class.constructor]]
            params = [{ name = "ViewModelProviders", type = "int" }]
        "#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(err.to_string().contains("hides the host store class"));

        // Only candidates are affected
        let plain = src.replace("annotations = [\"GeneratedProvider\"]", "");
        assert!(plain.parse::<Manifest>().is_ok());
    }

    #[test]
    fn test_rejects_single_scope() {
        let src = r#"
            [host]
            scopes = [{ type = "android.app.Activity", param = "activity" }]
        "#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(err.to_string().contains("exactly two scopes"));
    }

    #[test]
    fn test_rejects_identical_suffixes() {
        let src = r#"
            [generator]
            factory_suffix = "Provider"
        "#;
        assert!(src.parse::<Manifest>().is_err());
    }

    #[test]
    fn test_rejects_unknown_field() {
        let src = r#"
            [[class]]
            name = "Widget"
            visibility = "public"
        "#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_rejects_bad_parameter_type() {
        let src = r#"
            [[class]]
            name = "Widget"

            [[class.constructor]]
            params = [{ name = "items", type = "java.util.List<" }]
        "#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
