//! Validation context and Java identifier rules.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Encapsulates the source content, filename, and current path through the
/// manifest (e.g. `class com.example.Foo`), so nested validation can point
/// errors at the right declaration.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "alfred.toml");
/// let class_ctx = ctx.push("com.example.FeedViewModel");
/// class_ctx.validate_name("repository", "parameter")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// Get the current path joined with '/'.
    pub fn path_string(&self) -> String {
        self.path.join("/")
    }

    /// Describe a kind of name within the current path.
    ///
    /// For example: "parameter in 'com.example.Foo'" or just "class".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a quoted value in the source.
    pub fn find_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), value)
    }

    /// Create a validation error anchored at `value` when it can be found.
    pub fn error_at(&self, value: &str, message: impl Into<String>) -> Box<crate::Error> {
        self.source
            .validation_error(message, self.find_span(value))
    }

    /// Validate that a name is a plain Java identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_java_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// Validate a dotted name (package or nested class path) segment by segment.
    pub fn validate_dotted(&self, dotted: &str, kind: &str) -> Result<()> {
        for segment in dotted.split('.') {
            if is_java_keyword(segment) {
                return Err(self.source.reserved_keyword_error(
                    segment,
                    self.context_for(kind),
                    self.find_span(dotted),
                ));
            }
            if let Some(reason) = validate_identifier(segment) {
                return Err(self.source.invalid_identifier_error(
                    dotted,
                    self.context_for(kind),
                    reason,
                    self.find_span(dotted),
                ));
            }
        }
        Ok(())
    }
}

/// Java reserved words, including the literals `true`, `false` and `null`.
pub(crate) const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null", "_",
];

pub(crate) fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Find the span of a string value in the TOML source.
///
/// Looks for the value between double or single quotes so that
/// `name = "Foo"` matches but `name = "FooBar"` does not.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    find_value_spans(src, value).into_iter().next()
}

/// Every quoted occurrence of `value`, in source order.
pub(crate) fn find_value_spans(src: &str, value: &str) -> Vec<SourceSpan> {
    if value.is_empty() {
        return Vec::new();
    }

    let mut spans = Vec::new();
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        spans.extend(
            src.match_indices(&pattern)
                // +1 to skip the opening quote
                .map(|(pos, _)| SourceSpan::from((pos + 1, value.len()))),
        );
    }
    spans.sort_by_key(|span| span.offset());
    spans
}

/// Validate that a name is a valid Java identifier.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, '_' or '$'"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
        return Some("name must contain only letters, digits, '_' and '$'");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("repository").is_none());
        assert!(validate_identifier("UserViewModel").is_none());
        assert!(validate_identifier("_cache").is_none());
        assert!(validate_identifier("$generated").is_none());
        assert!(validate_identifier("item2").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("2fast").is_some());
        assert!(validate_identifier("user-id").is_some());
        assert!(validate_identifier("a b").is_some());
    }

    #[test]
    fn test_java_keywords() {
        assert!(is_java_keyword("class"));
        assert!(is_java_keyword("new"));
        assert!(is_java_keyword("null"));
        assert!(!is_java_keyword("record"));
        assert!(!is_java_keyword("fn"));
    }

    #[test]
    fn test_find_value_span_requires_quotes() {
        let src = r#"name = "FooBar"
name = "Foo""#;
        let span = find_value_span(src, "Foo").unwrap();
        assert_eq!(span.offset(), 24);
        assert_eq!(span.len(), 3);
    }

    #[test]
    fn test_find_value_spans_in_order() {
        let src = r#"a = 'x' b = "x""#;
        let spans = find_value_spans(src, "x");
        let offsets: Vec<usize> = spans.iter().map(|s| s.offset()).collect();
        assert_eq!(offsets, vec![5, 13]);
    }

    #[test]
    fn test_context_for() {
        let ctx = ParseContext::new("", "alfred.toml");
        assert_eq!(ctx.context_for("class"), "class");

        let nested = ctx.push("com.example.Feed");
        assert_eq!(nested.context_for("parameter"), "parameter in 'com.example.Feed'");
    }

    #[test]
    fn test_validate_dotted() {
        let ctx = ParseContext::new("package = \"com.example\"", "alfred.toml");
        assert!(ctx.validate_dotted("com.example", "package").is_ok());
        assert!(ctx.validate_dotted("com.new", "package").is_err());
        assert!(ctx.validate_dotted("com..example", "package").is_err());
    }
}
