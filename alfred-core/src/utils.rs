//! Shared name helpers for Java packages and classes.

use std::path::PathBuf;

/// Last dot-separated segment of a qualified name (e.g., "a.b.Foo" -> "Foo")
pub fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

/// Join a package and a (possibly nested) class name into a qualified name.
///
/// An empty package yields the bare name.
pub fn qualify(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", package, name)
    }
}

/// Directory for a package relative to a source root (e.g., "a.b" -> "a/b")
pub fn package_dir(package: &str) -> PathBuf {
    package
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_simple_name() {
        assert_eq!(simple_name("android.arch.lifecycle.ViewModel"), "ViewModel");
        assert_eq!(simple_name("Widget"), "Widget");
        assert_eq!(simple_name(""), "");
    }

    #[test]
    fn test_qualify() {
        assert_eq!(qualify("com.example", "Widget"), "com.example.Widget");
        assert_eq!(qualify("com.example", "Outer.Inner"), "com.example.Outer.Inner");
        assert_eq!(qualify("", "Widget"), "Widget");
    }

    #[test]
    fn test_package_dir() {
        assert_eq!(package_dir("com.example.app"), Path::new("com/example/app"));
        assert_eq!(package_dir(""), PathBuf::new());
    }
}
