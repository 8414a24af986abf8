//! Import collection utilities.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Packages keep insertion order until [`sort`](Self::sort) is called;
/// symbols within a package are always sorted.
///
/// # Example
///
/// ```
/// use alfred_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("java.util", "Map");
/// imports.add("android.content", "Context");
/// imports.add("java.util", "List");
/// imports.sort();
///
/// let lines: Vec<String> = imports.qualified().collect();
/// assert_eq!(lines, ["android.content.Context", "java.util.List", "java.util.Map"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Package -> set of symbols (sorted for deterministic output)
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a package.
    pub fn add(&mut self, package: &str, symbol: &str) {
        self.imports
            .entry(package.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Order packages lexicographically.
    pub fn sort(&mut self) {
        self.imports.sort_keys();
    }

    /// Iterate over all imports in package order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Fully-qualified import paths, one per symbol.
    pub fn qualified(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().flat_map(|(package, symbols)| {
            symbols
                .iter()
                .map(move |symbol| format!("{}.{}", package, symbol))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of packages.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduplicates_symbols() {
        let mut imports = ImportCollector::new();
        imports.add("java.util", "List");
        imports.add("java.util", "List");
        imports.add("java.util", "ArrayList");

        assert_eq!(imports.len(), 1);
        let lines: Vec<String> = imports.qualified().collect();
        assert_eq!(lines, ["java.util.ArrayList", "java.util.List"]);
    }

    #[test]
    fn test_insertion_order_until_sorted() {
        let mut imports = ImportCollector::new();
        imports.add("java.util", "List");
        imports.add("android.os", "Bundle");

        let packages: Vec<&str> = imports.iter().map(|(p, _)| p).collect();
        assert_eq!(packages, ["java.util", "android.os"]);

        imports.sort();
        let packages: Vec<&str> = imports.iter().map(|(p, _)| p).collect();
        assert_eq!(packages, ["android.os", "java.util"]);
    }
}
