//! Core operations.
//!
//! Each operation runs a round over a parsed manifest and returns a report;
//! argument parsing and rendering stay in `commands`.

pub mod check;
pub mod explain;
pub mod generate;

pub use check::check;
pub use explain::explain;
pub use generate::{GenerateOptions, generate};

#[cfg(test)]
pub(crate) mod fixtures {
    use alfred_manifest::Manifest;

    /// One valid candidate, one abstract candidate, plus a plain superclass.
    pub const MIXED: &str = r#"
[[class]]
package = "com.example"
name = "BaseViewModel"
modifiers = ["public", "abstract"]
extends = "android.arch.lifecycle.ViewModel"

[[class]]
package = "com.example"
name = "WidgetViewModel"
modifiers = ["public"]
extends = "com.example.BaseViewModel"
annotations = ["GeneratedProvider"]

[[class.constructor]]
params = [
  { name = "repo", type = "com.example.Repo", annotations = ["NonNull"] },
  { name = "size", type = "int" },
]

[[class]]
package = "com.example"
name = "BrokenViewModel"
modifiers = ["public", "abstract"]
extends = "android.arch.lifecycle.ViewModel"
annotations = ["GeneratedProvider"]
"#;

    pub fn manifest(src: &str) -> Manifest {
        src.parse().expect("fixture manifest parses")
    }
}
