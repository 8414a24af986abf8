//! `[host]` section: the runtime types generated code is written against.

use alfred_ir::ClassName;
use serde::{Deserialize, Deserializer, de::Error as _};

/// A scope type the accessor can bind an instance to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScopeConfig {
    #[serde(rename = "type", deserialize_with = "deserialize_class_name")]
    pub ty: ClassName,
    /// Parameter name used for the scope in the accessor signature.
    pub param: String,
}

impl ScopeConfig {
    pub fn new(ty: ClassName, param: impl Into<String>) -> Self {
        Self {
            ty,
            param: param.into(),
        }
    }
}

/// Host framework types, defaulting to Android Architecture Components.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// Base class every candidate must extend.
    #[serde(deserialize_with = "deserialize_class_name")]
    pub base: ClassName,
    /// Factory interface the generated factory implements.
    #[serde(deserialize_with = "deserialize_class_name")]
    pub factory: ClassName,
    /// Scoped-instance store with a static `of(scope, factory)`.
    #[serde(deserialize_with = "deserialize_class_name")]
    pub store: ClassName,
    #[serde(deserialize_with = "deserialize_class_name")]
    pub non_null: ClassName,
    #[serde(deserialize_with = "deserialize_class_name")]
    pub nullable: ClassName,
    /// Exactly two scope types, one accessor overload each.
    pub scopes: Vec<ScopeConfig>,
}

impl Default for HostConfig {
    fn default() -> Self {
        let lifecycle = "android.arch.lifecycle";
        let annotation = "android.support.annotation";
        let app = "android.support.v4.app";

        Self {
            base: ClassName::new(lifecycle, "ViewModel"),
            factory: ClassName::new(lifecycle, "ViewModelProvider").nested("Factory"),
            store: ClassName::new(lifecycle, "ViewModelProviders"),
            non_null: ClassName::new(annotation, "NonNull"),
            nullable: ClassName::new(annotation, "Nullable"),
            scopes: vec![
                ScopeConfig::new(ClassName::new(app, "FragmentActivity"), "activity"),
                ScopeConfig::new(ClassName::new(app, "Fragment"), "fragment"),
            ],
        }
    }
}

fn deserialize_class_name<'de, D>(deserializer: D) -> Result<ClassName, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let name = ClassName::best_guess(&raw).map_err(D::Error::custom)?;
    if name.package.is_empty() {
        return Err(D::Error::custom(format!(
            "host type '{}' must be fully qualified",
            raw
        )));
    }
    Ok(name)
}
