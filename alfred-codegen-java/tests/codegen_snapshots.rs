//! Snapshot tests for Java code generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use alfred_codegen::pipeline::Pipeline;
use alfred_codegen_java::{JavaGenerator, LanguageCodegen};
use alfred_manifest::{ConstructionStrategy, Manifest};

const FEED: &str = r#"
    [[class]]
    package = "com.example.feed"
    name = "FeedViewModel"
    modifiers = ["public"]
    extends = "com.example.feed.BaseViewModel"
    annotations = ["GeneratedProvider"]

    [[class.constructor]]
    params = [{ name = "repo", type = "com.example.feed.FeedRepository" }]

    [[class.constructor]]
    annotations = ["Main"]
    params = [
        { name = "repo", type = "com.example.feed.FeedRepository", annotations = ["NonNull"] },
        { name = "tags", type = "java.util.List<java.lang.String>", annotations = ["Nullable"] },
        { name = "pageSize", type = "int" },
    ]

    [[class]]
    package = "com.example.feed"
    name = "BaseViewModel"
    modifiers = ["public", "abstract"]
    extends = "android.arch.lifecycle.ViewModel"
"#;

/// Generate the single provider file for a manifest.
fn generate(manifest: &str, strategy: ConstructionStrategy) -> String {
    let manifest: Manifest = manifest.parse().expect("Failed to parse manifest");
    let ctx = Pipeline::new().run(manifest).expect("pipeline should run");
    assert!(!ctx.has_errors(), "unexpected diagnostics: {:?}", ctx.diagnostics);

    let mut files = JavaGenerator::from_context(&ctx)
        .with_strategy(strategy)
        .preview();
    assert_eq!(files.len(), 1);
    files.remove(0).content
}

#[test]
fn test_feed_provider_direct() {
    let code = generate(FEED, ConstructionStrategy::Direct);
    insta::assert_snapshot!("feed_provider_direct", code);
}

#[test]
fn test_feed_provider_checked_dynamic() {
    let code = generate(FEED, ConstructionStrategy::CheckedDynamic);
    insta::assert_snapshot!("feed_provider_checked_dynamic", code);
}
