// crates/nimbu-harness-core/tests/proptest_matching.rs
// ============================================================================
// Module: Subset-Match Property-Based Tests
// Description: Property tests for structural subset matching.
// Purpose: Validate match soundness and constraint monotonicity.
// ============================================================================

//! Property-based tests for the structural subset-match rule.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use nimbu_harness_core::CallbackQuery;
use nimbu_harness_core::ExtensionQuery;
use nimbu_harness_core::ViewType;
use nimbu_harness_core::matches_callback;
use nimbu_harness_core::matches_extension;
use proptest::prelude::*;
use serde_json::Value;
use serde_json::json;

/// Builds a captured extension argument tuple.
fn extension_args(view: &str, slug: Option<&str>, name: &str) -> Vec<Value> {
    vec![
        json!(view),
        slug.map_or(Value::Null, |s| json!(s)),
        json!({ "name": name }),
    ]
}

fn view_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(
        ViewType::ALL
            .iter()
            .map(|view| view.as_str())
            .collect::<Vec<_>>(),
    )
}

proptest! {
    #[test]
    fn candidate_equal_on_constrained_fields_matches(
        view in view_strategy(),
        slug in prop::option::of("[a-z]{1,8}"),
        name in "[a-z]{1,8}",
        constrain_slug in any::<bool>(),
        constrain_name in any::<bool>(),
    ) {
        let args = extension_args(view, slug.as_deref(), &name);
        let mut query = ExtensionQuery::new(view);
        if constrain_slug {
            query = query.with_slug(slug.as_deref().map_or(Value::Null, |s| json!(s)));
        }
        if constrain_name {
            query = query.with_name(name.clone());
        }
        prop_assert!(matches_extension(&query, &args));
    }

    #[test]
    fn removing_a_constraint_never_unmatches(
        view in view_strategy(),
        slug in prop::option::of("[a-z]{1,8}"),
        name in "[a-z]{1,8}",
        candidate_name in "[a-z]{1,8}",
    ) {
        let args = extension_args(view, slug.as_deref(), &candidate_name);
        let full = ExtensionQuery::new(view)
            .with_slug(slug.as_deref().map_or(Value::Null, |s| json!(s)))
            .with_name(name.clone());
        if matches_extension(&full, &args) {
            // Dropping the name constraint must preserve the match.
            let without_name = ExtensionQuery::new(view)
                .with_slug(slug.as_deref().map_or(Value::Null, |s| json!(s)));
            prop_assert!(matches_extension(&without_name, &args));
            // Dropping the slug constraint must preserve the match.
            let without_slug = ExtensionQuery::new(view).with_name(name.clone());
            prop_assert!(matches_extension(&without_slug, &args));
        }
    }

    #[test]
    fn callback_event_mismatch_never_matches(
        slug in prop::option::of("[a-z]{1,8}"),
        query_slug in prop::option::of("[a-z]{1,8}"),
    ) {
        let args = vec![json!("create"), slug.as_deref().map_or(Value::Null, |s| json!(s))];
        let mut query = CallbackQuery::new("update");
        if let Some(s) = query_slug {
            query = query.with_slug(json!(s));
        }
        prop_assert!(!matches_callback(&query, &args));
    }

    #[test]
    fn callback_slug_constraint_is_deep_equality(
        slug in "[a-z]{1,8}",
        other in "[a-z]{1,8}",
    ) {
        let args = vec![json!("save"), json!(slug)];
        let same = CallbackQuery::new("save").with_slug(json!(slug.clone()));
        prop_assert!(matches_callback(&same, &args));
        let differs = CallbackQuery::new("save").with_slug(json!(other.clone()));
        prop_assert_eq!(matches_callback(&differs, &args), slug == other);
    }
}
