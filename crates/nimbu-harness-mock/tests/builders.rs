// crates/nimbu-harness-mock/tests/builders.rs
// ============================================================================
// Module: Builder Tests
// Description: Validate per-kind mock builders and the tagged dispatch.
// Purpose: Ensure defaults, required fields, and rejection forwarding hold.
// Dependencies: nimbu-harness-mock
// ============================================================================

//! Builder behavior tests across all five handler kinds.

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
    reason = "Test-only output and panic-based assertions are permitted."
)]

use nimbu_harness_core::HandlerKind;
use nimbu_harness_mock::CallbackAttributes;
use nimbu_harness_mock::Disposition;
use nimbu_harness_mock::ExtensionAttributes;
use nimbu_harness_mock::FunctionAttributes;
use nimbu_harness_mock::JobAttributes;
use nimbu_harness_mock::Mock;
use nimbu_harness_mock::MockAttributes;
use nimbu_harness_mock::MockBuilder;
use nimbu_harness_mock::RouteAttributes;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Route Defaults
// ============================================================================

#[test]
fn route_mock_fills_documented_defaults() {
    let (builder, rejections) = MockBuilder::recording();
    let (request, response) = builder.route(RouteAttributes::new("/hello"));

    assert_eq!(request.path, "/hello");
    assert_eq!(request.locale, "en");
    assert!(!request.simulating);
    assert_eq!(request.host, "nimbu.test");
    assert!(request.params.is_empty());
    assert!(request.headers.is_empty());

    // error(404) both records and forwards into the rejection channel.
    response.error(404, None);
    assert_eq!(response.error_calls(), vec![vec![json!(404)]]);
    assert_eq!(rejections.rejections(), vec![vec![json!(404)]]);
}

#[test]
fn route_defaulting_is_idempotent() {
    let builder = MockBuilder::default();
    let sparse = builder.route(RouteAttributes::new("/p")).0;

    let mut explicit = RouteAttributes::new("/p");
    explicit.locale = Some("en".to_string());
    explicit.simulating = Some(false);
    explicit.host = Some("nimbu.test".to_string());
    explicit.params = Some(serde_json::Map::new());
    explicit.headers = Some(serde_json::Map::new());
    let full = builder.route(explicit).0;

    assert_eq!(sparse, full);
}

#[test]
fn route_response_slots_record_independently() {
    let (builder, _rejections) = MockBuilder::recording();
    let (_request, response) = builder.route(RouteAttributes::new("/x"));

    response.render("pages/show", Some(json!({"title": "t"})));
    response.redirect_to("/login");
    response.json(json!({"ok": true}));
    response.send("raw");
    response.success("done");

    assert_eq!(
        response.render_calls(),
        vec![vec![json!("pages/show"), json!({"title": "t"})]]
    );
    assert_eq!(response.redirect_to_calls(), vec![vec![json!("/login")]]);
    assert_eq!(response.json_calls(), vec![vec![json!({"ok": true})]]);
    assert_eq!(response.send_calls(), vec![vec![json!("raw")]]);
    assert_eq!(response.success_calls(), vec![vec![json!("done")]]);
    assert!(response.error_calls().is_empty());
}

// ============================================================================
// SECTION: Callback
// ============================================================================

#[test]
fn callback_error_forwards_both_shapes() {
    let (builder, rejections) = MockBuilder::recording();
    let (_request, response) =
        builder.callback(CallbackAttributes::new(json!({"id": 7})));

    response.error("base", None);
    response.error("title", Some(json!("is required")));

    assert_eq!(
        response.error_calls(),
        vec![
            vec![json!("base")],
            vec![json!("title"), json!("is required")],
        ]
    );
    assert_eq!(rejections.rejection_count(), 2);
    assert_eq!(
        rejections.rejections()[1],
        vec![json!("title"), json!("is required")]
    );
}

#[test]
fn callback_success_does_not_forward() {
    let (builder, rejections) = MockBuilder::recording();
    let (_request, response) =
        builder.callback(CallbackAttributes::new(json!({"id": 7})));

    response.success("saved");
    assert_eq!(response.success_calls(), vec![vec![json!("saved")]]);
    assert!(!rejections.was_rejected());
}

// ============================================================================
// SECTION: Job and Function
// ============================================================================

#[test]
fn job_mock_defaults_params() {
    let (builder, rejections) = MockBuilder::recording();
    let (request, response) = builder.job(JobAttributes::default());

    assert!(request.params.is_empty());
    response.error("boom", None);
    assert!(rejections.was_rejected());
}

#[test]
fn function_mock_generates_fresh_meta() {
    let builder = MockBuilder::default();
    let first = builder.function(FunctionAttributes::default()).0;
    let second = builder.function(FunctionAttributes::default()).0;

    assert_ne!(
        (first.meta.installation_id, first.meta.request_id.clone()),
        (second.meta.installation_id, second.meta.request_id)
    );
}

// ============================================================================
// SECTION: Extension
// ============================================================================

#[test]
fn extension_send_records_disposition() {
    let (builder, rejections) = MockBuilder::recording();
    let (request, response) = builder.extension(ExtensionAttributes::default());

    assert!(request.params.is_empty());
    response.send("csv-bytes", Disposition::Attachment);
    response.redirect_to("/back");

    assert_eq!(
        response.send_calls(),
        vec![vec![json!("csv-bytes"), json!("attachment")]]
    );
    assert_eq!(response.redirect_to_calls(), vec![vec![json!("/back")]]);
    assert!(!rejections.was_rejected());
}

// ============================================================================
// SECTION: Tagged Dispatch
// ============================================================================

#[test]
fn dispatch_kind_tags_agree() {
    let builder = MockBuilder::default();
    let cases = vec![
        (
            MockAttributes::Callback(CallbackAttributes::new(Value::Null)),
            HandlerKind::Callback,
        ),
        (
            MockAttributes::Route(RouteAttributes::new("/d")),
            HandlerKind::Route,
        ),
        (MockAttributes::Job(JobAttributes::default()), HandlerKind::Job),
        (
            MockAttributes::Function(FunctionAttributes::default()),
            HandlerKind::Function,
        ),
        (
            MockAttributes::Extension(ExtensionAttributes::default()),
            HandlerKind::Extension,
        ),
    ];

    for (attributes, kind) in cases {
        assert_eq!(attributes.kind(), kind);
        let mock = builder.build(attributes);
        assert_eq!(mock.kind(), kind);
    }
}

#[test]
fn dispatch_builds_the_matching_pair() {
    let (builder, rejections) = MockBuilder::recording();
    let mock = builder.build(MockAttributes::Route(RouteAttributes::new("/hello")));

    match mock {
        Mock::Route { request, response } => {
            assert_eq!(request.host, "nimbu.test");
            response.error(500, Some(json!("oops")));
        }
        other => panic!("expected a route mock, got {:?}", other.kind()),
    }
    assert_eq!(rejections.rejections(), vec![vec![json!(500), json!("oops")]]);
}

#[test]
fn builders_share_one_sink() {
    let (builder, rejections) = MockBuilder::recording();
    let (_job_request, job_response) = builder.job(JobAttributes::default());
    let (_ext_request, ext_response) = builder.extension(ExtensionAttributes::default());

    job_response.error("job failed", None);
    ext_response.error("extension failed", None);

    assert_eq!(
        rejections.rejections(),
        vec![vec![json!("job failed")], vec![json!("extension failed")]]
    );
}
