// crates/nimbu-harness-mock/tests/harness_flow.rs
// ============================================================================
// Module: Harness Flow Tests
// Description: End-to-end register, resolve, build, invoke, assert flow.
// Purpose: Exercise the full control flow a test author would use.
// Dependencies: nimbu-harness-core, nimbu-harness-mock
// ============================================================================

//! End-to-end harness flow: register handlers through the DSL shim, resolve
//! one by logical spec, build a mock pair, invoke the handler, and assert on
//! the instrumented response.

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

use nimbu_harness_core::CloudDsl;
use nimbu_harness_core::ExtendMetadata;
use nimbu_harness_core::ExtensionQuery;
use nimbu_harness_core::HandlerResolver;
use nimbu_harness_core::HttpVerb;
use nimbu_harness_mock::Disposition;
use nimbu_harness_mock::ExtensionAttributes;
use nimbu_harness_mock::ExtensionRequest;
use nimbu_harness_mock::ExtensionResponse;
use nimbu_harness_mock::MockBuilder;
use nimbu_harness_mock::RouteAttributes;
use nimbu_harness_mock::RouteRequest;
use nimbu_harness_mock::RouteResponse;
use serde_json::json;

/// Route handler under test: renders on the happy path, 404s otherwise.
fn hello_route(request: &RouteRequest, response: &RouteResponse) {
    if request.params.contains_key("broken") {
        response.error(404, None);
    } else {
        response.render("hello", Some(json!({"host": request.host})));
    }
}

/// Extension handler under test: streams an export attachment.
fn export_extension(_request: &ExtensionRequest, response: &ExtensionResponse) {
    response.send("id,name\n", Disposition::Attachment);
}

type RouteHandler = fn(&RouteRequest, &RouteResponse);
type ExtensionHandler = fn(&ExtensionRequest, &ExtensionResponse);

#[test]
fn route_flow_renders_with_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let mut dsl: CloudDsl<RouteHandler> = CloudDsl::new();
    dsl.get("/hello", hello_route);

    let resolver = HandlerResolver::new(dsl.store());
    let handler = resolver.route(HttpVerb::Get, "/hello")?;

    let (builder, rejections) = MockBuilder::recording();
    let (request, response) = builder.route(RouteAttributes::new("/hello"));
    handler(&request, &response);

    assert_eq!(
        response.render_calls(),
        vec![vec![json!("hello"), json!({"host": "nimbu.test"})]]
    );
    assert!(!rejections.was_rejected());
    Ok(())
}

#[test]
fn route_flow_failure_reaches_rejection_channel() -> Result<(), Box<dyn std::error::Error>> {
    let mut dsl: CloudDsl<RouteHandler> = CloudDsl::new();
    dsl.get("/hello", hello_route);

    let resolver = HandlerResolver::new(dsl.store());
    let handler = resolver.route(HttpVerb::Get, "/hello")?;

    let (builder, rejections) = MockBuilder::recording();
    let mut attributes = RouteAttributes::new("/hello");
    let mut params = serde_json::Map::new();
    params.insert("broken".to_string(), json!(true));
    attributes.params = Some(params);
    let (request, response) = builder.route(attributes);
    handler(&request, &response);

    assert_eq!(response.error_calls(), vec![vec![json!(404)]]);
    assert_eq!(rejections.rejections(), vec![vec![json!(404)]]);
    Ok(())
}

#[test]
fn extension_flow_resolves_by_slug_and_streams() -> Result<(), Box<dyn std::error::Error>> {
    let mut dsl: CloudDsl<ExtensionHandler> = CloudDsl::new();
    dsl.extend(
        "product",
        Some("slug-a"),
        ExtendMetadata::new("export"),
        export_extension,
    );

    let resolver = HandlerResolver::new(dsl.store());
    let query = ExtensionQuery::new("product")
        .with_slug("slug-a")
        .with_name("export");
    let handler = resolver.extension(&query)?;

    let builder = MockBuilder::default();
    let (request, response) = builder.extension(ExtensionAttributes::default());
    handler(&request, &response);

    assert_eq!(
        response.send_calls(),
        vec![vec![json!("id,name\n"), json!("attachment")]]
    );
    Ok(())
}
