// crates/nimbu-harness-mock/examples/minimal.rs
// ============================================================================
// Module: Nimbu Harness Minimal Example
// Description: Minimal register/resolve/build/invoke flow.
// Purpose: Demonstrate the harness control flow without a live backend.
// Dependencies: nimbu-harness-core, nimbu-harness-mock
// ============================================================================

//! ## Overview
//! Registers a job handler through the DSL shim, resolves it by name, builds
//! a mock request/response pair, and invokes the handler.

use nimbu_harness_core::CloudDsl;
use nimbu_harness_core::HandlerResolver;
use nimbu_harness_mock::JobAttributes;
use nimbu_harness_mock::JobRequest;
use nimbu_harness_mock::MockBuilder;
use nimbu_harness_mock::TaskResponse;

/// Job handler under test.
fn send_welcome_email(_request: &JobRequest, response: &TaskResponse) {
    response.success("queued");
}

/// Handler signature used by this example.
type JobHandler = fn(&JobRequest, &TaskResponse);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut dsl: CloudDsl<JobHandler> = CloudDsl::new();
    dsl.job("sendWelcomeEmail", send_welcome_email);

    let resolver = HandlerResolver::new(dsl.store());
    let handler = resolver.job("sendWelcomeEmail")?;

    let (builder, rejections) = MockBuilder::recording();
    let (request, response) = builder.job(JobAttributes::default());
    handler(&request, &response);

    let _ = (response.success_calls(), rejections.was_rejected());
    Ok(())
}
