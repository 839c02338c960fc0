// crates/nimbu-harness-mock/src/lib.rs
// ============================================================================
// Module: Nimbu Harness Mock
// Description: Mock request/response builders for cloud code handlers.
// Purpose: Synthesize realistic, instrumented request/response pairs per kind.
// Dependencies: nimbu-harness-core, serde, serde_json, uuid
// ============================================================================

//! ## Overview
//! This crate builds the request/response pairs used to invoke resolved
//! cloud code handlers in isolation. Requests combine caller-supplied
//! attributes with kind-specific defaults; responses expose instrumented
//! recording callbacks usable as test spies. Every response's `error` slot
//! both records the call and forwards its arguments into a pluggable
//! rejection sink standing in for the backend SDK's future-rejection
//! channel.
//! Invariants:
//! - Defaulting is idempotent: supplying every default explicitly yields
//!   the same request as omitting them.
//! - Required fields are required statically (non-optional constructor
//!   inputs); builders never fail at runtime.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod builder;
pub mod recording;
pub mod rejection;
pub mod request;
pub mod response;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use builder::Mock;
pub use builder::MockAttributes;
pub use builder::MockBuilder;
pub use recording::RecordingCallback;
pub use rejection::NoopRejectionSink;
pub use rejection::RecordingRejectionSink;
pub use rejection::RejectionSink;
pub use rejection::SharedSink;
pub use request::CallbackAttributes;
pub use request::DEFAULT_HOST;
pub use request::DEFAULT_LOCALE;
pub use request::CallbackRequest;
pub use request::ExtensionAttributes;
pub use request::ExtensionRequest;
pub use request::FunctionAttributes;
pub use request::FunctionMeta;
pub use request::FunctionMetaAttributes;
pub use request::FunctionRequest;
pub use request::JobAttributes;
pub use request::JobRequest;
pub use request::RouteAttributes;
pub use request::RouteRequest;
pub use response::CallbackResponse;
pub use response::Disposition;
pub use response::ExtensionResponse;
pub use response::RouteResponse;
pub use response::TaskResponse;
