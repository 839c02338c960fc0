// crates/nimbu-harness-mock/src/builder.rs
// ============================================================================
// Module: Mock Builder
// Description: Per-kind builders and the tagged dispatch over handler kinds.
// Purpose: Produce request/response pairs wired to a shared rejection sink.
// Dependencies: nimbu-harness-core, crate::request, crate::response
// ============================================================================

//! ## Overview
//! The builder owns the rejection sink shared by every response it creates.
//! Five per-kind operations return typed request/response pairs; the tagged
//! [`MockAttributes`] sum plus an exhaustive match in [`MockBuilder::build`]
//! give the dispatch a static guarantee that the kind tag and the attribute
//! shape agree.
//! Invariants:
//! - Builders never fail: required fields are constructor inputs and every
//!   other field has a kind-specific default.
//! - All responses built by one builder forward errors into the same sink.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use nimbu_harness_core::HandlerKind;

use crate::rejection::RecordingRejectionSink;
use crate::rejection::SharedSink;
use crate::request::CallbackAttributes;
use crate::request::CallbackRequest;
use crate::request::ExtensionAttributes;
use crate::request::ExtensionRequest;
use crate::request::FunctionAttributes;
use crate::request::FunctionRequest;
use crate::request::JobAttributes;
use crate::request::JobRequest;
use crate::request::RouteAttributes;
use crate::request::RouteRequest;
use crate::response::CallbackResponse;
use crate::response::ExtensionResponse;
use crate::response::RouteResponse;
use crate::response::TaskResponse;

// ============================================================================
// SECTION: Tagged Attributes
// ============================================================================

/// Kind-tagged attributes for the dispatching build operation.
///
/// # Invariants
/// - Each variant carries exactly the attribute shape of its kind; the tag
///   and the shape cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockAttributes {
    /// Callback mock attributes.
    Callback(CallbackAttributes),
    /// Route mock attributes.
    Route(RouteAttributes),
    /// Job mock attributes.
    Job(JobAttributes),
    /// Function mock attributes.
    Function(FunctionAttributes),
    /// Extension mock attributes.
    Extension(ExtensionAttributes),
}

impl MockAttributes {
    /// Returns the handler kind this attribute set belongs to.
    #[must_use]
    pub const fn kind(&self) -> HandlerKind {
        match self {
            Self::Callback(_) => HandlerKind::Callback,
            Self::Route(_) => HandlerKind::Route,
            Self::Job(_) => HandlerKind::Job,
            Self::Function(_) => HandlerKind::Function,
            Self::Extension(_) => HandlerKind::Extension,
        }
    }
}

// ============================================================================
// SECTION: Tagged Mocks
// ============================================================================

/// Kind-tagged request/response pair produced by the dispatcher.
#[derive(Debug, Clone)]
pub enum Mock {
    /// Callback request/response pair.
    Callback {
        /// Defaulted callback request.
        request: CallbackRequest,
        /// Instrumented callback response.
        response: CallbackResponse,
    },
    /// Route request/response pair.
    Route {
        /// Defaulted route request.
        request: RouteRequest,
        /// Instrumented route response.
        response: RouteResponse,
    },
    /// Job request/response pair.
    Job {
        /// Defaulted job request.
        request: JobRequest,
        /// Instrumented job response.
        response: TaskResponse,
    },
    /// Function request/response pair.
    Function {
        /// Defaulted function request.
        request: FunctionRequest,
        /// Instrumented function response.
        response: TaskResponse,
    },
    /// Extension request/response pair.
    Extension {
        /// Defaulted extension request.
        request: ExtensionRequest,
        /// Instrumented extension response.
        response: ExtensionResponse,
    },
}

impl Mock {
    /// Returns the handler kind of this pair.
    #[must_use]
    pub const fn kind(&self) -> HandlerKind {
        match self {
            Self::Callback { .. } => HandlerKind::Callback,
            Self::Route { .. } => HandlerKind::Route,
            Self::Job { .. } => HandlerKind::Job,
            Self::Function { .. } => HandlerKind::Function,
            Self::Extension { .. } => HandlerKind::Extension,
        }
    }
}

// ============================================================================
// SECTION: Mock Builder
// ============================================================================

/// Builder producing request/response pairs wired to one rejection sink.
#[derive(Clone)]
pub struct MockBuilder {
    /// Sink receiving every forwarded `error` invocation.
    sink: SharedSink,
}

impl MockBuilder {
    /// Creates a builder forwarding rejections into the given sink.
    #[must_use]
    pub fn new(sink: SharedSink) -> Self {
        Self { sink }
    }

    /// Creates a builder with a recording sink and returns both, so tests
    /// can assert on forwarded rejections.
    #[must_use]
    pub fn recording() -> (Self, RecordingRejectionSink) {
        let sink = RecordingRejectionSink::new();
        (Self::new(Arc::new(sink.clone())), sink)
    }

    /// Builds a callback request/response pair.
    #[must_use]
    pub fn callback(
        &self,
        attributes: CallbackAttributes,
    ) -> (CallbackRequest, CallbackResponse) {
        (attributes.into(), CallbackResponse::new(&self.sink))
    }

    /// Builds a route request/response pair.
    #[must_use]
    pub fn route(&self, attributes: RouteAttributes) -> (RouteRequest, RouteResponse) {
        (attributes.into(), RouteResponse::new(&self.sink))
    }

    /// Builds a job request/response pair.
    #[must_use]
    pub fn job(&self, attributes: JobAttributes) -> (JobRequest, TaskResponse) {
        (attributes.into(), TaskResponse::new(&self.sink))
    }

    /// Builds a function request/response pair with generated meta defaults.
    #[must_use]
    pub fn function(&self, attributes: FunctionAttributes) -> (FunctionRequest, TaskResponse) {
        (attributes.into(), TaskResponse::new(&self.sink))
    }

    /// Builds an extension request/response pair.
    #[must_use]
    pub fn extension(
        &self,
        attributes: ExtensionAttributes,
    ) -> (ExtensionRequest, ExtensionResponse) {
        (attributes.into(), ExtensionResponse::new(&self.sink))
    }

    /// Dispatches on the attribute tag and builds the matching pair.
    #[must_use]
    pub fn build(&self, attributes: MockAttributes) -> Mock {
        match attributes {
            MockAttributes::Callback(attributes) => {
                let (request, response) = self.callback(attributes);
                Mock::Callback { request, response }
            }
            MockAttributes::Route(attributes) => {
                let (request, response) = self.route(attributes);
                Mock::Route { request, response }
            }
            MockAttributes::Job(attributes) => {
                let (request, response) = self.job(attributes);
                Mock::Job { request, response }
            }
            MockAttributes::Function(attributes) => {
                let (request, response) = self.function(attributes);
                Mock::Function { request, response }
            }
            MockAttributes::Extension(attributes) => {
                let (request, response) = self.extension(attributes);
                Mock::Extension { request, response }
            }
        }
    }
}

impl Default for MockBuilder {
    fn default() -> Self {
        Self::new(Arc::new(RecordingRejectionSink::new()))
    }
}

impl std::fmt::Debug for MockBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockBuilder").finish_non_exhaustive()
    }
}
