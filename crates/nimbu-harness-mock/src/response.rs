// crates/nimbu-harness-mock/src/response.rs
// ============================================================================
// Module: Mock Responses
// Description: Per-kind instrumented response surfaces.
// Purpose: Give handlers response methods whose invocations tests can assert.
// Dependencies: crate::recording, crate::rejection, serde, serde_json
// ============================================================================

//! ## Overview
//! Each handler kind exposes a fixed interface of recording callback slots.
//! Invoking a slot records the argument tuple; the `error` slot additionally
//! forwards its tuple into the builder's rejection sink, simulating how a
//! real failure would reject the backend future. Responses are cloneable
//! and share history across clones.
//! Invariants:
//! - Every slot records before any side behavior runs.
//! - `error` always forwards the full argument tuple to the sink.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::recording::RecordingCallback;
use crate::rejection::SharedSink;

// ============================================================================
// SECTION: Slot Construction
// ============================================================================

/// Builds the instrumented `error` slot forwarding into the sink.
fn error_slot(sink: &SharedSink) -> RecordingCallback {
    let sink = SharedSink::clone(sink);
    RecordingCallback::with_base(move |args| sink.reject(args))
}

/// Collects one mandatory and one optional argument into a tuple.
fn one_or_two(first: Value, second: Option<Value>) -> Vec<Value> {
    match second {
        Some(second) => vec![first, second],
        None => vec![first],
    }
}

// ============================================================================
// SECTION: Disposition
// ============================================================================

/// Content disposition accepted by the extension `send` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    /// Render the body inline.
    Inline,
    /// Offer the body as a download.
    Attachment,
}

impl Disposition {
    /// Returns the lowercase disposition name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Attachment => "attachment",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Callback Response
// ============================================================================

/// Instrumented response for lifecycle callbacks.
#[derive(Debug, Clone)]
pub struct CallbackResponse {
    /// `success(message)` slot.
    success: RecordingCallback,
    /// `error(field_or_message, message_for_field?)` slot.
    error: RecordingCallback,
}

impl CallbackResponse {
    /// Creates a response wired to the given rejection sink.
    #[must_use]
    pub(crate) fn new(sink: &SharedSink) -> Self {
        Self {
            success: RecordingCallback::new(),
            error: error_slot(sink),
        }
    }

    /// Signals success with a message.
    pub fn success(&self, message: impl Into<Value>) {
        self.success.invoke(vec![message.into()]);
    }

    /// Signals failure; records the call and forwards it to the sink.
    ///
    /// With one argument, `field_or_message` is the failure message; with
    /// two, it names the field and `message_for_field` carries the message.
    pub fn error(&self, field_or_message: impl Into<Value>, message_for_field: Option<Value>) {
        self.error
            .invoke(one_or_two(field_or_message.into(), message_for_field));
    }

    /// Recorded `success` invocations, in call order.
    #[must_use]
    pub fn success_calls(&self) -> Vec<Vec<Value>> {
        self.success.calls()
    }

    /// Recorded `error` invocations, in call order.
    #[must_use]
    pub fn error_calls(&self) -> Vec<Vec<Value>> {
        self.error.calls()
    }
}

// ============================================================================
// SECTION: Route Response
// ============================================================================

/// Instrumented response for route handlers.
#[derive(Debug, Clone)]
pub struct RouteResponse {
    /// `render(template, locals?)` slot.
    render: RecordingCallback,
    /// `redirect_to(url)` slot.
    redirect_to: RecordingCallback,
    /// `success(message)` slot.
    success: RecordingCallback,
    /// `error(...)` slot, forwarding to the sink.
    error: RecordingCallback,
    /// `json(body)` slot.
    json: RecordingCallback,
    /// `send(body)` slot.
    send: RecordingCallback,
}

impl RouteResponse {
    /// Creates a response wired to the given rejection sink.
    #[must_use]
    pub(crate) fn new(sink: &SharedSink) -> Self {
        Self {
            render: RecordingCallback::new(),
            redirect_to: RecordingCallback::new(),
            success: RecordingCallback::new(),
            error: error_slot(sink),
            json: RecordingCallback::new(),
            send: RecordingCallback::new(),
        }
    }

    /// Renders a template, optionally with locals.
    pub fn render(&self, template: impl Into<Value>, locals: Option<Value>) {
        self.render.invoke(one_or_two(template.into(), locals));
    }

    /// Redirects to a URL.
    pub fn redirect_to(&self, url: impl Into<Value>) {
        self.redirect_to.invoke(vec![url.into()]);
    }

    /// Signals success with a message.
    pub fn success(&self, message: impl Into<Value>) {
        self.success.invoke(vec![message.into()]);
    }

    /// Signals failure; records the call and forwards it to the sink.
    pub fn error(&self, status_or_message: impl Into<Value>, detail: Option<Value>) {
        self.error
            .invoke(one_or_two(status_or_message.into(), detail));
    }

    /// Responds with a JSON body.
    pub fn json(&self, body: impl Into<Value>) {
        self.json.invoke(vec![body.into()]);
    }

    /// Responds with a raw body.
    pub fn send(&self, body: impl Into<Value>) {
        self.send.invoke(vec![body.into()]);
    }

    /// Recorded `render` invocations, in call order.
    #[must_use]
    pub fn render_calls(&self) -> Vec<Vec<Value>> {
        self.render.calls()
    }

    /// Recorded `redirect_to` invocations, in call order.
    #[must_use]
    pub fn redirect_to_calls(&self) -> Vec<Vec<Value>> {
        self.redirect_to.calls()
    }

    /// Recorded `success` invocations, in call order.
    #[must_use]
    pub fn success_calls(&self) -> Vec<Vec<Value>> {
        self.success.calls()
    }

    /// Recorded `error` invocations, in call order.
    #[must_use]
    pub fn error_calls(&self) -> Vec<Vec<Value>> {
        self.error.calls()
    }

    /// Recorded `json` invocations, in call order.
    #[must_use]
    pub fn json_calls(&self) -> Vec<Vec<Value>> {
        self.json.calls()
    }

    /// Recorded `send` invocations, in call order.
    #[must_use]
    pub fn send_calls(&self) -> Vec<Vec<Value>> {
        self.send.calls()
    }
}

// ============================================================================
// SECTION: Task Response
// ============================================================================

/// Instrumented response for jobs and functions (identical surfaces).
#[derive(Debug, Clone)]
pub struct TaskResponse {
    /// `success(message)` slot.
    success: RecordingCallback,
    /// `error(...)` slot, forwarding to the sink.
    error: RecordingCallback,
}

impl TaskResponse {
    /// Creates a response wired to the given rejection sink.
    #[must_use]
    pub(crate) fn new(sink: &SharedSink) -> Self {
        Self {
            success: RecordingCallback::new(),
            error: error_slot(sink),
        }
    }

    /// Signals success with a message.
    pub fn success(&self, message: impl Into<Value>) {
        self.success.invoke(vec![message.into()]);
    }

    /// Signals failure; records the call and forwards it to the sink.
    pub fn error(&self, message: impl Into<Value>, detail: Option<Value>) {
        self.error.invoke(one_or_two(message.into(), detail));
    }

    /// Recorded `success` invocations, in call order.
    #[must_use]
    pub fn success_calls(&self) -> Vec<Vec<Value>> {
        self.success.calls()
    }

    /// Recorded `error` invocations, in call order.
    #[must_use]
    pub fn error_calls(&self) -> Vec<Vec<Value>> {
        self.error.calls()
    }
}

// ============================================================================
// SECTION: Extension Response
// ============================================================================

/// Instrumented response for view extensions.
#[derive(Debug, Clone)]
pub struct ExtensionResponse {
    /// `success(message)` slot.
    success: RecordingCallback,
    /// `error(...)` slot, forwarding to the sink.
    error: RecordingCallback,
    /// `send(body, disposition)` slot.
    send: RecordingCallback,
    /// `redirect_to(url)` slot.
    redirect_to: RecordingCallback,
}

impl ExtensionResponse {
    /// Creates a response wired to the given rejection sink.
    #[must_use]
    pub(crate) fn new(sink: &SharedSink) -> Self {
        Self {
            success: RecordingCallback::new(),
            error: error_slot(sink),
            send: RecordingCallback::new(),
            redirect_to: RecordingCallback::new(),
        }
    }

    /// Signals success with a message.
    pub fn success(&self, message: impl Into<Value>) {
        self.success.invoke(vec![message.into()]);
    }

    /// Signals failure; records the call and forwards it to the sink.
    pub fn error(&self, message: impl Into<Value>, detail: Option<Value>) {
        self.error.invoke(one_or_two(message.into(), detail));
    }

    /// Sends a body with the given disposition.
    pub fn send(&self, body: impl Into<Value>, disposition: Disposition) {
        self.send.invoke(vec![
            body.into(),
            Value::String(disposition.as_str().to_string()),
        ]);
    }

    /// Redirects to a URL.
    pub fn redirect_to(&self, url: impl Into<Value>) {
        self.redirect_to.invoke(vec![url.into()]);
    }

    /// Recorded `success` invocations, in call order.
    #[must_use]
    pub fn success_calls(&self) -> Vec<Vec<Value>> {
        self.success.calls()
    }

    /// Recorded `error` invocations, in call order.
    #[must_use]
    pub fn error_calls(&self) -> Vec<Vec<Value>> {
        self.error.calls()
    }

    /// Recorded `send` invocations, in call order.
    #[must_use]
    pub fn send_calls(&self) -> Vec<Vec<Value>> {
        self.send.calls()
    }

    /// Recorded `redirect_to` invocations, in call order.
    #[must_use]
    pub fn redirect_to_calls(&self) -> Vec<Vec<Value>> {
        self.redirect_to.calls()
    }
}
