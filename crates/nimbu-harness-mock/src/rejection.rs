// crates/nimbu-harness-mock/src/rejection.rs
// ============================================================================
// Module: Rejection Sinks
// Description: Pluggable stand-ins for the backend future-rejection channel.
// Purpose: Let response `error` slots forward failures without a live SDK.
// Dependencies: crate::recording, serde_json
// ============================================================================

//! ## Overview
//! In production, a cloud code handler signals failure by rejecting the
//! backend SDK's future. The harness replaces that channel with a strategy:
//! every mock response's `error` slot forwards its argument tuple into a
//! [`RejectionSink`]. The default recording sink lets tests assert that a
//! failure would have propagated; the no-op sink discards forwards.
//! Invariants:
//! - Forwarding receives the full argument tuple, verbatim.
//! - Sinks never fail; there is no rejection of the rejection.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde_json::Value;

use crate::recording::RecordingCallback;

// ============================================================================
// SECTION: Rejection Sink
// ============================================================================

/// Strategy receiving forwarded `error` invocations.
pub trait RejectionSink {
    /// Accepts one forwarded rejection with its full argument tuple.
    fn reject(&self, args: &[Value]);
}

/// Shared, swappable sink handle used by builders and responses.
pub type SharedSink = Arc<dyn RejectionSink + Send + Sync>;

// ============================================================================
// SECTION: Implementations
// ============================================================================

/// Recording sink: the default spy over forwarded rejections.
///
/// History is shared across clones, so the copy kept by a test observes
/// rejections forwarded through responses built later.
#[derive(Debug, Clone, Default)]
pub struct RecordingRejectionSink {
    /// Spy slot holding the forwarded rejections.
    rejections: RecordingCallback,
}

impl RecordingRejectionSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rejections: RecordingCallback::new(),
        }
    }

    /// Returns a snapshot of forwarded rejections, in forward order.
    #[must_use]
    pub fn rejections(&self) -> Vec<Vec<Value>> {
        self.rejections.calls()
    }

    /// Returns the number of forwarded rejections.
    #[must_use]
    pub fn rejection_count(&self) -> usize {
        self.rejections.call_count()
    }

    /// Returns true when at least one rejection was forwarded.
    #[must_use]
    pub fn was_rejected(&self) -> bool {
        self.rejections.was_called()
    }
}

impl RejectionSink for RecordingRejectionSink {
    fn reject(&self, args: &[Value]) {
        self.rejections.invoke(args.to_vec());
    }
}

/// No-op sink: discards forwarded rejections.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRejectionSink;

impl RejectionSink for NoopRejectionSink {
    fn reject(&self, _args: &[Value]) {}
}
