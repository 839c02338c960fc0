// crates/nimbu-harness-mock/src/recording.rs
// ============================================================================
// Module: Recording Callbacks
// Description: Spy callback slots with ordered call history.
// Purpose: Record handler-visible callback invocations for test assertions.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! A recording callback is the instrumented slot behind every mock response
//! method: it keeps an ordered list of the argument tuples it received and
//! optionally runs a base behavior on each call (no-op by default). History
//! is shared across clones, so a response handed to a handler and the copy
//! kept by the test observe the same calls.
//! Invariants:
//! - Calls are recorded in invocation order, before the base behavior runs.
//! - Recording never fails; lock poisoning is recovered, not propagated.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use serde_json::Value;

// ============================================================================
// SECTION: Recording Callback
// ============================================================================

/// Base behavior invoked after recording.
type BaseBehavior = Arc<dyn Fn(&[Value]) + Send + Sync>;

/// Instrumented callback slot with shared, ordered call history.
#[derive(Clone)]
pub struct RecordingCallback {
    /// Ordered argument tuples received so far, shared across clones.
    calls: Arc<Mutex<Vec<Vec<Value>>>>,
    /// Optional behavior run after each recording.
    base: Option<BaseBehavior>,
}

impl RecordingCallback {
    /// Creates a no-op recording callback.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            base: None,
        }
    }

    /// Creates a recording callback that runs `base` after each recording.
    #[must_use]
    pub fn with_base(base: impl Fn(&[Value]) + Send + Sync + 'static) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            base: Some(Arc::new(base)),
        }
    }

    /// Records an invocation and runs the base behavior, if any.
    pub fn invoke(&self, args: Vec<Value>) {
        self.history().push(args.clone());
        if let Some(base) = &self.base {
            base(&args);
        }
    }

    /// Returns a snapshot of the recorded argument tuples, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<Vec<Value>> {
        self.history().clone()
    }

    /// Returns the number of recorded invocations.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.history().len()
    }

    /// Returns true when at least one invocation was recorded.
    #[must_use]
    pub fn was_called(&self) -> bool {
        !self.history().is_empty()
    }

    /// Returns the most recent argument tuple, if any.
    #[must_use]
    pub fn last_call(&self) -> Option<Vec<Value>> {
        self.history().last().cloned()
    }

    /// Locks the shared history, recovering from poisoning.
    fn history(&self) -> MutexGuard<'_, Vec<Vec<Value>>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RecordingCallback {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RecordingCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingCallback")
            .field("call_count", &self.call_count())
            .field("has_base", &self.base.is_some())
            .finish()
    }
}
