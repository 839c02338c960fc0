// crates/nimbu-harness-core/src/core/capture.rs
// ============================================================================
// Module: Registration Capture
// Description: Verbatim capture of DSL registration calls per entry point.
// Purpose: Record handler registrations for later structural resolution.
// Dependencies: crate::core::kinds, serde_json
// ============================================================================

//! ## Overview
//! Registration capture is the leaf of the harness: it intercepts every call
//! to a DSL entry point and appends the call's full argument tuple, kept as
//! given, to that entry point's ordered list. No recorder drops, coerces, or
//! reorders arguments, and no call shape is rejected.
//! Invariants:
//! - Capture lists grow append-only in call order.
//! - Nothing is pruned automatically; the harness owner resets the store
//!   between test cases via [`CaptureStore::clear`].
//!
//! The store is explicit and injectable (constructed fresh per test and
//! passed to resolvers) rather than ambient process-wide state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde_json::Map;
use serde_json::Value;

use crate::core::kinds::EntryPoint;

// ============================================================================
// SECTION: Captured Calls
// ============================================================================

/// One recorded DSL registration call.
///
/// # Invariants
/// - `args` holds the positional arguments verbatim, in call order, minus the
///   trailing handler reference (which lives in `handler`).
/// - Immutable once captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedCall<H> {
    /// Positional arguments as passed at registration time.
    pub args: Vec<Value>,
    /// Trailing handler reference, absent for handler-less entry points
    /// such as `unschedule`.
    pub handler: Option<H>,
}

/// Ordered, per-entry-point registration store.
///
/// # Invariants
/// - One append-only list per entry point, preserving call order.
/// - Lookups never mutate the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureStore<H> {
    /// Captured calls keyed by entry point.
    calls: BTreeMap<EntryPoint, Vec<CapturedCall<H>>>,
}

impl<H> CaptureStore<H> {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            calls: BTreeMap::new(),
        }
    }

    /// Appends a call record to the entry point's list.
    pub fn record(&mut self, entry: EntryPoint, args: Vec<Value>, handler: Option<H>) {
        self.calls
            .entry(entry)
            .or_default()
            .push(CapturedCall { args, handler });
    }

    /// Returns the captured calls for an entry point, in call order.
    #[must_use]
    pub fn calls(&self, entry: EntryPoint) -> &[CapturedCall<H>] {
        self.calls.get(&entry).map_or(&[], Vec::as_slice)
    }

    /// Returns the number of captured calls for an entry point.
    #[must_use]
    pub fn len(&self, entry: EntryPoint) -> usize {
        self.calls(entry).len()
    }

    /// Returns true when no calls have been captured anywhere.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.values().all(Vec::is_empty)
    }

    /// Discards all captured calls. The per-test reset hook for the harness
    /// owner; never invoked automatically.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl<H> Default for CaptureStore<H> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SECTION: Extend Metadata
// ============================================================================

/// Metadata object passed to `extend` registrations.
///
/// # Invariants
/// - `name` labels the extension within its view; matched by extension
///   queries that constrain `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendMetadata {
    /// Extension label within the view.
    pub name: String,
}

impl ExtendMetadata {
    /// Creates metadata with the given extension name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// ============================================================================
// SECTION: DSL Interception Shim
// ============================================================================

/// Typed interception shim over the cloud code registration surface.
///
/// One recorder method per DSL entry point, mirroring the real arity. Every
/// recorder appends the full argument tuple verbatim; no call shape errors.
///
/// # Invariants
/// - Recorders only append; they never search or validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudDsl<H> {
    /// Backing registration store.
    store: CaptureStore<H>,
}

impl<H> CloudDsl<H> {
    /// Creates a shim with an empty backing store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            store: CaptureStore::new(),
        }
    }

    /// Returns the backing store for resolution.
    #[must_use]
    pub const fn store(&self) -> &CaptureStore<H> {
        &self.store
    }

    /// Consumes the shim and returns the backing store.
    #[must_use]
    pub fn into_store(self) -> CaptureStore<H> {
        self.store
    }

    /// Discards all captured registrations (per-test reset).
    pub fn reset(&mut self) {
        self.store.clear();
    }

    /// Records an `extend(view, slug, metadata, handler)` registration.
    pub fn extend(
        &mut self,
        view: &str,
        slug: Option<&str>,
        metadata: ExtendMetadata,
        handler: H,
    ) {
        let mut meta = Map::new();
        meta.insert("name".to_string(), Value::String(metadata.name));
        let args = vec![
            Value::String(view.to_string()),
            slug.map_or(Value::Null, |s| Value::String(s.to_string())),
            Value::Object(meta),
        ];
        self.store.record(EntryPoint::Extend, args, Some(handler));
    }

    /// Records a `job(name, handler)` registration.
    pub fn job(&mut self, name: &str, handler: H) {
        self.named(EntryPoint::Job, name, handler);
    }

    /// Records a `define(name, handler)` registration.
    pub fn define(&mut self, name: &str, handler: H) {
        self.named(EntryPoint::Define, name, handler);
    }

    /// Records a `schedule(name, cron, handler)` registration.
    pub fn schedule(&mut self, name: &str, cron: &str, handler: H) {
        let args = vec![
            Value::String(name.to_string()),
            Value::String(cron.to_string()),
        ];
        self.store.record(EntryPoint::Schedule, args, Some(handler));
    }

    /// Records an `unschedule(name)` call. No trailing handler exists for
    /// this entry point.
    pub fn unschedule(&mut self, name: &str) {
        let args = vec![Value::String(name.to_string())];
        self.store.record(EntryPoint::Unschedule, args, None);
    }

    /// Records a generic multi-verb `route(path, handler)` registration.
    /// These registrations are captured but not searched by the route
    /// resolver; see [`crate::runtime::resolver::HandlerResolver::route`].
    pub fn route(&mut self, path: &str, handler: H) {
        self.named(EntryPoint::Route, path, handler);
    }

    /// Records a `get(path, handler)` registration.
    pub fn get(&mut self, path: &str, handler: H) {
        self.named(EntryPoint::Get, path, handler);
    }

    /// Records a `post(path, handler)` registration.
    pub fn post(&mut self, path: &str, handler: H) {
        self.named(EntryPoint::Post, path, handler);
    }

    /// Records a `put(path, handler)` registration.
    pub fn put(&mut self, path: &str, handler: H) {
        self.named(EntryPoint::Put, path, handler);
    }

    /// Records a `patch(path, handler)` registration.
    pub fn patch(&mut self, path: &str, handler: H) {
        self.named(EntryPoint::Patch, path, handler);
    }

    /// Records a `delete(path, handler)` registration.
    pub fn delete(&mut self, path: &str, handler: H) {
        self.named(EntryPoint::Delete, path, handler);
    }

    /// Records a `before(event, slug, handler)` registration.
    pub fn before(&mut self, event: &str, slug: Option<&str>, handler: H) {
        self.phased(EntryPoint::Before, event, slug, handler);
    }

    /// Records an `after(event, slug, handler)` registration.
    pub fn after(&mut self, event: &str, slug: Option<&str>, handler: H) {
        self.phased(EntryPoint::After, event, slug, handler);
    }

    /// Records a `(name, handler)` shaped registration.
    fn named(&mut self, entry: EntryPoint, name: &str, handler: H) {
        let args = vec![Value::String(name.to_string())];
        self.store.record(entry, args, Some(handler));
    }

    /// Records an `(event, slug, handler)` shaped registration.
    fn phased(&mut self, entry: EntryPoint, event: &str, slug: Option<&str>, handler: H) {
        let args = vec![
            Value::String(event.to_string()),
            slug.map_or(Value::Null, |s| Value::String(s.to_string())),
        ];
        self.store.record(entry, args, Some(handler));
    }
}

impl<H> Default for CloudDsl<H> {
    fn default() -> Self {
        Self::new()
    }
}
