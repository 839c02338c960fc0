// crates/nimbu-harness-core/src/runtime/resolver.rs
// ============================================================================
// Module: Handler Resolver
// Description: Kind-specific resolution of captured handler registrations.
// Purpose: Return the handler that would run for a given logical spec.
// Dependencies: crate::core, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The resolver borrows a capture store and searches it with kind-specific
//! validation and structural matching. Resolution is deterministic: a fixed
//! capture history and fixed query always yield the same registration, and
//! the first match in capture order always wins. Enumerated-value validation
//! precedes every search, so an invalid event or view name fails even when a
//! structurally matching registration exists.
//! Invariants:
//! - Resolution never mutates the store.
//! - Every failure is a descriptive error echoing the query; no operation
//!   silently returns a partial or missing handler.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

use crate::core::capture::CaptureStore;
use crate::core::kinds::CallbackPhase;
use crate::core::kinds::EntryPoint;
use crate::core::kinds::EventType;
use crate::core::kinds::HandlerKind;
use crate::core::kinds::HttpVerb;
use crate::core::kinds::ViewType;
use crate::core::query::CallbackQuery;
use crate::core::query::ExtensionQuery;
use crate::core::query::matches_callback;
use crate::core::query::matches_extension;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Resolver errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - `NotFound` always carries the JSON echo of the query that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No captured registration satisfies the query.
    #[error("no {kind} handler found matching {spec}")]
    NotFound {
        /// Handler kind that was searched.
        kind: HandlerKind,
        /// JSON echo of the query.
        spec: String,
    },
    /// Event name outside the enumerated vocabulary.
    #[error("invalid event type: {event}")]
    InvalidEventType {
        /// The rejected event name.
        event: String,
    },
    /// View name outside the enumerated vocabulary.
    #[error("invalid view type: {view}")]
    InvalidViewType {
        /// The rejected view name.
        view: String,
    },
}

// ============================================================================
// SECTION: Handler Resolver
// ============================================================================

/// Read-only resolver over a capture store.
///
/// # Invariants
/// - Borrows the store immutably; resolution cannot mutate capture history.
/// - First match in capture order wins for every operation.
#[derive(Debug, Clone, Copy)]
pub struct HandlerResolver<'a, H> {
    /// The capture store being searched.
    store: &'a CaptureStore<H>,
}

impl<'a, H> HandlerResolver<'a, H> {
    /// Creates a resolver over the given store.
    #[must_use]
    pub const fn new(store: &'a CaptureStore<H>) -> Self {
        Self { store }
    }

    /// Resolves the route handler registered for a verb and exact path.
    ///
    /// The verb is case-normalized, so `"GET"` and `"get"` address the same
    /// entry point. Matching is exact string equality on the captured route
    /// specifier; there is no pattern or path-parameter matching.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] when no registration for the
    /// verb's entry point has an equal path.
    pub fn route(&self, verb: HttpVerb, path: &str) -> Result<&'a H, ResolveError> {
        // TODO: also search registrations made through the generic `route`
        // entry point and filter by its verb argument; those are currently
        // never matched.
        let mut spec = Map::new();
        spec.insert("verb".to_string(), Value::String(verb.as_str().to_string()));
        spec.insert("path".to_string(), Value::String(path.to_string()));
        self.first_match(verb.entry_point(), HandlerKind::Route, &Value::Object(spec).to_string(), |args| {
            args.first().and_then(Value::as_str) == Some(path)
        })
    }

    /// Resolves a lifecycle callback handler for a phase and partial query.
    ///
    /// The query's event name is validated against [`EventType`] before any
    /// search, so an unknown event fails even when a structurally matching
    /// registration exists. Matching is a structural subset match over
    /// `{event, slug}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidEventType`] for events outside the
    /// vocabulary and [`ResolveError::NotFound`] when no registration
    /// matches.
    pub fn callback(
        &self,
        phase: CallbackPhase,
        query: &CallbackQuery,
    ) -> Result<&'a H, ResolveError> {
        if EventType::parse(&query.event).is_none() {
            return Err(ResolveError::InvalidEventType {
                event: query.event.clone(),
            });
        }
        self.first_match(
            phase.entry_point(),
            HandlerKind::Callback,
            &query.echo(),
            |args| matches_callback(query, args),
        )
    }

    /// Resolves a background job handler by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] when no `job` registration has an
    /// equal name.
    pub fn job(&self, name: &str) -> Result<&'a H, ResolveError> {
        self.by_name(EntryPoint::Job, HandlerKind::Job, name)
    }

    /// Resolves an invocable cloud function handler by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] when no `define` registration has
    /// an equal name.
    pub fn function(&self, name: &str) -> Result<&'a H, ResolveError> {
        self.by_name(EntryPoint::Define, HandlerKind::Function, name)
    }

    /// Resolves a view extension handler for a partial query.
    ///
    /// The query's view name is validated against [`ViewType`] before any
    /// search. Matching is a structural subset match over the composite
    /// `{view, slug, name}` with `name` drawn from the registration's
    /// metadata object.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidViewType`] for views outside the
    /// vocabulary and [`ResolveError::NotFound`] when no registration
    /// matches.
    pub fn extension(&self, query: &ExtensionQuery) -> Result<&'a H, ResolveError> {
        if ViewType::parse(&query.view).is_none() {
            return Err(ResolveError::InvalidViewType {
                view: query.view.clone(),
            });
        }
        self.first_match(
            EntryPoint::Extend,
            HandlerKind::Extension,
            &query.echo(),
            |args| matches_extension(query, args),
        )
    }

    /// Resolves by exact equality on the first positional field.
    fn by_name(
        &self,
        entry: EntryPoint,
        kind: HandlerKind,
        name: &str,
    ) -> Result<&'a H, ResolveError> {
        self.first_match(entry, kind, &Value::String(name.to_string()).to_string(), |args| {
            args.first().and_then(Value::as_str) == Some(name)
        })
    }

    /// Returns the first matching registration's handler, in capture order.
    /// Records without a trailing handler never match.
    fn first_match(
        &self,
        entry: EntryPoint,
        kind: HandlerKind,
        spec: &str,
        predicate: impl Fn(&[Value]) -> bool,
    ) -> Result<&'a H, ResolveError> {
        self.store
            .calls(entry)
            .iter()
            .filter(|call| predicate(&call.args))
            .find_map(|call| call.handler.as_ref())
            .ok_or_else(|| ResolveError::NotFound {
                kind,
                spec: spec.to_string(),
            })
    }
}
