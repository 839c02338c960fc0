// crates/nimbu-harness-core/src/core/query.rs
// ============================================================================
// Module: Resolution Queries
// Description: Partial query types and structural subset matching.
// Purpose: Describe a desired handler and match it against captured calls.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Queries are partial records: a captured registration matches a query iff
//! every field *present* in the query is deep-equal to the registration's
//! corresponding field. Absent fields are unconstrained, so a sparse query
//! can match several registrations; only the first in capture order is ever
//! returned. Queries are used for matching only and never stored.
//! Invariants:
//! - Deep equality is `serde_json::Value` equality on the constrained field.
//! - `slug: Some(Value::Null)` constrains "registered with no slug";
//!   `slug: None` leaves the slug unconstrained.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

// ============================================================================
// SECTION: Callback Query
// ============================================================================

/// Partial description of a lifecycle callback registration.
///
/// # Invariants
/// - `event` is always constrained and is validated against the event
///   vocabulary before any search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackQuery {
    /// Lifecycle event name the callback was registered for.
    pub event: String,
    /// Optional slug constraint; `None` is unconstrained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<Value>,
}

impl CallbackQuery {
    /// Creates a query constraining only the event name.
    #[must_use]
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            slug: None,
        }
    }

    /// Adds a slug constraint. Use `Value::Null` to require a slug-less
    /// registration.
    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<Value>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Renders the query as a JSON echo for error messages.
    #[must_use]
    pub fn echo(&self) -> String {
        let mut spec = Map::new();
        spec.insert("event".to_string(), Value::String(self.event.clone()));
        if let Some(slug) = &self.slug {
            spec.insert("slug".to_string(), slug.clone());
        }
        Value::Object(spec).to_string()
    }
}

/// Returns true when a captured `(event, slug, ...)` tuple satisfies the
/// query's constrained fields.
#[must_use]
pub fn matches_callback(query: &CallbackQuery, args: &[Value]) -> bool {
    let Some(event) = args.first().and_then(Value::as_str) else {
        return false;
    };
    if event != query.event {
        return false;
    }
    match &query.slug {
        Some(expected) => args.get(1) == Some(expected),
        None => true,
    }
}

// ============================================================================
// SECTION: Extension Query
// ============================================================================

/// Partial description of a view extension registration.
///
/// The candidate side is the composite `{view, slug, name}` with `name`
/// drawn from the registration's metadata object.
///
/// # Invariants
/// - `view` is always constrained and is validated against the view
///   vocabulary before any search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionQuery {
    /// View name the extension was registered against.
    pub view: String,
    /// Optional slug constraint; `None` is unconstrained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<Value>,
    /// Optional metadata name constraint; `None` is unconstrained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ExtensionQuery {
    /// Creates a query constraining only the view name.
    #[must_use]
    pub fn new(view: impl Into<String>) -> Self {
        Self {
            view: view.into(),
            slug: None,
            name: None,
        }
    }

    /// Adds a slug constraint. Use `Value::Null` to require a slug-less
    /// registration.
    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<Value>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Adds a metadata name constraint.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Renders the query as a JSON echo for error messages.
    #[must_use]
    pub fn echo(&self) -> String {
        let mut spec = Map::new();
        spec.insert("view".to_string(), Value::String(self.view.clone()));
        if let Some(slug) = &self.slug {
            spec.insert("slug".to_string(), slug.clone());
        }
        if let Some(name) = &self.name {
            spec.insert("name".to_string(), Value::String(name.clone()));
        }
        Value::Object(spec).to_string()
    }
}

/// Returns true when a captured `(view, slug, metadata, ...)` tuple
/// satisfies the query's constrained fields.
#[must_use]
pub fn matches_extension(query: &ExtensionQuery, args: &[Value]) -> bool {
    let Some(view) = args.first().and_then(Value::as_str) else {
        return false;
    };
    if view != query.view {
        return false;
    }
    if let Some(expected) = &query.slug {
        if args.get(1) != Some(expected) {
            return false;
        }
    }
    match &query.name {
        Some(expected) => {
            let name = args.get(2).and_then(|meta| meta.get("name"));
            name.and_then(Value::as_str) == Some(expected.as_str())
        }
        None => true,
    }
}
