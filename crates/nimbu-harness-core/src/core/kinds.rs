// crates/nimbu-harness-core/src/core/kinds.rs
// ============================================================================
// Module: Handler Kind Taxonomy
// Description: Closed enumerations for handler kinds, DSL entry points, and
//              the event/view vocabularies.
// Purpose: Centralize the fixed vocabularies that drive capture and matching.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the closed vocabularies of the harness. `HandlerKind`
//! selects which request/response shape and matching rule applies.
//! `EntryPoint` names the DSL registration surface being intercepted.
//! `EventType` and `ViewType` are the enumerated domain vocabularies used for
//! validation before any structural search.
//! Invariants:
//! - All wire names are lowercase ASCII and stable.
//! - Parsing an unknown event or view name yields `None`; the resolver turns
//!   that into an invalid-enumerated-value error before searching.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Handler Kinds
// ============================================================================

/// Closed taxonomy of handler categories.
///
/// # Invariants
/// - Variants are stable and exhaustive; each kind has a distinct
///   request/response shape and matching rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerKind {
    /// HTTP route handler registered through a verb entry point.
    Route,
    /// Lifecycle callback registered through `before` or `after`.
    Callback,
    /// Background job registered through `job`.
    Job,
    /// Invocable cloud function registered through `define`.
    Function,
    /// Back-office view extension registered through `extend`.
    Extension,
}

impl HandlerKind {
    /// Returns the kind's name as used in resolver error messages.
    ///
    /// `Extension` reports as `extend` to match the DSL entry point name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Route => "route",
            Self::Callback => "callback",
            Self::Job => "job",
            Self::Function => "function",
            Self::Extension => "extend",
        }
    }
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: DSL Entry Points
// ============================================================================

/// Named DSL registration entry points intercepted by the capture store.
///
/// # Invariants
/// - One ordered capture list exists per entry point.
/// - Wire names equal the DSL method names (lowercase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryPoint {
    /// `extend(view, slug, metadata, handler)`.
    Extend,
    /// `job(name, handler)`.
    Job,
    /// `schedule(name, cron, handler)` (record-only).
    Schedule,
    /// `unschedule(name)` (record-only, no trailing handler).
    Unschedule,
    /// `define(name, handler)`.
    Define,
    /// `route(path, handler)` generic multi-verb registration (record-only).
    Route,
    /// `get(path, handler)`.
    Get,
    /// `post(path, handler)`.
    Post,
    /// `put(path, handler)`.
    Put,
    /// `patch(path, handler)`.
    Patch,
    /// `delete(path, handler)`.
    Delete,
    /// `before(event, slug, handler)`.
    Before,
    /// `after(event, slug, handler)`.
    After,
}

impl EntryPoint {
    /// All entry points, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Extend,
        Self::Job,
        Self::Schedule,
        Self::Unschedule,
        Self::Define,
        Self::Route,
        Self::Get,
        Self::Post,
        Self::Put,
        Self::Patch,
        Self::Delete,
        Self::Before,
        Self::After,
    ];

    /// Returns the DSL method name for this entry point.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Extend => "extend",
            Self::Job => "job",
            Self::Schedule => "schedule",
            Self::Unschedule => "unschedule",
            Self::Define => "define",
            Self::Route => "route",
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
            Self::Before => "before",
            Self::After => "after",
        }
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: HTTP Verbs
// ============================================================================

/// HTTP verbs with dedicated route entry points.
///
/// # Invariants
/// - Each verb maps onto exactly one [`EntryPoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpVerb {
    /// HTTP GET.
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PUT.
    Put,
    /// HTTP PATCH.
    Patch,
    /// HTTP DELETE.
    Delete,
}

impl HttpVerb {
    /// Parses a verb name case-insensitively (`"GET"` and `"get"` both parse).
    #[must_use]
    pub fn parse(verb: &str) -> Option<Self> {
        match verb.to_ascii_lowercase().as_str() {
            "get" => Some(Self::Get),
            "post" => Some(Self::Post),
            "put" => Some(Self::Put),
            "patch" => Some(Self::Patch),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }

    /// Returns the lowercase verb name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
        }
    }

    /// Returns the registration entry point for this verb.
    #[must_use]
    pub const fn entry_point(self) -> EntryPoint {
        match self {
            Self::Get => EntryPoint::Get,
            Self::Post => EntryPoint::Post,
            Self::Put => EntryPoint::Put,
            Self::Patch => EntryPoint::Patch,
            Self::Delete => EntryPoint::Delete,
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Callback Phases
// ============================================================================

/// Lifecycle callback phases.
///
/// # Invariants
/// - Each phase maps onto exactly one [`EntryPoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallbackPhase {
    /// Runs before the backend persists the change.
    Before,
    /// Runs after the backend persists the change.
    After,
}

impl CallbackPhase {
    /// Returns the registration entry point for this phase.
    #[must_use]
    pub const fn entry_point(self) -> EntryPoint {
        match self {
            Self::Before => EntryPoint::Before,
            Self::After => EntryPoint::After,
        }
    }

    /// Returns the lowercase phase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::After => "after",
        }
    }
}

impl fmt::Display for CallbackPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Event Vocabulary
// ============================================================================

/// Closed vocabulary of lifecycle event names accepted by `before`/`after`.
///
/// # Invariants
/// - Membership is checked before any callback search; unknown names fail
///   resolution regardless of what was registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// An entry is being created.
    Create,
    /// An entry is being updated.
    Update,
    /// An entry is being deleted.
    Delete,
    /// An entry is being saved (create or update).
    Save,
}

impl EventType {
    /// All event types, in declaration order.
    pub const ALL: [Self; 4] = [Self::Create, Self::Update, Self::Delete, Self::Save];

    /// Parses an event name; returns `None` for names outside the vocabulary.
    #[must_use]
    pub fn parse(event: &str) -> Option<Self> {
        match event {
            "create" => Some(Self::Create),
            "update" => Some(Self::Update),
            "delete" => Some(Self::Delete),
            "save" => Some(Self::Save),
            _ => None,
        }
    }

    /// Returns the lowercase event name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Save => "save",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: View Vocabulary
// ============================================================================

/// Closed vocabulary of back-office views accepted by `extend`.
///
/// # Invariants
/// - Membership is checked before any extension search; unknown names fail
///   resolution regardless of what was registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewType {
    /// Product detail view.
    Product,
    /// Order detail view.
    Order,
    /// Customer detail view.
    Customer,
    /// Channel entry detail view.
    ChannelEntry,
    /// Document detail view.
    Document,
}

impl ViewType {
    /// All view types, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Product,
        Self::Order,
        Self::Customer,
        Self::ChannelEntry,
        Self::Document,
    ];

    /// Parses a view name; returns `None` for names outside the vocabulary.
    #[must_use]
    pub fn parse(view: &str) -> Option<Self> {
        match view {
            "product" => Some(Self::Product),
            "order" => Some(Self::Order),
            "customer" => Some(Self::Customer),
            "channel_entry" => Some(Self::ChannelEntry),
            "document" => Some(Self::Document),
            _ => None,
        }
    }

    /// Returns the snake_case view name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Order => "order",
            Self::Customer => "customer",
            Self::ChannelEntry => "channel_entry",
            Self::Document => "document",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
