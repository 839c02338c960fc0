// crates/nimbu-harness-core/src/lib.rs
// ============================================================================
// Module: Nimbu Harness Core
// Description: Registration capture and handler resolution for cloud code tests.
// Purpose: Intercept DSL registrations and resolve handlers by logical spec.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This crate records every handler registration made against the Nimbu
//! cloud code DSL and resolves "the handler that would run" for a partial,
//! caller-supplied specification. Capture is verbatim and ordered; resolution
//! is deterministic and returns the first registration (in capture order)
//! whose constrained fields deep-equal the query.
//! Invariants:
//! - Capture never drops, coerces, or reorders registration arguments.
//! - Resolution never mutates the capture store.
//! - A fixed capture history and fixed query always resolve to the same
//!   registration.
//!
//! The store is an explicit, injectable object owned by the test context.
//! Resetting it between test cases (via [`CaptureStore::clear`]) is the
//! harness owner's responsibility.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::capture::CaptureStore;
pub use crate::core::capture::CapturedCall;
pub use crate::core::capture::CloudDsl;
pub use crate::core::capture::ExtendMetadata;
pub use crate::core::kinds::CallbackPhase;
pub use crate::core::kinds::EntryPoint;
pub use crate::core::kinds::EventType;
pub use crate::core::kinds::HandlerKind;
pub use crate::core::kinds::HttpVerb;
pub use crate::core::kinds::ViewType;
pub use crate::core::query::CallbackQuery;
pub use crate::core::query::ExtensionQuery;
pub use crate::core::query::matches_callback;
pub use crate::core::query::matches_extension;
pub use crate::runtime::resolver::HandlerResolver;
pub use crate::runtime::resolver::ResolveError;
