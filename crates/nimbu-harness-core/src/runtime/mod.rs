// crates/nimbu-harness-core/src/runtime/mod.rs
// ============================================================================
// Module: Resolver Runtime
// Description: Handler resolution over captured registrations.
// Purpose: Group the selection logic layered on the core capture store.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Runtime layer of the harness: resolvers search the capture store with
//! kind-specific validation and structural matching and return the handler
//! that would run for a given logical specification.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod resolver;
