// crates/nimbu-harness-core/src/core/mod.rs
// ============================================================================
// Module: Core Types
// Description: Kind taxonomy, registration capture, and query types.
// Purpose: Group the leaf data model consumed by the resolver runtime.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Core data model for the harness: the closed handler-kind taxonomy, the
//! verbatim registration capture store with its DSL interception shim, and
//! the partial query types used for structural matching.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod capture;
pub mod kinds;
pub mod query;
