// crates/nimbu-harness-mock/src/request.rs
// ============================================================================
// Module: Mock Requests
// Description: Per-kind request attributes and defaulted request values.
// Purpose: Combine caller-supplied fields with kind-specific defaults.
// Dependencies: serde, serde_json, uuid
// ============================================================================

//! ## Overview
//! Each handler kind has an attributes type (what the caller supplies) and a
//! request type (what the handler receives). Converting attributes into a
//! request fills kind-specific defaults; fields the caller supplied always
//! win. Required fields (`object` for callbacks, `path` for routes) are
//! non-optional constructor inputs, so a missing required field is a compile
//! error rather than a runtime one.
//! Invariants:
//! - Defaulting is idempotent: attributes carrying every default explicitly
//!   convert to the same request as attributes omitting them.
//! - Function meta identifiers are freshly generated per conversion when not
//!   supplied; two conversions never share a generated identifier.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use uuid::Uuid;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default locale for route requests.
pub const DEFAULT_LOCALE: &str = "en";

/// Default host for route requests.
pub const DEFAULT_HOST: &str = "nimbu.test";

// ============================================================================
// SECTION: Callback
// ============================================================================

/// Caller-supplied attributes for a callback mock.
///
/// # Invariants
/// - `object` is mandatory and has no default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackAttributes {
    /// The backend object the callback observes. Mandatory.
    pub object: Value,
    /// Optional acting backend user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<Value>,
    /// Optional authenticated customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Value>,
    /// Optional field-change mapping; defaults to empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<Map<String, Value>>,
    /// Optional last-updated timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<Value>,
}

impl CallbackAttributes {
    /// Creates attributes with only the mandatory object.
    #[must_use]
    pub fn new(object: impl Into<Value>) -> Self {
        Self {
            object: object.into(),
            actor: None,
            user: None,
            changes: None,
            last_updated_at: None,
        }
    }
}

/// Fully defaulted callback request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackRequest {
    /// The backend object the callback observes.
    pub object: Value,
    /// Acting backend user, if any.
    pub actor: Option<Value>,
    /// Authenticated customer, if any.
    pub user: Option<Value>,
    /// Field-change mapping (empty when unspecified).
    pub changes: Map<String, Value>,
    /// Last-updated timestamp, if any.
    pub last_updated_at: Option<Value>,
}

impl From<CallbackAttributes> for CallbackRequest {
    fn from(attributes: CallbackAttributes) -> Self {
        Self {
            object: attributes.object,
            actor: attributes.actor,
            user: attributes.user,
            changes: attributes.changes.unwrap_or_default(),
            last_updated_at: attributes.last_updated_at,
        }
    }
}

// ============================================================================
// SECTION: Route
// ============================================================================

/// Caller-supplied attributes for a route mock.
///
/// # Invariants
/// - `path` is mandatory and has no default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteAttributes {
    /// Request path. Mandatory.
    pub path: String,
    /// Optional locale; defaults to [`DEFAULT_LOCALE`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Optional simulation flag; defaults to `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulating: Option<bool>,
    /// Optional host; defaults to [`DEFAULT_HOST`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Optional request parameters; defaults to empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,
    /// Optional request headers; defaults to empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Map<String, Value>>,
}

impl RouteAttributes {
    /// Creates attributes with only the mandatory path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            locale: None,
            simulating: None,
            host: None,
            params: None,
            headers: None,
        }
    }
}

/// Fully defaulted route request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Request path.
    pub path: String,
    /// Request locale.
    pub locale: String,
    /// True when the request simulates a render without side effects.
    pub simulating: bool,
    /// Request host.
    pub host: String,
    /// Request parameters.
    pub params: Map<String, Value>,
    /// Request headers.
    pub headers: Map<String, Value>,
}

impl From<RouteAttributes> for RouteRequest {
    fn from(attributes: RouteAttributes) -> Self {
        Self {
            path: attributes.path,
            locale: attributes
                .locale
                .unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            simulating: attributes.simulating.unwrap_or(false),
            host: attributes.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            params: attributes.params.unwrap_or_default(),
            headers: attributes.headers.unwrap_or_default(),
        }
    }
}

// ============================================================================
// SECTION: Job
// ============================================================================

/// Caller-supplied attributes for a job mock.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobAttributes {
    /// Optional job parameters; defaults to empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,
}

/// Fully defaulted job request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequest {
    /// Job parameters.
    pub params: Map<String, Value>,
}

impl From<JobAttributes> for JobRequest {
    fn from(attributes: JobAttributes) -> Self {
        Self {
            params: attributes.params.unwrap_or_default(),
        }
    }
}

// ============================================================================
// SECTION: Function
// ============================================================================

/// Caller-supplied meta attributes for a function mock.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FunctionMetaAttributes {
    /// Optional installation identifier; generated when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installation_id: Option<String>,
    /// Optional request identifier; generated when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Caller-supplied attributes for a function mock.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FunctionAttributes {
    /// Optional function parameters; defaults to empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,
    /// Optional invocation meta; missing fields are generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<FunctionMetaAttributes>,
}

/// Invocation meta attached to function requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionMeta {
    /// Installation the invocation belongs to.
    pub installation_id: String,
    /// Unique identifier of this invocation.
    pub request_id: String,
}

/// Fully defaulted function request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRequest {
    /// Function parameters.
    pub params: Map<String, Value>,
    /// Invocation meta. Caller-supplied fields win over generated ones.
    pub meta: FunctionMeta,
}

impl From<FunctionAttributes> for FunctionRequest {
    fn from(attributes: FunctionAttributes) -> Self {
        let meta = attributes.meta.unwrap_or_default();
        Self {
            params: attributes.params.unwrap_or_default(),
            meta: FunctionMeta {
                installation_id: meta
                    .installation_id
                    .unwrap_or_else(|| Uuid::new_v4().to_string()),
                request_id: meta
                    .request_id
                    .unwrap_or_else(|| Uuid::new_v4().to_string()),
            },
        }
    }
}

// ============================================================================
// SECTION: Extension
// ============================================================================

/// Caller-supplied attributes for an extension mock.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtensionAttributes {
    /// Optional extension parameters; defaults to empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,
}

/// Fully defaulted extension request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionRequest {
    /// Extension parameters.
    pub params: Map<String, Value>,
}

impl From<ExtensionAttributes> for ExtensionRequest {
    fn from(attributes: ExtensionAttributes) -> Self {
        Self {
            params: attributes.params.unwrap_or_default(),
        }
    }
}
