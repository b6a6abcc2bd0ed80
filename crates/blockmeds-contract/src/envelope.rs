// crates/blockmeds-contract/src/envelope.rs
// ============================================================================
// Module: Response Envelope
// Description: Shared `{success, error}` response shell for both services.
// Purpose: Give suites one decode path for loosely-toleranced responses.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Both BlockMeds services wrap every JSON response in a `success` boolean,
//! an optional `error` string, and endpoint-specific extra fields. Chain
//! endpoints tolerate several status codes per call, so suites first decode
//! this shell (proving `success` is present and boolean) and only then
//! reach into the extras for the fields a given outcome promises.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde_json::Map;
use serde_json::Value;

use crate::error::ContractError;

// ============================================================================
// SECTION: Envelope Type
// ============================================================================

/// Minimal response shell shared by both services.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseEnvelope {
    /// Whether the service reports the operation as successful.
    pub success: bool,
    /// Error description, present on most failure responses.
    #[serde(default)]
    pub error: Option<String>,
    /// Endpoint-specific fields outside the shared shell.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResponseEnvelope {
    /// Decodes a response body into the envelope shell.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Envelope`] when `success` is absent or not
    /// a boolean.
    pub fn from_value(body: &Value) -> Result<Self, ContractError> {
        Ok(serde_json::from_value(body.clone())?)
    }

    /// Returns an endpoint-specific field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// Returns an endpoint-specific field as a string slice.
    #[must_use]
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.extra.get(name).and_then(Value::as_str)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
