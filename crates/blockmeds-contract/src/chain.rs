// crates/blockmeds-contract/src/chain.rs
// ============================================================================
// Module: Blockchain Service Contracts
// Description: Wire shapes for the BlockMeds blockchain service.
// Purpose: Provide typed prescription and safe-limit payloads and records.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The blockchain service fronts a medical-prescription contract; requests
//! carry account addresses and signing keys as opaque strings and the
//! service signs and submits the transactions itself. Numeric contract
//! values (counts, dosages, limits) arrive as a JSON number or a decimal
//! string depending on the bridge version, so record fields keep the string
//! form and [`decimal_uint`] normalizes either shape for assertions.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Request Payloads
// ============================================================================

/// Doctor-signed prescription creation payload.
///
/// # Invariants
/// - `justification` must be non-empty whenever `emergency` is set; the
///   service rejects the payload otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrescriptionRequest {
    /// Prescribing doctor's account address.
    pub doctor_address: String,
    /// Patient identifier recorded on the ledger.
    pub patient_id: String,
    /// Drug name; the service lowercases it before the contract call.
    pub drug: String,
    /// Dosage, carried as the decimal string the contract stores.
    pub dosage: String,
    /// Prescribed quantity.
    pub quantity: u64,
    /// Marks an emergency prescription that may exceed the safe limit.
    pub emergency: bool,
    /// Justification text; required for emergency prescriptions.
    pub justification: String,
    /// Doctor's signing key, forwarded verbatim to the service.
    pub private_key: String,
}

/// Pharmacist-signed fulfillment payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillPrescriptionRequest {
    /// Identifier of the prescription being fulfilled.
    pub prescription_id: String,
    /// Fulfilling pharmacist's account address.
    pub pharmacist_address: String,
    /// Pharmacist's signing key, forwarded verbatim to the service.
    pub private_key: String,
}

/// Regulator-signed safe-limit update payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSafeLimitRequest {
    /// Regulatory authority account address.
    pub regulatory_authority_address: String,
    /// Drug name the limit applies to.
    pub drug: String,
    /// Maximum safe dosage, as a decimal string.
    pub limit: String,
}

/// Regulator-signed flagged-prescription resolution payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveFlaggedPrescriptionRequest {
    /// Regulatory authority account address.
    pub regulatory_authority_address: String,
    /// Identifier of the flagged prescription.
    pub prescription_id: String,
    /// Resolution text recorded with the decision.
    pub resolution: String,
}

// ============================================================================
// SECTION: Record Shapes
// ============================================================================

/// Prescription record as returned by the view endpoint.
///
/// # Invariants
/// - `id` is never `"0"` in a 200 response; the service maps the zero id to
///   a 404 because the contract returns it for absent entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionRecord {
    /// Prescription identifier, as a decimal string.
    pub id: String,
    /// Prescribing doctor's account address.
    pub doctor: String,
    /// Patient identifier.
    pub patient_id: String,
    /// Drug name, lowercased by the service.
    pub drug: String,
    /// Dosage, as a decimal string.
    pub dosage: String,
    /// Quantity, as a decimal string.
    pub quantity: String,
    /// Justification recorded at creation time.
    pub justification: String,
    /// Whether a pharmacist has fulfilled the prescription.
    pub fulfilled: bool,
    /// Whether the prescription was created as an emergency.
    pub emergency: bool,
    /// Whether the prescription is flagged for regulatory resolution.
    pub flagged: bool,
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Parses a contract uint rendered as either a JSON number or decimal string.
#[must_use]
pub fn decimal_uint(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
