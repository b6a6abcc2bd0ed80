// crates/blockmeds-contract/src/error.rs
// ============================================================================
// Module: Contract Errors
// Description: Error type for contract decoding failures.
// Purpose: Report rejected discriminators and malformed response envelopes.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! Decoding failures are terminal for a suite assertion; the error carries
//! enough context to name the offending value without echoing secrets.

// ============================================================================
// SECTION: Error Type
// ============================================================================

/// Errors produced while decoding service payloads into contract types.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// A login role discriminator outside the documented 0/1/2 mapping.
    #[error("unknown role discriminator {0}; expected 0 (patient), 1 (doctor), or 2 (pharmacist)")]
    InvalidRole(u8),
    /// A response body that does not carry the `{success, ...}` shell.
    #[error("response body is not a service envelope: {0}")]
    Envelope(#[from] serde_json::Error),
}
