// crates/blockmeds-contract/src/lib.rs
// ============================================================================
// Module: BlockMeds Contract Library
// Description: Typed wire contracts for the BlockMeds HTTP services.
// Purpose: Provide canonical request and response shapes observed by suites.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This crate defines the typed wire shapes consumed by the BlockMeds
//! system-test suites: registration and login payloads for the
//! authentication service, prescription and safe-limit payloads for the
//! blockchain service, and the `{success, error}` response shell both
//! services share. The shapes mirror the services' documented HTTP/JSON
//! contracts; nothing here implements service behavior.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod auth;
pub mod chain;
pub mod envelope;

mod error;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use auth::Role;
pub use envelope::ResponseEnvelope;
pub use error::ContractError;
