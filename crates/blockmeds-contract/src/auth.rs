// crates/blockmeds-contract/src/auth.rs
// ============================================================================
// Module: Authentication Service Contracts
// Description: Wire shapes for the BlockMeds authentication service.
// Purpose: Provide typed registration and login payloads plus the role map.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Registration payloads serialize with the service's camelCase field names.
//! The login endpoint discriminates account stores with a bare integer role
//! id; [`Role`] fixes that mapping as a typed enum so suites cannot send an
//! id the service would route to the wrong store.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::error::ContractError;

// ============================================================================
// SECTION: Role Discriminator
// ============================================================================

/// Login role discriminator used by the authentication service.
///
/// # Invariants
/// - Serializes as the bare integer the service expects: 0 for patients,
///   1 for doctors, 2 for pharmacists.
/// - Deserialization of any other integer fails with
///   [`ContractError::InvalidRole`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Role {
    /// Patient account store (id 0).
    Patient,
    /// Doctor account store (id 1).
    Doctor,
    /// Pharmacist account store (id 2).
    Pharmacist,
}

impl Role {
    /// Returns the role key used in registration responses.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Doctor => "doctor",
            Self::Pharmacist => "pharmacist",
        }
    }

    /// Returns the registration route for this role.
    #[must_use]
    pub const fn registration_route(self) -> &'static str {
        match self {
            Self::Patient => "/register/patient",
            Self::Doctor => "/register/doctor",
            Self::Pharmacist => "/register/pharmacist",
        }
    }
}

impl From<Role> for u8 {
    fn from(role: Role) -> Self {
        match role {
            Role::Patient => 0,
            Role::Doctor => 1,
            Role::Pharmacist => 2,
        }
    }
}

impl TryFrom<u8> for Role {
    type Error = ContractError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Patient),
            1 => Ok(Self::Doctor),
            2 => Ok(Self::Pharmacist),
            other => Err(ContractError::InvalidRole(other)),
        }
    }
}

// ============================================================================
// SECTION: Registration Payloads
// ============================================================================

/// Identity fields shared by every registration payload.
///
/// A patient registration is exactly this profile; doctor and pharmacist
/// registrations flatten it alongside their licensing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationProfile {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Date of birth in `YYYY-MM-DD` form.
    pub date_of_birth: String,
    /// Self-reported gender.
    pub gender: String,
    /// Contact phone number.
    pub contact_number: String,
    /// Login email; the service enforces uniqueness per account store.
    pub email: String,
    /// Login password, sent in the clear over the configured channel.
    pub password: String,
    /// Profile image URL.
    pub profile_url: String,
}

/// Doctor registration payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRegistration {
    /// Shared identity fields.
    #[serde(flatten)]
    pub profile: RegistrationProfile,
    /// Ethereum wallet address used to sign prescriptions.
    pub ethereum_wallet_address: String,
    /// Medical specialization.
    pub specialization: String,
    /// Medical license identifier.
    pub medical_license_id: String,
}

/// Pharmacist registration payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PharmacistRegistration {
    /// Shared identity fields.
    #[serde(flatten)]
    pub profile: RegistrationProfile,
    /// Ethereum wallet address used to sign fulfillments.
    pub ethereum_wallet_address: String,
    /// Pharmacy license identifier.
    pub pharmacy_license_id: String,
}

// ============================================================================
// SECTION: Login Payload
// ============================================================================

/// Login request keyed by role id plus matching credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account store discriminator.
    pub id: Role,
    /// Login email.
    pub email: String,
    /// Login password.
    pub password: String,
}

// ============================================================================
// SECTION: Tests
// ============================================================================
