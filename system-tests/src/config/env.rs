// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed configuration for system tests.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std, url
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid
//! silent misconfiguration. Invalid UTF-8, empty values, and malformed URLs
//! fail closed. Chain-service secrets are required as a group so a suite
//! reports the missing variable before its first request, not after.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Auth service base URL used when no override is configured.
pub const DEFAULT_AUTH_URL: &str = "http://localhost:5001";

/// Environment keys for system test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTestEnv {
    /// Optional auth service base URL override.
    AuthUrl,
    /// Blockchain service base URL.
    ChainUrl,
    /// API key sent in the `authorization` header to the chain service.
    ApiKey,
    /// Doctor keypair public address.
    DoctorAddress,
    /// Doctor signing key.
    DoctorPrivateKey,
    /// Pharmacist keypair public address.
    PharmacistAddress,
    /// Pharmacist signing key.
    PharmacistPrivateKey,
    /// Regulatory authority account address.
    RegulatoryAddress,
    /// Optional artifact run-root override.
    RunRoot,
    /// Optional timeout override in seconds (positive integer).
    TimeoutSeconds,
}

impl SystemTestEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AuthUrl => "BLOCKMEDS_AUTH_URL",
            Self::ChainUrl => "BLOCKMEDS_CHAIN_URL",
            Self::ApiKey => "BLOCKMEDS_API_KEY",
            Self::DoctorAddress => "BLOCKMEDS_DOCTOR_ADDRESS",
            Self::DoctorPrivateKey => "BLOCKMEDS_DOCTOR_PRIVATE_KEY",
            Self::PharmacistAddress => "BLOCKMEDS_PHARMACIST_ADDRESS",
            Self::PharmacistPrivateKey => "BLOCKMEDS_PHARMACIST_PRIVATE_KEY",
            Self::RegulatoryAddress => "BLOCKMEDS_REGULATORY_ADDRESS",
            Self::RunRoot => "BLOCKMEDS_RUN_ROOT",
            Self::TimeoutSeconds => "BLOCKMEDS_TIMEOUT_SEC",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Harness-wide settings shared by every suite.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HarnessConfig {
    /// Optional artifact run-root override.
    pub run_root: Option<PathBuf>,
    /// Optional timeout override in seconds (positive integer).
    pub timeout: Option<Duration>,
}

impl HarnessConfig {
    /// Loads harness settings from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is
    /// empty, or fails validation (for example, a zero timeout).
    pub fn load() -> Result<Self, String> {
        let run_root = read_env_nonempty(SystemTestEnv::RunRoot.as_str())?.map(PathBuf::from);
        let timeout = read_env_nonempty(SystemTestEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(SystemTestEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        Ok(Self {
            run_root,
            timeout,
        })
    }
}

/// Typed configuration for the authentication service suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthServiceConfig {
    /// Auth service base URL without a trailing slash.
    pub base_url: String,
}

impl AuthServiceConfig {
    /// Loads the auth service configuration, defaulting the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured base URL is empty, not valid
    /// UTF-8, or not an http(s) URL.
    pub fn load() -> Result<Self, String> {
        let name = SystemTestEnv::AuthUrl.as_str();
        let base_url = match read_env_nonempty(name)? {
            Some(value) => parse_base_url(name, &value)?,
            None => DEFAULT_AUTH_URL.to_string(),
        };
        Ok(Self {
            base_url,
        })
    }
}

/// Account address plus signing key for one service role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignerKeys {
    /// Public account address.
    pub address: String,
    /// Signing key, treated as an opaque secret.
    pub private_key: String,
}

/// Typed configuration for the blockchain service suite.
///
/// # Invariants
/// - Every field is populated; a missing variable fails the load with the
///   variable's name instead of surfacing later as a request error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainServiceConfig {
    /// Chain service base URL without a trailing slash.
    pub base_url: String,
    /// API key sent in the `authorization` header.
    pub api_key: String,
    /// Doctor keypair used to sign prescription creation.
    pub doctor: SignerKeys,
    /// Pharmacist keypair used to sign fulfillment.
    pub pharmacist: SignerKeys,
    /// Regulatory authority account address.
    pub regulatory_address: String,
}

impl ChainServiceConfig {
    /// Loads the chain service configuration.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first required variable that is unset,
    /// empty, not valid UTF-8, or (for the base URL) not an http(s) URL.
    pub fn load() -> Result<Self, String> {
        let url_name = SystemTestEnv::ChainUrl.as_str();
        let base_url = parse_base_url(url_name, &require_env(url_name)?)?;
        Ok(Self {
            base_url,
            api_key: require_env(SystemTestEnv::ApiKey.as_str())?,
            doctor: SignerKeys {
                address: require_env(SystemTestEnv::DoctorAddress.as_str())?,
                private_key: require_env(SystemTestEnv::DoctorPrivateKey.as_str())?,
            },
            pharmacist: SignerKeys {
                address: require_env(SystemTestEnv::PharmacistAddress.as_str())?,
                private_key: require_env(SystemTestEnv::PharmacistPrivateKey.as_str())?,
            },
            regulatory_address: require_env(SystemTestEnv::RegulatoryAddress.as_str())?,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Reads a required environment variable.
///
/// # Errors
///
/// Returns an error when the variable is unset, empty, or not valid UTF-8.
fn require_env(name: &str) -> Result<String, String> {
    read_env_nonempty(name)?
        .ok_or_else(|| format!("{name} must be set for chain-service system tests"))
}

/// Validates a base URL and strips any trailing slash.
///
/// # Errors
///
/// Returns an error when the value does not parse as an http(s) URL.
fn parse_base_url(name: &str, raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).map_err(|err| format!("{name} must be a valid URL: {err}"))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(format!("{name} must use the http or https scheme"));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{name} must be a positive integer number of seconds"));
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}
