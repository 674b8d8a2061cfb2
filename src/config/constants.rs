//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Registration
// =============================================================================

/// Request fields that must be present, checked in this order
pub const REQUIRED_FIELDS: [&str; 4] = [
    FIELD_USERNAME,
    FIELD_EMAIL,
    FIELD_PASSWORD,
    FIELD_PASSWORD_CONFIRMATION,
];

pub const FIELD_USERNAME: &str = "username";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password1";
pub const FIELD_PASSWORD_CONFIRMATION: &str = "password2";

// =============================================================================
// HTTP Status Codes
// =============================================================================

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

// =============================================================================
// Password Hashing (Argon2id)
// =============================================================================

/// Default memory cost in KiB (argon2 crate default)
pub const DEFAULT_HASH_MEMORY_COST_KIB: u32 = 19_456;

/// Default number of iterations
pub const DEFAULT_HASH_TIME_COST: u32 = 2;

/// Default degree of parallelism
pub const DEFAULT_HASH_PARALLELISM: u32 = 1;

// =============================================================================
// Logging
// =============================================================================

/// Filter used when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Filter used with `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "debug";
