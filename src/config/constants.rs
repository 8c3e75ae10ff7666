//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// Hash verified when a login email is unknown, so both failure paths cost the same
pub const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$ZHVtbXlzYWx0MTIzNDU2Nw$ZHVtbXktaGFzaC1uZXZlci1tYXRjaGVzLTMyYnl0ZSE";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (local SQLite file, created if missing)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://videoblog.db?mode=rwc";

// =============================================================================
// Messages
// =============================================================================

/// Error message for a video that is missing or owned by another user
pub const MSG_TUTORIAL_NOT_FOUND: &str = "No tutorials with such id";
