//! Domain-level constants.

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Default access token lifetime in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;
