//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// =============================================================================
// Database
// =============================================================================

/// Default port for the primary (Postgres) store
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Default file path for the embedded fallback store
pub const DEFAULT_SQLITE_PATH: &str = "local.db";

/// Pool size for the primary store
pub const PRIMARY_POOL_SIZE: u32 = 5;

// =============================================================================
// Environment
// =============================================================================

/// Environment mode value that enables debug behavior
pub const ENV_DEVELOPMENT: &str = "development";

// =============================================================================
// Orders
// =============================================================================

/// Prefix for human-readable order numbers
pub const ORDER_NUMBER_PREFIX: &str = "ORD";
