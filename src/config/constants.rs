//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

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

/// Local SQLite file used when `DATABASE_URL` is not set
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/starwars_blog.db?mode=rwc";

/// Seed file bundled with the crate
pub const DEFAULT_SEED_FILE: &str = "data/seed.json";

// =============================================================================
// Response Messages
// =============================================================================

/// Message returned for every storage or internal failure
pub const GENERIC_SERVER_ERROR: &str = "Error in server";

pub const MSG_CREDENTIALS_REQUIRED: &str = "Email and Password are Required";
pub const MSG_EMAIL_TAKEN: &str = "Email already registered";
pub const MSG_USER_ID_REQUIRED: &str = "User ID is required";
pub const MSG_USER_ID_MISSING: &str = "User ID is missing";
pub const MSG_COMMENT_REQUIRED: &str = "User ID and comment text are required";
pub const MSG_NO_USERS: &str = "No users found";
pub const MSG_USER_NOT_FOUND: &str = "User not found";
pub const MSG_NO_FAVORITES: &str = "User has no favorites";

// =============================================================================
// Validation
// =============================================================================

/// Smallest id the store ever assigns; anything below counts as missing
pub const MIN_ENTITY_ID: i32 = 1;
