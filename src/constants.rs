//! Application-wide constants
//!
//! This module contains all constant values used throughout the client.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// API DEFAULTS
// =============================================================================

/// Default HOSTCODE API base URL
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Standing timeout applied to every request, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";

// =============================================================================
// SESSION
// =============================================================================

/// Name of the cookie holding the bearer credential
pub const ACCESS_TOKEN_COOKIE: &str = "HOSTCODE_ACCESS_TOKEN";

/// Cookie jar file name, relative to the user's home directory
pub const DEFAULT_COOKIE_JAR: &str = ".hostcode/cookies.json";

// =============================================================================
// TIME
// =============================================================================

pub const MILLIS_PER_SECOND: u64 = 1_000;
pub const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;

/// Countdown refresh interval in milliseconds (1 Hz)
pub const COUNTDOWN_TICK_MS: u64 = 1_000;

// =============================================================================
// PAGINATION
// =============================================================================

/// Gym page size on wide screens
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Gym page size on narrow screens
pub const COMPACT_PAGE_SIZE: u32 = 10;

// =============================================================================
// MESSAGES
// =============================================================================

/// Shown for failures that are neither transport nor structured API errors
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown Error, Please try again after sometime";

/// Shown for transport failures and timeouts
pub const NETWORK_ERROR_MESSAGE: &str =
    "Could not reach the HOSTCODE server, please check your connection and try again";

/// Shown when a credential-gated screen is opened without a session
pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in to continue";

// =============================================================================
// VALIDATION
// =============================================================================

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// First/last name and organization minimum length
pub const MIN_NAME_LENGTH: u64 = 2;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Number of digits in a mobile number
pub const MOBILE_DIGITS: usize = 10;

// =============================================================================
// LANGUAGES
// =============================================================================

/// Judge language identifiers mapped to code editor modes
pub mod editor_modes {
    pub const JAVA: (&str, &str) = ("jdk-17", "java");
    pub const PYTHON: (&str, &str) = ("python-3.9", "python");
    pub const CPP: (&str, &str) = ("cpp-17", "cpp");
    pub const JAVASCRIPT: (&str, &str) = ("javascript", "javascript");

    /// All known mappings
    pub const ALL: &[(&str, &str)] = &[JAVA, PYTHON, CPP, JAVASCRIPT];
}

/// Placeholder shown in an empty editor
pub const EDITOR_PLACEHOLDER: &str = "// Write your code here...";
