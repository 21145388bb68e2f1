//! Application-wide constants

// =============================================================================
// Catalog
// =============================================================================

/// Skip catalog endpoint (queried with the location key as its query string)
pub const DEFAULT_CATALOG_ENDPOINT: &str = "https://app.wewantwaste.co.uk/api/skips/by-location";

/// Location the catalog is requested for when nothing else is configured
pub const DEFAULT_LOCATION_KEY: &str = "postcode=NR32&area=Lowestoft";

/// Timeout for catalog HTTP requests (seconds)
pub const HTTP_CLIENT_TIMEOUT_SECS: u64 = 10;

/// User agent sent with catalog requests
pub const HTTP_USER_AGENT: &str = "skiphire";

// =============================================================================
// Wizard
// =============================================================================

/// Number of wizard steps
pub const STEP_COUNT: u8 = 6;

/// Step a fresh session starts on
pub const FIRST_STEP: u8 = 1;

// =============================================================================
// Preferences
// =============================================================================

/// Preference key holding the colour scheme
pub const THEME_PREFERENCE_KEY: &str = "remwaste-theme";

pub const THEME_DARK: &str = "dark";
pub const THEME_LIGHT: &str = "light";

// =============================================================================
// Event loop
// =============================================================================

/// Event poll timeout in milliseconds
pub const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Spinner animation interval in milliseconds
pub const SPINNER_TICK_MS: u128 = 100;

/// Channel buffer size for catalog messages
pub const CATALOG_CHANNEL_SIZE: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_key_is_query_string() {
        assert!(DEFAULT_LOCATION_KEY.contains('='));
        assert!(!DEFAULT_LOCATION_KEY.starts_with('?'));
    }

    #[test]
    fn test_theme_values_differ() {
        assert_ne!(THEME_DARK, THEME_LIGHT);
    }
}
