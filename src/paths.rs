//! Path resolution
//!
//! Centralized directory path resolution with consistent fallback strategies.

use std::path::PathBuf;

// =============================================================================
// Path Constants (relative to home directory)
// =============================================================================

/// Data directory relative to home
const DATA_SUBDIR: &str = ".local/share/skiphire";

/// Configuration directory relative to home
const CONFIG_SUBDIR: &str = ".config/skiphire";

/// Log filename (rolled daily, so the date is appended)
pub const LOG_FILE: &str = "skiphire.log";

/// Preference store filename
const PREFERENCES_FILE: &str = "preferences.json";

/// Configuration filename
const CONFIG_FILE: &str = "config.toml";

// =============================================================================
// Fallback Paths
// =============================================================================

/// Fallback data directory when home is unavailable
const FALLBACK_DATA_DIR: &str = "/tmp/skiphire";

/// Fallback configuration file when home is unavailable
const FALLBACK_CONFIG_FILE: &str = "/tmp/skiphire.toml";

// =============================================================================
// Path Resolution Functions
// =============================================================================

/// Get the data directory path
/// Falls back to /tmp/skiphire if home directory is unavailable
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(DATA_SUBDIR))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
}

/// Get the preference store path
pub fn preferences_path() -> PathBuf {
    data_dir().join(PREFERENCES_FILE)
}

/// Get the configuration file path
pub fn config_file_path() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(CONFIG_SUBDIR).join(CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_CONFIG_FILE))
}
