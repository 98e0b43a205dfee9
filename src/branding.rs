//! Branding and application identity configuration.
//!
//! This module centralizes all branding-related strings (names, paths, env
//! variables) so they are defined in one place.

/// The human-readable display name of the application.
///
/// Used in:
/// - The TUI header
/// - Help overlay title
/// - CLI output headings
pub const APP_DISPLAY_NAME: &str = "Super-Res Lab";

/// Tagline shown under the display name in the TUI header.
pub const APP_TAGLINE: &str = "Neural Network Tutorial";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "superres-lab";

/// The directory name for application data (config, logs).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "SuperResLab";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "SUPERRES_LAB_CONFIG_DIR";

/// Short description for help text.
pub const APP_DESCRIPTION: &str =
    "Browse super-resolution network architectures and cross-highlight diagram and code";

/// Header title, e.g. "Super-Res Lab v0.1.0".
pub fn versioned_name() -> String {
    format!("{} v{}", APP_DISPLAY_NAME, env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branding_consistency() {
        // Ensure binary name is lowercase
        assert_eq!(APP_BINARY_NAME, APP_BINARY_NAME.to_lowercase());

        // Ensure no spaces in binary name
        assert!(!APP_BINARY_NAME.contains(' '));

        // Ensure no spaces in data dir
        assert!(!APP_DATA_DIR.contains(' '));

        assert_eq!(CONFIG_DIR_ENV, CONFIG_DIR_ENV.to_uppercase());
    }

    #[test]
    fn test_versioned_name() {
        let name = versioned_name();
        assert!(name.starts_with(APP_DISPLAY_NAME));
        assert!(name.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
