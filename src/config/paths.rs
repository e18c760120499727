// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to [`config_dir_with_override`] (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_override`]
//! 3. **Environment variable** (`VETRINA_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate, with the app name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Vetrina";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "VETRINA_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI argument.
///
/// Only the first call takes effect; returns `false` for later calls.
pub fn init_cli_override(config_dir: Option<String>) -> bool {
    CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok()
}

fn cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the config directory, honouring CLI and environment overrides.
///
/// Returns `None` if the platform has no config directory.
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

/// Returns the config directory with an explicit override taking priority.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn explicit_override_wins() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let custom = PathBuf::from("/tmp/vetrina-explicit");
        assert_eq!(config_dir_with_override(Some(custom.clone())), Some(custom));
    }

    #[test]
    fn env_var_overrides_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/tmp/vetrina-env");
        let resolved = config_dir_with_override(None);
        std::env::remove_var(ENV_CONFIG_DIR);

        // A CLI override set by another test would take priority.
        if cli_config_dir().is_none() {
            assert_eq!(resolved, Some(PathBuf::from("/tmp/vetrina-env")));
        }
    }

    #[test]
    fn platform_default_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);
        if cli_config_dir().is_none() {
            if let Some(path) = config_dir() {
                assert!(path.ends_with(APP_NAME));
            }
        }
    }
}
