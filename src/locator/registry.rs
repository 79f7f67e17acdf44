//! Registry-backed install path lookup.
//!
//! Trainz records its installation directory under a handful of Auran/N3V
//! registry keys depending on edition and bitness. The lookup is a
//! best-effort scan; any miss simply falls through to the folder picker.

use std::path::PathBuf;

use super::InstallStore;

/// Production [`InstallStore`] reading the Windows registry.
///
/// On non-Windows platforms there is no registry to consult and the
/// lookup always misses.
#[derive(Debug, Default)]
pub struct RegistryStore;

impl RegistryStore {
    /// Create a new registry store.
    pub fn new() -> Self {
        Self
    }
}

#[cfg(windows)]
const CANDIDATE_KEYS: &[&str] = &[
    r"SOFTWARE\Auran\Trainz",
    r"SOFTWARE\WOW6432Node\Auran\Trainz",
    r"SOFTWARE\N3V Games\Trainz",
];

#[cfg(windows)]
const INSTALL_PATH_VALUE: &str = "InstallPath";

impl InstallStore for RegistryStore {
    #[cfg(windows)]
    fn lookup_install_path(&self) -> Option<PathBuf> {
        use winreg::enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE};
        use winreg::RegKey;

        for hive in [HKEY_LOCAL_MACHINE, HKEY_CURRENT_USER] {
            let root = RegKey::predef(hive);
            for key_path in CANDIDATE_KEYS {
                let Ok(key) = root.open_subkey(key_path) else {
                    continue;
                };
                let Ok(value) = key.get_value::<String, _>(INSTALL_PATH_VALUE) else {
                    continue;
                };
                let path = PathBuf::from(value);
                if path.is_dir() {
                    tracing::debug!(key = %key_path, path = %path.display(), "registry hit");
                    return Some(path);
                }
                tracing::debug!(key = %key_path, "registry entry points at a missing directory");
            }
        }
        None
    }

    #[cfg(not(windows))]
    fn lookup_install_path(&self) -> Option<PathBuf> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::InstallStore;

    #[test]
    fn lookup_does_not_panic() {
        // On non-Windows this is always None; on Windows it depends on
        // what is installed, so only absence of panics is asserted.
        let store = RegistryStore::new();
        let _ = store.lookup_install_path();
    }

    #[cfg(not(windows))]
    #[test]
    fn lookup_misses_without_a_registry() {
        let store = RegistryStore::new();
        assert_eq!(store.lookup_install_path(), None);
    }
}
