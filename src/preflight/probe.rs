//! Environment access behind a capability trait.
//!
//! The gate never touches the machine directly; everything it wants to
//! know about the environment comes through [`SystemProbe`]. The
//! production implementation is [`SystemEnvironment`]; tests use
//! [`FixedProbe`] with canned answers.

use std::collections::HashSet;
use std::path::Path;

/// What the gate may ask about the running system.
pub trait SystemProbe {
    /// Names of all currently running processes, normalized with
    /// [`normalize_process_name`].
    fn running_process_names(&self) -> HashSet<String>;

    /// Whether this process can create files in `dir`.
    fn has_write_permission(&self, dir: &Path) -> bool;

    /// Whether a GPU from the advisory-relevant vendor is installed.
    fn is_known_gpu_vendor(&self) -> bool;
}

/// Lowercase a process name and strip a trailing `.exe`.
///
/// Process listings report `Trainz.exe` on Windows and bare names
/// elsewhere; the conflict check compares in this normalized form.
pub fn normalize_process_name(name: &str) -> String {
    let lower = name.to_lowercase();
    match lower.strip_suffix(".exe") {
        Some(stem) => stem.to_string(),
        None => lower,
    }
}

/// Production probe backed by the real system.
#[derive(Debug, Default)]
pub struct SystemEnvironment;

impl SystemEnvironment {
    /// Create a new system probe.
    pub fn new() -> Self {
        Self
    }
}

impl SystemProbe for SystemEnvironment {
    fn running_process_names(&self) -> HashSet<String> {
        let sys = sysinfo::System::new_all();
        sys.processes()
            .values()
            .map(|p| normalize_process_name(&p.name().to_string_lossy()))
            .collect()
    }

    fn has_write_permission(&self, dir: &Path) -> bool {
        // Permission bits and ACLs lie often enough that the only honest
        // answer is to try. The probe file name includes the pid so
        // concurrent installers cannot trip over each other.
        let probe = dir.join(format!(".tzinstall-probe-{}", std::process::id()));
        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&probe)
        {
            Ok(file) => {
                drop(file);
                std::fs::remove_file(&probe).ok();
                true
            }
            Err(err) => {
                tracing::debug!(dir = %dir.display(), %err, "write probe failed");
                false
            }
        }
    }

    #[cfg(windows)]
    fn is_known_gpu_vendor(&self) -> bool {
        use serde::Deserialize;
        use wmi::{COMLibrary, WMIConnection};

        #[derive(Deserialize)]
        #[serde(rename = "Win32_VideoController")]
        #[serde(rename_all = "PascalCase")]
        struct VideoController {
            name: Option<String>,
        }

        let Ok(com) = COMLibrary::new() else {
            return false;
        };
        let Ok(wmi) = WMIConnection::new(com) else {
            return false;
        };
        match wmi.query::<VideoController>() {
            Ok(controllers) => controllers
                .iter()
                .filter_map(|c| c.name.as_deref())
                .any(|name| name.to_lowercase().contains("nvidia")),
            Err(err) => {
                tracing::debug!(%err, "WMI video controller query failed");
                false
            }
        }
    }

    #[cfg(not(windows))]
    fn is_known_gpu_vendor(&self) -> bool {
        false
    }
}

/// Test probe with canned answers.
#[derive(Debug, Clone)]
pub struct FixedProbe {
    /// Normalized names reported as running.
    pub processes: HashSet<String>,
    /// Answer for every write-permission query.
    pub writable: bool,
    /// Answer for the GPU vendor query.
    pub known_gpu: bool,
}

impl Default for FixedProbe {
    /// A quiet machine: nothing conflicting running, target writable,
    /// no advisory-relevant GPU.
    fn default() -> Self {
        Self {
            processes: HashSet::new(),
            writable: true,
            known_gpu: false,
        }
    }
}

impl FixedProbe {
    /// Mark a process as running.
    pub fn with_process(mut self, name: &str) -> Self {
        self.processes.insert(normalize_process_name(name));
        self
    }

    /// Set the write-permission answer.
    pub fn with_writable(mut self, writable: bool) -> Self {
        self.writable = writable;
        self
    }

    /// Set the GPU vendor answer.
    pub fn with_known_gpu(mut self, known_gpu: bool) -> Self {
        self.known_gpu = known_gpu;
        self
    }
}

impl SystemProbe for FixedProbe {
    fn running_process_names(&self) -> HashSet<String> {
        self.processes.clone()
    }

    fn has_write_permission(&self, _dir: &Path) -> bool {
        self.writable
    }

    fn is_known_gpu_vendor(&self) -> bool {
        self.known_gpu
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn normalize_strips_exe_and_lowercases() {
        assert_eq!(normalize_process_name("Trainz.exe"), "trainz");
        assert_eq!(normalize_process_name("ContentManager.EXE"), "contentmanager");
        assert_eq!(normalize_process_name("trainz"), "trainz");
    }

    #[test]
    fn normalize_only_strips_trailing_exe() {
        assert_eq!(normalize_process_name("exe-tool"), "exe-tool");
        assert_eq!(normalize_process_name("trainz.exe.bak"), "trainz.exe.bak");
    }

    #[test]
    fn write_probe_succeeds_in_temp_dir() {
        let temp = TempDir::new().unwrap();
        let probe = SystemEnvironment::new();
        assert!(probe.has_write_permission(temp.path()));
        // The probe file must not be left behind.
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn write_probe_fails_for_missing_dir() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("does-not-exist");
        let probe = SystemEnvironment::new();
        assert!(!probe.has_write_permission(&gone));
    }

    #[cfg(unix)]
    #[test]
    fn write_probe_fails_in_readonly_dir() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("ro");
        std::fs::create_dir(&dir).unwrap();
        std::fs::set_permissions(&dir, std::fs::Permissions::from_mode(0o555)).unwrap();

        let probe = SystemEnvironment::new();
        let writable = probe.has_write_permission(&dir);
        // Root ignores mode bits; only assert when the kernel enforced them.
        let enforced = std::fs::write(dir.join("control"), b"").is_err();

        // Restore so TempDir can clean up.
        std::fs::set_permissions(&dir, std::fs::Permissions::from_mode(0o755)).unwrap();
        if enforced {
            assert!(!writable);
        }
    }

    #[test]
    fn system_probe_lists_processes() {
        let probe = SystemEnvironment::new();
        // At minimum the test runner itself is in the list.
        assert!(!probe.running_process_names().is_empty());
    }

    #[test]
    fn fixed_probe_normalizes_configured_names() {
        let probe = FixedProbe::default().with_process("Trainz.exe");
        assert!(probe.running_process_names().contains("trainz"));
    }
}
