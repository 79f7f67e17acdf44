//! Privileged relaunch of the installer.
//!
//! When the gate decides the target is not writable, the current process
//! relaunches itself through the platform elevation prompt, passes the
//! already-resolved installation path as the single argument, and waits
//! for the child to finish. The parent process then exits without
//! touching the target itself.

use std::path::Path;

use crate::context::LaunchContext;

/// How the elevated relaunch went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscalationResult {
    /// The elevated child ran and exited; its work is done.
    Succeeded,

    /// The user dismissed the elevation prompt.
    Declined,

    /// The relaunch itself failed to start.
    LaunchFailed(String),
}

/// Quote a single argument for the relaunched command line.
///
/// The resolved path may contain spaces; the child must receive it as
/// one argument. Embedded quotes are doubled, which is how the Windows
/// command-line parser expects them escaped.
pub fn quote_argument(arg: &str) -> String {
    format!("\"{}\"", arg.replace('"', "\"\""))
}

/// Relaunch the current executable elevated and wait for it to exit.
///
/// The child receives only the resolved installation path; reinstall
/// handling already happened in this process, so the flag is not
/// forwarded.
pub fn escalate_and_wait(ctx: &LaunchContext, install_dir: &Path) -> EscalationResult {
    tracing::info!(
        exe = %ctx.executable().display(),
        dir = %install_dir.display(),
        "relaunching elevated"
    );
    relaunch(ctx, install_dir)
}

#[cfg(windows)]
fn relaunch(ctx: &LaunchContext, install_dir: &Path) -> EscalationResult {
    use windows::core::{HSTRING, PCWSTR};
    use windows::Win32::Foundation::{CloseHandle, ERROR_CANCELLED, HINSTANCE};
    use windows::Win32::System::Threading::{WaitForSingleObject, INFINITE};
    use windows::Win32::UI::Shell::{
        ShellExecuteExW, SEE_MASK_NOCLOSEPROCESS, SHELLEXECUTEINFOW,
    };
    use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;

    let verb = HSTRING::from("runas");
    let file = HSTRING::from(ctx.executable().as_os_str());
    let params = HSTRING::from(quote_argument(&install_dir.to_string_lossy()));

    let mut info = SHELLEXECUTEINFOW {
        cbSize: std::mem::size_of::<SHELLEXECUTEINFOW>() as u32,
        fMask: SEE_MASK_NOCLOSEPROCESS,
        lpVerb: PCWSTR(verb.as_ptr()),
        lpFile: PCWSTR(file.as_ptr()),
        lpParameters: PCWSTR(params.as_ptr()),
        nShow: SW_SHOWNORMAL.0,
        hInstApp: HINSTANCE::default(),
        ..Default::default()
    };

    // SAFETY: info is fully initialized and outlives the call; the
    // HSTRINGs backing the PCWSTR pointers stay alive until it returns.
    let launched = unsafe { ShellExecuteExW(&mut info) };

    match launched {
        Ok(()) => {
            if info.hProcess.is_invalid() {
                // Launched but no process handle to wait on.
                return EscalationResult::Succeeded;
            }
            unsafe {
                WaitForSingleObject(info.hProcess, INFINITE);
                CloseHandle(info.hProcess).ok();
            }
            EscalationResult::Succeeded
        }
        Err(err) => {
            if err.code() == ERROR_CANCELLED.to_hresult() {
                tracing::info!("elevation prompt declined");
                EscalationResult::Declined
            } else {
                tracing::error!(%err, "elevated relaunch failed");
                EscalationResult::LaunchFailed(err.message().to_string())
            }
        }
    }
}

#[cfg(not(windows))]
fn relaunch(_ctx: &LaunchContext, _install_dir: &Path) -> EscalationResult {
    EscalationResult::LaunchFailed("privilege elevation is only supported on Windows".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_argument_is_wrapped_in_quotes() {
        assert_eq!(quote_argument("C:\\Trainz"), "\"C:\\Trainz\"");
    }

    #[test]
    fn argument_with_spaces_stays_one_argument() {
        assert_eq!(
            quote_argument("C:\\Program Files\\Trainz"),
            "\"C:\\Program Files\\Trainz\""
        );
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        assert_eq!(quote_argument("a\"b"), "\"a\"\"b\"");
    }

    #[cfg(not(windows))]
    #[test]
    fn relaunch_is_unsupported_off_windows() {
        let ctx = LaunchContext::new("/tmp", "/tmp/installer");
        assert!(matches!(
            escalate_and_wait(&ctx, Path::new("/tmp/game")),
            EscalationResult::LaunchFailed(_)
        ));
    }
}
