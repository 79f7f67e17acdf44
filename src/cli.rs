//! CLI argument definitions.
//!
//! Flags are accepted case-insensitively, so argv is passed through
//! [`normalize_args`] before clap sees it: long-flag names are
//! lowercased, values and positionals are left untouched.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Trainz asset-pack installer.
#[derive(Debug, Parser)]
#[command(name = "trainz-installer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Installation directory (overrides auto-detection)
    pub path: Option<PathBuf>,

    /// Re-run a previously completed installation
    #[arg(long)]
    pub reinstall: bool,

    /// Never prompt; confirmations use their defaults, folder selection is
    /// treated as cancelled
    #[arg(long)]
    pub non_interactive: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Lowercase long-flag names so `--Reinstall` and `--REINSTALL` parse.
///
/// Only the name portion of a `--flag` or `--flag=value` token is folded;
/// everything after the first `=` is preserved byte-for-byte, as are
/// positional arguments (installation paths are case-sensitive on some
/// filesystems). A bare `--` ends flag parsing, so nothing after it is
/// touched either.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut past_separator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if past_separator {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    past_separator = true;
                    arg
                }
                Some(s) if s.starts_with("--") => {
                    let (name, value) = match s.split_once('=') {
                        Some((name, value)) => (name, Some(value)),
                        None => (s, None),
                    };
                    let mut folded = name.to_lowercase();
                    if let Some(value) = value {
                        folded.push('=');
                        folded.push_str(value);
                    }
                    OsString::from(folded)
                }
                _ => arg,
            }
        })
        .collect()
}
