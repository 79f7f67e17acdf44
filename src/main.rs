//! Installer CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use trainz_installer::app::{App, RunOutcome};
use trainz_installer::cli::{normalize_args, Cli};
use trainz_installer::context::LaunchContext;
use trainz_installer::elevation::EscalationResult;
use trainz_installer::locator::RegistryStore;
use trainz_installer::preflight::{BlockKind, SystemEnvironment};
use trainz_installer::session::ConsoleSession;
use trainz_installer::ui::create_ui;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("trainz_installer=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("trainz_installer=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    init_tracing(cli.debug);

    tracing::debug!("installer starting with args: {:?}", cli);

    let ctx = match LaunchContext::capture() {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    let store = RegistryStore::new();
    let probe = SystemEnvironment::new();
    let mut ui = create_ui(!cli.non_interactive);
    let mut session = ConsoleSession::new(ctx.current_dir());

    let app = App::new(&ctx, &store, &probe);
    match app.run(cli.path, cli.reinstall, ui.as_mut(), &mut session) {
        Ok(outcome) => exit_code_for(&outcome),
        Err(e) => {
            ui.error("Error!", &format!("{}", e));
            ExitCode::from(1)
        }
    }
}

/// Map a run outcome to the process exit code.
///
/// Anything the user chose (cancelling the folder picker, declining the
/// advisory, dismissing the elevation prompt) exits 0; environment
/// problems and failed relaunches exit 1.
fn exit_code_for(outcome: &RunOutcome) -> ExitCode {
    match outcome {
        RunOutcome::Installed | RunOutcome::UserCancelled => ExitCode::SUCCESS,
        RunOutcome::Blocked(reason) => match reason.kind() {
            BlockKind::UserDeclined => ExitCode::SUCCESS,
            BlockKind::Environment => ExitCode::from(1),
        },
        RunOutcome::Escalated(EscalationResult::Succeeded)
        | RunOutcome::Escalated(EscalationResult::Declined) => ExitCode::SUCCESS,
        RunOutcome::Escalated(EscalationResult::LaunchFailed(_)) => ExitCode::from(1),
    }
}
