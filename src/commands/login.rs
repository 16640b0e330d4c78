//! Login command implementation.

use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::config::{load_identity_source, resolve_tenants_path};
use crate::runner::{CommandRunner, SystemRunner};
use crate::session::{LoginOptions, Outcome, Session};
use crate::terminal::{ConsoleTerminal, Terminal};

/// Runs the interactive login flow against the real `az`/`gcloud` CLIs.
///
/// This function:
/// 1. Loads the identity source (`--file`, `CLOUDCLI_TENANTS_FILE` or `~/tenants.json`)
/// 2. Shows the tenant/project menu and reads a choice
/// 3. Logs in or sets the project, picking a subscription on Azure
/// 4. Lists clusters and optionally fetches credentials for one
pub fn login(file: Option<&Path>, options: LoginOptions) -> Result<Outcome> {
    login_with(&SystemRunner, &mut ConsoleTerminal, file, options)
}

/// Same as [`login`] with caller-provided collaborators.
pub fn login_with(
    runner: &dyn CommandRunner,
    terminal: &mut dyn Terminal,
    file: Option<&Path>,
    options: LoginOptions,
) -> Result<Outcome> {
    let path = resolve_tenants_path(file)?;
    let source = load_identity_source(&path)?;

    let mut session = Session::new(runner, terminal, &source);
    let outcome = session.run(options)?;
    info!("Login finished in state {:?}: {:?}", session.state(), outcome);
    Ok(outcome)
}
