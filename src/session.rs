//! The interactive login flow.
//!
//! A [`Session`] walks one run from the unified menu to an optional cluster
//! connection:
//!
//! ```text
//! Start -> Chosen -> Authenticated -> ClustersListed -> ClusterSelected -> Connected
//! ```
//!
//! Everything up to and including scoping (login, subscription, project) is
//! fatal on failure and leaves the session in [`SessionState::Failed`]. Once
//! scoped, cluster listing and connection problems are reported and end the
//! run normally.

use tracing::{debug, warn};

use crate::config::IdentitySource;
use crate::error::{CloudError, Result};
use crate::menu::{MenuEntry, build_menu, render_menu, select};
use crate::provider::{self, Azure, Gcp, Provider, azure, gcp};
use crate::resource::{
    ConnectableCluster, Subscription, decode_listing, render_compact, render_table,
};
use crate::runner::CommandRunner;
use crate::terminal::Terminal;

/// Where a session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Start,
    Chosen,
    Authenticated,
    ClustersListed,
    ClusterSelected,
    Connected,
    /// A fatal error ended the run.
    Failed,
}

/// How a run that did not fail ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The tenant has no subscriptions to pick from.
    NoSubscriptions,
    /// Scoping finished and cluster steps were skipped on request.
    Scoped,
    /// Listing clusters failed or returned something unparsable.
    ClusterListingFailed,
    NoClusters,
    /// The user answered anything but `y` to the connect prompt.
    Declined,
    InvalidClusterSelection,
    Connected(String),
    ConnectFailed(String),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoginOptions {
    /// Stop once the tenant/project is scoped.
    pub no_clusters: bool,
}

/// One run of the login flow, holding its collaborators explicitly.
pub struct Session<'a> {
    runner: &'a dyn CommandRunner,
    terminal: &'a mut dyn Terminal,
    source: &'a IdentitySource,
    state: SessionState,
}

impl<'a> Session<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        terminal: &'a mut dyn Terminal,
        source: &'a IdentitySource,
    ) -> Self {
        Self {
            runner,
            terminal,
            source,
            state: SessionState::Start,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    fn advance(&mut self, next: SessionState) {
        debug!("Session {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Shows the menu, reads a choice and drives the chosen provider.
    pub fn run(&mut self, options: LoginOptions) -> Result<Outcome> {
        let result = self.drive(options);
        if result.is_err() {
            self.advance(SessionState::Failed);
        }
        result
    }

    fn drive(&mut self, options: LoginOptions) -> Result<Outcome> {
        if self.source.is_empty() {
            return Err(CloudError::NoEntriesAvailable);
        }

        let menu = build_menu(self.source);
        self.terminal.say(&render_menu(&menu));
        let answer = self
            .terminal
            .prompt(&format!("Enter number to select (1-{})", menu.len()))?;
        let entry = select(&answer, &menu)?.clone();
        self.advance(SessionState::Chosen);

        match entry {
            MenuEntry::AzureTenant(tenant) => self.run_azure(&tenant, options),
            MenuEntry::GcpProject(project) => self.run_gcp(&project, options),
        }
    }

    fn run_azure(&mut self, tenant: &str, options: LoginOptions) -> Result<Outcome> {
        self.terminal
            .say(&format!("\nLogging in to Azure tenant: {}", tenant));
        self.runner.run_checked(&azure::login(tenant))?;
        self.terminal
            .say(&format!("Successfully logged in to Azure tenant: {}", tenant));
        self.advance(SessionState::Authenticated);

        let raw = self.runner.run_checked(&azure::list_subscriptions())?;
        let subscriptions: Vec<Subscription> = decode_listing(&raw)?;
        if subscriptions.is_empty() {
            self.terminal.say("No subscriptions found for this tenant");
            return Ok(Outcome::NoSubscriptions);
        }

        self.terminal.say("\nAvailable subscriptions:");
        self.terminal.say(&render_compact(&subscriptions));
        let answer = self.terminal.prompt(&format!(
            "Enter subscription number to select (1-{})",
            subscriptions.len()
        ))?;
        let subscription = select(&answer, &subscriptions)?;

        self.runner
            .run_checked(&azure::set_subscription(&subscription.id))?;
        self.terminal.say(&format!(
            "Successfully set subscription to: {}",
            subscription.name
        ));

        if options.no_clusters {
            return Ok(Outcome::Scoped);
        }
        self.connect::<Azure>()
    }

    fn run_gcp(&mut self, project: &str, options: LoginOptions) -> Result<Outcome> {
        self.terminal
            .say(&format!("\nSetting GCP project: {}", project));
        self.runner.run_checked(&gcp::set_project(project))?;
        self.terminal
            .say(&format!("Successfully set GCP project to: {}", project));
        self.advance(SessionState::Authenticated);

        if options.no_clusters {
            return Ok(Outcome::Scoped);
        }
        self.connect::<Gcp>()
    }

    /// Lists the provider's clusters and optionally fetches credentials for
    /// one. Failures here are reported, not returned.
    fn connect<P: Provider>(&mut self) -> Result<Outcome> {
        let clusters = match self
            .runner
            .run_checked(&P::list_clusters())
            .and_then(|raw| decode_listing::<P::Cluster>(&raw))
        {
            Ok(clusters) => clusters,
            Err(e) => {
                warn!("Cluster listing failed: {}", e);
                self.terminal
                    .say(&format!("Error getting cluster list: {}", e));
                return Ok(Outcome::ClusterListingFailed);
            }
        };

        if clusters.is_empty() {
            self.terminal.say(&format!(
                "No Kubernetes clusters found in the current {}",
                P::SCOPE
            ));
            return Ok(Outcome::NoClusters);
        }
        self.advance(SessionState::ClustersListed);

        self.terminal
            .say(&format!("\nKubernetes clusters in current {}:", P::SCOPE));
        self.terminal.say(&render_table(&clusters));

        let answer = self
            .terminal
            .prompt("Do you want to connect to a cluster? (y/n)")?;
        if !matches!(answer.trim(), "y" | "Y") {
            return Ok(Outcome::Declined);
        }

        let answer = self.terminal.prompt(&format!(
            "Enter cluster number to connect (1-{})",
            clusters.len()
        ))?;
        let cluster = match select(&answer, &clusters) {
            Ok(cluster) => cluster,
            Err(e) => {
                self.terminal.say(&e.to_string());
                return Ok(Outcome::InvalidClusterSelection);
            }
        };
        self.advance(SessionState::ClusterSelected);

        let name = cluster.name().to_string();
        match provider::materialize::<P>(self.runner, cluster) {
            Ok(()) => {
                self.terminal
                    .say(&format!("Successfully connected to cluster: {}", name));
                self.advance(SessionState::Connected);
                Ok(Outcome::Connected(name))
            }
            Err(e) => {
                self.terminal.say(&format!("Error getting kubeconfig: {}", e));
                self.terminal
                    .say(&format!("Failed to connect to cluster: {}", name));
                Ok(Outcome::ConnectFailed(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{CommandOutput, Invocation};
    use std::cell::RefCell;

    struct Script(Vec<&'static str>);

    impl Terminal for Script {
        fn prompt(&mut self, _text: &str) -> Result<String> {
            Ok(if self.0.is_empty() {
                String::new()
            } else {
                self.0.remove(0).to_string()
            })
        }

        fn say(&mut self, _text: &str) {}
    }

    /// Fails every command whose line is listed, succeeds with `[]` otherwise.
    struct Runner {
        failing: Vec<&'static str>,
        calls: RefCell<Vec<String>>,
    }

    impl CommandRunner for Runner {
        fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
            let line = invocation.to_string();
            self.calls.borrow_mut().push(line.clone());
            Ok(CommandOutput {
                success: !self.failing.contains(&line.as_str()),
                output: "[]".to_string(),
            })
        }
    }

    fn source() -> IdentitySource {
        IdentitySource::new(vec!["T1".into()], vec!["P1".into()])
    }

    #[test]
    fn test_login_failure_ends_in_failed_state() {
        let source = source();
        let runner = Runner {
            failing: vec!["az login -t T1"],
            calls: RefCell::default(),
        };
        let mut term = Script(vec!["1"]);
        let mut session = Session::new(&runner, &mut term, &source);

        assert!(session.run(LoginOptions::default()).is_err());
        assert_eq!(session.state(), SessionState::Failed);
        assert_eq!(runner.calls.borrow().as_slice(), ["az login -t T1"]);
    }

    #[test]
    fn test_invalid_menu_choice_ends_in_failed_state() {
        let source = source();
        let runner = Runner {
            failing: vec![],
            calls: RefCell::default(),
        };
        let mut term = Script(vec!["7"]);
        let mut session = Session::new(&runner, &mut term, &source);

        assert!(matches!(
            session.run(LoginOptions::default()),
            Err(CloudError::InvalidSelection { bound: 2 })
        ));
        assert_eq!(session.state(), SessionState::Failed);
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_soft_cluster_outcome_keeps_reached_state() {
        let source = source();
        let runner = Runner {
            failing: vec![],
            calls: RefCell::default(),
        };
        let mut term = Script(vec!["2"]);
        let mut session = Session::new(&runner, &mut term, &source);

        assert_eq!(
            session.run(LoginOptions::default()).unwrap(),
            Outcome::NoClusters
        );
        assert_eq!(session.state(), SessionState::Authenticated);
    }
}
