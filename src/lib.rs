//! # cloudcli - interactive cloud session picker
//!
//! Picks an Azure tenant or GCP project from a declarative list, logs in or
//! scopes the matching CLI (`az`/`gcloud`), lets the user pick a subscription
//! (Azure only), then lists Kubernetes clusters and optionally writes
//! credentials for one of them into the local kubeconfig.
//!
//! ## Identity source
//!
//! Tenants and projects are read from `~/tenants.json` (or the path in
//! `CLOUDCLI_TENANTS_FILE`):
//!
//! ```json
//! {
//!   "azure": { "tenants": ["12345678-1234-1234-1234-123456789012"] },
//!   "gcp": { "projects": ["project-1"] }
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod menu;
pub mod provider;
pub mod resource;
pub mod runner;
pub mod session;
pub mod terminal;

// Re-export commonly used items
pub use commands::{list_entries, login, login_with};
pub use config::{IdentitySource, load_identity_source, resolve_tenants_path};
pub use error::CloudError;
pub use menu::{MenuEntry, ProviderKind, build_menu, resolve_selection};
pub use runner::{CommandOutput, CommandRunner, Invocation, SystemRunner};
pub use session::{LoginOptions, Outcome, Session, SessionState};
pub use terminal::{ConsoleTerminal, Terminal};
