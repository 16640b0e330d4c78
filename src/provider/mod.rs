//! Provider-specific command shapes.
//!
//! Azure and GCP differ in how a session is scoped (tenant login plus
//! subscription vs. active project) but share the cluster half of the flow:
//! list clusters, pick one, fetch its credentials. [`Provider`] captures
//! that shared half so the session drives both with the same code.

pub mod azure;
pub mod gcp;

pub use azure::Azure;
pub use gcp::Gcp;

use tracing::{debug, warn};

use crate::error::Result;
use crate::resource::ConnectableCluster;
use crate::runner::{CommandRunner, Invocation};

pub trait Provider {
    type Cluster: ConnectableCluster;

    /// What clusters are listed within, e.g. "subscription".
    const SCOPE: &'static str;

    fn list_clusters() -> Invocation;

    fn get_credentials(cluster: &Self::Cluster) -> Invocation;
}

/// Writes the cluster's credentials into the local kubeconfig.
pub fn materialize<P: Provider>(runner: &dyn CommandRunner, cluster: &P::Cluster) -> Result<()> {
    let invocation = P::get_credentials(cluster);
    debug!(
        "Fetching credentials for {} ({})",
        cluster.name(),
        cluster.locator()
    );
    runner.run_checked(&invocation).map(|_| ()).inspect_err(|e| {
        warn!("get-credentials for {} failed: {}", cluster.name(), e);
    })
}
