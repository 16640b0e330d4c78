//! `gcloud` invocations for the GCP branch.

use super::Provider;
use crate::resource::GkeCluster;
use crate::runner::Invocation;

const GCLOUD: &str = "gcloud";

/// GKE clusters reached through the active gcloud project.
#[derive(Debug, Clone, Copy)]
pub struct Gcp;

impl Provider for Gcp {
    type Cluster = GkeCluster;
    const SCOPE: &'static str = "project";

    fn list_clusters() -> Invocation {
        Invocation::new(GCLOUD, ["container", "clusters", "list", "--format", "json"])
    }

    fn get_credentials(cluster: &GkeCluster) -> Invocation {
        Invocation::new(
            GCLOUD,
            [
                "container",
                "clusters",
                "get-credentials",
                cluster.name.as_str(),
                "--region",
                cluster.location.as_str(),
            ],
        )
    }
}

pub fn set_project(project: &str) -> Invocation {
    Invocation::new(GCLOUD, ["config", "set", "project", project])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_credentials_uses_location_as_region() {
        let cluster = GkeCluster {
            name: "gke-1".into(),
            location: "us-central1".into(),
            status: "RUNNING".into(),
        };
        assert_eq!(
            Gcp::get_credentials(&cluster).to_string(),
            "gcloud container clusters get-credentials gke-1 --region us-central1"
        );
    }
}
