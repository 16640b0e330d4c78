//! `az` invocations for the Azure branch.

use super::Provider;
use crate::resource::AksCluster;
use crate::runner::Invocation;

const AZ: &str = "az";

/// AKS clusters reached through an Azure subscription.
#[derive(Debug, Clone, Copy)]
pub struct Azure;

impl Provider for Azure {
    type Cluster = AksCluster;
    const SCOPE: &'static str = "subscription";

    fn list_clusters() -> Invocation {
        Invocation::new(AZ, ["aks", "list", "--output", "json"])
    }

    fn get_credentials(cluster: &AksCluster) -> Invocation {
        Invocation::new(
            AZ,
            [
                "aks",
                "get-credentials",
                "--resource-group",
                cluster.resource_group.as_str(),
                "--name",
                cluster.name.as_str(),
                "--overwrite-existing",
            ],
        )
    }
}

/// Interactive login scoped to one tenant.
pub fn login(tenant: &str) -> Invocation {
    Invocation::new(AZ, ["login", "-t", tenant])
}

pub fn list_subscriptions() -> Invocation {
    Invocation::new(AZ, ["account", "list", "--output", "json"])
}

pub fn set_subscription(id: &str) -> Invocation {
    Invocation::new(AZ, ["account", "set", "--subscription", id])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::PowerState;

    #[test]
    fn test_get_credentials_args() {
        let cluster = AksCluster {
            name: "aks-1".into(),
            location: "westeurope".into(),
            resource_group: "rg-prod".into(),
            power_state: PowerState {
                code: "Running".into(),
            },
        };
        assert_eq!(
            Azure::get_credentials(&cluster).to_string(),
            "az aks get-credentials --resource-group rg-prod --name aks-1 --overwrite-existing"
        );
    }

    #[test]
    fn test_login_passes_tenant_positionally() {
        assert_eq!(login("T1").args, ["login", "-t", "T1"]);
    }
}
