//! Listable cloud resources: subscriptions and Kubernetes clusters.
//!
//! Every listing command prints a JSON array. [`decode_listing`] turns that
//! into typed records and [`render_table`] numbers them for selection, in
//! the order the command returned them.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fmt::Write as _;

use crate::config::null_as_default;
use crate::error::{CloudError, Result};

const RULE: &str = "-------------------------------------------";

/// A record decoded from a listing command's JSON array.
pub trait Listing: DeserializeOwned {
    /// Used in error messages, e.g. "subscription list".
    const WHAT: &'static str;

    /// Label/value pairs in display order. The first pair heads the entry.
    fn display_fields(&self) -> Vec<(&'static str, &str)>;
}

/// A cluster whose credentials can be fetched into the local kubeconfig.
pub trait ConnectableCluster: Listing {
    fn name(&self) -> &str;

    /// Resource group (AKS) or region (GKE) passed to get-credentials.
    fn locator(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub name: String,
    pub state: String,
    #[serde(rename = "tenantId")]
    pub tenant_id: String,
}

impl Listing for Subscription {
    const WHAT: &'static str = "subscription list";

    fn display_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Name", self.name.as_str()),
            ("ID", self.id.as_str()),
            ("State", self.state.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PowerState {
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
}

/// `az aks list` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AksCluster {
    pub name: String,
    pub location: String,
    #[serde(rename = "resourceGroup")]
    pub resource_group: String,
    #[serde(rename = "powerState", default, deserialize_with = "null_as_default")]
    pub power_state: PowerState,
}

impl Listing for AksCluster {
    const WHAT: &'static str = "cluster list";

    fn display_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Name", self.name.as_str()),
            ("Location", self.location.as_str()),
            ("Resource Group", self.resource_group.as_str()),
            ("Power State", self.power_state.code.as_str()),
        ]
    }
}

impl ConnectableCluster for AksCluster {
    fn name(&self) -> &str {
        &self.name
    }

    fn locator(&self) -> &str {
        &self.resource_group
    }
}

/// `gcloud container clusters list` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GkeCluster {
    pub name: String,
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

impl Listing for GkeCluster {
    const WHAT: &'static str = "cluster list";

    fn display_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Name", self.name.as_str()),
            ("Location", self.location.as_str()),
            ("Status", self.status.as_str()),
        ]
    }
}

impl ConnectableCluster for GkeCluster {
    fn name(&self) -> &str {
        &self.name
    }

    fn locator(&self) -> &str {
        &self.location
    }
}

/// Decodes a listing command's output. An empty array is a valid, empty
/// listing.
pub fn decode_listing<R: Listing>(raw: &str) -> Result<Vec<R>> {
    serde_json::from_str(raw).map_err(|error| CloudError::MalformedResponse {
        what: R::WHAT,
        raw: raw.to_string(),
        error,
    })
}

/// Numbered multi-line table, one block per record between dashed rules.
pub fn render_table<R: Listing>(items: &[R]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE);
    for (i, item) in items.iter().enumerate() {
        let fields = item.display_fields();
        let mut fields = fields.into_iter();
        if let Some((label, value)) = fields.next() {
            let _ = writeln!(out, "{}. {}: {}", i + 1, label, value);
        }
        for (label, value) in fields {
            let _ = writeln!(out, "   {}: {}", label, value);
        }
        let _ = writeln!(out, "{}", RULE);
    }
    out
}

/// Compact one-line-per-record listing: `N. <first> (<second>)`.
pub fn render_compact<R: Listing>(items: &[R]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        let fields = item.display_fields();
        match (fields.first(), fields.get(1)) {
            (Some((_, head)), Some((_, detail))) => {
                let _ = writeln!(out, "{}. {} ({})", i + 1, head, detail);
            }
            (Some((_, head)), None) => {
                let _ = writeln!(out, "{}. {}", i + 1, head);
            }
            _ => {}
        }
    }
    out
}
