//! Identity-source loading and path resolution.
//!
//! The identity source is a JSON document listing the Azure tenants and GCP
//! projects a user can pick from:
//!
//! ```json
//! { "azure": { "tenants": ["..."] }, "gcp": { "projects": ["..."] } }
//! ```
//!
//! Either provider block may be omitted; a missing block is an empty list.
//!
//! ## Testing
//!
//! Set the `CLOUDCLI_TENANTS_FILE` environment variable to point the loader
//! at a different file.

use serde::{Deserialize, Deserializer};
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{CloudError, Result};

/// Environment variable overriding the identity-source location.
pub const TENANTS_FILE_ENV: &str = "CLOUDCLI_TENANTS_FILE";

/// File name looked up in the home directory.
pub const TENANTS_FILE_NAME: &str = "tenants.json";

/// Tenants and projects available for selection, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IdentitySource {
    #[serde(default, deserialize_with = "null_as_default")]
    azure: AzureSection,
    #[serde(default, deserialize_with = "null_as_default")]
    gcp: GcpSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
struct AzureSection {
    #[serde(default, deserialize_with = "null_as_default")]
    tenants: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
struct GcpSection {
    #[serde(default, deserialize_with = "null_as_default")]
    projects: Vec<String>,
}

/// Treats an explicit JSON `null` the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl IdentitySource {
    pub fn new(tenants: Vec<String>, projects: Vec<String>) -> Self {
        Self {
            azure: AzureSection { tenants },
            gcp: GcpSection { projects },
        }
    }

    pub fn tenants(&self) -> &[String] {
        &self.azure.tenants
    }

    pub fn projects(&self) -> &[String] {
        &self.gcp.projects
    }

    pub fn is_empty(&self) -> bool {
        self.azure.tenants.is_empty() && self.gcp.projects.is_empty()
    }
}

/// Returns the user's home directory.
pub fn get_home() -> Result<PathBuf> {
    dirs::home_dir().ok_or(CloudError::NoHomeDirectory)
}

/// Resolves where the identity source lives.
///
/// An explicit path wins, then `CLOUDCLI_TENANTS_FILE`, then
/// `~/tenants.json`.
pub fn resolve_tenants_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Ok(path) = env::var(TENANTS_FILE_ENV) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    Ok(get_home()?.join(TENANTS_FILE_NAME))
}

/// Reads and parses the identity source at `path`.
///
/// An empty but well-formed document loads fine; callers decide what to do
/// when there is nothing to pick.
pub fn load_identity_source(path: &Path) -> Result<IdentitySource> {
    debug!("Loading identity source from {}", path.display());
    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(CloudError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };
    parse_identity_source(path, &raw)
}

fn parse_identity_source(path: &Path, raw: &[u8]) -> Result<IdentitySource> {
    serde_json::from_slice(raw).map_err(|error| CloudError::MalformedInput {
        path: path.to_path_buf(),
        raw: String::from_utf8_lossy(raw).into_owned(),
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<IdentitySource> {
        parse_identity_source(Path::new("tenants.json"), raw.as_bytes())
    }

    #[test]
    fn test_parses_both_providers_in_order() {
        let source = parse(
            r#"{"azure":{"tenants":["98765432-1234-5678-9012-345678901234","87654321-4321-4321-4321-210987654321"]},
                "gcp":{"projects":["project-12345","my-project-2"]}}"#,
        )
        .unwrap();
        assert_eq!(
            source.tenants(),
            [
                "98765432-1234-5678-9012-345678901234",
                "87654321-4321-4321-4321-210987654321"
            ]
        );
        assert_eq!(source.projects(), ["project-12345", "my-project-2"]);
    }

    #[test]
    fn test_missing_sections_are_empty() {
        let source = parse(r#"{"gcp":{"projects":["p"]}}"#).unwrap();
        assert!(source.tenants().is_empty());
        assert_eq!(source.projects(), ["p"]);

        let source = parse("{}").unwrap();
        assert!(source.is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let source = parse(r#"{"azure":{"tenants":["t","t"]}}"#).unwrap();
        assert_eq!(source.tenants(), ["t", "t"]);
    }

    #[test]
    fn test_malformed_document_echoes_raw_content() {
        let err = parse("{not json").unwrap_err();
        assert!(matches!(err, CloudError::MalformedInput { .. }));
        assert!(err.to_string().contains("Raw file content: {not json"));
    }

    #[test]
    fn test_null_sections_and_lists_are_empty() {
        let source = parse(r#"{"azure":null,"gcp":{"projects":["p"]}}"#).unwrap();
        assert!(source.tenants().is_empty());
        assert_eq!(source.projects(), ["p"]);

        let source = parse(r#"{"azure":{"tenants":null},"gcp":{"projects":null}}"#).unwrap();
        assert!(source.is_empty());
    }

    #[test]
    fn test_non_utf8_file_is_malformed_input() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("tenants.json");
        fs::write(&path, b"{\"azure\":{\"tenants\":[\"T\xff1\"]}}").unwrap();

        let err = load_identity_source(&path).unwrap_err();
        assert!(matches!(err, CloudError::MalformedInput { .. }));
        assert!(err.to_string().contains("Raw file content: {\"azure\""));
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_tenants_path(Some(Path::new("/tmp/custom.json"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
    }
}
