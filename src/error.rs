//! Error kinds surfaced by a cloudcli run.

use std::path::PathBuf;
use thiserror::Error;

/// Example identity-source document shown when the file is missing.
pub const EXAMPLE_DOCUMENT: &str = r#"   {
     "azure": {
       "tenants": [
         "12345678-1234-1234-1234-123456789012",
         "87654321-4321-4321-4321-210987654321"
       ]
     },
     "gcp": {
       "projects": [
         "project-1",
         "project-2"
       ]
     }
   }"#;

/// One-line document used in the `echo ... >` remediation hint.
pub const MINIMAL_DOCUMENT: &str =
    r#"{"azure":{"tenants":["your-tenant-id"]},"gcp":{"projects":["your-project"]}}"#;

#[derive(Error, Debug)]
pub enum CloudError {
    #[error(
        "Tenants file not found at {}\n\nTo fix this:\n\
         1. Create a file named 'tenants.json' in your home directory\n\
         2. Add your tenants in JSON format\n\
         3. Example format:\n{}\n\n\
         You can create the file using:\n   echo '{}' > {}",
        .path.display(),
        EXAMPLE_DOCUMENT,
        MINIMAL_DOCUMENT,
        .path.display()
    )]
    NotFound { path: PathBuf },

    #[error("Error parsing tenants file {}: {error}\nRaw file content: {raw}", .path.display())]
    MalformedInput {
        path: PathBuf,
        raw: String,
        error: serde_json::Error,
    },

    #[error("Error parsing {what}: {error}\nRaw output: {raw}")]
    MalformedResponse {
        what: &'static str,
        raw: String,
        error: serde_json::Error,
    },

    #[error("No tenants or projects found in the file")]
    NoEntriesAvailable,

    #[error("Invalid selection. Please enter a number between 1 and {bound}")]
    InvalidSelection { bound: usize },

    #[error("Command `{command}` failed\nCommand output: {output}")]
    ExternalCommandFailed { command: String, output: String },

    #[error("Could not find home directory")]
    NoHomeDirectory,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CloudError>;
