//! List command implementation.

use anyhow::{Result, bail};
use std::path::Path;

use crate::config::{load_identity_source, resolve_tenants_path};
use crate::error::CloudError;
use crate::menu::{build_menu, render_menu};

/// Renders the numbered tenant/project menu without prompting.
pub fn list_entries(file: Option<&Path>) -> Result<String> {
    let path = resolve_tenants_path(file)?;
    let source = load_identity_source(&path)?;
    if source.is_empty() {
        bail!(CloudError::NoEntriesAvailable);
    }
    Ok(render_menu(&build_menu(&source)))
}
