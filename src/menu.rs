//! Unified tenant/project menu and ordinal selection.

use std::fmt::Write as _;

use crate::config::IdentitySource;
use crate::error::{CloudError, Result};

/// Which provider a menu entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Azure,
    Gcp,
}

/// One selectable line in the unified menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    AzureTenant(String),
    GcpProject(String),
}

impl MenuEntry {
    pub fn kind(&self) -> ProviderKind {
        match self {
            MenuEntry::AzureTenant(_) => ProviderKind::Azure,
            MenuEntry::GcpProject(_) => ProviderKind::Gcp,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            MenuEntry::AzureTenant(id) | MenuEntry::GcpProject(id) => id,
        }
    }
}

/// Builds the menu: every tenant in file order, then every project.
pub fn build_menu(source: &IdentitySource) -> Vec<MenuEntry> {
    source
        .tenants()
        .iter()
        .cloned()
        .map(MenuEntry::AzureTenant)
        .chain(source.projects().iter().cloned().map(MenuEntry::GcpProject))
        .collect()
}

/// Renders the menu with continuous 1-based numbering across both blocks.
pub fn render_menu(menu: &[MenuEntry]) -> String {
    let mut out = String::new();
    let mut current: Option<ProviderKind> = None;
    for (i, entry) in menu.iter().enumerate() {
        if current != Some(entry.kind()) {
            current = Some(entry.kind());
            let heading = match entry.kind() {
                ProviderKind::Azure => "Available Azure tenants:",
                ProviderKind::Gcp => "Available GCP projects:",
            };
            let _ = writeln!(out, "\n{}", heading);
        }
        let _ = writeln!(out, "{}. {}", i + 1, entry.id());
    }
    out
}

/// Parses a user-entered ordinal and checks it against `1..=bound`.
///
/// Returns the 1-based ordinal. Surrounding whitespace is ignored; anything
/// else that is not a base-10 integer in range is an invalid selection.
pub fn resolve_selection(raw: &str, bound: usize) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(n) if (1..=bound).contains(&n) => Ok(n),
        _ => Err(CloudError::InvalidSelection { bound }),
    }
}

/// Resolves an ordinal and returns the matching item.
pub fn select<'a, T>(raw: &str, items: &'a [T]) -> Result<&'a T> {
    let n = resolve_selection(raw, items.len())?;
    Ok(&items[n - 1])
}
