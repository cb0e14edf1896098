//! Catalog files (YAML or JSON).
//!
//! Loading always validates through [`Catalog::from_file`], so a catalog read
//! from disk carries the same guarantees as the built-in one.

use std::path::Path;

use crate::catalog::{Catalog, CatalogFile};
use crate::error::CatalogResult;

pub fn load_yaml(path: &Path) -> CatalogResult<Catalog> {
    let content = std::fs::read_to_string(path)?;
    let file: CatalogFile = serde_yaml::from_str(&content)?;
    Catalog::from_file(file)
}

pub fn save_yaml(path: &Path, catalog: &Catalog) -> CatalogResult<()> {
    let content = serde_yaml::to_string(&catalog.to_file())?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> CatalogResult<Catalog> {
    let content = std::fs::read_to_string(path)?;
    let file: CatalogFile = serde_json::from_str(&content)?;
    Catalog::from_file(file)
}

pub fn save_json(path: &Path, catalog: &Catalog) -> CatalogResult<()> {
    let content = serde_json::to_string_pretty(&catalog.to_file())?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` is JSON, anything else YAML.
pub fn load_path(path: &Path) -> CatalogResult<Catalog> {
    tracing::info!(path = %path.display(), "loading catalog");
    if is_json(path) {
        load_json(path)
    } else {
        load_yaml(path)
    }
}

/// Save by extension: `.json` is JSON, anything else YAML.
pub fn save_path(path: &Path, catalog: &Catalog) -> CatalogResult<()> {
    if is_json(path) {
        save_json(path, catalog)
    } else {
        save_yaml(path, catalog)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
