//! Catalog loader
//!
//! Parses and validates union catalogs from YAML (JSON documents parse too).

use super::types::{AlternativeDef, Catalog, UnionDef};
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load a catalog from a file
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read catalog file '{}': {}",
            path.display(),
            e
        ))
    })?;
    let catalog = load_catalog_from_str(&content)?;
    debug!(path = %path.display(), unions = catalog.unions.len(), "Loaded catalog");
    Ok(catalog)
}

/// Load a catalog from a YAML string
pub fn load_catalog_from_str(yaml: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse catalog YAML: {e}")))?;

    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Validate a catalog
fn validate_catalog(catalog: &Catalog) -> Result<()> {
    let field_names: HashSet<_> = catalog.unions.iter().map(|u| &u.field).collect();
    if field_names.len() != catalog.unions.len() {
        return Err(Error::config("Duplicate union field names found"));
    }

    for def in &catalog.unions {
        validate_union(def)?;
    }

    Ok(())
}

/// Validate one union definition
fn validate_union(def: &UnionDef) -> Result<()> {
    if def.field.is_empty() {
        return Err(Error::config("Union field name cannot be empty"));
    }

    if def.alternatives.is_empty() {
        return Err(Error::config(format!(
            "Union '{}' must declare at least one alternative",
            def.field
        )));
    }

    let mut seen_record = false;
    for alternative in &def.alternatives {
        match alternative {
            AlternativeDef::Scalar(_) if seen_record => {
                // Still honoured in declared order
                warn!(field = %def.field, "Scalar alternative declared after a record alternative");
            }
            AlternativeDef::Scalar(_) => {}
            AlternativeDef::Record(record) => {
                seen_record = true;

                if record.name.is_empty() {
                    return Err(Error::config(format!(
                        "Union '{}' has a record alternative without a name",
                        def.field
                    )));
                }

                let mut names = HashSet::new();
                for field in &record.fields {
                    if field.name.is_empty() {
                        return Err(Error::config(format!(
                            "Record '{}' has a field without a name",
                            record.name
                        )));
                    }
                    if !names.insert(field.name.as_str()) {
                        return Err(Error::config(format!(
                            "Record '{}' declares field '{}' twice",
                            record.name, field.name
                        )));
                    }
                }
            }
        }
    }

    Ok(())
}
