// src/registry/mod.rs
// Candidate registry loading for the reconcile CLI. The matcher itself
// places no constraint on where candidates come from; this collaborator
// reads them from JSON files on disk.

use anyhow::{bail, Context, Result};
use log::{debug, warn};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::core::Organization;

/// Load the set of known organizations from `path`.
///
/// Accepts either a single JSON file or a directory, which is scanned
/// (non-recursively) for `*.json` files in sorted filename order so repeated
/// runs enumerate candidates deterministically. Each file holds a JSON array
/// of organization objects or a single object. Records without a usable
/// `name` are skipped with a warning rather than failing the whole load.
pub fn load_registry(path: &Path) -> Result<Vec<Organization>> {
    if path.is_dir() {
        let mut files: Vec<PathBuf> = fs::read_dir(path)
            .with_context(|| format!("Failed to read registry directory {}", path.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().map_or(false, |ext| ext == "json"))
            .collect();
        files.sort();

        if files.is_empty() {
            warn!("Registry directory {} contains no .json files", path.display());
        }

        let mut organizations = Vec::new();
        for file in &files {
            organizations.extend(load_registry_file(file)?);
        }
        Ok(organizations)
    } else {
        load_registry_file(path)
    }
}

fn load_registry_file(path: &Path) -> Result<Vec<Organization>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read registry file {}", path.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Registry file {} is not valid JSON", path.display()))?;

    let records = match value {
        Value::Array(items) => items,
        obj @ Value::Object(_) => vec![obj],
        other => bail!(
            "Registry file {} must hold a JSON array or object, got {}",
            path.display(),
            json_type_name(&other)
        ),
    };

    let mut organizations = Vec::new();
    for record in records {
        match serde_json::from_value::<Organization>(record) {
            Ok(org) if !org.name.trim().is_empty() => organizations.push(org),
            Ok(_) => warn!("Skipping record with empty name in {}", path.display()),
            Err(err) => warn!("Skipping malformed record in {}: {}", path.display(), err),
        }
    }

    debug!("Loaded {} organizations from {}", organizations.len(), path.display());
    Ok(organizations)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
