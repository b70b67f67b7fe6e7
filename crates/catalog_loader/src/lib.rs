//! # Catalog Loader
//!
//! Loads the inputs of the recommendation engine from disk: the SIP scheme
//! catalog and stored user profiles. Every file is validated on the way in,
//! so the engine only ever sees well-formed bands and non-negative amounts.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//!
//! // Load a catalog from a specific path
//! let schemes = catalog_loader::load_catalog("config/sip_schemes.json")?;
//!
//! // Use the file when present, the seed catalog otherwise
//! let path = Some(PathBuf::from("sip_schemes.json"));
//! let schemes = catalog_loader::load_catalog_with_fallback(path.as_ref())?;
//!
//! // Load a stored profile
//! let profile = catalog_loader::load_profile("profile.json")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod provider;
mod seed;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use models::{Profile, ProfileRecord, ProfileType, RiskLevel, Scheme};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

pub use provider::{FileCatalogProvider, SchemeCatalogProvider, StaticCatalogProvider};
pub use seed::default_catalog;

/// Loads and validates a scheme catalog from a JSON file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Scheme>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Reading catalog file: {}", path.display()))?;
    let schemes = parse_catalog(&raw)
        .with_context(|| format!("Parsing catalog JSON in {}", path.display()))?;
    info!(path = %path.display(), schemes = schemes.len(), "catalog loaded");
    Ok(schemes)
}

/// Parses catalog JSON, keeping file order.
/// Catalog files are either a bare array or wrapped in `{ "schemes": [...] }`.
pub fn parse_catalog(raw: &str) -> Result<Vec<Scheme>> {
    let value: Value = serde_json::from_str(raw)?;
    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(mut object) => match object.remove("schemes") {
            Some(Value::Array(entries)) => entries,
            Some(_) => bail!("'schemes' must be an array"),
            None => bail!("Catalog object has no 'schemes' array"),
        },
        _ => bail!("Catalog must be an array of schemes or an object with a 'schemes' array"),
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_scheme(index, entry))
        .collect()
}

fn parse_scheme(index: usize, entry: &Value) -> Result<Scheme> {
    let scheme = match Scheme::deserialize(entry) {
        Ok(scheme) => scheme,
        Err(err) => {
            let name = entry.get("name").and_then(Value::as_str).unwrap_or("<unnamed>");
            match offending_field(entry) {
                Some(field) => bail!("Scheme #{} '{}', field '{}': {}", index, name, field, err),
                None => bail!("Scheme #{} '{}': {}", index, name, err),
            }
        }
    };
    sip_engine::validate_scheme(&scheme)
        .with_context(|| format!("Validating scheme '{}'", scheme.name))?;
    Ok(scheme)
}

/// First present field whose value does not deserialize on its own
fn offending_field(entry: &Value) -> Option<&'static str> {
    let checks: [(&'static str, fn(&Value) -> bool); 6] = [
        ("name", |v: &Value| String::deserialize(v).is_err()),
        ("min_amount", |v: &Value| f64::deserialize(v).is_err()),
        ("max_amount", |v: &Value| f64::deserialize(v).is_err()),
        ("suitable_for", |v: &Value| ProfileType::deserialize(v).is_err()),
        ("risk_level", |v: &Value| RiskLevel::deserialize(v).is_err()),
        ("description", |v: &Value| String::deserialize(v).is_err()),
    ];
    checks
        .iter()
        .find(|(field, rejects)| entry.get(*field).is_some_and(|v| rejects(v)))
        .map(|(field, _)| *field)
}

/// Loads a catalog from an optional path, returning None if no path is provided
pub fn load_optional_catalog(path: Option<&PathBuf>) -> Result<Option<Vec<Scheme>>> {
    match path {
        Some(catalog_path) => Ok(Some(load_catalog(catalog_path)?)),
        None => Ok(None),
    }
}

/// Uses the catalog at `path` when the file exists, the seed catalog otherwise.
/// A file that exists but fails to parse is still an error. Paths the user
/// typed explicitly should go through [`load_catalog`] instead.
pub fn load_catalog_with_fallback(path: Option<&PathBuf>) -> Result<Vec<Scheme>> {
    match path {
        Some(catalog_path) if catalog_file_exists(catalog_path) => load_catalog(catalog_path),
        Some(catalog_path) => {
            warn!(path = %catalog_path.display(), "catalog file not found, using seed catalog");
            Ok(default_catalog())
        }
        None => Ok(default_catalog()),
    }
}

/// Checks if a catalog file exists at the given path
pub fn catalog_file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists() && path.as_ref().is_file()
}

/// Loads a stored profile record and narrows it to its category
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<Profile> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Reading profile file: {}", path.display()))?;
    parse_profile(&raw).with_context(|| format!("Loading profile from {}", path.display()))
}

pub fn parse_profile(raw: &str) -> Result<Profile> {
    let record: ProfileRecord = serde_json::from_str(raw).context("Parsing profile JSON")?;
    let profile = sip_engine::profile_from_record(record)?;
    sip_engine::validate_profile(&profile)?;
    Ok(profile)
}
