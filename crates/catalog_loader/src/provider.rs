use std::path::{Path, PathBuf};

use anyhow::Result;
use models::Scheme;

/// Read-only source of the scheme catalog.
/// Lets callers swap the file-based catalog for another backing store.
pub trait SchemeCatalogProvider: Send + Sync {
    fn schemes(&self) -> Result<Vec<Scheme>>;
}

/// Reads the catalog file on every call, so edits show up without a restart
pub struct FileCatalogProvider {
    catalog_path: PathBuf,
}

impl FileCatalogProvider {
    pub fn new<P: AsRef<Path>>(catalog_path: P) -> Self {
        Self {
            catalog_path: catalog_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.catalog_path
    }
}

impl SchemeCatalogProvider for FileCatalogProvider {
    fn schemes(&self) -> Result<Vec<Scheme>> {
        crate::load_catalog(&self.catalog_path)
    }
}

/// In-memory catalog snapshot
#[derive(Debug, Clone)]
pub struct StaticCatalogProvider {
    schemes: Vec<Scheme>,
}

impl StaticCatalogProvider {
    pub fn new(schemes: Vec<Scheme>) -> Self {
        Self { schemes }
    }
}

impl Default for StaticCatalogProvider {
    fn default() -> Self {
        Self::new(crate::default_catalog())
    }
}

impl SchemeCatalogProvider for StaticCatalogProvider {
    fn schemes(&self) -> Result<Vec<Scheme>> {
        Ok(self.schemes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_provider_defaults_to_seed() {
        let provider = StaticCatalogProvider::default();
        assert_eq!(provider.schemes().unwrap(), crate::default_catalog());
    }

    #[test]
    fn test_file_provider_reports_missing_file() {
        let provider = FileCatalogProvider::new("nowhere/sip_schemes.json");
        assert!(provider.schemes().is_err());
        assert_eq!(provider.path(), Path::new("nowhere/sip_schemes.json"));
    }

    #[test]
    fn test_providers_behind_trait_object() {
        let providers: Vec<Box<dyn SchemeCatalogProvider>> = vec![
            Box::new(StaticCatalogProvider::default()),
            Box::new(StaticCatalogProvider::new(Vec::new())),
        ];
        let counts: Vec<usize> = providers.iter().map(|p| p.schemes().unwrap().len()).collect();
        assert_eq!(counts, vec![3, 0]);
    }
}
