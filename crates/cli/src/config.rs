use std::env;
use std::path::PathBuf;

use anyhow::Result;
use models::Scheme;

pub const CATALOG_PATH_ENV: &str = "SIP_CATALOG_PATH";

/// Where the scheme catalog comes from
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CatalogSource {
    /// `--catalog`; the file must exist
    Flag(PathBuf),
    /// `SIP_CATALOG_PATH`; falls back to the seed catalog when missing
    Env(PathBuf),
    #[default]
    Seed,
}

/// Runtime configuration resolved from flags, then environment, then defaults
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub catalog: CatalogSource,
    pub pretty: bool,
}

impl Config {
    /// A `--catalog` flag wins over `SIP_CATALOG_PATH`; neither means the seed catalog.
    pub fn resolve(catalog_flag: Option<PathBuf>, pretty: bool) -> Self {
        let catalog = match catalog_flag {
            Some(path) => CatalogSource::Flag(path),
            None => env::var(CATALOG_PATH_ENV)
                .ok()
                .filter(|raw| !raw.trim().is_empty())
                .map(|raw| CatalogSource::Env(PathBuf::from(raw)))
                .unwrap_or_default(),
        };
        Self { catalog, pretty }
    }

    pub fn load_catalog(&self) -> Result<Vec<Scheme>> {
        match &self.catalog {
            CatalogSource::Flag(path) => catalog_loader::load_catalog(path),
            CatalogSource::Env(path) => catalog_loader::load_catalog_with_fallback(Some(path)),
            CatalogSource::Seed => Ok(catalog_loader::default_catalog()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins() {
        let cfg = Config::resolve(Some(PathBuf::from("custom.json")), true);
        assert_eq!(cfg.catalog, CatalogSource::Flag(PathBuf::from("custom.json")));
        assert!(cfg.pretty);
    }

    #[test]
    fn test_no_catalog_uses_seed() {
        let cfg = Config::default();
        assert_eq!(cfg.load_catalog().unwrap(), catalog_loader::default_catalog());
    }

    #[test]
    fn test_missing_flag_path_is_an_error() {
        let cfg = Config {
            catalog: CatalogSource::Flag(PathBuf::from("nowhere/typo_catalog.json")),
            pretty: false,
        };
        let err = cfg.load_catalog().unwrap_err();
        assert!(err.to_string().contains("Reading catalog file"), "{}", err);
    }

    #[test]
    fn test_missing_env_path_falls_back_to_seed() {
        let cfg = Config {
            catalog: CatalogSource::Env(PathBuf::from("nowhere/typo_catalog.json")),
            pretty: false,
        };
        assert_eq!(cfg.load_catalog().unwrap(), catalog_loader::default_catalog());
    }
}
