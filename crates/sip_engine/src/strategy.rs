use std::fmt;
use std::str::FromStr;

use models::{Advice, Profile, Scheme};

use crate::error::{EngineError, Result};
use crate::flat::flat_estimate;
use crate::matcher::suggest_sips;

/// Which recommendation rule set a caller wants applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecommendationStrategy {
    #[default]
    CatalogMatch,
    FlatEstimate,
}

impl FromStr for RecommendationStrategy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "catalog" | "catalog_match" | "catalog-match" => Ok(Self::CatalogMatch),
            "flat" | "flat_estimate" | "flat-estimate" => Ok(Self::FlatEstimate),
            other => Err(EngineError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for RecommendationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CatalogMatch => f.write_str("catalog"),
            Self::FlatEstimate => f.write_str("flat"),
        }
    }
}

/// Runs the selected strategy. The catalog is only read by `CatalogMatch`.
pub fn recommend(
    profile: &Profile,
    schemes: &[Scheme],
    strategy: RecommendationStrategy,
) -> Result<Advice> {
    match strategy {
        RecommendationStrategy::CatalogMatch => {
            Ok(Advice::CatalogMatch(suggest_sips(profile, schemes)))
        }
        RecommendationStrategy::FlatEstimate => flat_estimate(profile).map(Advice::FlatEstimate),
    }
}
