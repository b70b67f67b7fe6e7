use models::{Profile, Recommendation, Scheme};
use tracing::debug;

use crate::affordability::monthly_investable_amount;
use crate::round_amount;

pub const BAND_MIN_RATIO: f64 = 0.10;
pub const BAND_MAX_RATIO: f64 = 0.30;

/// The slice of the investable amount a scheme has to overlap to be suggested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvestmentBand {
    pub min_limit: f64,
    pub max_limit: f64,
}

impl InvestmentBand {
    pub fn from_investable(investable: f64) -> Self {
        Self {
            min_limit: investable * BAND_MIN_RATIO,
            max_limit: investable * BAND_MAX_RATIO,
        }
    }

    /// Inclusive overlap between the scheme's accepted amounts and this band.
    pub fn overlaps(&self, scheme: &Scheme) -> bool {
        scheme.min_amount <= self.max_limit && scheme.max_amount >= self.min_limit
    }
}

/// Filters the catalog down to schemes suited to the profile's category whose
/// amount range overlaps the profile's band. Catalog order is kept.
///
/// Every match carries the same `recommended_amount`: the rounded lower edge
/// of the band, not an amount clamped to the scheme's own range.
pub fn suggest_sips(profile: &Profile, schemes: &[Scheme]) -> Vec<Recommendation> {
    let investable = monthly_investable_amount(profile);
    let band = InvestmentBand::from_investable(investable);
    let profile_type = profile.profile_type();
    // Saturates past i64; validate_profile keeps loaded profiles far below that
    let recommended_amount = round_amount(band.min_limit) as i64;
    debug!(
        %profile_type,
        investable,
        min_limit = band.min_limit,
        max_limit = band.max_limit,
        "matching scheme catalog"
    );

    schemes
        .iter()
        .filter(|scheme| {
            let eligible = scheme.suitable_for == profile_type && band.overlaps(scheme);
            debug!(scheme = %scheme.name, eligible, "scheme evaluated");
            eligible
        })
        .map(|scheme| Recommendation {
            scheme_name: scheme.name.clone(),
            risk_level: scheme.risk_level,
            recommended_amount,
            description: scheme.description.clone(),
        })
        .collect()
}
