use anyhow::Result;
use chrono::Utc;
use models::{Profile, ProfileType, RecommendationReport, Scheme};
use serde::Serialize;
use sip_engine::{monthly_investable_amount, recommend, EngineError, RecommendationStrategy};

/// Output of the `investable` command
#[derive(Debug, Serialize)]
pub struct InvestableSummary {
    pub profile_type: ProfileType,
    pub investable_amount: f64,
    pub min_limit: f64,
    pub max_limit: f64,
}

impl InvestableSummary {
    pub fn for_profile(profile: &Profile) -> Self {
        let investable_amount = monthly_investable_amount(profile);
        let band = sip_engine::InvestmentBand::from_investable(investable_amount);
        Self {
            profile_type: profile.profile_type(),
            investable_amount,
            min_limit: band.min_limit,
            max_limit: band.max_limit,
        }
    }
}

/// Runs one strategy and wraps the result with a timestamp
pub fn build_report(
    profile: &Profile,
    schemes: &[Scheme],
    strategy: RecommendationStrategy,
) -> sip_engine::Result<RecommendationReport> {
    let advice = recommend(profile, schemes, strategy)?;
    Ok(RecommendationReport {
        generated_at: Utc::now().to_rfc3339(),
        profile_type: profile.profile_type(),
        investable_amount: monthly_investable_amount(profile),
        advice,
    })
}

pub fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}

/// 2 for caller input problems, 1 for everything else
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<EngineError>() {
        Some(engine_err) if engine_err.is_precondition() => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{Advice, EmployeeProfile, StudentProfile};
    use std::collections::BTreeMap;

    fn scenario_employee() -> Profile {
        let mut fixed = BTreeMap::new();
        fixed.insert("rent".to_string(), 5000.0);
        fixed.insert("groceries".to_string(), 3000.0);
        let mut loans = BTreeMap::new();
        loans.insert("personalLoan".to_string(), 2000.0);
        Profile::Employee(EmployeeProfile {
            monthly_income: Some(20000.0),
            fixed_expenses: Some(fixed),
            loans: Some(loans),
            sip_commitments: Some(1000.0),
            ..Default::default()
        })
    }

    #[test]
    fn test_catalog_report_with_seed() {
        let report = build_report(
            &scenario_employee(),
            &catalog_loader::default_catalog(),
            RecommendationStrategy::CatalogMatch,
        )
        .unwrap();
        assert_eq!(report.investable_amount, 9000.0);
        assert_eq!(report.profile_type, ProfileType::Employee);
        match report.advice {
            Advice::CatalogMatch(recs) => {
                let names: Vec<&str> = recs.iter().map(|r| r.scheme_name.as_str()).collect();
                assert_eq!(names, vec!["Large Cap SIP"]);
                assert_eq!(recs[0].recommended_amount, 900);
            }
            other => panic!("unexpected advice {:?}", other),
        }
    }

    #[test]
    fn test_flat_report_precondition_exit_code() {
        let student = Profile::Student(StudentProfile::default());
        let err = build_report(&student, &[], RecommendationStrategy::FlatEstimate).unwrap_err();
        assert_eq!(err, EngineError::PocketMoneyMissing);
        assert_eq!(exit_code(&anyhow::Error::from(err)), 2);
        assert_eq!(exit_code(&anyhow::anyhow!("disk on fire")), 1);
    }

    #[test]
    fn test_investable_summary() {
        let summary = InvestableSummary::for_profile(&scenario_employee());
        assert_eq!(summary.investable_amount, 9000.0);
        assert!((summary.min_limit - 900.0).abs() < 1e-9);
        assert!((summary.max_limit - 2700.0).abs() < 1e-9);
    }

    #[test]
    fn test_render_tags_strategy() {
        let report = build_report(
            &scenario_employee(),
            &[],
            RecommendationStrategy::FlatEstimate,
        )
        .unwrap();
        let rendered = render(&report, false).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["advice"]["strategy"], "flat_estimate");
        assert_eq!(json["advice"]["result"]["recommended_sip"], 4000);
        assert_eq!(json["advice"]["result"]["risk_level"], "Moderate");
        assert_eq!(json["profile_type"], "employee");
    }
}
