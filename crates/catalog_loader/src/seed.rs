use models::{ProfileType, RiskLevel, Scheme};

fn scheme(
    name: &str,
    min_amount: f64,
    max_amount: f64,
    suitable_for: ProfileType,
    risk_level: RiskLevel,
    description: &str,
) -> Scheme {
    Scheme {
        name: name.to_string(),
        min_amount,
        max_amount,
        suitable_for,
        risk_level,
        description: description.to_string(),
    }
}

/// The catalog every fresh installation starts with
pub fn default_catalog() -> Vec<Scheme> {
    vec![
        scheme(
            "Index Fund SIP",
            500.0,
            3000.0,
            ProfileType::Student,
            RiskLevel::Low,
            "Low-risk SIP suitable for students and beginners",
        ),
        scheme(
            "Large Cap SIP",
            2000.0,
            20000.0,
            ProfileType::Employee,
            RiskLevel::Moderate,
            "Stable long-term investment for salaried users",
        ),
        scheme(
            "ELSS Tax Saver SIP",
            3000.0,
            15000.0,
            ProfileType::Employee,
            RiskLevel::Moderate,
            "Tax-saving SIP under Section 80C",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_is_valid() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 3);
        for scheme in &catalog {
            assert!(sip_engine::validate_scheme(scheme).is_ok(), "{}", scheme.name);
        }
    }
}
