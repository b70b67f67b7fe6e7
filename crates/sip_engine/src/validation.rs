use std::collections::BTreeMap;

use models::{Profile, ProfileRecord, ProfileType, Scheme};

use crate::error::{EngineError, Result};
use crate::MAX_AMOUNT;

/// Converts a stored record into a typed profile. Unknown categories are the
/// "invalid profile type" precondition failure.
pub fn profile_from_record(record: ProfileRecord) -> Result<Profile> {
    record.into_profile().map_err(EngineError::InvalidProfileType)
}

/// Rejects negative amounts and amounts above `MAX_AMOUNT`. The calculators
/// accept anything; this is for callers loading untrusted input.
pub fn validate_profile(profile: &Profile) -> Result<()> {
    let profile_type = profile.profile_type();
    match profile {
        Profile::Student(student) => {
            check_amount(profile_type, "weekly_pocket_money", student.weekly_pocket_money)?;
            check_amount(profile_type, "weekly_expenses", student.weekly_expenses)?;
        }
        Profile::Employee(employee) => {
            check_amount(profile_type, "monthly_income", employee.monthly_income)?;
            check_amount(profile_type, "sip_commitments", employee.sip_commitments)?;
            check_amount(profile_type, "savings_preference", employee.savings_preference)?;
            check_map(profile_type, "fixed_expenses", employee.fixed_expenses.as_ref())?;
            check_map(profile_type, "loans", employee.loans.as_ref())?;
        }
    }
    Ok(())
}

fn check_amount(profile_type: ProfileType, field: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if v < 0.0 || v.is_nan() => Err(EngineError::NegativeAmount {
            profile_type,
            field: field.to_string(),
        }),
        Some(v) if v > MAX_AMOUNT => Err(EngineError::AmountOutOfRange {
            field: field.to_string(),
            amount: v,
        }),
        _ => Ok(()),
    }
}

fn check_map(
    profile_type: ProfileType,
    field: &str,
    map: Option<&BTreeMap<String, f64>>,
) -> Result<()> {
    for (label, amount) in map.into_iter().flatten() {
        check_amount(profile_type, &format!("{}.{}", field, label), Some(*amount))?;
    }
    Ok(())
}

pub fn validate_scheme(scheme: &Scheme) -> Result<()> {
    let invalid = |reason: &str| EngineError::InvalidSchemeBand {
        name: scheme.name.clone(),
        reason: reason.to_string(),
    };

    if scheme.min_amount.is_nan() || scheme.max_amount.is_nan() {
        return Err(invalid("amount is not a number"));
    }
    if scheme.min_amount < 0.0 {
        return Err(invalid("min_amount is negative"));
    }
    if scheme.min_amount > scheme.max_amount {
        return Err(invalid("min_amount exceeds max_amount"));
    }
    Ok(())
}
