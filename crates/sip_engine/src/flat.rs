use models::{FlatEstimate, Profile, ProfileType, RiskLevel};
use tracing::debug;

use crate::affordability::WEEKS_PER_MONTH;
use crate::error::{EngineError, Result};
use crate::{round_amount, whole_amount};

pub const STUDENT_SIP_RATIO: f64 = 0.10;
pub const EMPLOYEE_SIP_RATIO: f64 = 0.20;

/// Single catalog-free SIP suggestion.
///
/// Students need pocket money and get 10% of four weeks of it, employees need
/// an income and get 20% of it; both rounded to the nearest hundred. Expenses,
/// loans and commitments are not considered.
pub fn flat_estimate(profile: &Profile) -> Result<FlatEstimate> {
    let (monthly_money, ratio, risk_level, source) = match profile {
        Profile::Student(student) => {
            let weekly = truthy(student.weekly_pocket_money)
                .ok_or(EngineError::PocketMoneyMissing)?;
            (weekly * WEEKS_PER_MONTH, STUDENT_SIP_RATIO, RiskLevel::Low, "pocket money")
        }
        Profile::Employee(employee) => {
            let income = truthy(employee.monthly_income)
                .ok_or(EngineError::MonthlyIncomeMissing)?;
            (income, EMPLOYEE_SIP_RATIO, RiskLevel::Moderate, "salary")
        }
    };

    let recommended_sip = round_to_hundred(monthly_money * ratio)?;
    let user_type: ProfileType = profile.profile_type();
    debug!(%user_type, monthly_money, recommended_sip, "flat estimate computed");

    Ok(FlatEstimate {
        user_type,
        monthly_money,
        recommended_sip,
        risk_level,
        message: format!(
            "Based on your {}, you can safely invest ₹{}/month in SIP.",
            source, recommended_sip
        ),
    })
}

fn truthy(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

fn round_to_hundred(amount: f64) -> Result<i64> {
    whole_amount("recommended_sip", round_amount(amount / 100.0) * 100.0)
}
