use std::collections::BTreeMap;

use models::{EmployeeProfile, Profile, StudentProfile};

/// Weeks per month used to turn weekly pocket money into a monthly figure.
pub const WEEKS_PER_MONTH: f64 = 4.0;

/// Computes the monthly amount a profile can put into recurring investments.
///
/// Students: four weeks of pocket money, or 0 when none is declared.
/// Employees: income minus fixed expenses, loans and existing SIP
/// commitments, floored at 0. Missing fields count as 0.
pub fn monthly_investable_amount(profile: &Profile) -> f64 {
    match profile {
        Profile::Student(student) => student_investable(student),
        Profile::Employee(employee) => employee_investable(employee),
    }
}

fn student_investable(student: &StudentProfile) -> f64 {
    match student.weekly_pocket_money {
        Some(weekly) if weekly != 0.0 => weekly * WEEKS_PER_MONTH,
        _ => 0.0,
    }
}

fn employee_investable(employee: &EmployeeProfile) -> f64 {
    let income = employee.monthly_income.unwrap_or(0.0);
    let fixed = sum_values(employee.fixed_expenses.as_ref());
    let loans = sum_values(employee.loans.as_ref());
    let commitments = employee.sip_commitments.unwrap_or(0.0);

    (income - fixed - loans - commitments).max(0.0)
}

pub(crate) fn sum_values(map: Option<&BTreeMap<String, f64>>) -> f64 {
    map.map(|m| m.values().sum()).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(income: Option<f64>) -> EmployeeProfile {
        EmployeeProfile {
            monthly_income: income,
            ..Default::default()
        }
    }

    fn map(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_student_without_pocket_money() {
        let absent = Profile::Student(StudentProfile::default());
        assert_eq!(monthly_investable_amount(&absent), 0.0);

        let zero = Profile::Student(StudentProfile {
            weekly_pocket_money: Some(0.0),
            ..Default::default()
        });
        assert_eq!(monthly_investable_amount(&zero), 0.0);
    }

    #[test]
    fn test_student_four_week_month() {
        let profile = Profile::Student(StudentProfile {
            weekly_pocket_money: Some(500.0),
            weekly_expenses: Some(450.0),
            ..Default::default()
        });
        // weekly_expenses is not part of the rule
        assert_eq!(monthly_investable_amount(&profile), 2000.0);
    }

    #[test]
    fn test_employee_full_breakdown() {
        let profile = Profile::Employee(EmployeeProfile {
            monthly_income: Some(20000.0),
            fixed_expenses: Some(map(&[("rent", 5000.0), ("groceries", 3000.0)])),
            loans: Some(map(&[("personalLoan", 2000.0)])),
            sip_commitments: Some(1000.0),
            ..Default::default()
        });
        assert_eq!(monthly_investable_amount(&profile), 9000.0);
    }

    #[test]
    fn test_employee_missing_fields_count_as_zero() {
        assert_eq!(monthly_investable_amount(&Profile::Employee(employee(None))), 0.0);
        assert_eq!(
            monthly_investable_amount(&Profile::Employee(employee(Some(30000.0)))),
            30000.0
        );

        let empty_maps = Profile::Employee(EmployeeProfile {
            monthly_income: Some(1200.0),
            fixed_expenses: Some(BTreeMap::new()),
            loans: Some(BTreeMap::new()),
            ..Default::default()
        });
        assert_eq!(monthly_investable_amount(&empty_maps), 1200.0);
    }

    #[test]
    fn test_employee_never_negative() {
        let profile = Profile::Employee(EmployeeProfile {
            monthly_income: Some(10000.0),
            fixed_expenses: Some(map(&[("rent", 8000.0)])),
            loans: Some(map(&[("homeLoan", 4000.0), ("carLoan", 1500.0)])),
            sip_commitments: Some(500.0),
            ..Default::default()
        });
        assert_eq!(monthly_investable_amount(&profile), 0.0);
    }

    #[test]
    fn test_deterministic() {
        let profile = Profile::Employee(EmployeeProfile {
            monthly_income: Some(45000.0),
            fixed_expenses: Some(map(&[("rent", 12000.5), ("utilities", 1999.25)])),
            ..Default::default()
        });
        let first = monthly_investable_amount(&profile);
        for _ in 0..10 {
            assert_eq!(monthly_investable_amount(&profile), first);
        }
    }
}
