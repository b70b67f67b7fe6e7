
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// Enumerations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
	Student,
	Employee,
}

impl ProfileType {
	pub fn as_str(&self) -> &'static str {
		match self {
			ProfileType::Student => "student",
			ProfileType::Employee => "employee",
		}
	}

	/// Case-insensitive lookup of a stored category label
	pub fn from_str(value: &str) -> Option<Self> {
		match value.trim().to_lowercase().as_str() {
			"student" => Some(ProfileType::Student),
			"employee" => Some(ProfileType::Employee),
			_ => None,
		}
	}
}

impl fmt::Display for ProfileType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
	Low,
	Moderate,
	High,
}

impl fmt::Display for RiskLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			RiskLevel::Low => "Low",
			RiskLevel::Moderate => "Moderate",
			RiskLevel::High => "High",
		};
		f.write_str(label)
	}
}

// Profile models
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
	#[serde(default)]
	pub age: Option<u32>,
	#[serde(default)]
	pub weekly_pocket_money: Option<f64>,
	#[serde(default)]
	pub weekly_expenses: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
	#[serde(default)]
	pub age: Option<u32>,
	#[serde(default)]
	pub monthly_income: Option<f64>,
	#[serde(default)]
	pub fixed_expenses: Option<BTreeMap<String, f64>>,
	#[serde(default)]
	pub loans: Option<BTreeMap<String, f64>>,
	#[serde(default)]
	pub sip_commitments: Option<f64>,
	#[serde(default)]
	pub savings_preference: Option<f64>,
}

/// A user's financial self-declaration. Only the fields of the declared
/// category exist; anything belonging to the other category is dropped on
/// deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Profile {
	Student(StudentProfile),
	Employee(EmployeeProfile),
}

impl Profile {
	pub fn profile_type(&self) -> ProfileType {
		match self {
			Profile::Student(_) => ProfileType::Student,
			Profile::Employee(_) => ProfileType::Employee,
		}
	}
}

/// Profile as it is stored: free-text category and every optional field of
/// both categories side by side.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileRecord {
	#[serde(rename = "type")]
	pub kind: String,
	#[serde(default)]
	pub age: Option<u32>,
	#[serde(default)]
	pub weekly_pocket_money: Option<f64>,
	#[serde(default)]
	pub weekly_expenses: Option<f64>,
	#[serde(default)]
	pub monthly_income: Option<f64>,
	#[serde(default)]
	pub fixed_expenses: Option<BTreeMap<String, f64>>,
	#[serde(default)]
	pub loans: Option<BTreeMap<String, f64>>,
	#[serde(default)]
	pub sip_commitments: Option<f64>,
	#[serde(default)]
	pub savings_preference: Option<f64>,
}

impl ProfileRecord {
	/// Narrow the record to its declared category. Returns the raw category
	/// label when it is not one of the known profile types.
	pub fn into_profile(self) -> Result<Profile, String> {
		match ProfileType::from_str(&self.kind) {
			Some(ProfileType::Student) => Ok(Profile::Student(StudentProfile {
				age: self.age,
				weekly_pocket_money: self.weekly_pocket_money,
				weekly_expenses: self.weekly_expenses,
			})),
			Some(ProfileType::Employee) => Ok(Profile::Employee(EmployeeProfile {
				age: self.age,
				monthly_income: self.monthly_income,
				fixed_expenses: self.fixed_expenses,
				loans: self.loans,
				sip_commitments: self.sip_commitments,
				savings_preference: self.savings_preference,
			})),
			None => Err(self.kind),
		}
	}
}

// Catalog models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
	pub name: String,
	pub min_amount: f64,
	pub max_amount: f64,
	pub suitable_for: ProfileType,
	pub risk_level: RiskLevel,
	#[serde(default)]
	pub description: String,
}

// Output models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
	#[serde(alias = "sip_name")]
	pub scheme_name: String,
	pub risk_level: RiskLevel,
	pub recommended_amount: i64,
	pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatEstimate {
	pub user_type: ProfileType,
	pub monthly_money: f64,
	pub recommended_sip: i64,
	pub risk_level: RiskLevel,
	pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", content = "result", rename_all = "snake_case")]
pub enum Advice {
	CatalogMatch(Vec<Recommendation>),
	FlatEstimate(FlatEstimate),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
	pub generated_at: String,
	pub profile_type: ProfileType,
	pub investable_amount: f64,
	pub advice: Advice,
}
