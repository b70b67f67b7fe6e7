use models::ProfileType;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("Pocket money not provided")]
    PocketMoneyMissing,

    #[error("Monthly income not provided")]
    MonthlyIncomeMissing,

    #[error("Invalid profile type: {0}")]
    InvalidProfileType(String),

    #[error("Negative amount for {profile_type} profile field: {field}")]
    NegativeAmount {
        profile_type: ProfileType,
        field: String,
    },

    #[error("Amount out of range for {field}: {amount}")]
    AmountOutOfRange { field: String, amount: f64 },

    #[error("Invalid amount band for scheme {name}: {reason}")]
    InvalidSchemeBand { name: String, reason: String },

    #[error("Unknown recommendation strategy: {0}")]
    UnknownStrategy(String),
}

impl EngineError {
    /// True for failures caused by missing or malformed caller input, as
    /// opposed to bad reference data.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            EngineError::PocketMoneyMissing
                | EngineError::MonthlyIncomeMissing
                | EngineError::InvalidProfileType(_)
                | EngineError::NegativeAmount { .. }
                | EngineError::AmountOutOfRange { .. }
        )
    }
}
