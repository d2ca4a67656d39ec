use thiserror::Error;

/// Required fields a submitted form was missing, by display label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in all required fields: {}", .missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
}

impl ValidationError {
    pub fn new(missing: Vec<&'static str>) -> Self {
        Self { missing }
    }

    /// Turns a list of missing labels into `Ok` when nothing is missing
    pub fn check(missing: Vec<&'static str>) -> Result<(), AppError> {
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(Self::new(missing)))
        }
    }
}

/// Errors raised by state operations. Each one leaves the state untouched
/// and is surfaced to the user as an error notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Insufficient Points: need {needed}, have {available}")]
    InsufficientPoints { needed: u32, available: u32 },

    #[error("Select Payment Method")]
    PaymentMethodRequired,

    #[error("{0} not found")]
    NotFound(String),

    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("Cannot use image: {0}")]
    InvalidImage(String),
}

impl AppError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_missing_fields() {
        let err = AppError::from(ValidationError::new(vec!["Items", "Date"]));
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields: Items, Date"
        );
    }

    #[test]
    fn check_passes_when_nothing_missing() {
        assert!(ValidationError::check(vec![]).is_ok());
        assert!(matches!(
            ValidationError::check(vec!["Email"]),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn insufficient_points_mentions_both_amounts() {
        let err = AppError::InsufficientPoints {
            needed: 200,
            available: 150,
        };
        assert_eq!(err.to_string(), "Insufficient Points: need 200, have 150");
    }
}
