use thiserror::Error;

/// Failures raised by the plan calculator.
///
/// Every calculator function either returns a complete value or one of these;
/// there is no partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing profile information: {}", .0.join(", "))]
    MissingProfileField(Vec<String>),
}

impl PlanError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error(transparent)]
    Plan(#[from] PlanError),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    /// Maps a unique-index violation onto `ConstraintViolation` so callers get
    /// a 409 instead of a generic database failure.
    pub fn with_constraint_message(self, message: &str) -> Self {
        if self.is_unique_violation() {
            StorageError::ConstraintViolation(message.to_string())
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_are_listed_together() {
        let err = PlanError::MissingProfileField(vec!["age".to_string(), "goal".to_string()]);
        assert_eq!(err.to_string(), "Missing profile information: age, goal");
    }

    #[test]
    fn test_plan_error_converts_into_storage_error() {
        let err: StorageError = PlanError::invalid("weight must be positive").into();
        assert!(matches!(err, StorageError::Plan(PlanError::InvalidInput(_))));
        assert_eq!(err.to_string(), "Invalid input: weight must be positive");
    }

    #[test]
    fn test_constraint_message_leaves_other_errors_alone() {
        let err = StorageError::NotFound.with_constraint_message("duplicate");
        assert!(matches!(err, StorageError::NotFound));
    }
}
