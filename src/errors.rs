use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::errors::PurchaseError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Purchase rejected: {0}")]
    Rejected(#[from] PurchaseError),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::InvalidInput(e.to_string())
    }
}

impl AppError {
    /// Process exit status, following the sysexits convention for non-purchase failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Rejected(_) => 1,
            AppError::InvalidInput(_) => 65,
            AppError::Io(_) => 74,
            AppError::Config(_) => 78,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_exits_with_one() {
        let err: AppError = PurchaseError::NoAdultPresent.into();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn rejection_display() {
        let err: AppError = PurchaseError::NoAdultPresent.into();
        assert_eq!(
            err.to_string(),
            "Purchase rejected: At least one adult ticket is required for the purchase."
        );
    }

    #[test]
    fn malformed_json_maps_to_invalid_input() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = json_err.into();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(err.exit_code(), 65);
    }

    #[test]
    fn config_error_maps_to_config() {
        let err: AppError = ConfigError::InvalidMaxTickets("X", "y".to_string()).into();
        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn io_error_maps_to_io() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.exit_code(), 74);
    }
}
